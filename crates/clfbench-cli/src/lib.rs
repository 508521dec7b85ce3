pub mod cli;
pub mod compare;
