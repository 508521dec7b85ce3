//! The `run` subcommand: assemble an experiment from config file and flags,
//! run it, and write the optional ROC plot.
pub mod input;
pub mod run;
