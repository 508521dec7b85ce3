//! Readers for numeric input tables.
pub mod delimited;

pub use delimited::{read_delimited_table, read_table_with_config, TableReaderConfig};
