//! Headerless delimited numeric table reader.
use std::path::Path;

use csv::Trim;

use crate::error::{ClassifierError, Result};
use crate::math::Array2;

/// Configuration for reading headerless delimited numeric files.
#[derive(Debug, Clone)]
pub struct TableReaderConfig {
    pub delimiter: u8,
    /// When set, every row must have exactly this many fields.
    pub expected_columns: Option<usize>,
}

impl Default for TableReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            expected_columns: None,
        }
    }
}

/// Read a headerless delimited file of numbers into a row-major table.
pub fn read_delimited_table<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Array2<f64>> {
    let config = TableReaderConfig {
        delimiter,
        ..TableReaderConfig::default()
    };
    read_table_with_config(path, &config)
}

/// Read a headerless delimited file using a custom configuration.
///
/// Blank lines are skipped. Every remaining line must hold the same number of
/// numeric fields (and `expected_columns` of them when configured).
pub fn read_table_with_config<P: AsRef<Path>>(
    path: P,
    config: &TableReaderConfig,
) -> Result<Array2<f64>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| {
            ClassifierError::Parse(format!("failed to open {}: {}", path.display(), e))
        })?;

    let mut width = config.expected_columns;
    let mut n_rows = 0usize;
    let mut values = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| {
            ClassifierError::Parse(format!("failed to read {}: {}", path.display(), e))
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(n_rows as u64 + 1);

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        match width {
            Some(expected) if record.len() != expected => {
                return Err(ClassifierError::Parse(format!(
                    "line {} of {} has {} fields, expected {}",
                    line,
                    path.display(),
                    record.len(),
                    expected
                )));
            }
            Some(_) => {}
            None => width = Some(record.len()),
        }

        for (col, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().map_err(|_| {
                ClassifierError::Parse(format!(
                    "line {}, field {} of {}: '{}' is not a number",
                    line,
                    col + 1,
                    path.display(),
                    field
                ))
            })?;
            values.push(value);
        }
        n_rows += 1;
    }

    if n_rows == 0 {
        return Err(ClassifierError::Parse(format!(
            "{} contains no data rows",
            path.display()
        )));
    }

    let n_cols = width.unwrap_or(0);
    log::info!(
        "Loaded {} rows x {} columns from {}",
        n_rows,
        n_cols,
        path.display()
    );

    Ok(Array2::from_shape_vec((n_rows, n_cols), values)?)
}
