//! Presentation of `ModelResult`s: the plain-text report, JSON lines, and
//! ROC plots.
use std::fmt::Write as _;
use std::io::Write;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::runner::ModelResult;

pub mod plots;

/// Render the text report for one model.
///
/// ```text
///
/// Logistic Regression:
/// [(1, 0), (2, 1), (3, 0)]
/// Accuracy: 66.67%
/// Area under curve: 75.00%
/// ```
pub fn format_text_report(result: &ModelResult) -> String {
    let mut text = String::new();
    let _ = writeln!(text);
    let _ = writeln!(text, "{}:", result.model_name);
    let _ = writeln!(text, "{}", format_prediction_table(&result.predictions));
    let _ = writeln!(text, "Accuracy: {:.2}%", result.accuracy * 100.0);
    let _ = writeln!(text, "Area under curve: {:.2}%", result.auc * 100.0);
    text
}

/// `[(1, label), (2, label), ...]` with 1-based row numbers.
pub fn format_prediction_table(predictions: &[i32]) -> String {
    let pairs = predictions
        .iter()
        .enumerate()
        .map(|(i, label)| format!("({}, {})", i + 1, label))
        .collect::<Vec<_>>();
    format!("[{}]", pairs.join(", "))
}

/// Write one model's report in the requested format.
pub fn write_report<W: Write>(out: &mut W, result: &ModelResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => out.write_all(format_text_report(result).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, result).map_err(std::io::Error::from)?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}
