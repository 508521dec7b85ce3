use crate::error::Result;
use crate::math::Array2;

/// The capability set every compared model provides: train on labelled rows,
/// then score new rows.
///
/// Backends stay opaque behind this trait, so adding a model means adding an
/// implementation and a `ModelType` variant; the runner does not change.
pub trait ClassifierModel {
    /// Fit the model. `y` holds one 0/1 label per row of `x`.
    fn fit(&mut self, x: &Array2<f64>, y: &[i32]) -> Result<()>;

    /// Probability of class 1 for every row of `x`, in row order.
    ///
    /// Calling this twice on the same fitted model gives identical output.
    fn predict(&self, x: &Array2<f64>) -> Result<Vec<f64>>;

    /// Human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
