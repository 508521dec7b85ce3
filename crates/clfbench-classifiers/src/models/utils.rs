//! Input checks and conversions shared by the model wrappers.
use crate::error::{ClassifierError, Result};
use crate::math::{Array1, Array2};

/// Coerce raw label values to 0/1 class labels.
///
/// Values within 1e-9 of 0 or 1 are accepted; anything else is rejected as a
/// training-data error since none of the binary classifiers can use it.
pub fn binary_labels(y: &Array1<f64>) -> Result<Vec<i32>> {
    y.iter()
        .enumerate()
        .map(|(i, &v)| {
            if v.abs() < 1e-9 {
                Ok(0)
            } else if (v - 1.0).abs() < 1e-9 {
                Ok(1)
            } else {
                Err(ClassifierError::ModelFit(format!(
                    "label {} at row {} is not binary (expected 0 or 1)",
                    v, i
                )))
            }
        })
        .collect()
}

/// Reject training data no binary classifier can learn from.
pub fn validate_training_data(model: &str, x: &Array2<f64>, y: &[i32]) -> Result<()> {
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(ClassifierError::ModelFit(format!(
            "{}: training set is empty",
            model
        )));
    }
    if x.nrows() != y.len() {
        return Err(ClassifierError::ModelFit(format!(
            "{}: {} training rows but {} labels",
            model,
            x.nrows(),
            y.len()
        )));
    }
    if let Some(bad) = y.iter().find(|&&l| l != 0 && l != 1) {
        return Err(ClassifierError::ModelFit(format!(
            "{}: label {} is not binary",
            model, bad
        )));
    }
    let positives = y.iter().filter(|&&l| l == 1).count();
    if positives == 0 || positives == y.len() {
        return Err(ClassifierError::ModelFit(format!(
            "{}: training labels contain a single class ({})",
            model,
            if positives == 0 { 0 } else { 1 }
        )));
    }
    if x.as_slice().iter().any(|v| !v.is_finite()) {
        return Err(ClassifierError::ModelFit(format!(
            "{}: training features contain NaN or infinite values",
            model
        )));
    }
    Ok(())
}

/// Check that a prediction matrix matches the width seen during training.
pub fn check_feature_width(model: &str, expected: usize, x: &Array2<f64>) -> Result<()> {
    if x.ncols() != expected {
        return Err(ClassifierError::InvalidArgument(format!(
            "{} was fitted on {} features but got {}",
            model,
            expected,
            x.ncols()
        )));
    }
    Ok(())
}

/// Copy into an `ndarray` matrix for linfa-based models.
pub fn to_ndarray(x: &Array2<f64>) -> Result<ndarray::Array2<f64>> {
    ndarray::Array2::from_shape_vec(x.shape(), x.as_slice().to_vec())
        .map_err(|e| ClassifierError::InvalidArgument(format!("cannot convert features: {}", e)))
}
