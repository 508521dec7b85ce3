use thiserror::Error;

use crate::math::ShapeError;

/// Errors raised while loading data, splitting, fitting or scoring.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Missing or malformed input file, non-numeric field, inconsistent row width.
    #[error("parse error: {0}")]
    Parse(String),

    /// Bad split fraction, mismatched lengths, empty partitions, bad config values.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The classifier rejected its training data or failed while training.
    #[error("model fit failed: {0}")]
    ModelFit(String),

    #[error("prediction failed: {0}")]
    Prediction(String),

    #[error("{0} has not been fitted")]
    NotFitted(String),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
