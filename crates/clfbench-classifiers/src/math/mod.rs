//! Small row-major containers used for tables, feature matrices and labels.
//!
//! `Array2` holds the loaded table and the feature matrices handed to the
//! classifiers; `Array1` holds label vectors. Conversion into backend types
//! (`ndarray`, candle tensors, gbdt rows) happens next to each model wrapper.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;
