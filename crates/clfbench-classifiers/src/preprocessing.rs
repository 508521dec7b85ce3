//! Per-column standardization fitted on the training split.
//!
//! The scaler is fitted on `x_train` only and then applied to both
//! partitions, so no statistics leak from the test rows.

use crate::data_handling::TrainTestSplit;
use crate::error::{ClassifierError, Result};
use crate::math::Array2;

/// Simple standard scaler (per-column mean/std).
#[derive(Clone, Debug)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl Scaler {
    /// Minimum stddev to avoid division by zero when transforming.
    const MIN_STD: f64 = 1e-6;

    /// Fit from a matrix where rows are samples and columns are features.
    pub fn fit(x: &Array2<f64>) -> Result<Scaler> {
        let (nrows, ncols) = x.shape();
        if nrows == 0 || ncols == 0 {
            return Err(ClassifierError::InvalidArgument(
                "cannot fit a scaler on an empty matrix".to_string(),
            ));
        }

        let mut mean = vec![0.0f64; ncols];
        for row in x.rows() {
            for (m, v) in mean.iter_mut().zip(row) {
                *m += v;
            }
        }
        let nrows_f = nrows as f64;
        for m in mean.iter_mut() {
            *m /= nrows_f;
        }

        let mut std = vec![0.0f64; ncols];
        for row in x.rows() {
            for ((s, v), m) in std.iter_mut().zip(row).zip(&mean) {
                let d = v - m;
                *s += d * d;
            }
        }
        for s in std.iter_mut() {
            *s = (*s / nrows_f).sqrt().max(Self::MIN_STD);
        }

        Ok(Scaler { mean, std })
    }

    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        if x.ncols() != self.mean.len() {
            return Err(ClassifierError::InvalidArgument(format!(
                "scaler was fitted on {} columns, got {}",
                self.mean.len(),
                x.ncols()
            )));
        }
        let ncols = x.ncols();
        let mut out = Vec::with_capacity(x.nrows() * ncols);
        for row in x.rows() {
            for (c, v) in row.iter().enumerate() {
                out.push((v - self.mean[c]) / self.std[c]);
            }
        }
        Ok(Array2::from_shape_vec(x.shape(), out)?)
    }
}

/// Standardize both partitions of a split with statistics from the training rows.
pub fn scale_split(split: &TrainTestSplit) -> Result<TrainTestSplit> {
    let scaler = Scaler::fit(&split.x_train)?;
    log::debug!("Standardizing {} feature columns", scaler.mean.len());
    Ok(TrainTestSplit {
        x_train: scaler.transform(&split.x_train)?,
        x_test: scaler.transform(&split.x_test)?,
        ..split.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transformed_training_columns_are_standardized() {
        let x = Array2::from_shape_vec((4, 2), vec![1.0, 10.0, 2.0, 10.0, 3.0, 10.0, 4.0, 10.0])
            .unwrap();
        let scaler = Scaler::fit(&x).unwrap();
        let t = scaler.transform(&x).unwrap();

        let col0: f64 = t.column(0).iter().sum();
        assert!(col0.abs() < 1e-12);
        // constant column stays finite
        assert!(t.column(1).iter().all(|v| v.is_finite() && *v == 0.0));
    }

    #[test]
    fn transform_rejects_width_mismatch() {
        let x = Array2::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let scaler = Scaler::fit(&x).unwrap();
        let narrow = Array2::from_shape_vec((2, 1), vec![1.0, 2.0]).unwrap();
        assert!(scaler.transform(&narrow).is_err());
    }
}
