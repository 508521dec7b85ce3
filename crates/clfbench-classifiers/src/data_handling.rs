//! Feature/label views over a loaded table and the seeded train/test splitter.
//!
//! `Dataset` separates the label column (always the last one) from the
//! feature columns. `train_test_split` partitions its rows with a seeded
//! permutation so that repeated runs over the same file see the same split.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{ClassifierError, Result};
use crate::math::{Array1, Array2};

#[derive(Debug, Clone)]
pub struct Dataset {
    pub x: Array2<f64>,
    pub y: Array1<f64>,
}

impl Dataset {
    pub fn new(x: Array2<f64>, y: Array1<f64>) -> Result<Self> {
        if x.nrows() != y.len() {
            return Err(ClassifierError::InvalidArgument(format!(
                "feature matrix has {} rows but label vector has {} entries",
                x.nrows(),
                y.len()
            )));
        }
        Ok(Dataset { x, y })
    }

    /// Split a table into features (all but the last column) and labels (last column).
    pub fn from_table(table: &Array2<f64>) -> Result<Self> {
        let ncols = table.ncols();
        if ncols < 2 {
            return Err(ClassifierError::InvalidArgument(format!(
                "table needs at least one feature column and a label column, got {} column(s)",
                ncols
            )));
        }
        Dataset::new(table.select_columns(..ncols - 1), table.column(ncols - 1))
    }

    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    pub fn log_input_data_summary(&self) {
        let positives = self.y.iter().filter(|&&v| v == 1.0).count();
        let negatives = self.y.iter().filter(|&&v| v == 0.0).count();
        log::info!("----- Input Data Summary -----");
        log::info!(
            "{} rows: {} positive, {} negative, {} other label values",
            self.nrows(),
            positives,
            negatives,
            self.nrows() - positives - negatives
        );
        log::info!("{} feature columns", self.n_features());
    }
}

/// The four derived arrays of a train/test partition, plus the row indices they came from.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<f64>,
    pub y_test: Array1<f64>,
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
}

impl TrainTestSplit {
    pub fn n_train(&self) -> usize {
        self.train_indices.len()
    }

    pub fn n_test(&self) -> usize {
        self.test_indices.len()
    }
}

/// Number of test rows for `n_samples` rows and a fractional `test_size`.
///
/// Rounds up, so 768 rows at 0.33 gives 254 test rows and 514 training rows.
pub fn n_test_rows(n_samples: usize, test_size: f64) -> usize {
    (test_size * n_samples as f64).ceil() as usize
}

/// Partition `0..n_samples` into `(train, test)` index sets with a seeded permutation.
pub fn split_indices(
    n_samples: usize,
    test_size: f64,
    seed: u64,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if !(test_size.is_finite() && test_size > 0.0 && test_size < 1.0) {
        return Err(ClassifierError::InvalidArgument(format!(
            "test_size must lie in (0, 1), got {}",
            test_size
        )));
    }

    let n_test = n_test_rows(n_samples, test_size);
    if n_test == 0 {
        return Err(ClassifierError::InvalidArgument(format!(
            "test_size {} leaves no test rows out of {}",
            test_size, n_samples
        )));
    }
    if n_test >= n_samples {
        return Err(ClassifierError::InvalidArgument(format!(
            "test_size {} leaves no training rows out of {}",
            test_size, n_samples
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..n_samples).collect();
    indices.shuffle(&mut rng);

    let train = indices.split_off(n_test);
    Ok((train, indices))
}

/// Split features and labels into disjoint train and test partitions.
///
/// The same `seed`, `test_size` and inputs always produce the same partition.
pub fn train_test_split(
    x: &Array2<f64>,
    y: &Array1<f64>,
    test_size: f64,
    seed: u64,
) -> Result<TrainTestSplit> {
    if x.nrows() != y.len() {
        return Err(ClassifierError::InvalidArgument(format!(
            "cannot split {} feature rows against {} labels",
            x.nrows(),
            y.len()
        )));
    }

    let (train_indices, test_indices) = split_indices(x.nrows(), test_size, seed)?;

    log::debug!(
        "Split {} rows into {} train / {} test (test_size={}, seed={})",
        x.nrows(),
        train_indices.len(),
        test_indices.len(),
        test_size,
        seed
    );

    Ok(TrainTestSplit {
        x_train: x.select_rows(&train_indices),
        x_test: x.select_rows(&test_indices),
        y_train: y.select(&train_indices),
        y_test: y.select(&test_indices),
        train_indices,
        test_indices,
    })
}
