//! clfbench-classifiers: train/test comparison of off-the-shelf binary classifiers.
//!
//! The crate loads a headerless numeric table (features followed by a 0/1
//! label column), splits it with a seeded permutation, and fits gradient
//! boosted trees (`gbdt`), a multilayer perceptron (`candle`) and logistic
//! regression (`linfa-logistic`) behind one `ClassifierModel` trait. Each
//! model is scored by accuracy and ROC AUC on the held-out rows and reported
//! as text, JSON lines or a ROC plot.
//!
//! Everything a run needs lives in an `ExperimentConfig`; `runner::run_experiment`
//! is the single entry point used by the CLI.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod preprocessing;
pub mod report;
pub mod runner;
pub mod stats;

pub use error::{ClassifierError, Result};
