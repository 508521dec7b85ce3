//! Fit/predict/score loop over the configured models.
//!
//! `evaluate_model` is the per-model step and returns a structured
//! `ModelResult`. `run_experiment` chains loader, splitter and runner and
//! writes every report as soon as its model finishes, so a later failure
//! leaves the earlier reports in the output.
use std::io::Write;
use std::time::Instant;

use serde::Serialize;

use crate::config::{AucInput, ExperimentConfig};
use crate::data_handling::{train_test_split, Dataset, TrainTestSplit};
use crate::error::Result;
use crate::io::{read_table_with_config, TableReaderConfig};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::factory::build_model;
use crate::models::utils::binary_labels;
use crate::preprocessing::scale_split;
use crate::report::write_report;
use crate::stats::{accuracy_score, roc_auc_score, round_predictions};

/// Outcome of fitting and scoring one classifier on one split.
#[derive(Debug, Clone, Serialize)]
pub struct ModelResult {
    pub model_name: String,
    /// Rounded 0/1 label per test row, in test-row order.
    pub predictions: Vec<i32>,
    /// Raw class-1 scores the labels were rounded from.
    pub scores: Vec<f64>,
    pub accuracy: f64,
    pub auc: f64,
    /// Rows whose rounded output fell outside {0, 1} and was clamped.
    pub clamped: usize,
}

/// Fit `model` on the training rows, predict the test rows and score the result.
pub fn evaluate_model(
    model: &mut dyn ClassifierModel,
    name: &str,
    split: &TrainTestSplit,
    auc_input: AucInput,
) -> Result<ModelResult> {
    let y_train = binary_labels(&split.y_train)?;

    let started = Instant::now();
    model.fit(&split.x_train, &y_train)?;
    log::debug!(
        "{}: fitted on {} rows in {:.2?}",
        name,
        split.x_train.nrows(),
        started.elapsed()
    );

    let scores = model.predict(&split.x_test)?;
    let (predictions, clamped) = round_predictions(&scores);
    if clamped > 0 {
        log::warn!(
            "{}: {} prediction(s) rounded outside {{0, 1}} and were clamped",
            name,
            clamped
        );
    }

    let y_test = binary_labels(&split.y_test)?;
    let accuracy = accuracy_score(&y_test, &predictions)?;
    let auc = match auc_input {
        AucInput::Labels => {
            let as_scores: Vec<f64> = predictions.iter().map(|&p| p as f64).collect();
            roc_auc_score(&y_test, &as_scores)?
        }
        AucInput::Scores => roc_auc_score(&y_test, &scores)?,
    };

    log::info!(
        "{}: accuracy {:.4}, auc {:.4} on {} test rows",
        name,
        accuracy,
        auc,
        y_test.len()
    );

    Ok(ModelResult {
        model_name: name.to_string(),
        predictions,
        scores,
        accuracy,
        auc,
        clamped,
    })
}

/// Load the dataset and split it as configured.
pub fn prepare_split(config: &ExperimentConfig) -> Result<TrainTestSplit> {
    config.validate()?;

    let reader = TableReaderConfig {
        delimiter: config.delimiter_byte(),
        expected_columns: config.expected_columns,
    };
    let table = read_table_with_config(&config.data_path, &reader)?;
    let dataset = Dataset::from_table(&table)?;
    dataset.log_input_data_summary();

    let split = train_test_split(&dataset.x, &dataset.y, config.test_size, config.seed)?;
    log::info!(
        "Train/test split: {} / {} rows (seed {})",
        split.n_train(),
        split.n_test(),
        config.seed
    );

    if config.scale_features {
        scale_split(&split)
    } else {
        Ok(split)
    }
}

/// Run every configured model in order, writing each report to `out` as soon
/// as it is available. The first error stops the run.
pub fn run_experiment<W: Write>(
    config: &ExperimentConfig,
    out: &mut W,
) -> Result<(TrainTestSplit, Vec<ModelResult>)> {
    let split = prepare_split(config)?;

    let mut results = Vec::with_capacity(config.models.len());
    for model_config in &config.models {
        let name = model_config.display_name().to_string();
        log::info!("Running {}", name);

        let mut model = build_model(model_config.clone(), config.seed);
        let result = evaluate_model(model.as_mut(), &name, &split, config.auc_input)?;

        write_report(out, &result, config.output_format)?;
        out.flush()?;
        results.push(result);
    }

    Ok((split, results))
}
