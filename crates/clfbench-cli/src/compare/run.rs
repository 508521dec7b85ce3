use std::io::Write;

use anyhow::{Context, Result};

use clfbench_classifiers::models::utils::binary_labels;
use clfbench_classifiers::report::plots::plot_roc_curves;
use clfbench_classifiers::runner::run_experiment;

use crate::compare::input::CompareOptions;

/// Run the experiment, streaming reports to `out`, then write the ROC plot if requested.
pub fn run_comparison<W: Write>(options: &CompareOptions, out: &mut W) -> Result<()> {
    let experiment = &options.experiment;
    log::info!(
        "Comparing {} model(s) on {:?}",
        experiment.models.len(),
        experiment.data_path
    );

    let (split, results) = run_experiment(experiment, out)?;

    if let Some(plot_path) = &options.roc_plot {
        let y_test = binary_labels(&split.y_test)?;
        let title = format!(
            "ROC curves ({} test rows, seed {})",
            split.n_test(),
            experiment.seed
        );
        let plot = plot_roc_curves(&results, &y_test, &title)?;
        plot.write_html(plot_path);
        log::info!("ROC plot written to {:?}", plot_path);
    }

    out.flush().context("Failed to flush report output")?;
    Ok(())
}
