use plotly::common::{DashType, Line, Mode};
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};

use crate::error::{ClassifierError, Result};
use crate::runner::ModelResult;
use crate::stats::roc_curve;

/// Plot one ROC curve per model (from the raw scores) plus the chance diagonal.
pub fn plot_roc_curves(results: &[ModelResult], y_test: &[i32], title: &str) -> Result<Plot> {
    let mut plot = Plot::new();

    for result in results {
        if result.scores.len() != y_test.len() {
            return Err(ClassifierError::InvalidArgument(format!(
                "{} has {} scores for {} test labels",
                result.model_name,
                result.scores.len(),
                y_test.len()
            )));
        }
        let points = roc_curve(y_test, &result.scores)?;
        let (fpr, tpr): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();

        let label = format!("{} (accuracy {:.2}%)", result.model_name, result.accuracy * 100.0);
        plot.add_trace(Scatter::new(fpr, tpr).mode(Mode::Lines).name(&label));
    }

    let chance = Scatter::new(vec![0.0, 1.0], vec![0.0, 1.0])
        .mode(Mode::Lines)
        .name("Chance")
        .line(Line::new().color("grey").dash(DashType::Dash));
    plot.add_trace(chance);

    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(Axis::new().title("False positive rate"))
            .y_axis(Axis::new().title("True positive rate")),
    );

    Ok(plot)
}
