use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use clfbench_classifiers::config::{AucInput, ExperimentConfig};
use clfbench_classifiers::models::utils::binary_labels;
use clfbench_classifiers::report::plots::plot_roc_curves;
use clfbench_classifiers::runner::run_experiment;

/// Two noisy features drive the label; six more are pure noise.
fn write_synthetic_table(path: &std::path::Path, n_rows: usize, seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut file = File::create(path).with_context(|| format!("creating {:?}", path))?;

    for _ in 0..n_rows {
        let signal_a: f64 = rng.gen_range(-2.0..2.0);
        let signal_b: f64 = rng.gen_range(-2.0..2.0);
        let label = if signal_a + 0.5 * signal_b + rng.gen_range(-0.7..0.7) > 0.0 {
            1
        } else {
            0
        };

        let mut fields = vec![format!("{:.4}", signal_a), format!("{:.4}", signal_b)];
        fields.extend((0..6).map(|_| format!("{:.4}", rng.gen_range(0.0..1.0_f64))));
        fields.push(label.to_string());
        writeln!(file, "{}", fields.join(","))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(log::LevelFilter::Info)
        .init();

    let dir = std::env::temp_dir().join("clfbench_compare_synthetic");
    std::fs::create_dir_all(&dir)?;
    let data_path = dir.join("synthetic.csv");
    write_synthetic_table(&data_path, 768, 42)?;

    let config = ExperimentConfig {
        data_path,
        scale_features: true,
        auc_input: AucInput::Scores,
        ..ExperimentConfig::default()
    };

    let stdout = std::io::stdout();
    let (split, results) = run_experiment(&config, &mut stdout.lock())?;

    let y_test = binary_labels(&split.y_test)?;
    let plot = plot_roc_curves(&results, &y_test, "Synthetic ROC curves")?;
    let plot_path = dir.join("roc.html");
    plot.write_html(&plot_path);
    println!("\nROC plot saved to {:?}", plot_path);

    Ok(())
}
