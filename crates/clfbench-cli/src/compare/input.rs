use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;

use clfbench_classifiers::config::{
    load_config, AucInput, ExperimentConfig, ModelConfig, ModelType, OutputFormat,
};

/// Everything the `run` subcommand needs.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub experiment: ExperimentConfig,
    pub roc_plot: Option<PathBuf>,
}

impl CompareOptions {
    /// Start from the config file (or defaults) and apply command-line overrides.
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let mut experiment = match matches.get_one::<PathBuf>("config") {
            Some(config_path) => {
                log::info!("Using config: {:?}", config_path);
                load_config(config_path)
                    .with_context(|| format!("Failed to load config file: {:?}", config_path))?
            }
            None => {
                let defaults = ExperimentConfig::default();
                log::info!(
                    "No config provided; using defaults:\n{}",
                    serde_json::to_string_pretty(&defaults).unwrap_or_default()
                );
                defaults
            }
        };

        // Apply CLI overrides
        if let Some(data) = matches.get_one::<PathBuf>("data") {
            experiment.data_path = data.clone();
        }

        if let Some(seed) = matches.get_one::<u64>("seed") {
            experiment.seed = *seed;
        }

        if let Some(test_size) = matches.get_one::<f64>("test_size") {
            experiment.test_size = *test_size;
        }

        if let Some(models) = matches.get_many::<String>("model") {
            experiment.models = models
                .map(|key| {
                    ModelType::from_str(key)
                        .map(ModelConfig::from)
                        .map_err(anyhow::Error::msg)
                })
                .collect::<Result<Vec<_>>>()?;
        }

        if let Some(format) = matches.get_one::<String>("format") {
            experiment.output_format = OutputFormat::from_str(format).map_err(anyhow::Error::msg)?;
        }

        if matches.get_flag("scale_features") {
            experiment.scale_features = true;
        }

        if matches.get_flag("auc_from_scores") {
            experiment.auc_input = AucInput::Scores;
        }

        validate_data_file(&experiment.data_path)?;
        experiment.validate()?;

        Ok(CompareOptions {
            experiment,
            roc_plot: matches.get_one::<PathBuf>("roc_plot").cloned(),
        })
    }
}

pub fn validate_data_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        anyhow::bail!("Data file does not exist: {}", path.display());
    }
    Ok(())
}
