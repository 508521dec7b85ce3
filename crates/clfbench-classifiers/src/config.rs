use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};

/// Configuration for a single classifier run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Display name used in reports. Defaults to the model type's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Shrinkage for GBDT, optimizer step size for the MLP. Unused by the
    /// logistic model, which is solved with L-BFGS.
    pub learning_rate: f32,

    #[serde(flatten)]
    pub model_type: ModelType,
}

/// Supported model types and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ModelType {
    GBDT {
        max_depth: u32,
        num_boost_round: u32,
        debug: bool,
        training_optimization_level: u8,
        loss_type: String,
    },
    MLP {
        hidden_layer_sizes: Vec<usize>,
        /// Decoupled weight decay applied by AdamW.
        alpha: f64,
        /// `None` uses `min(200, n_samples)`.
        batch_size: Option<usize>,
        max_epochs: usize,
        tol: f64,
        n_iter_no_change: usize,
    },
    Logistic {
        /// L2 penalty strength.
        alpha: f64,
        max_iterations: u64,
        fit_intercept: bool,
    },
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::GBDT {
            max_depth: 3,
            num_boost_round: 100,
            debug: false,
            training_optimization_level: 2,
            loss_type: "LogLikelyhood".to_string(),
        }
    }
}

impl ModelType {
    pub fn mlp() -> Self {
        ModelType::MLP {
            hidden_layer_sizes: vec![100],
            alpha: 1e-4,
            batch_size: None,
            max_epochs: 200,
            tol: 1e-4,
            n_iter_no_change: 10,
        }
    }

    pub fn logistic() -> Self {
        ModelType::Logistic {
            alpha: 1.0,
            max_iterations: 100,
            fit_intercept: true,
        }
    }

    /// Short identifier, as accepted by `FromStr`.
    pub fn key(&self) -> &'static str {
        match self {
            ModelType::GBDT { .. } => "gbdt",
            ModelType::MLP { .. } => "mlp",
            ModelType::Logistic { .. } => "logistic",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelType::GBDT { .. } => "Gradient Boosting",
            ModelType::MLP { .. } => "Multilayer perceptron",
            ModelType::Logistic { .. } => "Logistic Regression",
        }
    }

    fn default_learning_rate(&self) -> f32 {
        match self {
            ModelType::GBDT { .. } => 0.1,
            ModelType::MLP { .. } => 0.001,
            ModelType::Logistic { .. } => 0.0,
        }
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gbdt" => Ok(ModelType::default()),
            "mlp" => Ok(ModelType::mlp()),
            "logistic" => Ok(ModelType::logistic()),
            _ => Err(format!(
                "Unknown model type: {}. Valid options are: gbdt, mlp, logistic",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub fn new(learning_rate: f32, model_type: ModelType) -> Self {
        Self {
            name: None,
            learning_rate,
            model_type,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.model_type.display_name())
    }
}

impl From<ModelType> for ModelConfig {
    fn from(model_type: ModelType) -> Self {
        let learning_rate = model_type.default_learning_rate();
        Self::new(learning_rate, model_type)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelType::default().into()
    }
}

/// Which values the AUC is computed from.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AucInput {
    /// Rounded 0/1 predictions, matching the printed labels.
    #[default]
    Labels,
    /// Raw class-1 probabilities.
    Scores,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per model and line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}. Valid options are: text, json", s)),
        }
    }
}

/// Everything a comparison run needs, built once and passed through the pipeline.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ExperimentConfig {
    pub data_path: PathBuf,
    pub delimiter: char,
    /// Expected number of fields per row (features + label).
    pub expected_columns: Option<usize>,
    pub test_size: f64,
    /// Fixed for reproducible runs; draw it at random for real evaluations.
    pub seed: u64,
    pub scale_features: bool,
    pub auc_input: AucInput,
    pub output_format: OutputFormat,
    pub models: Vec<ModelConfig>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("pima-indians-diabetes.data.csv"),
            delimiter: ',',
            expected_columns: Some(9),
            test_size: 0.33,
            seed: 7,
            scale_features: false,
            auc_input: AucInput::default(),
            output_format: OutputFormat::default(),
            models: vec![
                ModelType::default().into(),
                ModelType::mlp().into(),
                ModelType::logistic().into(),
            ],
        }
    }
}

impl ExperimentConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.test_size.is_finite() && self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(ClassifierError::InvalidArgument(format!(
                "test_size must lie in (0, 1), got {}",
                self.test_size
            )));
        }
        if !self.delimiter.is_ascii() {
            return Err(ClassifierError::InvalidArgument(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            )));
        }
        if matches!(self.expected_columns, Some(n) if n < 2) {
            return Err(ClassifierError::InvalidArgument(
                "expected_columns must allow at least one feature and the label".to_string(),
            ));
        }
        if self.models.is_empty() {
            return Err(ClassifierError::InvalidArgument(
                "at least one model must be configured".to_string(),
            ));
        }
        Ok(())
    }

    /// The delimiter as the byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> u8 {
        // validate() guarantees ASCII
        self.delimiter as u8
    }
}

/// Load an experiment configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ExperimentConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ClassifierError::Parse(format!("failed to read config {}: {}", path.display(), e))
    })?;
    let config: ExperimentConfig = serde_json::from_str(&content).map_err(|e| {
        ClassifierError::Parse(format!("failed to parse config {}: {}", path.display(), e))
    })?;
    Ok(config)
}
