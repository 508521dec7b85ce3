use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;

use crate::config::{ModelConfig, ModelType};
use crate::error::{ClassifierError, Result};
use crate::math::Array2;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::{check_feature_width, validate_training_data};

const SUPPORTED_LOSSES: [&str; 3] = ["LogLikelyhood", "SquaredError", "LAD"];

/// Gradient Boosting Decision Tree (GBDT) classifier
pub struct GBDTClassifier {
    model: Option<GBDT>,
    params: ModelConfig,
    feature_size: usize,
}

impl GBDTClassifier {
    pub fn new(params: ModelConfig) -> Self {
        GBDTClassifier {
            model: None,
            params,
            feature_size: 0,
        }
    }

    fn rows(x: &Array2<f64>, labels: Option<&[i32]>, log_likelihood: bool) -> DataVec {
        let mut data = DataVec::with_capacity(x.nrows());
        for (i, row) in x.rows().enumerate() {
            let features = row.iter().map(|&v| v as f32).collect();
            let label = match labels {
                // LogLikelyhood trains on {-1, 1}; regression losses fit the 0/1 label directly
                Some(y) if log_likelihood => if y[i] == 1 { 1.0 } else { -1.0 },
                Some(y) => y[i] as f32,
                None => 0.0,
            };
            data.push(Data::new_training_data(features, 1.0, label, None));
        }
        data
    }
}

impl ClassifierModel for GBDTClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &[i32]) -> Result<()> {
        validate_training_data(self.name(), x, y)?;
        let feature_size = x.ncols();

        match &self.params.model_type {
            ModelType::GBDT {
                max_depth,
                num_boost_round,
                debug,
                training_optimization_level,
                loss_type,
            } => {
                if !SUPPORTED_LOSSES.contains(&loss_type.as_str()) {
                    return Err(ClassifierError::ModelFit(format!(
                        "unsupported GBDT loss '{}'. Valid options are: {}",
                        loss_type,
                        SUPPORTED_LOSSES.join(", ")
                    )));
                }

                let mut config = Config::new();

                config.set_feature_size(feature_size);
                config.set_shrinkage(self.params.learning_rate);
                config.set_max_depth(*max_depth);
                config.set_iterations(*num_boost_round as usize);
                config.set_debug(*debug);
                config.set_training_optimization_level(*training_optimization_level);
                config.set_loss(loss_type);

                let mut gbdt = GBDT::new(&config);
                let mut train_x = Self::rows(x, Some(y), loss_type == "LogLikelyhood");

                log::debug!(
                    "Fitting GBDT: {} rounds, max depth {}, loss {}, on {} rows",
                    num_boost_round,
                    max_depth,
                    loss_type,
                    x.nrows()
                );
                gbdt.fit(&mut train_x);

                self.model = Some(gbdt);
                self.feature_size = feature_size;
                Ok(())
            }
            other => Err(ClassifierError::ModelFit(format!(
                "expected ModelType::GBDT params, got {}",
                other.key()
            ))),
        }
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Vec<f64>> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| ClassifierError::NotFitted(self.name().to_string()))?;
        check_feature_width(self.name(), self.feature_size, x)?;

        let test_x = Self::rows(x, None, false);
        // LogLikelyhood output is already the class-1 probability
        Ok(model.predict(&test_x).into_iter().map(f64::from).collect())
    }

    fn name(&self) -> &str {
        self.params.display_name()
    }
}
