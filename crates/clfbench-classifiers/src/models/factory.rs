use crate::config::{ModelConfig, ModelType};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::gbdt::GBDTClassifier;
use crate::models::logistic::LogisticClassifier;
use crate::models::mlp::MLPClassifier;

/// Build a boxed classifier model from a `ModelConfig`.
///
/// `seed` drives any randomness inside the model (MLP initialisation and
/// batch order); the boosted trees and logistic regression are deterministic.
pub fn build_model(params: ModelConfig, seed: u64) -> Box<dyn ClassifierModel> {
    match params.model_type {
        ModelType::GBDT { .. } => Box::new(GBDTClassifier::new(params)),
        ModelType::MLP { .. } => Box::new(MLPClassifier::new(params, seed)),
        ModelType::Logistic { .. } => Box::new(LogisticClassifier::new(params)),
    }
}
