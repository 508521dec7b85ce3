pub mod gbdt;
pub mod logistic;
pub mod mlp;
pub mod utils;

pub mod classifier_trait;
pub mod factory;
