use linfa::traits::Fit;
use linfa::DatasetBase;
use linfa_logistic::{FittedLogisticRegression, LogisticRegression};
use ndarray::Array1;

use crate::config::{ModelConfig, ModelType};
use crate::error::{ClassifierError, Result};
use crate::math::Array2;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::{check_feature_width, to_ndarray, validate_training_data};

/// L2-regularized binary logistic regression backed by `linfa-logistic`.
pub struct LogisticClassifier {
    model: Option<FittedLogisticRegression<f64, usize>>,
    params: ModelConfig,
    feature_size: usize,
}

impl LogisticClassifier {
    pub fn new(params: ModelConfig) -> Self {
        LogisticClassifier {
            model: None,
            params,
            feature_size: 0,
        }
    }
}

impl ClassifierModel for LogisticClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &[i32]) -> Result<()> {
        validate_training_data(self.name(), x, y)?;

        let (alpha, max_iterations, fit_intercept) = match &self.params.model_type {
            ModelType::Logistic {
                alpha,
                max_iterations,
                fit_intercept,
            } => (*alpha, *max_iterations, *fit_intercept),
            other => {
                return Err(ClassifierError::ModelFit(format!(
                    "expected ModelType::Logistic params, got {}",
                    other.key()
                )))
            }
        };

        let records = to_ndarray(x)?;
        let targets = y.iter().map(|&l| l as usize).collect::<Array1<usize>>();
        let dataset = DatasetBase::new(records, targets);

        log::debug!(
            "Fitting logistic regression: alpha {}, {} iterations, intercept {}",
            alpha,
            max_iterations,
            fit_intercept
        );

        let fitted = LogisticRegression::default()
            .alpha(alpha)
            .max_iterations(max_iterations)
            .with_intercept(fit_intercept)
            .fit(&dataset)
            .map_err(|e| ClassifierError::ModelFit(format!("{}: {}", self.name(), e)))?;

        self.model = Some(fitted);
        self.feature_size = x.ncols();
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Vec<f64>> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| ClassifierError::NotFitted(self.name().to_string()))?;
        check_feature_width(self.name(), self.feature_size, x)?;

        // linfa scores its positive class, which is the majority training class
        let positive_is_one = model.labels().pos.class == 1;
        let probabilities = model.predict_probabilities(&to_ndarray(x)?);
        Ok(probabilities
            .iter()
            .map(|&p| if positive_is_one { p } else { 1.0 - p })
            .collect())
    }

    fn name(&self) -> &str {
        self.params.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable() -> (Array2<f64>, Vec<i32>) {
        let x = Array2::from_shape_vec(
            (8, 2),
            vec![
                -2.0, 0.5, -1.5, -0.3, -1.0, 0.1, -0.5, 0.7, 0.5, -0.2, 1.0, 0.4, 1.5, -0.6, 2.0,
                0.2,
            ],
        )
        .unwrap();
        (x, vec![0, 0, 0, 0, 1, 1, 1, 1])
    }

    #[test]
    fn probabilities_follow_the_positive_class() {
        let (x, y) = separable();
        let mut clf = LogisticClassifier::new(ModelType::logistic().into());
        clf.fit(&x, &y).unwrap();

        let probs = clf.predict(&x).unwrap();
        assert_eq!(probs.len(), 8);
        assert!(probs.iter().all(|p| (0.0..=1.0).contains(p)));
        assert!(probs[0] < 0.5);
        assert!(probs[7] > 0.5);
    }

    #[test]
    fn class_one_scores_high_when_class_zero_is_the_majority() {
        let x = Array2::from_shape_vec((8, 1), vec![-3.0, -2.5, -2.0, -1.5, -1.0, -0.5, 2.0, 3.0])
            .unwrap();
        let y = vec![0, 0, 0, 0, 0, 0, 1, 1];
        let mut clf = LogisticClassifier::new(ModelType::logistic().into());
        clf.fit(&x, &y).unwrap();

        let probs = clf.predict(&x).unwrap();
        assert!(probs[..6].iter().all(|&p| p < 0.5), "{:?}", probs);
        assert!(probs[7] > 0.5, "{:?}", probs);
    }

    #[test]
    fn class_one_scores_high_when_class_one_is_the_majority() {
        let x = Array2::from_shape_vec((8, 1), vec![-3.0, -2.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0])
            .unwrap();
        let y = vec![0, 0, 1, 1, 1, 1, 1, 1];
        let mut clf = LogisticClassifier::new(ModelType::logistic().into());
        clf.fit(&x, &y).unwrap();

        let probs = clf.predict(&x).unwrap();
        assert!(probs[0] < 0.5, "{:?}", probs);
        assert!(probs[0] < probs[2] && probs[2] < probs[7], "{:?}", probs);
        assert!(probs[7] > 0.5, "{:?}", probs);
    }

    #[test]
    fn single_class_training_is_a_fit_error() {
        let (x, _) = separable();
        let mut clf = LogisticClassifier::new(ModelType::logistic().into());
        let err = clf.fit(&x, &[0; 8]).unwrap_err();
        assert!(matches!(err, ClassifierError::ModelFit(_)));
    }

    #[test]
    fn width_mismatch_is_rejected() {
        let (x, y) = separable();
        let mut clf = LogisticClassifier::new(ModelType::logistic().into());
        clf.fit(&x, &y).unwrap();
        let narrow = Array2::from_shape_vec((1, 1), vec![0.0]).unwrap();
        assert!(matches!(
            clf.predict(&narrow),
            Err(ClassifierError::InvalidArgument(_))
        ));
    }
}
