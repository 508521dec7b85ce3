use candle_core::{Device, Tensor, Var};
use candle_nn::{AdamW, Linear, Module, Optimizer, ParamsAdamW};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::{ModelConfig, ModelType};
use crate::error::{ClassifierError, Result};
use crate::math::Array2;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::{check_feature_width, validate_training_data};

const DEFAULT_MAX_BATCH: usize = 200;

/// Feed-forward network with ReLU hidden layers and a single logit output,
/// trained with AdamW on binary cross-entropy.
///
/// Weight initialisation and mini-batch order both come from a `StdRng`
/// seeded at construction, so two classifiers built with the same seed and
/// fitted on the same data end up with the same weights.
pub struct MLPClassifier {
    params: ModelConfig,
    seed: u64,
    device: Device,
    layers: Option<Vec<Linear>>,
    feature_size: usize,
}

struct TrainingPlan {
    layer_sizes: Vec<usize>,
    alpha: f64,
    batch_size: usize,
    max_epochs: usize,
    tol: f64,
    n_iter_no_change: usize,
}

impl MLPClassifier {
    pub fn new(params: ModelConfig, seed: u64) -> Self {
        MLPClassifier {
            params,
            seed,
            device: Device::Cpu,
            layers: None,
            feature_size: 0,
        }
    }

    fn plan(&self, n_samples: usize, n_features: usize) -> Result<TrainingPlan> {
        match &self.params.model_type {
            ModelType::MLP {
                hidden_layer_sizes,
                alpha,
                batch_size,
                max_epochs,
                tol,
                n_iter_no_change,
            } => {
                if hidden_layer_sizes.contains(&0) {
                    return Err(ClassifierError::ModelFit(format!(
                        "hidden layer sizes must be positive, got {:?}",
                        hidden_layer_sizes
                    )));
                }
                let mut layer_sizes = Vec::with_capacity(hidden_layer_sizes.len() + 2);
                layer_sizes.push(n_features);
                layer_sizes.extend_from_slice(hidden_layer_sizes);
                layer_sizes.push(1);

                let batch_size = batch_size
                    .unwrap_or(DEFAULT_MAX_BATCH)
                    .clamp(1, n_samples.max(1));

                Ok(TrainingPlan {
                    layer_sizes,
                    alpha: *alpha,
                    batch_size,
                    max_epochs: *max_epochs,
                    tol: *tol,
                    n_iter_no_change: *n_iter_no_change,
                })
            }
            other => Err(ClassifierError::ModelFit(format!(
                "expected ModelType::MLP params, got {}",
                other.key()
            ))),
        }
    }

    fn train(
        &self,
        x: &Array2<f64>,
        y: &[i32],
        plan: &TrainingPlan,
    ) -> candle_core::Result<Vec<Linear>> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut vars = Vec::with_capacity(2 * plan.layer_sizes.len());
        let mut layers = Vec::with_capacity(plan.layer_sizes.len() - 1);
        for pair in plan.layer_sizes.windows(2) {
            let (weight, bias) = init_layer(pair[0], pair[1], &mut rng, &self.device)?;
            layers.push(Linear::new(
                weight.as_tensor().clone(),
                Some(bias.as_tensor().clone()),
            ));
            vars.push(weight);
            vars.push(bias);
        }

        let adamw = ParamsAdamW {
            lr: self.params.learning_rate as f64,
            weight_decay: plan.alpha,
            ..Default::default()
        };
        let mut opt = AdamW::new(vars, adamw)?;

        let n_samples = x.nrows();
        let mut order: Vec<usize> = (0..n_samples).collect();
        let mut best_loss = f64::INFINITY;
        let mut no_improvement = 0usize;

        for epoch in 0..plan.max_epochs {
            order.shuffle(&mut rng);
            let mut epoch_loss = 0.0;

            for batch in order.chunks(plan.batch_size) {
                let xs = features_tensor(x, batch, &self.device)?;
                let ys = labels_tensor(y, batch, &self.device)?;

                let logits = forward(&layers, &xs)?;
                let loss = bce_with_logits(&logits, &ys)?;
                opt.backward_step(&loss)?;

                epoch_loss += loss.to_scalar::<f32>()? as f64 * batch.len() as f64;
            }
            epoch_loss /= n_samples as f64;
            log::trace!("MLP epoch {}: loss {:.6}", epoch + 1, epoch_loss);

            if epoch_loss > best_loss - plan.tol {
                no_improvement += 1;
            } else {
                no_improvement = 0;
            }
            if epoch_loss < best_loss {
                best_loss = epoch_loss;
            }
            if no_improvement > plan.n_iter_no_change {
                log::debug!(
                    "MLP stopped after {} epochs: loss {:.6} did not improve by {} for {} epochs",
                    epoch + 1,
                    epoch_loss,
                    plan.tol,
                    plan.n_iter_no_change
                );
                break;
            }
        }

        log::debug!("MLP training finished with best loss {:.6}", best_loss);
        Ok(layers)
    }

    fn probabilities(&self, layers: &[Linear], x: &Array2<f64>) -> candle_core::Result<Vec<f64>> {
        let rows: Vec<usize> = (0..x.nrows()).collect();
        let xs = features_tensor(x, &rows, &self.device)?;
        let logits = forward(layers, &xs)?;
        let probs = sigmoid(&logits)?.flatten_all()?.to_vec1::<f32>()?;
        Ok(probs.into_iter().map(f64::from).collect())
    }
}

impl ClassifierModel for MLPClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &[i32]) -> Result<()> {
        validate_training_data(self.name(), x, y)?;
        let plan = self.plan(x.nrows(), x.ncols())?;

        log::debug!(
            "Fitting MLP {:?}: lr {}, batch {}, up to {} epochs",
            plan.layer_sizes,
            self.params.learning_rate,
            plan.batch_size,
            plan.max_epochs
        );

        let layers = self
            .train(x, y, &plan)
            .map_err(|e| ClassifierError::ModelFit(format!("{}: {}", self.name(), e)))?;

        self.layers = Some(layers);
        self.feature_size = x.ncols();
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Vec<f64>> {
        let layers = self
            .layers
            .as_ref()
            .ok_or_else(|| ClassifierError::NotFitted(self.name().to_string()))?;
        check_feature_width(self.name(), self.feature_size, x)?;
        if x.nrows() == 0 {
            return Ok(Vec::new());
        }

        self.probabilities(layers, x)
            .map_err(|e| ClassifierError::Prediction(format!("{}: {}", self.name(), e)))
    }

    fn name(&self) -> &str {
        self.params.display_name()
    }
}

/// Glorot-uniform weights and biases for a `fan_in -> fan_out` layer.
fn init_layer(
    fan_in: usize,
    fan_out: usize,
    rng: &mut StdRng,
    device: &Device,
) -> candle_core::Result<(Var, Var)> {
    let bound = (6.0 / (fan_in + fan_out) as f64).sqrt();
    let weights: Vec<f32> = (0..fan_in * fan_out)
        .map(|_| rng.gen_range(-bound..bound) as f32)
        .collect();
    let biases: Vec<f32> = (0..fan_out)
        .map(|_| rng.gen_range(-bound..bound) as f32)
        .collect();

    let weight = Var::from_tensor(&Tensor::from_vec(weights, (fan_out, fan_in), device)?)?;
    let bias = Var::from_tensor(&Tensor::from_vec(biases, fan_out, device)?)?;
    Ok((weight, bias))
}

fn features_tensor(x: &Array2<f64>, rows: &[usize], device: &Device) -> candle_core::Result<Tensor> {
    let mut data = Vec::with_capacity(rows.len() * x.ncols());
    for &r in rows {
        data.extend(x.row_slice(r).iter().map(|&v| v as f32));
    }
    Tensor::from_vec(data, (rows.len(), x.ncols()), device)
}

fn labels_tensor(y: &[i32], rows: &[usize], device: &Device) -> candle_core::Result<Tensor> {
    let data: Vec<f32> = rows.iter().map(|&r| y[r] as f32).collect();
    Tensor::from_vec(data, (rows.len(), 1), device)
}

fn forward(layers: &[Linear], xs: &Tensor) -> candle_core::Result<Tensor> {
    let mut h = xs.clone();
    for (i, layer) in layers.iter().enumerate() {
        h = layer.forward(&h)?;
        if i + 1 < layers.len() {
            h = h.relu()?;
        }
    }
    Ok(h)
}

/// Mean of `max(z, 0) - z * y + ln(1 + exp(-|z|))`, the stable form of BCE on logits.
fn bce_with_logits(logits: &Tensor, targets: &Tensor) -> candle_core::Result<Tensor> {
    let linear = logits.relu()?.sub(&logits.mul(targets)?)?;
    let softplus = logits.abs()?.neg()?.exp()?.affine(1.0, 1.0)?.log()?;
    linear.add(&softplus)?.mean_all()
}

fn sigmoid(logits: &Tensor) -> candle_core::Result<Tensor> {
    logits.neg()?.exp()?.affine(1.0, 1.0)?.recip()
}
