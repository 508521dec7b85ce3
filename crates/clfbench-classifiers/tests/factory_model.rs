use clfbench_classifiers::config::{ModelConfig, ModelType};
use clfbench_classifiers::math::Array2;
use clfbench_classifiers::models::factory;

fn tiny_dataset() -> (Array2<f64>, Vec<i32>) {
    let x = Array2::from_shape_vec(
        (12, 2),
        vec![
            1.0, 0.0, // class 1
            0.0, 1.0, // class 0
            1.0, 0.1, // class 1
            0.0, 0.9, // class 0
            1.1, 0.0, // class 1
            0.0, 1.2, // class 0
            0.9, 0.2, // class 1
            0.1, 1.1, // class 0
            1.2, 0.1, // class 1
            0.2, 0.8, // class 0
            1.0, 0.3, // class 1
            0.3, 1.0, // class 0
        ],
    )
    .expect("failed to create feature matrix");
    let y = (0..12).map(|i| if i % 2 == 0 { 1 } else { 0 }).collect();
    (x, y)
}

#[test]
fn test_factory_builds_and_predicts() {
    let (x, y) = tiny_dataset();

    for key in ["gbdt", "mlp", "logistic"] {
        let model_type: ModelType = key.parse().unwrap();
        let mut model = factory::build_model(ModelConfig::from(model_type), 7);
        model.fit(&x, &y).unwrap();

        let probs = model.predict(&x).unwrap();
        assert_eq!(probs.len(), x.nrows(), "{} returned wrong length", key);
        assert!(
            probs.iter().all(|p| p.is_finite()),
            "{} returned non-finite scores",
            key
        );
    }
}

#[test]
fn display_names_follow_model_type() {
    let names: Vec<String> = ["gbdt", "mlp", "logistic"]
        .iter()
        .map(|k| {
            let model_type: ModelType = k.parse().unwrap();
            factory::build_model(model_type.into(), 0).name().to_string()
        })
        .collect();
    assert_eq!(
        names,
        vec!["Gradient Boosting", "Multilayer perceptron", "Logistic Regression"]
    );
}

#[test]
fn custom_name_overrides_display_name() {
    let mut config = ModelConfig::from(ModelType::logistic());
    config.name = Some("Baseline".to_string());
    let model = factory::build_model(config, 0);
    assert_eq!(model.name(), "Baseline");
}

#[test]
fn every_model_is_idempotent_after_fit() {
    let (x, y) = tiny_dataset();
    for key in ["gbdt", "mlp", "logistic"] {
        let model_type: ModelType = key.parse().unwrap();
        let mut model = factory::build_model(model_type.into(), 11);
        model.fit(&x, &y).unwrap();
        assert_eq!(model.predict(&x).unwrap(), model.predict(&x).unwrap(), "{}", key);
    }
}

#[test]
fn same_seed_gives_same_mlp() {
    let (x, y) = tiny_dataset();
    let fit = |seed| {
        let mut model = factory::build_model(ModelType::mlp().into(), seed);
        model.fit(&x, &y).unwrap();
        model.predict(&x).unwrap()
    };
    assert_eq!(fit(5), fit(5));
}
