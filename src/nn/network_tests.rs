use super::*;
use crate::nn::xor_dataset;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn row(values: &[f64]) -> Matrix<f64> {
    Matrix::from_vec(1, values.len(), values.to_vec()).expect("valid")
}

fn and_dataset() -> (Vec<Matrix<f64>>, Vec<Matrix<f64>>) {
    let inputs = vec![row(&[0.0, 0.0]), row(&[0.0, 1.0]), row(&[1.0, 0.0]), row(&[1.0, 1.0])];
    let targets = vec![row(&[0.0]), row(&[0.0]), row(&[0.0]), row(&[1.0])];
    (inputs, targets)
}

#[test]
fn test_new_shapes_and_ranges() {
    let mut rng = StdRng::seed_from_u64(3);
    let net = SingleLayerNetwork::new(3, 2, &mut rng).expect("valid sizes");
    assert_eq!(net.weights().shape(), (3, 2));
    assert_eq!(net.biases().shape(), (1, 2));
    assert!(net.weights().as_slice().iter().all(|w| (-1.0..=1.0).contains(w)));
    assert!(net.biases().as_slice().iter().all(|&b| b == 0.0));
}

#[test]
fn test_new_rejects_zero_sizes() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        SingleLayerNetwork::new(0, 2, &mut rng),
        Err(DenseMatError::InvalidDimensions { .. })
    ));
    assert!(SingleLayerNetwork::with_weight_range(2, 2, 0.0, &mut rng).is_err());
}

#[test]
fn test_from_config_is_reproducible() {
    let config = TrainerConfig::default().with_seed(11).with_weight_range(0.25);
    let a = SingleLayerNetwork::from_config(2, 2, &config).expect("valid");
    let b = SingleLayerNetwork::from_config(2, 2, &config).expect("valid");
    assert_eq!(a, b);
    assert!(a.weights().as_slice().iter().all(|w| w.abs() <= 0.25));
}

#[test]
fn test_forward_known_weights() {
    let weights = Matrix::from_vec(2, 1, vec![1.0, -1.0]).expect("valid");
    let biases = Matrix::from_vec(1, 1, vec![0.5]).expect("valid");
    let net = SingleLayerNetwork::from_parts(weights, biases).expect("consistent");

    let out = net.forward(&row(&[2.0, 2.5])).expect("matching width");
    // z = 2 - 2.5 + 0.5 = 0
    assert_eq!(out.as_slice(), &[0.5]);
}

#[test]
fn test_forward_batch_adds_bias_per_row() {
    let weights = Matrix::<f64>::zeros(2, 2);
    let biases = Matrix::from_vec(1, 2, vec![0.0, 100.0]).expect("valid");
    let net = SingleLayerNetwork::from_parts(weights, biases).expect("consistent");

    let batch = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let out = net.forward(&batch).expect("matching width");
    assert_eq!(out.shape(), (3, 2));
    for i in 0..3 {
        assert_eq!(out.get(i, 0), 0.5);
        assert_eq!(out.get(i, 1), 1.0);
    }
}

#[test]
fn test_forward_width_mismatch() {
    let mut rng = StdRng::seed_from_u64(1);
    let net = SingleLayerNetwork::new(2, 1, &mut rng).expect("valid");
    assert!(matches!(
        net.forward(&row(&[1.0, 2.0, 3.0])),
        Err(DenseMatError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_from_parts_checks_bias_shape() {
    let err = SingleLayerNetwork::from_parts(Matrix::zeros(2, 3), Matrix::zeros(1, 2)).unwrap_err();
    assert!(matches!(err, DenseMatError::DimensionMismatch { .. }));
}

#[test]
fn test_train_step_delta_rule() {
    let weights = Matrix::from_vec(2, 1, vec![0.0, 0.0]).expect("valid");
    let biases = Matrix::from_vec(1, 1, vec![0.0]).expect("valid");
    let mut net = SingleLayerNetwork::from_parts(weights, biases).expect("consistent");

    // out = 0.5, error = 0.5, grad = 0.5 * 0.25 = 0.125
    let sq = net
        .train_step(&row(&[1.0, 2.0]), &row(&[1.0]), 2.0)
        .expect("shapes match");
    assert_eq!(sq, 0.25);
    assert_eq!(net.weights().as_slice(), &[0.25, 0.5]);
    assert_eq!(net.biases().as_slice(), &[0.25]);
}

#[test]
fn test_train_step_shape_checks() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut net = SingleLayerNetwork::new(2, 2, &mut rng).expect("valid");
    let batch = Matrix::from_vec(2, 2, vec![0.0; 4]).expect("valid");
    assert!(net.train_step(&batch, &row(&[0.0, 0.0]), 0.5).is_err());
    assert!(net.train_step(&row(&[0.0, 0.0]), &row(&[0.0]), 0.5).is_err());
}

#[test]
fn test_fit_learns_and() {
    let (inputs, targets) = and_dataset();
    let config = TrainerConfig::default().with_epochs(2000).with_seed(42);
    let mut net = SingleLayerNetwork::from_config(2, 1, &config).expect("valid");
    let report = net.fit(&inputs, &targets, &config).expect("valid data");

    assert_eq!(report.epochs, 2000);
    assert_eq!(report.history.len(), 2000);
    assert!(report.improved());
    assert!(report.final_error < 0.5 * report.initial_error);

    let on = net.forward(&row(&[1.0, 1.0])).expect("valid").get(0, 0);
    let off = net.forward(&row(&[0.0, 1.0])).expect("valid").get(0, 0);
    assert!(on > off);
}

#[test]
fn test_fit_on_xor_reduces_error() {
    let (inputs, targets) = xor_dataset();
    let config = TrainerConfig::default().with_seed(7);
    let mut net = SingleLayerNetwork::from_config(2, 2, &config).expect("valid");
    let report = net.fit(&inputs, &targets, &config).expect("valid data");
    assert!(
        report.final_error < report.initial_error,
        "{} -> {}",
        report.initial_error,
        report.final_error
    );
}

#[test]
fn test_fit_rejects_bad_input() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut net = SingleLayerNetwork::new(2, 2, &mut rng).expect("valid");
    let config = TrainerConfig::default().with_epochs(1);

    assert!(matches!(
        net.fit(&[], &[], &config),
        Err(DenseMatError::EmptyInput { .. })
    ));

    let (inputs, targets) = xor_dataset();
    assert!(matches!(
        net.fit(&inputs, &targets[..3], &config),
        Err(DenseMatError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        net.fit(&inputs, &targets, &config.clone().with_learning_rate(-1.0)),
        Err(DenseMatError::InvalidHyperparameter { .. })
    ));
}

#[test]
fn test_network_serde_round_trip() {
    let config = TrainerConfig::default().with_seed(2);
    let net = SingleLayerNetwork::from_config(2, 2, &config).expect("valid");
    let json = serde_json::to_string(&net).expect("serializable");
    let back: SingleLayerNetwork = serde_json::from_str(&json).expect("valid json");
    assert_eq!(back.weights().shape(), (2, 2));
    for (a, b) in back.weights().as_slice().iter().zip(net.weights().as_slice()) {
        assert!((a - b).abs() < 1e-12);
    }
}
