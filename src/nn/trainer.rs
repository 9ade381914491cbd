//! Training configuration and results.

use crate::error::{DenseMatError, Result};
use crate::primitives::Matrix;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Hyperparameters for [`SingleLayerNetwork::fit`](super::SingleLayerNetwork::fit).
///
/// # Example
///
/// ```
/// use densemat::nn::TrainerConfig;
///
/// let config = TrainerConfig::default()
///     .with_epochs(200)
///     .with_learning_rate(0.1)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Step size of the delta rule.
    pub learning_rate: f64,
    /// Passes over the training set.
    pub epochs: usize,
    /// Seed for weight initialization; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Initial weights are drawn uniformly from `[-weight_range, weight_range]`.
    pub weight_range: f64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            epochs: 1000,
            seed: None,
            weight_range: 1.0,
        }
    }
}

impl TrainerConfig {
    /// Sets the learning rate.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the number of epochs.
    #[must_use]
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Fixes the initialization seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the half-width of the initial weight interval.
    #[must_use]
    pub fn with_weight_range(mut self, weight_range: f64) -> Self {
        self.weight_range = weight_range;
        self
    }

    /// Checks every field against its constraint.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(invalid("learning_rate", self.learning_rate, "> 0"));
        }
        if self.epochs == 0 {
            return Err(invalid("epochs", self.epochs, ">= 1"));
        }
        if !(self.weight_range.is_finite() && self.weight_range > 0.0) {
            return Err(invalid("weight_range", self.weight_range, "> 0"));
        }
        Ok(())
    }

    /// Random source for weight initialization.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Epoch interval between progress log lines.
    pub(crate) fn log_interval(&self) -> usize {
        (self.epochs / 5).max(1)
    }
}

fn invalid(param: &str, value: impl ToString, constraint: &str) -> DenseMatError {
    DenseMatError::InvalidHyperparameter {
        param: param.to_string(),
        value: value.to_string(),
        constraint: constraint.to_string(),
    }
}

/// Outcome of a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Epochs actually run.
    pub epochs: usize,
    /// Total squared error over the dataset before the first update.
    pub initial_error: f64,
    /// Total squared error over the dataset after the last update.
    pub final_error: f64,
    /// Sum of per-step squared errors, one entry per epoch.
    pub history: Vec<f64>,
}

impl TrainingReport {
    /// True when training lowered the dataset error.
    #[must_use]
    pub fn improved(&self) -> bool {
        self.final_error < self.initial_error
    }
}

fn row_vector(values: [f64; 2]) -> Matrix<f64> {
    let mut m = Matrix::zeros(1, 2);
    m.set(0, 0, values[0]);
    m.set(0, 1, values[1]);
    m
}

/// The four XOR samples and their two-output targets.
///
/// Output 0 is XOR, output 1 is AND:
/// `[0,0]->[0,0]`, `[0,1]->[1,0]`, `[1,0]->[1,0]`, `[1,1]->[0,1]`.
/// A single layer can learn the AND output but not XOR.
#[must_use]
pub fn xor_dataset() -> (Vec<Matrix<f64>>, Vec<Matrix<f64>>) {
    const SAMPLES: [([f64; 2], [f64; 2]); 4] = [
        ([0.0, 0.0], [0.0, 0.0]),
        ([0.0, 1.0], [1.0, 0.0]),
        ([1.0, 0.0], [1.0, 0.0]),
        ([1.0, 1.0], [0.0, 1.0]),
    ];
    SAMPLES
        .iter()
        .map(|&(x, y)| (row_vector(x), row_vector(y)))
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let c = TrainerConfig::default();
        assert_eq!(c.learning_rate, 0.5);
        assert_eq!(c.epochs, 1000);
        assert_eq!(c.seed, None);
        assert_eq!(c.weight_range, 1.0);
        assert!(c.validate().is_ok());
        assert_eq!(c.log_interval(), 200);
    }

    #[test]
    fn test_log_interval_never_zero() {
        assert_eq!(TrainerConfig::default().with_epochs(3).log_interval(), 1);
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let cases = [
            (TrainerConfig::default().with_learning_rate(0.0), "learning_rate"),
            (TrainerConfig::default().with_learning_rate(f64::NAN), "learning_rate"),
            (TrainerConfig::default().with_epochs(0), "epochs"),
            (TrainerConfig::default().with_weight_range(-1.0), "weight_range"),
        ];
        for (config, field) in cases {
            match config.validate() {
                Err(DenseMatError::InvalidHyperparameter { param, .. }) => assert_eq!(param, field),
                other => panic!("expected InvalidHyperparameter for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = TrainerConfig::default().with_seed(99);
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_config_json() {
        let config = TrainerConfig::default().with_seed(1).with_epochs(10);
        let json = serde_json::to_string(&config).expect("serializable");
        let back: TrainerConfig = serde_json::from_str(&json).expect("valid json");
        assert_eq!(back, config);
    }

    #[test]
    fn test_xor_dataset() {
        let (inputs, targets) = xor_dataset();
        assert_eq!(inputs.len(), 4);
        assert_eq!(targets.len(), 4);
        assert_eq!(inputs[2].as_slice(), &[1.0, 0.0]);
        assert_eq!(targets[3].as_slice(), &[0.0, 1.0]);
        for (x, y) in inputs.iter().zip(&targets) {
            let xor = f64::from(u8::from(x.get(0, 0) != x.get(0, 1)));
            assert_eq!(y.get(0, 0), xor);
            assert_eq!(y.get(0, 1), x.get(0, 0) * x.get(0, 1));
        }
    }
}
