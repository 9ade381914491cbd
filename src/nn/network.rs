//! Single-layer sigmoid network trained with the delta rule.

use super::activation::{sigmoid_derivative, sigmoid_matrix};
use super::trainer::{TrainerConfig, TrainingReport};
use crate::error::{DenseMatError, Result};
use crate::primitives::Matrix;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default half-width of the uniform weight initialization.
pub const DEFAULT_WEIGHT_RANGE: f64 = 1.0;

/// Fully connected layer followed by a sigmoid: `y = σ(xW + b)`.
///
/// # Example
///
/// ```
/// use densemat::nn::{xor_dataset, SingleLayerNetwork, TrainerConfig};
///
/// let (inputs, targets) = xor_dataset();
/// let config = TrainerConfig::default().with_epochs(300).with_seed(42);
/// let mut net = SingleLayerNetwork::from_config(2, 2, &config).expect("valid sizes");
/// let report = net.fit(&inputs, &targets, &config).expect("valid data");
/// assert!(report.improved());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleLayerNetwork {
    /// Shape `(input_size, output_size)`.
    weights: Matrix<f64>,
    /// Shape `(1, output_size)`.
    biases: Matrix<f64>,
}

impl SingleLayerNetwork {
    /// Creates a network with weights uniform in
    /// `[-DEFAULT_WEIGHT_RANGE, DEFAULT_WEIGHT_RANGE]` and zero biases.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either size is zero.
    pub fn new<R: Rng>(input_size: usize, output_size: usize, rng: &mut R) -> Result<Self> {
        Self::with_weight_range(input_size, output_size, DEFAULT_WEIGHT_RANGE, rng)
    }

    /// Creates a network with weights uniform in `[-range, range]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either size is zero and
    /// `InvalidHyperparameter` if `range` is not positive.
    pub fn with_weight_range<R: Rng>(
        input_size: usize,
        output_size: usize,
        range: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if !(range.is_finite() && range > 0.0) {
            return Err(DenseMatError::InvalidHyperparameter {
                param: "weight_range".to_string(),
                value: range.to_string(),
                constraint: "> 0".to_string(),
            });
        }
        let mut weights = Matrix::try_new(input_size, output_size)?;
        for i in 0..input_size {
            for j in 0..output_size {
                weights.set(i, j, rng.gen_range(-range..=range));
            }
        }
        let biases = Matrix::try_new(1, output_size)?;
        Ok(Self { weights, biases })
    }

    /// Creates a network using the config's seed and weight range.
    ///
    /// # Errors
    ///
    /// Same as [`SingleLayerNetwork::with_weight_range`].
    pub fn from_config(
        input_size: usize,
        output_size: usize,
        config: &TrainerConfig,
    ) -> Result<Self> {
        Self::with_weight_range(input_size, output_size, config.weight_range, &mut config.rng())
    }

    /// Builds a network from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless `biases` is `(1, weights.cols)`.
    pub fn from_parts(weights: Matrix<f64>, biases: Matrix<f64>) -> Result<Self> {
        let expected = (1, weights.n_cols());
        if biases.shape() != expected {
            return Err(DenseMatError::shape_mismatch("from_parts", expected, biases.shape()));
        }
        Ok(Self { weights, biases })
    }

    /// Number of input features.
    #[must_use]
    pub fn input_size(&self) -> usize {
        self.weights.n_rows()
    }

    /// Number of output units.
    #[must_use]
    pub fn output_size(&self) -> usize {
        self.weights.n_cols()
    }

    /// Weight matrix, shape `(input_size, output_size)`.
    #[must_use]
    pub fn weights(&self) -> &Matrix<f64> {
        &self.weights
    }

    /// Bias row, shape `(1, output_size)`.
    #[must_use]
    pub fn biases(&self) -> &Matrix<f64> {
        &self.biases
    }

    /// Forward pass for a batch of row vectors, shape `(m, input_size)`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `input.cols != input_size`.
    pub fn forward(&self, input: &Matrix<f64>) -> Result<Matrix<f64>> {
        let mut z = input.matmul(&self.weights)?;
        let bias = self.biases.row(0);
        for i in 0..z.n_rows() {
            for (v, b) in z.row_mut(i).iter_mut().zip(bias) {
                *v += b;
            }
        }
        Ok(sigmoid_matrix(&z))
    }

    /// One delta-rule update on a single sample.
    ///
    /// `grad = (target - out) ⊙ out(1 - out)`, then `W += lr · xᵀ·grad` and
    /// `b += lr · grad`. Returns the squared error of the sample measured
    /// before the update.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless `input` is `(1, input_size)` and
    /// `target` is `(1, output_size)`.
    pub fn train_step(
        &mut self,
        input: &Matrix<f64>,
        target: &Matrix<f64>,
        lr: f64,
    ) -> Result<f64> {
        let expected_in = (1, self.input_size());
        if input.shape() != expected_in {
            return Err(DenseMatError::shape_mismatch("train_step", expected_in, input.shape()));
        }
        let expected_out = (1, self.output_size());
        if target.shape() != expected_out {
            return Err(DenseMatError::shape_mismatch("train_step", expected_out, target.shape()));
        }

        let output = self.forward(input)?;
        let error = target.sub(&output)?;
        let grad = error.hadamard(&output.map(sigmoid_derivative))?;

        let weight_delta = input.transpose().matmul(&grad)?.scalar_multiply(lr);
        self.weights = self.weights.add(&weight_delta)?;
        self.biases = self.biases.add(&grad.scalar_multiply(lr))?;

        Ok(squared_sum(&error))
    }

    /// Total squared error over a dataset without updating.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` for mismatched sample or target shapes.
    pub fn total_error(&self, samples: &[Matrix<f64>], targets: &[Matrix<f64>]) -> Result<f64> {
        check_dataset(samples, targets)?;
        let mut total = 0.0;
        for (x, y) in samples.iter().zip(targets) {
            let out = self.forward(x)?;
            total += squared_sum(&y.sub(&out)?);
        }
        Ok(total)
    }

    /// Runs `config.epochs` passes of per-sample updates over the dataset.
    ///
    /// Progress is logged every `epochs / 5` epochs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` for a bad config, `EmptyInput` for an
    /// empty dataset, and `DimensionMismatch` for shape errors.
    pub fn fit(
        &mut self,
        samples: &[Matrix<f64>],
        targets: &[Matrix<f64>],
        config: &TrainerConfig,
    ) -> Result<TrainingReport> {
        config.validate()?;
        let initial_error = self.total_error(samples, targets)?;
        debug!(
            samples = samples.len(),
            epochs = config.epochs,
            learning_rate = config.learning_rate,
            initial_error,
            "starting training"
        );

        let mut history = Vec::with_capacity(config.epochs);
        let interval = config.log_interval();
        for epoch in 0..config.epochs {
            let mut epoch_error = 0.0;
            for (x, y) in samples.iter().zip(targets) {
                epoch_error += self.train_step(x, y, config.learning_rate)?;
            }
            history.push(epoch_error);
            if epoch % interval == 0 {
                info!(epoch, error = epoch_error, "epoch complete");
            }
        }

        let final_error = self.total_error(samples, targets)?;
        info!(initial_error, final_error, "training finished");
        Ok(TrainingReport {
            epochs: config.epochs,
            initial_error,
            final_error,
            history,
        })
    }
}

fn squared_sum(m: &Matrix<f64>) -> f64 {
    m.as_slice().iter().map(|e| e * e).sum()
}

fn check_dataset(samples: &[Matrix<f64>], targets: &[Matrix<f64>]) -> Result<()> {
    if samples.is_empty() {
        return Err(DenseMatError::empty_input("training samples"));
    }
    if samples.len() != targets.len() {
        return Err(DenseMatError::DimensionMismatch {
            operation: "fit",
            expected: format!("{} targets", samples.len()),
            actual: format!("{} targets", targets.len()),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "network_tests.rs"]
mod tests;
