//! Core traits shared across modules.

use crate::error::Result;
use crate::primitives::Matrix;

/// Trait for data transformers (scalers and similar).
///
/// A transformer learns per-column parameters in [`fit`](Transformer::fit)
/// and applies them in [`transform`](Transformer::transform).
///
/// ```
/// use densemat::prelude::*;
///
/// let x = Matrix::from_vec(3, 1, vec![10.0, 20.0, 30.0]).expect("valid");
/// let mut scaler = MinMaxScaler::new();
/// let scaled = scaler.fit_transform(&x).expect("non-empty");
/// assert_eq!(scaled.as_slice(), &[0.0, 0.5, 1.0]);
/// ```
pub trait Transformer {
    /// Fits the transformer to data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit(&mut self, x: &Matrix<f64>) -> Result<()>;

    /// Transforms data using fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if transformer is not fitted.
    fn transform(&self, x: &Matrix<f64>) -> Result<Matrix<f64>>;

    /// Fits and transforms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit_transform(&mut self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        self.fit(x)?;
        self.transform(x)
    }
}
