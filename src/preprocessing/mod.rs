//! Feature normalization for matrix columns.
//!
//! Each column is normalized independently with its own
//! [`NormalizationParams`], so a fitted scaler can be persisted as JSON and
//! used later to map model outputs back to prices and volumes.
//!
//! # Example
//!
//! ```
//! use densemat::prelude::*;
//! use densemat::preprocessing::StandardScaler;
//!
//! let data = Matrix::from_vec(4, 2, vec![
//!     1.0, 100.0,
//!     2.0, 200.0,
//!     3.0, 300.0,
//!     4.0, 400.0,
//! ]).expect("valid matrix dimensions");
//!
//! let mut scaler = StandardScaler::new();
//! let scaled = scaler.fit_transform(&data).expect("fit_transform should succeed");
//!
//! // Both columns become the same z-scores.
//! assert!((scaled.get(0, 0) - scaled.get(0, 1)).abs() < 1e-12);
//! ```

mod stats;

pub use stats::{detect_outliers, FeatureStats, OUTLIER_THRESHOLD};

use crate::error::{DenseMatError, Result};
use crate::primitives::Matrix;
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spread below which a column is treated as constant.
pub const NORMALIZATION_EPSILON: f64 = 1e-8;

/// Normalization method applied to one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationKind {
    /// `(x - min) / (max - min)`, output in `[0, 1]`.
    MinMax,
    /// `(x - mean) / std`.
    ZScore,
}

impl fmt::Display for NormalizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizationKind::MinMax => write!(f, "minmax"),
            NormalizationKind::ZScore => write!(f, "zscore"),
        }
    }
}

/// Fitted parameters for one feature column.
///
/// Both the min-max and the z-score statistics are recorded regardless of
/// `kind`; only the ones `kind` selects take part in the mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationParams {
    /// Mapping applied by `normalize`.
    pub kind: NormalizationKind,
    /// Column minimum.
    pub min: f64,
    /// Column maximum.
    pub max: f64,
    /// Column mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Column had no spread; every value normalizes to 0.0.
    pub constant: bool,
}

impl NormalizationParams {
    /// Fits parameters of the given kind to a column.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for an empty column.
    pub fn fit(kind: NormalizationKind, values: &[f64]) -> Result<Self> {
        let stats = FeatureStats::compute(values)?;
        let constant = match kind {
            NormalizationKind::MinMax => stats.is_constant(),
            NormalizationKind::ZScore => stats.std_dev < NORMALIZATION_EPSILON,
        };
        Ok(Self {
            kind,
            min: stats.min,
            max: stats.max,
            mean: stats.mean,
            std: stats.std_dev,
            constant,
        })
    }

    /// Maps a raw value into normalized space.
    #[must_use]
    pub fn normalize(&self, x: f64) -> f64 {
        if self.constant {
            return 0.0;
        }
        match self.kind {
            NormalizationKind::MinMax => (x - self.min) / (self.max - self.min),
            NormalizationKind::ZScore => (x - self.mean) / self.std,
        }
    }

    /// Maps a normalized value back to the original scale.
    ///
    /// A constant column maps back to its single value.
    #[must_use]
    pub fn denormalize(&self, y: f64) -> f64 {
        match (self.kind, self.constant) {
            (NormalizationKind::MinMax, true) => self.min,
            (NormalizationKind::ZScore, true) => self.mean,
            (NormalizationKind::MinMax, false) => y * (self.max - self.min) + self.min,
            (NormalizationKind::ZScore, false) => y * self.std + self.mean,
        }
    }
}

/// Fitted state shared by both scalers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ColumnParams {
    params: Option<Vec<NormalizationParams>>,
}

impl ColumnParams {
    fn fit(&mut self, kind: NormalizationKind, x: &Matrix<f64>) -> Result<()> {
        let params = (0..x.n_cols())
            .map(|j| NormalizationParams::fit(kind, &x.column(j)))
            .collect::<Result<Vec<_>>>()?;
        self.params = Some(params);
        Ok(())
    }

    fn apply(
        &self,
        transformer: &'static str,
        x: &Matrix<f64>,
        f: impl Fn(&NormalizationParams, f64) -> f64,
    ) -> Result<Matrix<f64>> {
        let params = self
            .params
            .as_ref()
            .ok_or(DenseMatError::NotFitted { transformer })?;

        let (n_samples, n_features) = x.shape();
        if n_features != params.len() {
            return Err(DenseMatError::shape_mismatch(
                "transform",
                (n_samples, params.len()),
                (n_samples, n_features),
            ));
        }

        let data = x
            .as_slice()
            .chunks_exact(n_features)
            .flat_map(|row| row.iter().zip(params).map(|(&v, p)| f(p, v)))
            .collect();
        Matrix::from_vec(n_samples, n_features, data)
    }

    fn check_kind(&self, transformer: &'static str, kind: NormalizationKind) -> Result<()> {
        let mismatch = self
            .params
            .iter()
            .flatten()
            .find(|p| p.kind != kind);
        match mismatch {
            Some(p) => Err(DenseMatError::Serialization(format!(
                "{transformer} expects {kind} parameters, found {}",
                p.kind
            ))),
            None => Ok(()),
        }
    }
}

/// Scales each feature to `[0, 1]`.
///
/// The transformation is: `X_scaled = (X - X_min) / (X_max - X_min)`.
/// Constant columns scale to 0.0.
///
/// # Example
///
/// ```
/// use densemat::prelude::*;
/// use densemat::preprocessing::MinMaxScaler;
///
/// let data = Matrix::from_vec(3, 2, vec![
///     0.0, 0.0,
///     5.0, 10.0,
///     10.0, 20.0,
/// ]).expect("valid matrix dimensions");
///
/// let mut scaler = MinMaxScaler::new();
/// let scaled = scaler.fit_transform(&data).expect("fit_transform should succeed");
///
/// assert!((scaled.get(0, 0) - 0.0).abs() < 1e-12);
/// assert!((scaled.get(2, 0) - 1.0).abs() < 1e-12);
/// assert!((scaled.get(1, 0) - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    #[serde(flatten)]
    fitted: ColumnParams,
}

impl MinMaxScaler {
    /// Creates an unfitted scaler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the scaler has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted.params.is_some()
    }

    /// Per-column parameters, once fitted.
    #[must_use]
    pub fn params(&self) -> Option<&[NormalizationParams]> {
        self.fitted.params.as_deref()
    }

    /// Transforms data back to original scale.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` or `DimensionMismatch`.
    pub fn inverse_transform(&self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        self.fitted
            .apply("MinMaxScaler", x, NormalizationParams::denormalize)
    }

    /// Serializes the fitted state as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restores a scaler saved with [`MinMaxScaler::to_json`].
    ///
    /// # Errors
    ///
    /// Returns `Serialization` for malformed JSON or z-score parameters.
    pub fn from_json(json: &str) -> Result<Self> {
        let scaler: Self = serde_json::from_str(json)?;
        scaler
            .fitted
            .check_kind("MinMaxScaler", NormalizationKind::MinMax)?;
        Ok(scaler)
    }
}

impl Transformer for MinMaxScaler {
    /// Computes the min and max of each feature.
    fn fit(&mut self, x: &Matrix<f64>) -> Result<()> {
        self.fitted.fit(NormalizationKind::MinMax, x)
    }

    fn transform(&self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        self.fitted
            .apply("MinMaxScaler", x, NormalizationParams::normalize)
    }
}

/// Standardizes features by removing the mean and scaling to unit variance.
///
/// The standard score of a sample x is: `z = (x - mean) / std`, with the
/// population standard deviation. Columns whose std is below
/// [`NORMALIZATION_EPSILON`] map to 0.0.
///
/// # Example
///
/// ```
/// use densemat::prelude::*;
/// use densemat::preprocessing::StandardScaler;
///
/// let data = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("valid");
/// let mut scaler = StandardScaler::new();
/// let scaled = scaler.fit_transform(&data).expect("non-empty");
/// let mean: f64 = scaled.as_slice().iter().sum::<f64>() / 3.0;
/// assert!(mean.abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    #[serde(flatten)]
    fitted: ColumnParams,
}

impl StandardScaler {
    /// Creates an unfitted scaler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the scaler has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted.params.is_some()
    }

    /// Per-column parameters, once fitted.
    #[must_use]
    pub fn params(&self) -> Option<&[NormalizationParams]> {
        self.fitted.params.as_deref()
    }

    /// Mean of each feature, once fitted.
    #[must_use]
    pub fn mean(&self) -> Option<Vec<f64>> {
        self.params().map(|p| p.iter().map(|c| c.mean).collect())
    }

    /// Population standard deviation of each feature, once fitted.
    #[must_use]
    pub fn std(&self) -> Option<Vec<f64>> {
        self.params().map(|p| p.iter().map(|c| c.std).collect())
    }

    /// Transforms data back to original scale.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` or `DimensionMismatch`.
    pub fn inverse_transform(&self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        self.fitted
            .apply("StandardScaler", x, NormalizationParams::denormalize)
    }

    /// Serializes the fitted state as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restores a scaler saved with [`StandardScaler::to_json`].
    ///
    /// # Errors
    ///
    /// Returns `Serialization` for malformed JSON or min-max parameters.
    pub fn from_json(json: &str) -> Result<Self> {
        let scaler: Self = serde_json::from_str(json)?;
        scaler
            .fitted
            .check_kind("StandardScaler", NormalizationKind::ZScore)?;
        Ok(scaler)
    }
}

impl Transformer for StandardScaler {
    /// Computes the mean and standard deviation of each feature.
    fn fit(&mut self, x: &Matrix<f64>) -> Result<()> {
        self.fitted.fit(NormalizationKind::ZScore, x)
    }

    fn transform(&self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        self.fitted
            .apply("StandardScaler", x, NormalizationParams::normalize)
    }
}


#[cfg(test)]
mod tests_normalization_contract;
