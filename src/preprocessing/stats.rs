//! Per-feature summary statistics and z-score outlier detection.

use super::NORMALIZATION_EPSILON;
use crate::error::{DenseMatError, Result};
use serde::{Deserialize, Serialize};

/// Default z-score magnitude above which a value counts as an outlier.
pub const OUTLIER_THRESHOLD: f64 = 4.0;

/// Summary of one feature column.
///
/// `std_dev` is the population standard deviation (divides by `n`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureStats {
    /// Number of values.
    pub count: usize,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl FeatureStats {
    /// Computes statistics for a column of values.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for an empty slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use densemat::preprocessing::FeatureStats;
    ///
    /// let stats = FeatureStats::compute(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).expect("non-empty");
    /// assert_eq!(stats.mean, 5.0);
    /// assert_eq!(stats.std_dev, 2.0);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(DenseMatError::empty_input("feature statistics"));
        }
        let n = values.len() as f64;

        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Ok(Self {
            count: values.len(),
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }

    /// `max - min`.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// True when every value in the column is (numerically) the same.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.range().abs() < NORMALIZATION_EPSILON
    }
}

/// Indices of values whose z-score magnitude exceeds `threshold`.
///
/// A constant or empty column has no outliers.
///
/// # Examples
///
/// ```
/// use densemat::preprocessing::detect_outliers;
///
/// let mut prices = vec![100.0; 30];
/// prices[17] = 1_000.0;
/// assert_eq!(detect_outliers(&prices, 4.0), vec![17]);
/// ```
#[must_use]
pub fn detect_outliers(column: &[f64], threshold: f64) -> Vec<usize> {
    let Ok(stats) = FeatureStats::compute(column) else {
        return Vec::new();
    };
    if stats.std_dev < NORMALIZATION_EPSILON {
        return Vec::new();
    }
    column
        .iter()
        .enumerate()
        .filter(|(_, &v)| ((v - stats.mean) / stats.std_dev).abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}
