//! Daily stock price data and its conversion to feature matrices.
//!
//! [`CsvReader`] turns `Date,Open,High,Low,Close,Volume` files into
//! validated [`StockRecord`]s; [`StockData::feature_matrix`] hands them to
//! the matrix engine as a `(records, 5)` `Matrix<f64>`.
//!
//! # Example
//!
//! ```
//! use densemat::data::{CsvReader, NUM_STOCK_FEATURES};
//!
//! let csv = "Date,Open,High,Low,Close,Volume\n\
//!            2024-01-02,187.15,188.44,183.89,185.64,82488700\n\
//!            2024-01-03,184.22,185.88,183.43,184.25,58414500\n";
//! let data = CsvReader::new().read_from(csv.as_bytes()).expect("well-formed CSV");
//! let x = data.feature_matrix().expect("two records");
//! assert_eq!(x.shape(), (2, NUM_STOCK_FEATURES));
//! ```

mod csv_reader;

pub use csv_reader::{validate_date, CsvReader, DEFAULT_MAX_PRICE};

use crate::error::{DenseMatError, Result};
use crate::primitives::Matrix;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column index of the opening price in a feature matrix.
pub const FEATURE_OPEN: usize = 0;
/// Column index of the daily high.
pub const FEATURE_HIGH: usize = 1;
/// Column index of the daily low.
pub const FEATURE_LOW: usize = 2;
/// Column index of the closing price.
pub const FEATURE_CLOSE: usize = 3;
/// Column index of the traded volume.
pub const FEATURE_VOLUME: usize = 4;
/// Number of numeric features per record.
pub const NUM_STOCK_FEATURES: usize = 5;

/// Feature names in column order.
pub const FEATURE_NAMES: [&str; NUM_STOCK_FEATURES] = ["open", "high", "low", "close", "volume"];

/// One validated trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Trading date
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Daily high
    pub high: f64,
    /// Daily low
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Shares traded
    pub volume: u64,
}

impl StockRecord {
    /// Numeric features in `FEATURE_*` order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn features(&self) -> [f64; NUM_STOCK_FEATURES] {
        [
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume as f64,
        ]
    }
}

/// A data line that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number in the source file
    pub line: usize,
    /// Why the line was rejected
    pub reason: String,
}

/// Records loaded from one source, plus the lines that were rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockData {
    /// Ticker symbol, if known
    pub ticker: Option<String>,
    /// Valid records in file order
    pub records: Vec<StockRecord>,
    /// Rejected lines in file order
    pub skipped: Vec<SkippedLine>,
}

impl StockData {
    /// Number of valid records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no valid record was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest record dates.
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }

    /// One feature across all records, e.g. `feature(FEATURE_CLOSE)`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_STOCK_FEATURES`.
    #[must_use]
    pub fn feature(&self, index: usize) -> Vec<f64> {
        self.records.iter().map(|r| r.features()[index]).collect()
    }

    /// Assembles a `(records, NUM_STOCK_FEATURES)` matrix, one row per day.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when no valid record was loaded.
    pub fn feature_matrix(&self) -> Result<Matrix<f64>> {
        if self.records.is_empty() {
            return Err(DenseMatError::empty_input("no valid stock records"));
        }
        let data = self.records.iter().flat_map(StockRecord::features).collect();
        Matrix::from_vec(self.records.len(), NUM_STOCK_FEATURES, data)
    }
}
