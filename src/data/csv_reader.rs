//! Validating CSV reader for daily stock data.

use super::{SkippedLine, StockData, StockRecord};
use crate::error::{DenseMatError, Result};
use chrono::NaiveDate;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Default upper bound for a plausible share price.
pub const DEFAULT_MAX_PRICE: f64 = 1_000_000.0;

/// Parses a `YYYY-MM-DD` calendar date.
///
/// Rejects other layouts as well as impossible dates such as `2023-02-29`.
#[must_use]
pub fn validate_date(field: &str) -> Option<NaiveDate> {
    let field = field.trim();
    // Accept a trailing time component ("2024-01-02 00:00:00").
    let date_part = field.split([' ', 'T']).next().unwrap_or(field);
    if date_part.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    date: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    volume: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| DenseMatError::Csv {
                line: 1,
                message: format!(
                    "missing {name} column (found: {})",
                    headers.iter().collect::<Vec<_>>().join(",")
                ),
            })
        };

        Ok(Self {
            // Some exporters label the date column "Price" or leave it blank.
            date: find("date").unwrap_or(0),
            open: require("open")?,
            high: require("high")?,
            low: require("low")?,
            close: require("close")?,
            volume: require("volume")?,
        })
    }
}

/// Reader for `Date,Open,High,Low,Close[,Adj Close],Volume` files.
///
/// Columns are located by header name, case-insensitively, so extra columns
/// and reordering are tolerated. Every data line is validated; lines that
/// fail are skipped, logged, and reported in [`StockData::skipped`].
#[derive(Debug, Clone)]
pub struct CsvReader {
    max_price: f64,
    ticker: Option<String>,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvReader {
    /// Creates a reader with the default price ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_price: DEFAULT_MAX_PRICE,
            ticker: None,
        }
    }

    /// Sets the largest price accepted as valid.
    #[must_use]
    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = max_price;
        self
    }

    /// Tags loaded data with a ticker symbol.
    #[must_use]
    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Reads and validates a CSV file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be opened or read, and `Csv` if the
    /// header lacks a required column.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<StockData> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let mut data = self.read_from(file)?;
        if data.ticker.is_none() {
            data.ticker = ticker_from_path(path);
        }
        info!(
            path = %path.display(),
            records = data.records.len(),
            skipped = data.skipped.len(),
            "loaded stock CSV"
        );
        Ok(data)
    }

    /// Reads and validates CSV data from any reader.
    ///
    /// # Errors
    ///
    /// Same as [`CsvReader::read_path`].
    pub fn read_from<R: Read>(&self, reader: R) -> Result<StockData> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let columns = Columns::resolve(&headers)?;

        let mut data = StockData {
            ticker: self.ticker.clone(),
            ..StockData::default()
        };

        for (idx, result) in rdr.records().enumerate() {
            let (line, outcome) = match result {
                Ok(record) => {
                    let line = record
                        .position()
                        .and_then(|p| usize::try_from(p.line()).ok())
                        .unwrap_or(idx + 2);
                    (line, self.parse_record(&record, columns))
                }
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => (idx + 2, Err(e.to_string())),
            };

            match outcome {
                Ok(record) => data.records.push(record),
                Err(reason) => {
                    warn!(line, %reason, "skipping invalid CSV line");
                    data.skipped.push(SkippedLine { line, reason });
                }
            }
        }

        Ok(data)
    }

    fn parse_record(
        &self,
        record: &csv::StringRecord,
        columns: Columns,
    ) -> std::result::Result<StockRecord, String> {
        let field = |idx: usize, name: &str| {
            record
                .get(idx)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| format!("missing {name} field"))
        };

        let date_field = field(columns.date, "date")?;
        let date =
            validate_date(date_field).ok_or_else(|| format!("malformed date {date_field:?}"))?;

        let open = self.parse_price(field(columns.open, "open")?, "open")?;
        let high = self.parse_price(field(columns.high, "high")?, "high")?;
        let low = self.parse_price(field(columns.low, "low")?, "low")?;
        let close = self.parse_price(field(columns.close, "close")?, "close")?;
        let volume = parse_volume(field(columns.volume, "volume")?)?;

        Ok(StockRecord {
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    fn parse_price(&self, field: &str, name: &str) -> std::result::Result<f64, String> {
        let value: f64 = field
            .parse()
            .map_err(|_| format!("non-numeric {name} price {field:?}"))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(format!("{name} price {value} must be positive"));
        }
        if value > self.max_price {
            return Err(format!(
                "{name} price {value} exceeds maximum {}",
                self.max_price
            ));
        }
        Ok(value)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_volume(field: &str) -> std::result::Result<u64, String> {
    if let Ok(v) = field.parse::<u64>() {
        return Ok(v);
    }
    match field.parse::<f64>() {
        Ok(v) if v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 => Ok(v as u64),
        Ok(v) if v < 0.0 => Err(format!("volume {v} must be non-negative")),
        _ => Err(format!("volume {field:?} is not a whole number")),
    }
}

fn ticker_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let ticker = stem.strip_suffix("_data").unwrap_or(stem);
    (!ticker.is_empty()).then(|| ticker.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Date,Open,High,Low,Close,Adj Close,Volume";

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-02-29").is_some());
        assert!(validate_date("2023-02-29").is_none());
        assert!(validate_date("2024-13-01").is_none());
        assert!(validate_date("2024-1-5").is_none());
        assert!(validate_date("01/05/2024").is_none());
        assert!(validate_date("2024-01-05 00:00:00").is_some());
    }

    #[test]
    fn test_parse_volume() {
        assert_eq!(parse_volume("82488700"), Ok(82_488_700));
        assert_eq!(parse_volume("100.0"), Ok(100));
        assert!(parse_volume("-5").is_err());
        assert!(parse_volume("12.5").is_err());
        assert!(parse_volume("lots").is_err());
    }

    #[test]
    fn test_reads_valid_and_skips_invalid() {
        let csv = format!(
            "{HEADER}\n\
             2024-01-02,187.15,188.44,183.89,185.64,185.1,82488700\n\
             2024-01-03,184.22,185.88,183.43,184.25,183.7\n\
             2024-01-04,-182.15,183.09,180.88,181.91,181.4,71983600\n\
             2024-02-30,181.99,182.76,180.17,181.18,180.6,62303300\n\
             2024-01-08,abc,185.60,181.50,185.56,185.0,59144500\n\
             2024-01-09,183.92,185.15,182.73,185.14,184.6,42841800\n"
        );
        let data = CsvReader::new()
            .read_from(csv.as_bytes())
            .expect("header is valid");

        assert_eq!(data.len(), 2);
        assert_eq!(data.records[0].volume, 82_488_700);
        assert!((data.records[1].close - 185.14).abs() < 1e-12);

        let lines: Vec<usize> = data.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![3, 4, 5, 6]);
        assert!(data.skipped[0].reason.contains("volume"));
        assert!(data.skipped[1].reason.contains("positive"));
        assert!(data.skipped[2].reason.contains("date"));
        assert!(data.skipped[3].reason.contains("non-numeric"));
    }

    #[test]
    fn test_column_order_is_by_header_name() {
        let csv = "volume,close,low,high,open,date\n1000,4,1,5,2,2024-05-01\n";
        let data = CsvReader::new().read_from(csv.as_bytes()).expect("valid");
        let r = &data.records[0];
        assert_eq!((r.open, r.high, r.low, r.close, r.volume), (2.0, 5.0, 1.0, 4.0, 1000));
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Date,Open,High,Low,Volume\n2024-01-02,1,2,0.5,10\n";
        let err = CsvReader::new().read_from(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DenseMatError::Csv { line: 1, .. }));
        assert!(err.to_string().contains("close"));
    }

    #[test]
    fn test_max_price_is_configurable() {
        let csv = format!("{HEADER}\n2024-01-02,50,60,40,55,55,100\n");
        let strict = CsvReader::new().with_max_price(58.0);
        let data = strict.read_from(csv.as_bytes()).expect("valid header");
        assert!(data.is_empty());
        assert!(data.skipped[0].reason.contains("exceeds"));
    }

    #[test]
    fn test_multi_row_header_rows_are_skipped() {
        // Layout written by newer yfinance versions.
        let csv = "Price,Close,High,Low,Open,Volume\n\
                   Ticker,MSFT,MSFT,MSFT,MSFT,MSFT\n\
                   Date,,,,,\n\
                   2024-01-02,370.87,375.90,366.77,373.86,25258600\n";
        let data = CsvReader::new().read_from(csv.as_bytes()).expect("valid");
        assert_eq!(data.len(), 1);
        assert_eq!(data.skipped.len(), 2);
        assert!((data.records[0].close - 370.87).abs() < 1e-12);
    }

    #[test]
    fn test_read_path_sets_ticker_from_file_name() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("AAPL_data.csv");
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(file, "{HEADER}").expect("write header");
        writeln!(file, "2024-01-02,187.15,188.44,183.89,185.64,185.1,82488700").expect("write row");

        let data = CsvReader::new().read_path(&path).expect("readable");
        assert_eq!(data.ticker.as_deref(), Some("AAPL"));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_explicit_ticker_wins() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "{HEADER}").expect("write header");
        let data = CsvReader::new()
            .with_ticker("NVDA")
            .read_path(file.path())
            .expect("readable");
        assert_eq!(data.ticker.as_deref(), Some("NVDA"));
        assert!(data.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CsvReader::new()
            .read_path("/definitely/not/here.csv")
            .unwrap_err();
        assert!(matches!(err, DenseMatError::Io(_)));
    }
}
