//! `densemat normalize`: load a stock CSV and normalize its features.

use crate::error::{CliError, Result};
use crate::output;
use clap::ValueEnum;
use densemat::data::{CsvReader, FEATURE_NAMES};
use densemat::preprocessing::{
    detect_outliers, FeatureStats, MinMaxScaler, StandardScaler, OUTLIER_THRESHOLD,
};
use densemat::Transformer;
use serde_json::json;
use std::path::Path;
use tracing::info;

/// Normalization method selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Method {
    /// Scale each feature to [0, 1]
    Minmax,
    /// Zero mean, unit variance per feature
    Zscore,
}

pub(crate) fn run(
    file: &Path,
    method: Method,
    max_price: Option<f64>,
    save_params: Option<&Path>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    if !file.exists() {
        return Err(CliError::FileNotFound(file.to_path_buf()));
    }

    let mut reader = CsvReader::new();
    if let Some(p) = max_price {
        reader = reader.with_max_price(p);
    }
    let data = reader.read_path(file)?;
    let features = data.feature_matrix()?;

    let (normalized, params_json) = match method {
        Method::Minmax => {
            let mut scaler = MinMaxScaler::new();
            (scaler.fit_transform(&features)?, scaler.to_json()?)
        }
        Method::Zscore => {
            let mut scaler = StandardScaler::new();
            (scaler.fit_transform(&features)?, scaler.to_json()?)
        }
    };
    if let Some(path) = save_params {
        std::fs::write(path, &params_json)?;
        info!(path = %path.display(), "saved normalization parameters");
    }

    let mut summaries = Vec::with_capacity(FEATURE_NAMES.len());
    for (j, name) in FEATURE_NAMES.iter().enumerate() {
        let raw = FeatureStats::compute(&features.column(j))?;
        let scaled = FeatureStats::compute(&normalized.column(j))?;
        let outliers = detect_outliers(&features.column(j), OUTLIER_THRESHOLD);
        summaries.push((name, raw, scaled, outliers));
    }

    if json {
        let skipped: Vec<_> = data
            .skipped
            .iter()
            .map(|s| json!({ "line": s.line, "reason": s.reason }))
            .collect();
        let features: Vec<_> = summaries
            .iter()
            .map(|(name, raw, scaled, outliers)| {
                json!({ "name": name, "raw": raw, "normalized": scaled, "outliers": outliers })
            })
            .collect();
        return output::print_json(&json!({
            "ticker": data.ticker.as_deref(),
            "records": data.len(),
            "method": format!("{method:?}").to_lowercase(),
            "skipped": skipped,
            "features": features,
        }));
    }

    output::section(&format!(
        "{} ({} records)",
        data.ticker.as_deref().unwrap_or("stock data"),
        data.len()
    ));
    if let Some((first, last)) = data.date_range() {
        output::kv("Dates", format!("{first} .. {last}"));
    }
    output::kv("Method", format!("{method:?}").to_lowercase());
    if !data.skipped.is_empty() {
        output::warning(&format!("skipped {} invalid line(s)", data.skipped.len()));
        if !quiet {
            for s in &data.skipped {
                println!("    line {}: {}", s.line, s.reason);
            }
        }
    }

    output::section("Features");
    for (name, raw, scaled, outliers) in &summaries {
        println!(
            "  {name:<7} raw [{:>12.4}, {:>12.4}] mean {:>12.4}  ->  [{:>8.4}, {:>8.4}] mean {:>8.4} std {:>6.4}",
            raw.min, raw.max, raw.mean, scaled.min, scaled.max, scaled.mean, scaled.std_dev
        );
        if !outliers.is_empty() {
            output::warning(&format!(
                "{name}: {} outlier(s) beyond |z| > {OUTLIER_THRESHOLD} at rows {outliers:?}",
                outliers.len()
            ));
        }
    }
    Ok(())
}
