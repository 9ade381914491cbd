//! Output formatting utilities

use colored::Colorize;
use densemat::primitives::{Element, Matrix};
use serde_json::{json, Value};

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Print a success message
pub(crate) fn success(msg: &str) {
    println!("{} {}", "[PASS]".green().bold(), msg);
}

/// Print a warning message
pub(crate) fn warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// Print a failure message
pub(crate) fn fail(msg: &str) {
    println!("{} {}", "[FAIL]".red().bold(), msg);
}

/// Print an error message
pub(crate) fn error(msg: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), msg);
}

/// Print a matrix using its aligned `Display` form
pub(crate) fn matrix<T: Element>(m: &Matrix<T>) {
    print!("{m}");
}

/// Matrix as `{"rows", "cols", "data": [[..], ..]}`
pub(crate) fn matrix_json<T: Element + serde::Serialize>(m: &Matrix<T>) -> Value {
    let (rows, cols) = m.shape();
    let data: Vec<&[T]> = (0..rows).map(|i| m.row(i)).collect();
    json!({ "rows": rows, "cols": cols, "data": data })
}

/// Pretty-print a JSON value to stdout
pub(crate) fn print_json(value: &Value) -> crate::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
