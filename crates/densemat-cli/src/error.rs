//! Error types for densemat-cli

use densemat::DenseMatError;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Matrix literal could not be parsed
    #[error("Invalid matrix literal: {0}")]
    InvalidLiteral(String),

    /// Matrix is singular within tolerance
    #[error("{0}")]
    Singular(DenseMatError),

    /// Any other library failure
    #[error("{0}")]
    DenseMat(DenseMatError),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    fn code(&self) -> u8 {
        match self {
            Self::FileNotFound(_) => 3,
            Self::InvalidLiteral(_) => 4,
            Self::Singular(_) => 5,
            Self::DenseMat(_) | Self::Json(_) | Self::Io(_) => 1,
        }
    }
}

impl From<DenseMatError> for CliError {
    fn from(e: DenseMatError) -> Self {
        if e.is_singular() {
            Self::Singular(e)
        } else {
            Self::DenseMat(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::FileNotFound(PathBuf::from("x.csv")).code(), 3);
        assert_eq!(CliError::InvalidLiteral("1,,2".into()).code(), 4);
        let singular: CliError = DenseMatError::SingularMatrix { det: 0.0 }.into();
        assert_eq!(singular.code(), 5);
        let other: CliError = DenseMatError::NotSquare { rows: 2, cols: 3 }.into();
        assert_eq!(other.code(), 1);
    }

    #[test]
    fn test_messages_pass_through() {
        let e: CliError = DenseMatError::NotSquare { rows: 2, cols: 3 }.into();
        assert!(e.to_string().contains("2x3"));
        let e = CliError::FileNotFound(PathBuf::from("prices.csv"));
        assert_eq!(e.to_string(), "File not found: prices.csv");
    }
}
