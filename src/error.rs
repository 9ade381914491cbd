//! Error types for densemat operations.
//!
//! Every failure is returned as a value. Singular input is an expected,
//! handleable outcome and is kept distinct from caller logic errors such as
//! a shape mismatch or a non-square operand.

use std::fmt;

/// Main error type for densemat operations.
///
/// # Examples
///
/// ```
/// use densemat::error::DenseMatError;
///
/// let err = DenseMatError::NotSquare { rows: 2, cols: 3 };
/// assert!(err.to_string().contains("2x3"));
/// ```
#[derive(Debug)]
pub enum DenseMatError {
    /// Backing storage could not be obtained.
    AllocationError {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// Requested shape is invalid (zero-sized, ragged, or length mismatch).
    InvalidDimensions {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
        /// What was wrong with the request
        reason: String,
    },

    /// Operand shapes are incompatible for the operation.
    DimensionMismatch {
        /// Operation that was attempted
        operation: &'static str,
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// Determinant or inverse requested on a non-square matrix.
    NotSquare {
        /// Rows of the operand
        rows: usize,
        /// Columns of the operand
        cols: usize,
    },

    /// Matrix is singular within tolerance (non-invertible).
    SingularMatrix {
        /// Determinant or pivot magnitude that triggered the failure
        det: f64,
    },

    /// An accumulated value no longer fits the element type.
    Overflow {
        /// Operation that overflowed
        operation: &'static str,
    },

    /// Random fill bounds are inverted.
    InvalidRange {
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A transformer was used before `fit`.
    NotFitted {
        /// Transformer name
        transformer: &'static str,
    },

    /// Input contained no usable data.
    EmptyInput {
        /// Where the empty input was found
        context: String,
    },

    /// CSV structure could not be understood.
    Csv {
        /// 1-based line number (0 when unknown)
        line: usize,
        /// Error description
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),
}

impl fmt::Display for DenseMatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenseMatError::AllocationError { rows, cols } => {
                write!(f, "Failed to allocate storage for a {rows}x{cols} matrix")
            }
            DenseMatError::InvalidDimensions { rows, cols, reason } => {
                write!(f, "Invalid matrix dimensions {rows}x{cols}: {reason}")
            }
            DenseMatError::DimensionMismatch {
                operation,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Matrix dimension mismatch in {operation}: expected {expected}, got {actual}"
                )
            }
            DenseMatError::NotSquare { rows, cols } => {
                write!(
                    f,
                    "Operation requires a square matrix, got {rows}x{cols}"
                )
            }
            DenseMatError::SingularMatrix { det } => {
                write!(
                    f,
                    "Singular matrix detected: determinant = {det:e}, cannot invert"
                )
            }
            DenseMatError::Overflow { operation } => {
                write!(f, "Arithmetic overflow in {operation}")
            }
            DenseMatError::InvalidRange { min, max } => {
                write!(f, "Invalid range: min {min} is greater than max {max}")
            }
            DenseMatError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            DenseMatError::NotFitted { transformer } => {
                write!(f, "{transformer} not fitted. Call fit() first")
            }
            DenseMatError::EmptyInput { context } => write!(f, "empty input: {context}"),
            DenseMatError::Csv { line, message } => {
                write!(f, "CSV error at line {line}: {message}")
            }
            DenseMatError::Io(e) => write!(f, "I/O error: {e}"),
            DenseMatError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for DenseMatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DenseMatError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DenseMatError {
    fn from(err: std::io::Error) -> Self {
        DenseMatError::Io(err)
    }
}

impl From<serde_json::Error> for DenseMatError {
    fn from(err: serde_json::Error) -> Self {
        DenseMatError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for DenseMatError {
    fn from(err: csv::Error) -> Self {
        let line = err
            .position()
            .map_or(0, |pos| usize::try_from(pos.line()).unwrap_or(usize::MAX));
        match err.into_kind() {
            csv::ErrorKind::Io(io) => DenseMatError::Io(io),
            kind => DenseMatError::Csv {
                line,
                message: format!("{kind:?}"),
            },
        }
    }
}

impl DenseMatError {
    /// Create a dimension mismatch error from two shapes.
    #[must_use]
    pub fn shape_mismatch(
        operation: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch {
            operation,
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }

    /// Returns true for numerically singular input, the one failure that
    /// valid input can legitimately produce.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(self, DenseMatError::SingularMatrix { .. })
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, DenseMatError>;
