//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use densemat::prelude::*;
//! ```

pub use crate::data::{CsvReader, StockData, StockRecord};
pub use crate::error::{DenseMatError, Result};
pub use crate::linalg::{determinant, invert, IDENTITY_TOLERANCE, SINGULAR_EPSILON};
pub use crate::nn::{SingleLayerNetwork, TrainerConfig};
pub use crate::preprocessing::{MinMaxScaler, StandardScaler};
pub use crate::primitives::{Element, FloatMatrix, IntMatrix, Matrix};
pub use crate::traits::Transformer;
