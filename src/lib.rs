//! densemat: dense matrices over integer and floating-point domains.
//!
//! The core is a row-major [`Matrix<T>`](primitives::Matrix) with checked
//! arithmetic, a cofactor-expansion determinant and Gauss-Jordan inversion.
//! On top of it sit a validating stock CSV reader, per-column feature
//! normalization, and a single-layer sigmoid network.
//!
//! # Quick Start
//!
//! ```
//! use densemat::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).expect("valid");
//! assert!((a.determinant().expect("square") - 10.0).abs() < 1e-12);
//!
//! let inv = a.invert().expect("det = 10");
//! let product = a.matmul(&inv).expect("compatible shapes");
//! assert!(product.is_identity(IDENTITY_TOLERANCE));
//!
//! let ints = Matrix::from_vec(2, 3, vec![1_i64, 2, 3, 4, 5, 6]).expect("valid");
//! let prod = ints.matmul(&ints.transpose()).expect("compatible shapes");
//! assert_eq!(prod.as_slice(), &[14, 32, 32, 77]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: `Matrix<T>`, element domains and domain conversion
//! - [`linalg`]: Determinant and inversion
//! - [`data`]: Stock CSV ingestion with per-line validation
//! - [`preprocessing`]: Min-max and z-score scalers, outlier detection
//! - [`nn`]: Single-layer sigmoid network and delta-rule trainer
//! - [`error`]: Error type shared by every module

pub mod data;
pub mod error;
pub mod linalg;
pub mod nn;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod traits;

pub use error::{DenseMatError, Result};
pub use primitives::Matrix;
pub use traits::Transformer;
