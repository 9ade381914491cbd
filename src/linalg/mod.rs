//! Determinants and inverses of dense square matrices.
//!
//! - [`determinant`]: Laplace (cofactor) expansion along the first row,
//!   computed in `f64` for every element domain.
//! - [`invert`]: Gauss-Jordan elimination with partial pivoting over an
//!   [`AugmentedMatrix`], guarded by a determinant pre-check.
//!
//! # Resource use
//!
//! Cofactor expansion performs O(n!) work and recurses `n` levels deep. It
//! is meant for small matrices (a few hundred elements at most); callers
//! with larger inputs should budget for it themselves.
//!
//! # Example
//!
//! ```
//! use densemat::linalg;
//! use densemat::primitives::Matrix;
//!
//! let a = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).expect("valid");
//! let inv = linalg::invert(&a).expect("det = 10");
//! assert!(linalg::verify_inverse(&a, &inv, linalg::IDENTITY_TOLERANCE).expect("square"));
//! ```

mod determinant;
mod inverse;

pub use determinant::determinant;
pub use inverse::{invert, verify_inverse, AugmentedMatrix};

/// Magnitude below which a determinant or pivot is treated as zero.
pub const SINGULAR_EPSILON: f64 = 1e-10;

/// Per-element tolerance when checking `A * A^-1` against the identity.
pub const IDENTITY_TOLERANCE: f64 = 1e-6;
