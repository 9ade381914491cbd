//! Determinant by Laplace (cofactor) expansion.

use crate::error::{DenseMatError, Result};
use crate::primitives::{Element, Matrix};
use tracing::trace;

/// Computes the determinant of a square matrix.
///
/// Expands along row 0: for each column `c`, the minor obtained by deleting
/// row 0 and column `c` is evaluated recursively and accumulated with sign
/// `+1` for even `c` and `-1` for odd `c`. All arithmetic is carried out in
/// `f64` whatever the element type.
///
/// A singular matrix has a valid determinant of `0.0`; only non-square
/// input is an error.
///
/// # Errors
///
/// Returns `NotSquare` if `rows != cols`.
///
/// # Examples
///
/// ```
/// use densemat::linalg::determinant;
/// use densemat::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![4, 3, 2, 1]).expect("valid");
/// assert_eq!(determinant(&m).expect("square"), -2.0);
/// ```
pub fn determinant<T: Element>(m: &Matrix<T>) -> Result<f64> {
    let (rows, cols) = m.shape();
    if rows != cols {
        return Err(DenseMatError::NotSquare { rows, cols });
    }
    trace!(n = rows, domain = T::DOMAIN, "cofactor expansion");
    cofactor_expand(&m.to_float())
}

fn cofactor_expand(m: &Matrix<f64>) -> Result<f64> {
    match m.n_rows() {
        1 => Ok(m.get(0, 0)),
        2 => Ok(m.get(0, 0) * m.get(1, 1) - m.get(0, 1) * m.get(1, 0)),
        n => {
            let mut det = 0.0;
            for col in 0..n {
                let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
                det += sign * m.get(0, col) * cofactor_expand(&m.minor(0, col)?)?;
            }
            Ok(det)
        }
    }
}

impl<T: Element> Matrix<T> {
    /// Determinant of this matrix. See [`determinant`].
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` if `rows != cols`.
    pub fn determinant(&self) -> Result<f64> {
        determinant(self)
    }
}

#[cfg(test)]
#[path = "determinant_tests.rs"]
mod tests;
