//! Matrix inversion by Gauss-Jordan elimination with partial pivoting.

use super::{determinant, SINGULAR_EPSILON};
use crate::error::{DenseMatError, Result};
use crate::primitives::{Element, Matrix};
use tracing::debug;

/// Working state of one inversion: `[A | I]` of shape `(n, 2n)`.
///
/// Row operations applied to the whole augmented matrix turn the left half
/// into the identity; the right half then holds `A^-1`.
#[derive(Debug, Clone)]
pub struct AugmentedMatrix {
    inner: Matrix<f64>,
    n: usize,
}

impl AugmentedMatrix {
    /// Builds `[m | I]` from a square matrix.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for non-square input and `AllocationError` if the
    /// working storage cannot be obtained.
    pub fn new<T: Element>(m: &Matrix<T>) -> Result<Self> {
        let (rows, cols) = m.shape();
        if rows != cols {
            return Err(DenseMatError::NotSquare { rows, cols });
        }
        let n = rows;
        let width = n
            .checked_mul(2)
            .ok_or(DenseMatError::AllocationError { rows: n, cols })?;
        let mut inner = Matrix::try_new(n, width)?;
        for i in 0..n {
            let row = inner.row_mut(i);
            for (dst, &src) in row[..n].iter_mut().zip(m.row(i)) {
                *dst = src.to_f64();
            }
            row[n + i] = 1.0;
        }
        Ok(Self { inner, n })
    }

    /// Order of the matrix being inverted.
    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    /// The full `(n, 2n)` working matrix.
    #[must_use]
    pub fn as_matrix(&self) -> &Matrix<f64> {
        &self.inner
    }

    /// Row in `col..n` with the largest absolute value in column `col`.
    ///
    /// Ties keep the earliest row.
    #[must_use]
    pub fn pivot_row(&self, col: usize) -> usize {
        let mut best = col;
        let mut best_abs = self.inner.get(col, col).abs();
        for i in col + 1..self.n {
            let v = self.inner.get(i, col).abs();
            if v > best_abs {
                best_abs = v;
                best = i;
            }
        }
        best
    }

    /// Swaps two rows across all `2n` columns.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.inner.swap_rows(a, b);
    }

    /// Divides row `row` by its entry in column `row`, making the diagonal 1.
    pub fn normalize_row(&mut self, row: usize) {
        let pivot = self.inner.get(row, row);
        for x in self.inner.row_mut(row) {
            *x /= pivot;
        }
    }

    /// Clears column `col` from every row except `col` itself.
    pub fn eliminate(&mut self, col: usize) {
        let pivot_row = self.inner.row(col).to_vec();
        for i in (0..self.n).filter(|&i| i != col) {
            let row = self.inner.row_mut(i);
            let factor = row[col];
            if factor == 0.0 {
                continue;
            }
            for (x, &p) in row.iter_mut().zip(&pivot_row) {
                *x -= factor * p;
            }
        }
    }

    /// Copies the right half out as a fresh `(n, n)` matrix.
    ///
    /// # Errors
    ///
    /// Propagates allocation failure.
    pub fn into_inverse(self) -> Result<Matrix<f64>> {
        let n = self.n;
        let mut data = Vec::new();
        data.try_reserve_exact(n * n)
            .map_err(|_| DenseMatError::AllocationError { rows: n, cols: n })?;
        for i in 0..n {
            data.extend_from_slice(&self.inner.row(i)[n..]);
        }
        Matrix::from_vec(n, n, data)
    }
}

/// Inverts a square matrix.
///
/// 1. The determinant is computed first; `|det| < 1e-10` fails fast.
/// 2. `[A | I]` is reduced column by column with partial pivoting. A pivot
///    with magnitude below `1e-10` also fails; rounding can leave such a
///    pivot even when the determinant passed.
///
/// The input is never modified. Integer input is promoted to `f64`.
///
/// # Errors
///
/// Returns `NotSquare` for non-square input and `SingularMatrix` when
/// either singularity check trips.
///
/// # Examples
///
/// ```
/// use densemat::linalg::invert;
/// use densemat::primitives::Matrix;
///
/// let a = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).expect("valid");
/// let inv = invert(&a).expect("invertible");
/// assert!((inv.get(0, 0) - 0.6).abs() < 1e-9);
///
/// let singular = Matrix::from_vec(2, 2, vec![1, 2, 2, 4]).expect("valid");
/// assert!(invert(&singular).unwrap_err().is_singular());
/// ```
pub fn invert<T: Element>(m: &Matrix<T>) -> Result<Matrix<f64>> {
    let (rows, cols) = m.shape();
    if rows != cols {
        return Err(DenseMatError::NotSquare { rows, cols });
    }

    let det = determinant(m)?;
    if det.abs() < SINGULAR_EPSILON {
        debug!(det, n = rows, "determinant below tolerance, not inverting");
        return Err(DenseMatError::SingularMatrix { det });
    }

    let mut aug = AugmentedMatrix::new(m)?;
    for col in 0..aug.size() {
        let pivot_row = aug.pivot_row(col);
        let pivot = aug.as_matrix().get(pivot_row, col);
        if pivot.abs() < SINGULAR_EPSILON {
            debug!(col, pivot, det, "vanishing pivot during elimination");
            return Err(DenseMatError::SingularMatrix { det });
        }
        if pivot_row != col {
            debug!(col, pivot_row, "partial pivoting row swap");
            aug.swap_rows(col, pivot_row);
        }
        aug.normalize_row(col);
        aug.eliminate(col);
    }

    aug.into_inverse()
}

/// Checks that `a * inv` is the identity within `tol` per element.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the shapes are incompatible.
pub fn verify_inverse<T: Element>(a: &Matrix<T>, inv: &Matrix<f64>, tol: f64) -> Result<bool> {
    Ok(a.to_float().matmul(inv)?.is_identity(tol))
}

impl<T: Element> Matrix<T> {
    /// Inverse of this matrix. See [`invert`].
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` or `SingularMatrix`.
    pub fn invert(&self) -> Result<Matrix<f64>> {
        invert(self)
    }
}

#[cfg(test)]
#[path = "inverse_tests.rs"]
mod tests;
