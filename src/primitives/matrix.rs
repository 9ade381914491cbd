//! Dense matrix type for integer and floating-point data.

use super::element::{Accumulator, Element, IntegerElement};
use crate::error::{DenseMatError, Result};
use num_traits::Zero;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dense 2D matrix (row-major, one contiguous allocation).
///
/// Dimensions are fixed at creation. Every combinator returns a newly owned
/// matrix; only [`Matrix::set`], [`Matrix::zero_fill`] and
/// [`Matrix::fill_random`] mutate in place.
///
/// # Examples
///
/// ```
/// use densemat::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawMatrix<T>",
    bound(deserialize = "T: Element + Deserialize<'de>")
)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Wire form of [`Matrix`]; validated through [`Matrix::from_vec`].
#[derive(Deserialize)]
struct RawMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Element> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = DenseMatError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        Matrix::from_vec(raw.rows, raw.cols, raw.data)
    }
}

/// Integer-domain matrix.
pub type IntMatrix = Matrix<i64>;

/// Floating-point-domain matrix.
pub type FloatMatrix = Matrix<f64>;

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(DenseMatError::InvalidDimensions {
            rows,
            cols,
            reason: "rows and cols must be at least 1".to_string(),
        });
    }
    rows.checked_mul(cols)
        .ok_or(DenseMatError::AllocationError { rows, cols })
}

impl<T: Element> Matrix<T> {
    /// Allocates a `rows x cols` matrix filled with the domain zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero and
    /// `AllocationError` if the storage cannot be obtained.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| DenseMatError::AllocationError { rows, cols })?;
        data.resize(len, T::zero());
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or the allocation fails. Use
    /// [`Matrix::try_new`] to handle those cases.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates an `n x n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Creates a new matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or the data length doesn't
    /// match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(DenseMatError::InvalidDimensions {
                rows,
                cols,
                reason: format!("data length {} must equal rows * cols", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the rows are empty, or the
    /// rows have different lengths.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(DenseMatError::InvalidDimensions {
                rows: rows.len(),
                cols,
                reason: format!("ragged row of length {}", bad.len()),
            });
        }
        let data = rows.iter().flatten().copied().collect();
        Self::from_vec(rows.len(), cols, data)
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true if rows == cols.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// Gets element at (row, col), or `None` when out of bounds.
    #[must_use]
    pub fn try_get(&self, row: usize, col: usize) -> Option<T> {
        (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a slice.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[T] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    pub(crate) fn row_mut(&mut self, row_idx: usize) -> &mut [T] {
        let start = row_idx * self.cols;
        &mut self.data[start..start + self.cols]
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = (a.min(b), a.max(b));
        let (head, tail) = self.data.split_at_mut(hi * self.cols);
        head[lo * self.cols..(lo + 1) * self.cols].swap_with_slice(&mut tail[..self.cols]);
    }

    /// Returns a column as an owned vector.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vec<T> {
        (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major data.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Sets every element to the domain zero.
    pub fn zero_fill(&mut self) {
        self.data.fill(T::zero());
    }

    /// Deep copy with the same dimensions.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Applies `f` to every element, producing a matrix of the same shape.
    #[must_use]
    pub fn map<U: Element>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![T::zero(); self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Returns the submatrix with `skip_row` and `skip_col` removed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the matrix has a single row or column
    /// (the minor would be empty) and `DimensionMismatch` if an index is out
    /// of range.
    pub fn minor(&self, skip_row: usize, skip_col: usize) -> Result<Self> {
        if self.rows < 2 || self.cols < 2 {
            return Err(DenseMatError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
                reason: "minor of a single row or column is empty".to_string(),
            });
        }
        if skip_row >= self.rows || skip_col >= self.cols {
            return Err(DenseMatError::shape_mismatch(
                "minor",
                self.shape(),
                (skip_row + 1, skip_col + 1),
            ));
        }

        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in (0..self.rows).filter(|&i| i != skip_row) {
            let row = self.row(i);
            data.extend(
                row.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != skip_col)
                    .map(|(_, &x)| x),
            );
        }
        Ok(Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        })
    }

    fn zip_checked(
        &self,
        other: &Self,
        operation: &'static str,
        f: impl Fn(T::Acc, T::Acc) -> Option<T::Acc>,
    ) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(DenseMatError::shape_mismatch(
                operation,
                self.shape(),
                other.shape(),
            ));
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| {
                f(a.widen(), b.widen())
                    .and_then(T::narrow)
                    .ok_or(DenseMatError::Overflow { operation })
            })
            .collect::<Result<Vec<T>>>()?;

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the shapes differ and `Overflow` if an
    /// integer sum leaves the element range.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_checked(other, "add", Accumulator::checked_add)
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Same contract as [`Matrix::add`].
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_checked(other, "sub", Accumulator::checked_sub)
    }

    /// Multiplies two matrices element-wise (Hadamard product).
    ///
    /// # Errors
    ///
    /// Same contract as [`Matrix::add`].
    pub fn hadamard(&self, other: &Self) -> Result<Self> {
        self.zip_checked(other, "hadamard", Accumulator::checked_mul)
    }

    /// Multiplies each element by a scalar.
    ///
    /// Always succeeds. Integer products that leave the element range
    /// saturate at `T::MIN` or `T::MAX`.
    #[must_use]
    pub fn scalar_multiply(&self, k: T) -> Self {
        let scale = |x: T| {
            x.widen()
                .checked_mul(k.widen())
                .and_then(T::narrow)
                .unwrap_or_else(|| T::from_f64_round(x.to_f64() * k.to_f64()))
        };
        Self {
            data: self.data.iter().map(|&x| scale(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// Products are summed in the element's wide accumulator (`i64` for
    /// integers, `f64` for floats).
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless `self.cols == other.rows`, and
    /// `Overflow` if an integer sum exceeds the accumulator or the element
    /// range.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(DenseMatError::DimensionMismatch {
                operation: "matmul",
                expected: format!("{} rows in right operand", self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }

        let overflow = DenseMatError::Overflow {
            operation: "matmul",
        };
        let mut result = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = <T::Acc as Zero>::zero();
                for k in 0..self.cols {
                    let product = self.data[i * self.cols + k]
                        .widen()
                        .checked_mul(other.data[k * other.cols + j].widen());
                    sum = match product.and_then(|p| sum.checked_add(p)) {
                        Some(s) => s,
                        None => return Err(overflow),
                    };
                }
                match T::narrow(sum) {
                    Some(v) => result.push(v),
                    None => return Err(overflow),
                }
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Returns true if this is a square matrix within `tol` of the identity.
    #[must_use]
    pub fn is_identity(&self, tol: f64) -> bool {
        self.is_square()
            && (0..self.rows).all(|i| {
                (0..self.cols).all(|j| {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    (self.get(i, j).to_f64() - expected).abs() <= tol
                })
            })
    }
}

impl<T: IntegerElement> Matrix<T> {
    /// Fills the matrix with values drawn uniformly from `[min, max]`.
    ///
    /// The random source is supplied by the caller.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `min > max`.
    ///
    /// # Examples
    ///
    /// ```
    /// use densemat::primitives::Matrix;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let mut m = Matrix::<i64>::zeros(3, 3);
    /// m.fill_random(&mut rng, -5, 5).expect("min <= max");
    /// assert!(m.as_slice().iter().all(|&x| (-5..=5).contains(&x)));
    /// ```
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R, min: T, max: T) -> Result<()> {
        if min > max {
            return Err(DenseMatError::InvalidRange {
                min: min.into(),
                max: max.into(),
            });
        }
        for x in &mut self.data {
            *x = rng.gen_range(min..=max);
        }
        Ok(())
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for (j, x) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                x.fmt_cell(f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
