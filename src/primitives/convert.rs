//! Conversion between the integer and floating-point domains.

use super::element::{Element, FloatElement, IntegerElement};
use super::matrix::Matrix;

impl<T: Element> Matrix<T> {
    /// Widens every element to `f64`.
    ///
    /// Exact for `i32`, `f32` and `f64` elements, and for `i64` elements
    /// within +/- 2^53.
    #[must_use]
    pub fn to_float(&self) -> Matrix<f64> {
        self.map(Element::to_f64)
    }
}

impl<T: FloatElement> Matrix<T> {
    /// Rounds every element to the nearest integer (half away from zero).
    ///
    /// This is lossy and not reversible: `to_float(to_integer(m))` is not
    /// `m` in general. Values outside the `i64` range saturate and NaN
    /// becomes zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use densemat::primitives::Matrix;
    ///
    /// let m = Matrix::from_vec(1, 3, vec![0.4_f64, 2.5, -1.6]).expect("valid");
    /// assert_eq!(m.to_integer().as_slice(), &[0, 3, -2]);
    /// ```
    #[must_use]
    pub fn to_integer(&self) -> Matrix<i64> {
        self.map(|x| i64::from_f64_round(x.to_f64()))
    }
}

/// Free-function form of [`Matrix::to_float`].
#[must_use]
pub fn to_float<T: IntegerElement>(m: &Matrix<T>) -> Matrix<f64> {
    m.to_float()
}

/// Free-function form of [`Matrix::to_integer`].
#[must_use]
pub fn to_integer<T: FloatElement>(m: &Matrix<T>) -> Matrix<i64> {
    m.to_integer()
}

impl From<Matrix<i64>> for Matrix<f64> {
    fn from(m: Matrix<i64>) -> Self {
        m.to_float()
    }
}

impl From<Matrix<i32>> for Matrix<f64> {
    fn from(m: Matrix<i32>) -> Self {
        m.to_float()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_float_is_exact() {
        let m = Matrix::from_vec(2, 2, vec![1_i64, -2, 30_000, -7]).expect("valid");
        let f = to_float(&m);
        assert_eq!(f.as_slice(), &[1.0, -2.0, 30_000.0, -7.0]);
        assert_eq!(f.shape(), (2, 2));
    }

    #[test]
    fn test_to_integer_rounds_to_nearest() {
        let m = Matrix::from_vec(2, 2, vec![0.49, 0.5, -0.5, 1.51]).expect("valid");
        assert_eq!(to_integer(&m).as_slice(), &[0, 1, -1, 2]);
    }

    #[test]
    fn test_round_trip_integer_float_integer() {
        let m = Matrix::from_vec(1, 4, vec![i64::from(i32::MIN), -1, 0, i64::from(i32::MAX)])
            .expect("valid");
        assert_eq!(to_integer(&to_float(&m)), m);
    }

    #[test]
    fn test_float_round_trip_is_lossy() {
        let m = Matrix::from_vec(1, 2, vec![0.25, 1.75]).expect("valid");
        assert_ne!(to_integer(&m).to_float(), m);
    }

    #[test]
    fn test_from_impl() {
        let m = Matrix::from_vec(1, 2, vec![3_i32, 4]).expect("valid");
        let f: Matrix<f64> = m.into();
        assert_eq!(f.as_slice(), &[3.0, 4.0]);
    }

    #[test]
    fn test_f32_to_integer() {
        let m = Matrix::from_vec(1, 2, vec![2.6_f32, -0.2]).expect("valid");
        assert_eq!(m.to_integer().as_slice(), &[3, 0]);
    }
}
