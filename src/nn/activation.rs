//! Logistic activation.

use crate::primitives::Matrix;

/// Scalar sigmoid: σ(x) = 1 / (1 + exp(-x))
#[inline]
#[must_use]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed through its output.
///
/// `y` must already be an activation, `y = σ(x)`; the result is
/// `σ'(x) = y (1 - y)`.
#[inline]
#[must_use]
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

/// Elementwise sigmoid over a matrix.
#[must_use]
pub fn sigmoid_matrix(m: &Matrix<f64>) -> Matrix<f64> {
    m.map(sigmoid)
}

#[cfg(test)]
#[path = "activation_tests_sigmoid_contract.rs"]
mod tests_sigmoid_contract;
