//! Core compute primitives: the dense [`Matrix`] container, its numeric
//! element domains, and conversion between them.
//!
//! Both domains share one generic implementation. Integer matrices
//! accumulate in `i64`; floating-point matrices in `f64`.

mod convert;
mod element;
mod matrix;

pub use convert::{to_float, to_integer};
pub use element::{Accumulator, Element, FloatElement, IntegerElement};
pub use matrix::{FloatMatrix, IntMatrix, Matrix};
