//! Numeric element domains.
//!
//! A single [`Element`] trait lets one container and one set of algorithms
//! serve both exact integers and floating point. Each element type names a
//! wider accumulator so that products are summed without premature overflow
//! (`i32` and `i64` accumulate in `i64`, `f32` and `f64` in `f64`).

use num_traits::{One, Zero};
use rand::distributions::uniform::SampleUniform;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Wide accumulator used by reductions such as matrix multiplication.
pub trait Accumulator: Copy + Zero {
    /// Addition that reports overflow as `None`.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Subtraction that reports overflow as `None`.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Multiplication that reports overflow as `None`.
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

impl Accumulator for i64 {
    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i64::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i64::checked_mul(self, rhs)
    }
}

impl Accumulator for f64 {
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }
}

/// A matrix element type.
///
/// Implemented for `i32`, `i64` (exact integer domain) and `f32`, `f64`
/// (floating-point domain).
pub trait Element:
    Copy
    + PartialOrd
    + fmt::Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// Accumulator wide enough for sums of products of this type.
    type Acc: Accumulator;

    /// Human-readable domain name used in diagnostics.
    const DOMAIN: &'static str;

    /// Lossless promotion into the accumulator.
    fn widen(self) -> Self::Acc;

    /// Converts an accumulated value back, `None` if it does not fit.
    fn narrow(acc: Self::Acc) -> Option<Self>;

    /// Promotion to double precision.
    ///
    /// Exact for `i32`, `f32` and `f64`; `i64` values beyond 2^53 lose
    /// low-order bits.
    fn to_f64(self) -> f64;

    /// Conversion from double precision, rounding to nearest for integers.
    ///
    /// Integer targets saturate at their bounds and map NaN to zero.
    fn from_f64_round(value: f64) -> Self;

    /// Writes the element as one fixed-width cell of a printed matrix.
    fn fmt_cell(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Marker for the exact integer domain.
pub trait IntegerElement: Element + SampleUniform + Into<i64> {}

/// Marker for the floating-point domain.
pub trait FloatElement: Element {}

macro_rules! impl_integer_element {
    ($t:ty) => {
        impl Element for $t {
            type Acc = i64;
            const DOMAIN: &'static str = "integer";

            fn widen(self) -> i64 {
                i64::from(self)
            }

            fn narrow(acc: i64) -> Option<Self> {
                <$t>::try_from(acc).ok()
            }

            #[allow(clippy::cast_precision_loss)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[allow(clippy::cast_possible_truncation)]
            fn from_f64_round(value: f64) -> Self {
                value.round() as $t
            }

            fn fmt_cell(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{self:>8}")
            }
        }

        impl IntegerElement for $t {}
    };
}

impl_integer_element!(i32);
impl_integer_element!(i64);

impl Element for f32 {
    type Acc = f64;
    const DOMAIN: &'static str = "float";

    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn narrow(acc: f64) -> Option<Self> {
        Some(acc as f32)
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64_round(value: f64) -> Self {
        value as f32
    }

    fn fmt_cell(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:>8.4}")
    }
}

impl FloatElement for f32 {}

impl Element for f64 {
    type Acc = f64;
    const DOMAIN: &'static str = "float";

    fn widen(self) -> f64 {
        self
    }

    fn narrow(acc: f64) -> Option<Self> {
        Some(acc)
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64_round(value: f64) -> Self {
        value
    }

    fn fmt_cell(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:>8.4}")
    }
}

impl FloatElement for f64 {}
