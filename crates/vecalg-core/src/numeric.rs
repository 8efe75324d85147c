//! Generic numeric element types for vector arithmetic
//!
//! Defines the type constraints an element type must satisfy to be used in
//! the kernels, without imposing any computational infrastructure. Integer
//! element types accumulate in `f64` so that products cannot overflow.

use num_traits::{Float, Num};
use std::fmt::Debug;
use std::ops::AddAssign;

/// Base trait for numeric types that can be used as vector elements
pub trait Numeric: Num + Copy + PartialOrd + Debug + Send + Sync {
    /// Type used to accumulate element-wise products
    ///
    /// `f64` for every supported element type: the identity for `f64`
    /// elements, widening for `f32` and the integer types.
    type Accum: Float + From<Self> + Into<f64> + AddAssign + Send + Sync;

    /// Convert to f64 (for operations that need f64)
    fn to_f64(&self) -> f64;

    /// Convert from f64 (for creating constants)
    fn from_f64(val: f64) -> Self;
}

impl Numeric for f64 {
    type Accum = f64;

    fn to_f64(&self) -> f64 {
        *self
    }

    fn from_f64(val: f64) -> Self {
        val
    }
}

impl Numeric for f32 {
    type Accum = f64; // Use f64 for better precision in accumulation

    fn to_f64(&self) -> f64 {
        *self as f64
    }

    fn from_f64(val: f64) -> Self {
        val as f32
    }
}

impl Numeric for i32 {
    type Accum = f64; // Use f64 to prevent overflow

    fn to_f64(&self) -> f64 {
        *self as f64
    }

    fn from_f64(val: f64) -> Self {
        val as i32
    }
}

impl Numeric for u32 {
    type Accum = f64; // Use f64 to prevent overflow

    fn to_f64(&self) -> f64 {
        *self as f64
    }

    fn from_f64(val: f64) -> Self {
        val as u32
    }
}
