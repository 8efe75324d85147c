//! Vector arithmetic kernels
//!
//! The two operations this crate exists for: scaling a vector by a scalar
//! and the dot product of two equal-length vectors. Both are pure: inputs
//! are borrowed, never mutated, and a fresh value is returned.

use crate::error::{Error, Result};
use crate::numeric::Numeric;
use num_traits::Zero;

/// Multiply every element of a vector by a scalar
///
/// Returns a new vector `y` with `y[i] = factor * vector[i]`. An empty
/// input yields an empty output.
///
/// # Examples
///
/// ```rust
/// use vecalg_core::ops::scale;
///
/// assert_eq!(scale(2.0, &[1.0, -2.0, 3.0]), vec![2.0, -4.0, 6.0]);
/// ```
pub fn scale<T: Numeric>(factor: T, vector: &[T]) -> Vec<T> {
    vector.iter().map(|&v| factor * v).collect()
}

/// Compute the dot product of two equal-length vectors
///
/// Terms `x[i] * y[i]` are accumulated in ascending index order with
/// sequential addition, so the result is reproducible against a plain
/// indexed loop. Two empty vectors yield zero.
///
/// Fails with [`Error::LengthMismatch`] when the operand lengths differ;
/// no partial result is produced.
///
/// # Examples
///
/// ```rust
/// use vecalg_core::ops::dot;
///
/// let c = dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(c, 32.0);
///
/// assert!(dot(&[1.0, 2.0], &[1.0, 2.0, 3.0]).is_err());
/// ```
pub fn dot<T: Numeric>(x: &[T], y: &[T]) -> Result<T::Accum> {
    if x.len() != y.len() {
        return Err(Error::length_mismatch(x.len(), y.len()));
    }

    Ok(x.iter()
        .zip(y.iter())
        .map(|(&a, &b)| T::Accum::from(a) * T::Accum::from(b))
        .fold(<T::Accum as Zero>::zero(), |acc, term| acc + term))
}
