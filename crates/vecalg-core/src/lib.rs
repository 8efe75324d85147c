//! Core vector arithmetic kernels
//!
//! This crate provides two elementary operations over one-dimensional
//! numeric sequences:
//!
//! - [`scale`] — multiply every element of a vector by a scalar
//! - [`dot`] — sum of element-wise products of two equal-length vectors
//!
//! # Design Philosophy
//!
//! - **Pure functions**: inputs are borrowed and never mutated; every call
//!   produces a fresh value
//! - **Reproducible accumulation**: `dot` adds terms strictly left to
//!   right, so results match a plain indexed loop bit for bit
//! - **One runtime invariant**: `dot` rejects operands of differing
//!   lengths with [`Error::LengthMismatch`]; nothing else is validated
//!
//! # Example
//!
//! ```rust
//! use vecalg_core::{dot, scale};
//!
//! let x: Vec<f64> = vec![1.0, 2.0, 3.0];
//! let y = vec![4.0, 5.0, 6.0];
//!
//! let doubled = scale(2.0, &x);
//! assert_eq!(doubled, vec![2.0, 4.0, 6.0]);
//!
//! let c = dot(&x, &y)?;
//! assert_eq!(c, 32.0);
//! # Ok::<(), vecalg_core::Error>(())
//! ```

pub mod error;
pub mod numeric;
pub mod ops;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::Numeric;
pub use ops::{dot, scale};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::numeric::Numeric;
    pub use crate::ops::{dot, scale};
}
