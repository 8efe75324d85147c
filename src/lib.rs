//! Elementary vector arithmetic kernels
//!
//! This is the umbrella crate for the `vecalg` workspace. It re-exports
//! the member crates so downstream users need a single dependency.
//!
//! # Example
//!
//! ```rust
//! use vecalg::{dot, scale};
//!
//! let x = vec![1.0, 2.0, 3.0];
//! let y = scale(2.0, &x);
//! let c = dot(&x, &y).unwrap();
//! assert_eq!(c, 28.0);
//! ```

pub use vecalg_core::*;
