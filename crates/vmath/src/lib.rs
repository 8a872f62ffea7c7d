#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # vmath
//!
//! Small fixed-size value types for graphics, physics and simulation code:
//!
//! - [`Vec2F32`]: 2D vector
//! - [`Vec3F32`]: 3D vector, adds the cross product
//! - [`Mat2F32`]: 2x2 row-major matrix acting on [`Vec2F32`]
//!
//! Operations that would divide by zero (normalizing a zero vector, inverting a
//! singular matrix, ...) return an [`AlgebraError`] instead of producing NaN or
//! infinite components.
//!
//! ## Example
//!
//! ```rust
//! use vmath::{Mat2F32, Vec2F32};
//!
//! let v = Vec2F32::new(3.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//!
//! let m = Mat2F32::new(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(m.determinant(), -2.0);
//! assert_eq!(Mat2F32::IDENTITY * v, v);
//! ```

/// Error types for the algebra operations.
pub mod error;

/// Scalar helpers shared by the vector and matrix types.
pub mod scalar;

mod matrix;
mod vector;

pub use error::AlgebraError;
pub use matrix::Mat2F32;
pub use scalar::{degree_to_radian, equal_floats, radian_to_degree, EPSILON, PI};
pub use vector::{Vec2F32, Vec3F32};

// Short aliases for the single precision types.
/// 2D vector.
pub type Vec2 = Vec2F32;
/// 3D vector.
pub type Vec3 = Vec3F32;
/// 2x2 matrix.
pub type Mat2 = Mat2F32;

#[cfg(feature = "approx")]
mod approx_impls;
