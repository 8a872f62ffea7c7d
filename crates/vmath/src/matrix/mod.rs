//! Matrix types module.
//!
//! This module provides the matrix types:
//! - Mat2F32: 2x2 matrix

mod mat2;

pub use mat2::Mat2F32;
