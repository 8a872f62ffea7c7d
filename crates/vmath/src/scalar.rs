/// Absolute tolerance used by every approximate comparison in the crate.
pub const EPSILON: f32 = 1e-5;

/// The ratio of a circle's circumference to its diameter.
pub const PI: f32 = std::f32::consts::PI;

/// Check whether two floats are equal up to [`EPSILON`].
///
/// Results of arithmetic (dot products, determinants, ...) carry rounding error, so they are
/// never compared bitwise.
///
/// # Example
///
/// ```
/// use vmath::equal_floats;
///
/// assert!(equal_floats(0.1 + 0.2, 0.3));
/// assert!(!equal_floats(1.0, 1.1));
/// ```
#[inline]
pub fn equal_floats(lhs: f32, rhs: f32) -> bool {
    (lhs - rhs).abs() < EPSILON
}

/// Convert an angle from radians to degrees.
#[inline]
pub fn radian_to_degree(rad: f32) -> f32 {
    rad * (180.0 / PI)
}

/// Convert an angle from degrees to radians.
#[inline]
pub fn degree_to_radian(deg: f32) -> f32 {
    deg * (PI / 180.0)
}
