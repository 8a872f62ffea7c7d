//! 2D vector (single precision).

use crate::equal_floats;

define_vector_type!(
    /// 2D vector (single precision).
    ///
    /// A point or direction in the plane. The zero vector is the default value.
    Vec2F32,
    glam::Vec2,
    [f32; 2],
    [x, y]
);

impl Vec2F32 {
    /// Whether the two vectors are scalar multiples of each other.
    ///
    /// Tests the sine of the angle between them, the 2D determinant `x1 * y2 - y1 * x2` of the
    /// unit vectors, against zero, so the result does not depend on their lengths. By this
    /// definition the zero vector is parallel to every vector.
    #[inline]
    pub fn parallel(self, rhs: Self) -> bool {
        match (self.unit(), rhs.unit()) {
            (Some(a), Some(b)) => {
                let a: glam::Vec2 = a.into();
                equal_floats(a.perp_dot(b.into()), 0.0)
            }
            _ => true,
        }
    }
}
