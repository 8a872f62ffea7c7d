//! 3D vector (single precision).

define_vector_type!(
    /// 3D vector (single precision).
    ///
    /// A point or direction in space. The zero vector is the default value.
    Vec3F32,
    glam::Vec3,
    [f32; 3],
    [x, y, z]
);

impl Vec3F32 {
    /// Cross product of `self` and `rhs`.
    ///
    /// The result is perpendicular to both inputs and anti-commutative:
    /// `u.cross_product(v) == -v.cross_product(u)`.
    #[inline]
    pub fn cross_product(self, rhs: Self) -> Self {
        let a: glam::Vec3 = self.into();
        Self::from(a.cross(rhs.into()))
    }

    /// Whether the two vectors are scalar multiples of each other.
    ///
    /// Tests the sine of the angle between them, the length of the cross product of the unit
    /// vectors, against zero, so the result does not depend on their lengths. By this
    /// definition the zero vector is parallel to every vector.
    #[inline]
    pub fn parallel(self, rhs: Self) -> bool {
        match (self.unit(), rhs.unit()) {
            (Some(a), Some(b)) => crate::equal_floats(a.cross_product(b).length(), 0.0),
            _ => true,
        }
    }
}
