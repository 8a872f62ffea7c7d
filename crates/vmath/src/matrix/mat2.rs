//! 2x2 matrix (single precision).

use crate::{equal_floats, AlgebraError, Vec2F32};

/// 2x2 matrix (single precision).
///
/// Entries are stored row-major as
///
/// ```text
/// [ a b ]
/// [ c d ]
/// ```
///
/// and the matrix acts on column vectors: `m * v` is `(a*x + b*y, c*x + d*y)`. Products follow
/// the same convention, so in `lhs * rhs` the `rhs` transform is applied first and
/// `(lhs * rhs) * v == lhs * (rhs * v)`.
///
/// The default value is the identity matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2F32 {
    /// Row 0, column 0.
    pub a: f32,
    /// Row 0, column 1.
    pub b: f32,
    /// Row 1, column 0.
    pub c: f32,
    /// Row 1, column 1.
    pub d: f32,
}

impl Mat2F32 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Matrix with all entries set to zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new matrix from its entries in row-major order.
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }

    /// Create a new matrix from column vectors.
    ///
    /// The first vector becomes column 1 and the second becomes column 2.
    #[inline]
    pub fn from_cols(x_axis: Vec2F32, y_axis: Vec2F32) -> Self {
        Self::new(x_axis.x, y_axis.x, x_axis.y, y_axis.y)
    }

    /// Create a new matrix from row vectors.
    #[inline]
    pub fn from_rows(row0: Vec2F32, row1: Vec2F32) -> Self {
        Self::new(row0.x, row0.y, row1.x, row1.y)
    }

    /// Create a new matrix from a row-major array `[a, b, c, d]`.
    #[inline]
    pub fn from_rows_array(arr: &[f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Convert the matrix to a row-major array `[a, b, c, d]`.
    #[inline]
    pub fn to_rows_array(self) -> [f32; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Get the column at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 1.
    #[inline]
    pub fn col(&self, index: usize) -> Vec2F32 {
        match index {
            0 => Vec2F32::new(self.a, self.c),
            1 => Vec2F32::new(self.b, self.d),
            _ => panic!("column index out of bounds: {index}"),
        }
    }

    /// Get the row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 1.
    #[inline]
    pub fn row(&self, index: usize) -> Vec2F32 {
        match index {
            0 => Vec2F32::new(self.a, self.b),
            1 => Vec2F32::new(self.c, self.d),
            _ => panic!("row index out of bounds: {index}"),
        }
    }

    /// Determinant `a * d - b * c`.
    #[inline]
    pub fn determinant(&self) -> f32 {
        glam::Mat2::from(*self).determinant()
    }

    /// Inverse of the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::SingularMatrix`] if the determinant is zero up to
    /// [`crate::EPSILON`].
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        let det = self.determinant();
        if equal_floats(det, 0.0) {
            log::debug!("cannot invert singular matrix {} (det = {})", self, det);
            return Err(AlgebraError::SingularMatrix(det));
        }
        Ok(Self::new(self.d, -self.b, -self.c, self.a) * (1.0 / det))
    }

    /// Transpose the matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(self.a, self.c, self.b, self.d)
    }

    /// Entry-wise comparison with [`crate::equal_floats`].
    #[inline]
    pub fn approx_eq(&self, rhs: &Self) -> bool {
        equal_floats(self.a, rhs.a)
            && equal_floats(self.b, rhs.b)
            && equal_floats(self.c, rhs.c)
            && equal_floats(self.d, rhs.d)
    }
}

impl Default for Mat2F32 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

// glam stores matrices column-major.
impl From<glam::Mat2> for Mat2F32 {
    #[inline]
    fn from(m: glam::Mat2) -> Self {
        Self::from_cols(m.x_axis.into(), m.y_axis.into())
    }
}

impl From<Mat2F32> for glam::Mat2 {
    #[inline]
    fn from(m: Mat2F32) -> Self {
        glam::Mat2::from_cols(m.col(0).into(), m.col(1).into())
    }
}

impl std::ops::Add for Mat2F32 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.a + rhs.a,
            self.b + rhs.b,
            self.c + rhs.c,
            self.d + rhs.d,
        )
    }
}

impl std::ops::Sub for Mat2F32 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.a - rhs.a,
            self.b - rhs.b,
            self.c - rhs.c,
            self.d - rhs.d,
        )
    }
}

impl std::ops::Neg for Mat2F32 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self * -1.0
    }
}

// Matrix-matrix multiplication
impl std::ops::Mul<Mat2F32> for Mat2F32 {
    type Output = Mat2F32;

    #[inline]
    fn mul(self, rhs: Mat2F32) -> Self::Output {
        Mat2F32::from(glam::Mat2::from(self) * glam::Mat2::from(rhs))
    }
}

// Matrix-vector multiplication
impl std::ops::Mul<Vec2F32> for Mat2F32 {
    type Output = Vec2F32;

    #[inline]
    fn mul(self, rhs: Vec2F32) -> Self::Output {
        Vec2F32::from(glam::Mat2::from(self) * glam::Vec2::from(rhs))
    }
}

impl std::ops::Mul<f32> for Mat2F32 {
    type Output = Mat2F32;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.a * rhs, self.b * rhs, self.c * rhs, self.d * rhs)
    }
}

impl std::ops::Mul<Mat2F32> for f32 {
    type Output = Mat2F32;

    #[inline]
    fn mul(self, rhs: Mat2F32) -> Self::Output {
        rhs * self
    }
}

impl std::ops::AddAssign for Mat2F32 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign for Mat2F32 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::ops::MulAssign<Mat2F32> for Mat2F32 {
    #[inline]
    fn mul_assign(&mut self, rhs: Mat2F32) {
        *self = *self * rhs;
    }
}

impl std::ops::MulAssign<f32> for Mat2F32 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl std::fmt::Display for Mat2F32 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[ {} {} | {} {} ]", self.a, self.b, self.c, self.d)
    }
}
