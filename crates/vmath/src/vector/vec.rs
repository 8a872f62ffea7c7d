//! Macro to define a vector type.
//!
//! Both vector types share the same contract, so the boilerplate lives here and the
//! dimension-specific operations (`parallel`, `cross_product`) are added next to each
//! invocation. Length and dot product are delegated to `glam`.
//!
//! # Arguments
//!
//! * `name` - The name of the vector type.
//! * `glam_type` - The underlying glam type.
//! * `array` - The array type.
//! * `fields` - The fields of the vector.
//!
macro_rules! define_vector_type {
    ($(#[$meta:meta])* $name:ident, $glam_type:ty, $array:ty, [$($field:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name {
            $(
                #[allow(missing_docs)]
                pub $field: f32
            ),+
        }

        impl $name {
            /// Zero vector.
            pub const ZERO: Self = Self {
                $($field: 0.0),+
            };

            /// Create a new vector from its components.
            #[inline]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a vector from an array.
            #[inline]
            pub fn from_array(arr: $array) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }

            /// Convert the vector to an array.
            #[inline]
            pub fn to_array(self) -> $array {
                [$(self.$field),+]
            }

            /// Euclidean length (magnitude) of the vector.
            ///
            /// Components too large for their squares to fit in an `f32` are rescaled by the
            /// largest absolute component first, so the result stays finite whenever the length
            /// itself is representable.
            #[inline]
            pub fn length(self) -> f32 {
                let v: $glam_type = self.into();
                let len = v.length();
                if len.is_finite() {
                    return len;
                }
                let max = v.abs().max_element();
                if !max.is_finite() {
                    return len;
                }
                max * (v / max).length()
            }

            /// Squared euclidean length, i.e. the dot product of the vector with itself.
            #[inline]
            pub fn length_squared(self) -> f32 {
                let v: $glam_type = self.into();
                v.length_squared()
            }

            /// Dot product between two vectors.
            ///
            /// Same as `self * rhs`.
            #[inline]
            pub fn dot(self, rhs: Self) -> f32 {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                a.dot(b)
            }

            /// Multiply every component by `s`.
            ///
            /// Same as `self * s`.
            #[inline]
            pub fn scale(self, s: f32) -> Self {
                let a: $glam_type = self.into();
                Self::from(a * s)
            }

            /// Whether the length of the vector is zero up to [`crate::EPSILON`].
            #[inline]
            pub fn is_zero(self) -> bool {
                $crate::equal_floats(self.length(), 0.0)
            }

            /// Component-wise comparison with [`crate::equal_floats`].
            #[inline]
            pub fn approx_eq(self, rhs: Self) -> bool {
                $($crate::equal_floats(self.$field, rhs.$field))&&+
            }

            /// Unit vector with the direction of `self`, or `None` for the zero vector.
            ///
            /// Divides by the largest absolute component before normalizing so that neither
            /// overflow nor underflow of the squared components can leak into the result.
            fn unit(self) -> Option<Self> {
                if self.is_zero() {
                    return None;
                }
                let v: $glam_type = self.into();
                let scaled = v / v.abs().max_element();
                Some(Self::from(scaled / scaled.length()))
            }

            /// Scale the vector to unit length in place.
            ///
            /// Returns the vector itself so calls can be chained.
            ///
            /// # Errors
            ///
            /// Returns [`AlgebraError::DegenerateVector`](crate::AlgebraError::DegenerateVector)
            /// if the vector has zero length. The vector is left untouched in that case.
            pub fn normalize(&mut self) -> Result<&mut Self, $crate::AlgebraError> {
                match self.unit() {
                    Some(unit) => {
                        *self = unit;
                        Ok(self)
                    }
                    None => {
                        log::debug!("cannot normalize zero-length vector {}", self);
                        Err($crate::AlgebraError::DegenerateVector("normalize"))
                    }
                }
            }

            /// Return a unit length copy of the vector.
            ///
            /// # Errors
            ///
            /// Returns [`AlgebraError::DegenerateVector`](crate::AlgebraError::DegenerateVector)
            /// if the vector has zero length.
            pub fn normalized(self) -> Result<Self, $crate::AlgebraError> {
                let mut v = self;
                v.normalize()?;
                Ok(v)
            }

            /// Whether the angle between the two vectors is a right angle, i.e. their cosine is
            /// zero up to tolerance.
            ///
            /// The test does not depend on the lengths of the vectors. The zero vector is
            /// orthogonal to every vector.
            #[inline]
            pub fn orthogonal(self, rhs: Self) -> bool {
                match (self.unit(), rhs.unit()) {
                    (Some(a), Some(b)) => $crate::equal_floats(a.dot(b), 0.0),
                    _ => true,
                }
            }

            /// Angle between the two vectors, in degrees, in the range `[0, 180]`.
            ///
            /// # Errors
            ///
            /// Returns [`AlgebraError::DegenerateVector`](crate::AlgebraError::DegenerateVector)
            /// if either vector has zero length.
            pub fn angle_to(self, rhs: Self) -> Result<f32, $crate::AlgebraError> {
                if self.is_zero() || rhs.is_zero() {
                    log::debug!("cannot measure the angle between {} and {}", self, rhs);
                    return Err($crate::AlgebraError::DegenerateVector("measure the angle of"));
                }
                let (a, b) = (self.normalized()?, rhs.normalized()?);
                // rounding can push the cosine slightly outside of [-1, 1]
                let cos = a.dot(b).clamp(-1.0, 1.0);
                Ok($crate::radian_to_degree(cos.acos()))
            }

            /// Projection of `self` onto `rhs`.
            ///
            /// # Errors
            ///
            /// Returns [`AlgebraError::DegenerateVector`](crate::AlgebraError::DegenerateVector)
            /// if `rhs` has zero length.
            pub fn projection(self, rhs: Self) -> Result<Self, $crate::AlgebraError> {
                if rhs.is_zero() {
                    log::debug!("cannot project {} onto a zero-length vector", self);
                    return Err($crate::AlgebraError::DegenerateVector("project onto"));
                }
                // rescaled so the squared length of `rhs` cannot overflow
                let v: $glam_type = rhs.into();
                let dir = Self::from(v / v.abs().max_element());
                Ok(dir * (self.dot(dir) / dir.length_squared()))
            }
        }

        // Conversions to and from the underlying glam type.
        impl From<$glam_type> for $name {
            #[inline]
            fn from(v: $glam_type) -> Self {
                Self {
                    $($field: v.$field),+
                }
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(v: $name) -> Self {
                <$glam_type>::new($(v.$field),+)
            }
        }

        // Conversions to and from arrays.
        impl From<$array> for $name {
            #[inline]
            fn from(arr: $array) -> Self {
                Self::from_array(arr)
            }
        }

        impl From<$name> for $array {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        // Arithmetic operations implemented via glam.
        impl std::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                Self::from(a + b)
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                Self::from(a - b)
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                let a: $glam_type = self.into();
                Self::from(-a)
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self::Output {
                self.scale(rhs)
            }
        }

        impl std::ops::Mul<$name> for f32 {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                rhs.scale(self)
            }
        }

        // Vector-vector multiplication is the dot product.
        impl std::ops::Mul<$name> for $name {
            type Output = f32;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                self.dot(rhs)
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = self.scale(rhs);
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "[")?;
                for (i, c) in self.to_array().iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, "]")
            }
        }
    };
}
