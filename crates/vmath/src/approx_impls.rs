//! `approx` trait implementations, enabled with the `approx` feature.
//!
//! Each type compares entry by entry with `f32` semantics, so the default tolerances are the
//! ones of `f32`.

use crate::{Mat2F32, Vec2F32, Vec3F32};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

macro_rules! impl_approx {
    ($name:ty, [$($field:ident),+]) => {
        impl AbsDiffEq for $name {
            type Epsilon = f32;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                f32::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(self.$field.abs_diff_eq(&other.$field, epsilon))&&+
            }
        }

        impl RelativeEq for $name {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                f32::default_max_relative()
            }

            #[inline]
            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(self.$field.relative_eq(&other.$field, epsilon, max_relative))&&+
            }
        }

        impl UlpsEq for $name {
            #[inline]
            fn default_max_ulps() -> u32 {
                f32::default_max_ulps()
            }

            #[inline]
            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                $(self.$field.ulps_eq(&other.$field, epsilon, max_ulps))&&+
            }
        }
    };
}

impl_approx!(Vec2F32, [x, y]);
impl_approx!(Vec3F32, [x, y, z]);
impl_approx!(Mat2F32, [a, b, c, d]);
