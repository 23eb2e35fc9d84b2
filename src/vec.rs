//! 2D vector type for planar cloth physics.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// 2D vector in screen space (x right, y down).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (returns scalar): self.x * other.y - self.y * other.x
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Perpendicular vector, `(-y, x)`.
    pub fn perp(self) -> Self {
        Vec2 { x: -self.y, y: self.x }
    }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f64(1e-10)) {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F {
        (self - other).length_sq()
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self).scale(t)
    }

    /// Closest point to `self` on the segment `a..b`.
    ///
    /// The projection parameter is clamped to `[0, 1]`; a zero-length
    /// segment yields `a`.
    pub fn closest_on_segment(self, a: Self, b: Self) -> Self {
        let line = b - a;
        let len_sq = line.length_sq();
        if len_sq == F::zero() {
            return a;
        }
        let t = ((self - a).dot(line) / len_sq).clamp(F::zero(), F::one());
        a.lerp(b, t)
    }

    /// Distance from `self` to the segment `a..b`.
    pub fn distance_to_segment(self, a: Self, b: Self) -> F {
        self.distance(self.closest_on_segment(a, b))
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f64, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn cross_sign_follows_winding() {
        let x = Vec2::new(1.0f64, 0.0);
        let y = Vec2::new(0.0f64, 1.0);
        assert_eq!(x.cross(y), 1.0);
        assert_eq!(y.cross(x), -1.0);
    }

    #[test]
    fn normalize_zero_vector() {
        let v = Vec2::<f64>::zero();
        assert_eq!(v.normalize(), Vec2::zero());
    }

    #[test]
    fn segment_projection_clamps_to_endpoints() {
        let a = Vec2::new(0.0f64, 0.0);
        let b = Vec2::new(10.0f64, 0.0);
        assert_eq!(Vec2::new(-5.0, 3.0).closest_on_segment(a, b), a);
        assert_eq!(Vec2::new(15.0, 3.0).closest_on_segment(a, b), b);
        assert_eq!(Vec2::new(4.0, 3.0).closest_on_segment(a, b), Vec2::new(4.0, 0.0));
    }

    #[test]
    fn segment_distance_perpendicular_and_past_end() {
        let a = Vec2::new(0.0f64, 0.0);
        let b = Vec2::new(10.0f64, 0.0);
        assert!((Vec2::new(5.0, 3.0).distance_to_segment(a, b) - 3.0).abs() < 1e-12);
        assert!((Vec2::new(13.0, 4.0).distance_to_segment(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_segment_measures_to_endpoint() {
        let p = Vec2::new(2.0f64, 2.0);
        let d = Vec2::new(3.0f64, 4.0).distance_to_segment(p, p);
        assert!((d * d - 5.0).abs() < 1e-12);
    }
}
