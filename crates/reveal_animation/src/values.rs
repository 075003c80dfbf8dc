//! Animatable value types
//!
//! Linear interpolation support for the scalar and vector quantities the
//! entrance transform math works in.

use reveal_core::Vec2;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for Vec2 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec2::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_interpolation() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((0.8_f32.lerp(&1.0, 0.25) - 0.85).abs() < 1e-6);
        assert!(1.0_f32.approx_eq(&1.0001, 1e-3));
    }

    #[test]
    fn test_vec2_interpolation() {
        let a = Vec2::new(-80.0, 80.0);
        let mid = a.lerp(&Vec2::ZERO, 0.5);

        assert!(mid.approx_eq(&Vec2::new(-40.0, 40.0), 1e-6));
        // Endpoints are exact.
        assert_eq!(a.lerp(&Vec2::ZERO, 1.0), Vec2::ZERO);
    }
}
