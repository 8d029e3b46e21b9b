//! Animatable value types

use velum_core::Color;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_lerp() {
        assert_eq!(0.7f32.lerp(&1.0, 0.0), 0.7);
        assert_eq!(0.0f32.lerp(&1.0, 0.25), 0.25);
        assert_eq!(1.0f32.lerp(&0.0, 1.0), 0.0);
    }

    #[test]
    fn test_color_lerp_clamps() {
        let c = Color::BLACK.lerp(&Color::WHITE, 2.0);
        assert_eq!(c, Color::WHITE);
    }
}
