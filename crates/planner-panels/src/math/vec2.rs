//! 2D point / offset

use serde::{Deserialize, Serialize};

/// Position or offset in viewport pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Origin of the viewport
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Snap both components to a grid of `step` pixels
    pub fn snapped(self, step: f32) -> Self {
        Self::new(super::round_to_step(self.x, step), super::round_to_step(self.y, step))
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_arithmetic() {
        let a = Vec2::new(10.0, 20.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(13.0, 24.0));
        assert_eq!(a - b, Vec2::new(7.0, 16.0));
    }

    #[test]
    fn test_vec2_snapped() {
        assert_eq!(Vec2::new(109.0, 51.0).snapped(20.0), Vec2::new(100.0, 60.0));
    }

    #[test]
    fn test_vec2_json_shape() {
        let json = serde_json::to_string(&Vec2::new(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0}"#);
    }
}
