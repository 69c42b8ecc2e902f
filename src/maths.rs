//! Small geometry helpers shared by the toy scenes.

use macroquad::math::{Rect, Vec2};

pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// True when `a` and `b` are at most `radius` apart
pub fn near(a: Vec2, b: Vec2, radius: f32) -> bool {
    distance(a, b) <= radius
}

/// Clamp `value` into `[min, max]`. Unlike `f32::clamp` this never panics
/// when the bounds are inverted; `min` wins.
pub fn limit_within_bounds(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp a point into a rectangle
pub fn limit_within_rect(point: Vec2, rect: Rect) -> Vec2 {
    Vec2::new(
        limit_within_bounds(point.x, rect.left(), rect.right()),
        limit_within_bounds(point.y, rect.top(), rect.bottom()),
    )
}

/// Square root that keeps the sign of its input
pub fn signed_sqrt(x: f32) -> f32 {
    if x < 0.0 { -(-x).sqrt() } else { x.sqrt() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_and_near() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(distance(a, b), 5.0);
        assert!(near(a, b, 5.0));
        assert!(!near(a, b, 4.9));
    }

    #[test]
    fn test_limit_within_bounds() {
        assert_eq!(limit_within_bounds(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(limit_within_bounds(11.0, 0.0, 10.0), 10.0);
        assert_eq!(limit_within_bounds(5.0, 0.0, 10.0), 5.0);
        assert_eq!(limit_within_bounds(5.0, 8.0, 2.0), 8.0);
    }

    #[test]
    fn test_limit_within_rect() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(limit_within_rect(Vec2::new(120.0, -5.0), rect), Vec2::new(100.0, 0.0));
        assert_eq!(limit_within_rect(Vec2::new(10.0, 20.0), rect), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_signed_sqrt() {
        assert_eq!(signed_sqrt(0.0), 0.0);
        assert_eq!(signed_sqrt(9.0), 3.0);
        assert_eq!(signed_sqrt(-9.0), -3.0);
    }
}
