//! 2-D vector arithmetic.
//!
//! Provides the [`Vec2`] type used by the projection scene and the
//! spring-layout positions: a plain pair of `f64` coordinates with the
//! handful of operations the rest of the crate needs.

use std::f64::consts::PI;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2-D vector with `f64` components.
///
/// # Example
///
/// ```rust
/// use srcviz::math::Vec2;
///
/// let a = Vec2::new(3.0, 4.0);
/// assert_eq!(a.length(), 5.0);
/// assert_eq!(a.dot(Vec2::new(1.0, 0.0)), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vec2 {
    /// The zero vector (the origin).
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates the unit vector at the given angle in degrees, measured
    /// counter-clockwise from the positive x-axis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use srcviz::math::Vec2;
    ///
    /// let v = Vec2::from_angle_deg(0.0);
    /// assert!((v.x - 1.0).abs() < 1e-12);
    /// assert!(v.y.abs() < 1e-12);
    /// ```
    pub fn from_angle_deg(degrees: f64) -> Self {
        let radians = degrees * PI / 180.0;
        Self::new(radians.cos(), radians.sin())
    }

    /// Computes the dot product with another vector.
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the Euclidean length of the vector.
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns the angle of the vector in degrees via the two-argument
    /// arctangent, in the range (-180, 180].
    ///
    /// # Example
    ///
    /// ```rust
    /// use srcviz::math::Vec2;
    ///
    /// assert_eq!(Vec2::new(0.0, 1.0).angle_deg(), 90.0);
    /// assert_eq!(Vec2::new(-1.0, 0.0).angle_deg(), 180.0);
    /// ```
    pub fn angle_deg(self) -> f64 {
        self.y.atan2(self.x) * 180.0 / PI
    }

    /// Returns the components as a tuple, the shape chart datasets consume.
    pub fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_new_and_fields() {
        let v = Vec2::new(1.5, -2.5);
        assert_eq!(v.x, 1.5);
        assert_eq!(v.y, -2.5);
    }

    #[test]
    fn test_zero() {
        assert_eq!(Vec2::ZERO, Vec2::new(0.0, 0.0));
        assert_eq!(Vec2::ZERO.length(), 0.0);
    }

    #[test]
    fn test_dot() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
    }

    #[test]
    fn test_dot_orthogonal() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 5.0);
        assert_eq!(a.dot(b), 0.0);
    }

    #[test]
    fn test_length() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vec2::new(-3.0, -4.0).length(), 5.0);
    }

    #[test]
    fn test_from_angle_deg_is_unit() {
        for degrees in [0.0, 45.0, 90.0, 160.0, 340.0, -20.0] {
            let v = Vec2::from_angle_deg(degrees);
            assert!((v.length() - 1.0).abs() < EPS, "not unit at {}", degrees);
        }
    }

    #[test]
    fn test_angle_deg_quadrants() {
        assert!((Vec2::new(1.0, 0.0).angle_deg() - 0.0).abs() < EPS);
        assert!((Vec2::new(0.0, 1.0).angle_deg() - 90.0).abs() < EPS);
        assert!((Vec2::new(0.0, -1.0).angle_deg() + 90.0).abs() < EPS);
        assert!((Vec2::new(-1.0, 0.0).angle_deg() - 180.0).abs() < EPS);
    }

    #[test]
    fn test_angle_deg_round_trip() {
        // 340 degrees folds into the (-180, 180] range as -20 degrees.
        let v = Vec2::from_angle_deg(340.0);
        assert!((v.angle_deg() + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_operators() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Vec2::new(1.0, -2.0)), "(1, -2)");
    }
}
