//! Scalar projection of 2-D vectors onto a line through the origin.
//!
//! Implements the standard formula `(a . v) / (v . v) * v` and packages the
//! fixed demonstration scene: a reference vector, a sample vector, and the
//! unit direction at 340 degrees, together with the labeled line segments
//! the visualizer draws.

use super::vec2::Vec2;

/// Fixed reference vector `r`.
pub const REFERENCE: Vec2 = Vec2::new(1.0, -2.0);

/// Fixed sample vector `a`.
pub const SAMPLE: Vec2 = Vec2::new(1.0, 4.0);

/// Fixed angle of the direction vector `v`, in degrees counter-clockwise
/// from the positive x-axis.
pub const DIRECTION_ANGLE_DEG: f64 = 340.0;

/// Projects `a` onto the line spanned by `v` through the origin.
///
/// Returns `(a . v) / (v . v) * v`, the closest point to `a` on that line.
///
/// # Example
///
/// ```rust
/// use srcviz::math::{project_onto, Vec2};
///
/// let e = project_onto(Vec2::new(3.0, 4.0), Vec2::new(1.0, 0.0));
/// assert_eq!(e, Vec2::new(3.0, 0.0));
/// ```
pub fn project_onto(a: Vec2, v: Vec2) -> Vec2 {
    v * (a.dot(v) / v.dot(v))
}

/// A labeled line segment, ready for a renderer to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Legend label for the segment.
    pub label: &'static str,
    /// Start point.
    pub from: Vec2,
    /// End point.
    pub to: Vec2,
}

impl Segment {
    fn new(label: &'static str, from: Vec2, to: Vec2) -> Self {
        Self { label, from, to }
    }
}

/// The projection scene: inputs, derived projections, and residuals.
///
/// All values are computed once at construction; the scene is immutable
/// afterwards and consumed only for printing angles and drawing segments.
///
/// # Example
///
/// ```rust
/// use srcviz::math::ProjectionScene;
///
/// let scene = ProjectionScene::standard();
/// // The direction vector sits at 340 degrees, i.e. -20 in atan2 range.
/// assert!((scene.v.angle_deg() + 20.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProjectionScene {
    /// Reference vector.
    pub r: Vec2,
    /// Unit direction vector derived from the fixed angle.
    pub v: Vec2,
    /// Sample vector.
    pub a: Vec2,
}

impl ProjectionScene {
    /// Builds a scene from a reference vector, a sample vector, and a
    /// direction angle in degrees.
    pub fn new(r: Vec2, a: Vec2, direction_angle_deg: f64) -> Self {
        Self {
            r,
            v: Vec2::from_angle_deg(direction_angle_deg),
            a,
        }
    }

    /// The fixed demonstration scene: `r = (1, -2)`, `a = (1, 4)`, `v` at
    /// 340 degrees.
    pub fn standard() -> Self {
        Self::new(REFERENCE, SAMPLE, DIRECTION_ANGLE_DEG)
    }

    /// Projection of the sample vector `a` onto `v`.
    pub fn e(&self) -> Vec2 {
        project_onto(self.a, self.v)
    }

    /// Projection of the reference vector `r` onto `v`.
    pub fn er(&self) -> Vec2 {
        project_onto(self.r, self.v)
    }

    /// Residual of the sample vector, `a - e`. Orthogonal to `v`.
    pub fn residual_a(&self) -> Vec2 {
        self.a - self.e()
    }

    /// Residual of the reference vector, `r - er`. Orthogonal to `v`.
    pub fn residual_r(&self) -> Vec2 {
        self.r - self.er()
    }

    /// The six labeled segments the visualizer draws: `r`, `a`, `e`, and
    /// both residuals from the origin, plus `v` offset so it straddles the
    /// tip of `r`.
    pub fn segments(&self) -> Vec<Segment> {
        vec![
            Segment::new("r", Vec2::ZERO, self.r),
            Segment::new("v (offset)", self.r - self.v, self.r + self.v),
            Segment::new("a", Vec2::ZERO, self.a),
            Segment::new("e", Vec2::ZERO, self.e()),
            Segment::new("a - e", Vec2::ZERO, self.residual_a()),
            Segment::new("r - er", Vec2::ZERO, self.residual_r()),
        ]
    }
}
