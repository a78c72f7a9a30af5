//! Math module for srcviz.
//!
//! 2-D vector arithmetic and the scalar-projection scene used by the
//! `project` subcommand. Nothing here touches a terminal; the computational
//! core stays testable without a graphical environment.
//!
//! # Example
//!
//! ```rust
//! use srcviz::math::{ProjectionScene, Vec2};
//!
//! let scene = ProjectionScene::standard();
//! assert_eq!(scene.a, Vec2::new(1.0, 4.0));
//! assert_eq!(scene.segments().len(), 6);
//! ```

pub mod projection;
pub mod vec2;

// Re-export commonly used types for convenience
pub use projection::{
    project_onto, ProjectionScene, Segment, DIRECTION_ANGLE_DEG, REFERENCE, SAMPLE,
};
pub use vec2::Vec2;
