//! Terminal UI module for srcviz.
//!
//! The interactive [`crate::render::Renderer`] implementation: a blocking
//! ratatui view per scene kind, closed with `q` or Esc.

pub mod app;
pub mod graph_view;
pub mod vector_view;

use anyhow::Result;

use crate::math::ProjectionScene;
use crate::render::{GraphScene, Renderer};

pub use app::{run_app, run_blocking, View};
pub use graph_view::GraphView;
pub use vector_view::VectorView;

/// Interactive terminal renderer. Each call opens a full-screen view and
/// blocks until the user closes it.
pub struct TuiRenderer;

impl Renderer for TuiRenderer {
    fn render_graph(&mut self, scene: &GraphScene) -> Result<()> {
        let view = GraphView::new(scene);
        app::run_blocking(&view)?;
        Ok(())
    }

    fn render_projection(&mut self, scene: &ProjectionScene) -> Result<()> {
        let view = VectorView::new(scene);
        app::run_blocking(&view)?;
        Ok(())
    }
}
