//! Renderer seam for srcviz.
//!
//! Display is injected as a capability: the computational core produces
//! renderer-independent scenes ([`GraphScene`], [`crate::math::ProjectionScene`])
//! and anything implementing [`Renderer`] can show them. The terminal UI is
//! one implementation; [`TextRenderer`] is a headless one used by
//! `--headless` runs and by tests that have no graphical environment.

use std::collections::HashMap;
use std::io::Write;

use anyhow::Result;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::graph::IncludeGraph;
use crate::math::{ProjectionScene, Vec2};

/// A laid-out include graph in renderer-independent form.
///
/// Nodes are plain indices into `labels`/`positions`; edges are index
/// pairs. Built once from the graph and its layout, then handed to
/// whatever renderer is in play.
#[derive(Debug, Clone)]
pub struct GraphScene {
    /// Node labels, one per node.
    pub labels: Vec<String>,
    /// Node positions from the spring layout, parallel to `labels`.
    pub positions: Vec<Vec2>,
    /// Edges as (source, target) index pairs, duplicates included.
    pub edges: Vec<(usize, usize)>,
    /// Whether the graph contains a directed cycle.
    pub cyclic: bool,
}

impl GraphScene {
    /// Builds a scene from a graph and its layout positions.
    pub fn new(graph: &IncludeGraph, layout: &HashMap<NodeIndex, Vec2>) -> Self {
        let inner = graph.inner();
        let indices: Vec<NodeIndex> = inner.node_indices().collect();
        let index_of: HashMap<NodeIndex, usize> = indices
            .iter()
            .enumerate()
            .map(|(i, &idx)| (idx, i))
            .collect();

        let labels = indices
            .iter()
            .map(|&idx| graph.label(idx).to_string())
            .collect();
        let positions = indices
            .iter()
            .map(|&idx| layout.get(&idx).copied().unwrap_or(Vec2::ZERO))
            .collect();
        let edges = inner
            .edge_references()
            .map(|e| (index_of[&e.source()], index_of[&e.target()]))
            .collect();

        Self {
            labels,
            positions,
            edges,
            cyclic: graph.is_cyclic(),
        }
    }

    /// Returns true if the scene has nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of nodes in the scene.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges in the scene, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// A display capability for the two scene kinds.
///
/// Implementations may block (the terminal UI does, until the user closes
/// the view) or complete immediately (the text renderer).
pub trait Renderer {
    /// Displays a laid-out include graph.
    fn render_graph(&mut self, scene: &GraphScene) -> Result<()>;

    /// Displays a vector projection scene.
    fn render_projection(&mut self, scene: &ProjectionScene) -> Result<()>;
}

/// Headless renderer writing a plain-text summary to any writer.
pub struct TextRenderer<W: Write> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a text renderer over the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render_graph(&mut self, scene: &GraphScene) -> Result<()> {
        writeln!(
            self.writer,
            "include graph: {} nodes, {} edges{}",
            scene.node_count(),
            scene.edge_count(),
            if scene.cyclic { ", cyclic" } else { "" }
        )?;
        for (label, position) in scene.labels.iter().zip(&scene.positions) {
            writeln!(self.writer, "  {} @ {}", label, position)?;
        }
        for &(source, target) in &scene.edges {
            writeln!(
                self.writer,
                "  {} -> {}",
                scene.labels[source], scene.labels[target]
            )?;
        }
        Ok(())
    }

    fn render_projection(&mut self, scene: &ProjectionScene) -> Result<()> {
        writeln!(
            self.writer,
            "projection scene: v at {} degrees",
            scene.v.angle_deg()
        )?;
        for segment in scene.segments() {
            writeln!(
                self.writer,
                "  {}: {} -> {}",
                segment.label, segment.from, segment.to
            )?;
        }
        Ok(())
    }
}
