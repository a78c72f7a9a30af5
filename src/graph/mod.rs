//! Graph module for include-relationship modeling.
//!
//! Provides the [`IncludeGraph`] struct for building the directed
//! include-dependency graph and [`spring_layout`] for positioning it.
//!
//! # Example
//!
//! ```rust
//! use srcviz::graph::{spring_layout, IncludeGraph, LayoutConfig};
//!
//! let mut graph = IncludeGraph::new();
//! graph.add_edge("Renderer.h", "Scene.h");
//! graph.add_edge("Ui.h", "Scene.h");
//!
//! assert_eq!(graph.node_count(), 3);
//! let positions = spring_layout(&graph, &LayoutConfig::default());
//! assert_eq!(positions.len(), 3);
//! ```

mod include_graph;
pub mod layout;

pub use include_graph::IncludeGraph;
pub use layout::{spring_layout, LayoutConfig};
