//! Include-dependency graph implementation using petgraph.
//!
//! A directed graph whose nodes are file names and whose edges point from a
//! file to the file it includes. Nodes exist only because an include
//! relation mentioned them, so an included file that is not on disk still
//! appears as a dangling node, and a header with no includes contributes
//! nothing.

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

use crate::parser::HeaderFile;

/// A directed graph of include relations between files.
///
/// Edges point from the including file to the included file. Parallel
/// edges are kept: one edge per matching include line, duplicates and all.
///
/// # Example
///
/// ```rust
/// use srcviz::graph::IncludeGraph;
///
/// let mut graph = IncludeGraph::new();
/// graph.add_edge("Renderer.h", "Scene.h");
/// graph.add_edge("Ui.h", "Scene.h");
/// graph.add_edge("Ui.h", "Scene.h"); // second occurrence is kept
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IncludeGraph {
    /// The underlying directed graph; node weights are file names.
    graph: DiGraph<String, ()>,
    /// Maps file names to their node indices for O(1) lookup.
    node_indices: HashMap<String, NodeIndex>,
}

impl IncludeGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with pre-allocated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            node_indices: HashMap::with_capacity(nodes),
        }
    }

    /// Builds the graph from parsed header files.
    ///
    /// Only include relations create nodes: a header without includes does
    /// not appear, while every target does, present on disk or not.
    ///
    /// # Example
    ///
    /// ```rust
    /// use srcviz::graph::IncludeGraph;
    /// use srcviz::parser::HeaderFile;
    ///
    /// let headers = vec![
    ///     HeaderFile::new("Ui.h", vec!["Scene.h".to_string()]),
    ///     HeaderFile::new("System.h", Vec::new()),
    /// ];
    /// let graph = IncludeGraph::from_headers(&headers);
    ///
    /// assert!(graph.contains_node("Ui.h"));
    /// assert!(graph.contains_node("Scene.h"));
    /// assert!(!graph.contains_node("System.h")); // no relations, no node
    /// ```
    pub fn from_headers(headers: &[HeaderFile]) -> Self {
        let edge_count: usize = headers.iter().map(HeaderFile::include_count).sum();
        let mut graph = Self::with_capacity(edge_count, edge_count);
        for header in headers {
            for target in &header.includes {
                graph.add_edge(&header.name, target);
            }
        }
        graph
    }

    /// Returns the node index for a file name, creating the node if it is
    /// not in the graph yet.
    pub fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.node_indices.insert(name.to_string(), idx);
        idx
    }

    /// Adds a directed edge from `from` to `to`, creating either node on
    /// demand. Duplicate calls add parallel edges.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let from_idx = self.ensure_node(from);
        let to_idx = self.ensure_node(to);
        self.graph.add_edge(from_idx, to_idx, ());
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges in the graph, counting parallel edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns true if a file name is a node in the graph.
    pub fn contains_node(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    /// Looks up the node index for a file name.
    pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.node_indices.get(name).copied()
    }

    /// The file name at a node index.
    pub fn label(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Iterates over all node labels.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Returns every edge as a (source label, target label) pair, in
    /// insertion order, duplicates included.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_references()
            .map(|e| {
                (
                    self.graph[e.source()].as_str(),
                    self.graph[e.target()].as_str(),
                )
            })
            .collect()
    }

    /// Returns true if the graph contains a directed cycle.
    pub fn is_cyclic(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Access to the underlying petgraph structure, used by the layout.
    pub fn inner(&self) -> &DiGraph<String, ()> {
        &self.graph
    }
}
