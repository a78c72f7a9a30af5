//! Force-directed (spring) layout for the include graph.
//!
//! A deterministic Fruchterman-Reingold implementation: nodes start evenly
//! spaced on a circle, then repulsive forces between every node pair and
//! attractive forces along every edge pull the drawing into shape while the
//! temperature cools linearly. Positions come out normalized to the
//! configured box, ready for a canvas with symmetric bounds.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use super::include_graph::IncludeGraph;
use crate::math::Vec2;

/// Minimum distance used when two nodes coincide, to keep forces finite.
const MIN_DISTANCE: f64 = 1e-6;

/// Tuning knobs for the spring layout.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Number of force iterations to run.
    pub iterations: usize,
    /// Half-width of the output box; positions land in [-scale, scale].
    pub scale: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            scale: 1.0,
        }
    }
}

/// Computes spring-layout positions for every node in the graph.
///
/// The layout is deterministic: the same graph always produces the same
/// positions. An empty graph yields an empty map; a single node sits at
/// the origin.
///
/// # Example
///
/// ```rust
/// use srcviz::graph::{spring_layout, IncludeGraph, LayoutConfig};
///
/// let mut graph = IncludeGraph::new();
/// graph.add_edge("a.h", "b.h");
///
/// let positions = spring_layout(&graph, &LayoutConfig::default());
/// assert_eq!(positions.len(), 2);
/// ```
pub fn spring_layout(graph: &IncludeGraph, config: &LayoutConfig) -> HashMap<NodeIndex, Vec2> {
    let inner = graph.inner();
    let n = inner.node_count();

    if n == 0 {
        return HashMap::new();
    }
    if n == 1 {
        return inner.node_indices().map(|idx| (idx, Vec2::ZERO)).collect();
    }

    // Deterministic seed: nodes evenly spaced on the unit circle.
    let indices: Vec<NodeIndex> = inner.node_indices().collect();
    let mut positions: Vec<Vec2> = indices
        .iter()
        .enumerate()
        .map(|(i, _)| Vec2::from_angle_deg(360.0 * i as f64 / n as f64))
        .collect();

    // Ideal edge length for a 2x2 box.
    let k = (4.0 / n as f64).sqrt();
    let mut temperature = 0.2;

    for iteration in 0..config.iterations {
        let mut displacement = vec![Vec2::ZERO; n];

        // Repulsion between every pair of nodes.
        for i in 0..n {
            for j in (i + 1)..n {
                let delta = positions[i] - positions[j];
                let distance = delta.length().max(MIN_DISTANCE);
                let push = delta * (k * k / (distance * distance));
                displacement[i] = displacement[i] + push;
                displacement[j] = displacement[j] - push;
            }
        }

        // Attraction along edges; parallel edges simply pull twice.
        for edge in inner.edge_references() {
            let (s, t) = (edge.source().index(), edge.target().index());
            if s == t {
                continue;
            }
            let delta = positions[s] - positions[t];
            let distance = delta.length().max(MIN_DISTANCE);
            let pull = delta * (distance / k);
            displacement[s] = displacement[s] - pull;
            displacement[t] = displacement[t] + pull;
        }

        // Move each node, capped by the current temperature.
        for i in 0..n {
            let length = displacement[i].length();
            if length > MIN_DISTANCE {
                positions[i] = positions[i] + displacement[i] * (length.min(temperature) / length);
            }
        }

        // Linear cooling.
        temperature *= 1.0 - (iteration as f64 + 1.0) / config.iterations as f64;
    }

    // Normalize into [-scale, scale] around the centroid.
    let centroid = positions
        .iter()
        .fold(Vec2::ZERO, |acc, &p| acc + p)
        * (1.0 / n as f64);
    let mut max_extent: f64 = 0.0;
    for p in &mut positions {
        *p = *p - centroid;
        max_extent = max_extent.max(p.x.abs()).max(p.y.abs());
    }
    if max_extent > 0.0 {
        let factor = config.scale / max_extent;
        for p in &mut positions {
            *p = *p * factor;
        }
    }

    indices.into_iter().zip(positions).collect()
}
