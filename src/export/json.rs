//! JSON export implementation.
//!
//! Machine-readable dump of the graph: nodes with their layout positions,
//! edges by label, and a summary block.

use std::io::{self, Write};

use serde::Serialize;

use super::{ExportData, Exporter};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Serializable node for JSON output.
#[derive(Serialize)]
struct JsonNode {
    name: String,
    x: f64,
    y: f64,
}

/// Serializable edge for JSON output.
#[derive(Serialize)]
struct JsonEdge {
    from: String,
    to: String,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    nodes: usize,
    edges: usize,
    cyclic: bool,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport {
    source_dir: String,
    summary: JsonSummary,
    nodes: Vec<JsonNode>,
    edges: Vec<JsonEdge>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let scene = &data.scene;

        let nodes: Vec<JsonNode> = scene
            .labels
            .iter()
            .zip(&scene.positions)
            .map(|(label, position)| JsonNode {
                name: label.clone(),
                x: position.x,
                y: position.y,
            })
            .collect();

        let edges: Vec<JsonEdge> = scene
            .edges
            .iter()
            .map(|&(source, target)| JsonEdge {
                from: scene.labels[source].clone(),
                to: scene.labels[target].clone(),
            })
            .collect();

        let export = JsonExport {
            source_dir: data.source_dir.clone(),
            summary: JsonSummary {
                nodes: scene.node_count(),
                edges: scene.edge_count(),
                cyclic: scene.cyclic,
            },
            nodes,
            edges,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::{empty_data, sample_data};
    use crate::export::{export_to_string, ExportFormat};

    #[test]
    fn test_json_export_summary_counts() {
        let output = export_to_string(ExportFormat::Json, &sample_data()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["source_dir"], "src");
        assert_eq!(parsed["summary"]["nodes"], 3);
        assert_eq!(parsed["summary"]["edges"], 3);
        assert_eq!(parsed["summary"]["cyclic"], false);
    }

    #[test]
    fn test_json_export_edges_by_label() {
        let output = export_to_string(ExportFormat::Json, &sample_data()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        let edges = parsed["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0]["from"], "Renderer.h");
        assert_eq!(edges[0]["to"], "Scene.h");

        // Duplicate edge kept per occurrence.
        let duplicates = edges
            .iter()
            .filter(|e| e["from"] == "Ui.h" && e["to"] == "Scene.h")
            .count();
        assert_eq!(duplicates, 2);
    }

    #[test]
    fn test_json_export_nodes_have_positions() {
        let output = export_to_string(ExportFormat::Json, &sample_data()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        for node in parsed["nodes"].as_array().unwrap() {
            assert!(node["x"].is_f64() || node["x"].is_i64());
            assert!(node["y"].is_f64() || node["y"].is_i64());
        }
    }

    #[test]
    fn test_json_export_empty_graph() {
        let output = export_to_string(ExportFormat::Json, &empty_data()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["summary"]["nodes"], 0);
        assert_eq!(parsed["nodes"].as_array().unwrap().len(), 0);
    }
}
