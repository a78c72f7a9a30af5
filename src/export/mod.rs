//! Export functionality for the include graph.
//!
//! Instead of the interactive view, the graph (with its spring-layout
//! positions) can be written out for other tools: Graphviz DOT, a TikZ
//! picture, or JSON.

pub mod dot;
pub mod json;
pub mod tikz;

use std::io::{self, Write};

use crate::render::GraphScene;

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT digraph.
    Dot,
    /// TikZ picture using the layout positions.
    Tikz,
    /// JSON document with nodes, edges, and a summary.
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(ExportFormat::Dot),
            "tikz" => Ok(ExportFormat::Tikz),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: dot, tikz, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Dot => write!(f, "dot"),
            ExportFormat::Tikz => write!(f, "tikz"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Data container for export operations.
#[derive(Debug, Clone)]
pub struct ExportData {
    /// Directory the graph was scanned from.
    pub source_dir: String,
    /// The laid-out graph.
    pub scene: GraphScene,
}

impl ExportData {
    /// Creates export data from a scan root and its laid-out graph.
    pub fn new(source_dir: impl Into<String>, scene: GraphScene) -> Self {
        Self {
            source_dir: source_dir.into(),
            scene,
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(format: ExportFormat, data: &ExportData, writer: &mut W) -> io::Result<()> {
    match format {
        ExportFormat::Dot => dot::DotExporter.export(data, writer),
        ExportFormat::Tikz => tikz::TikzExporter.export(data, writer),
        ExportFormat::Json => json::JsonExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &ExportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
