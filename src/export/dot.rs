//! Graphviz DOT export implementation.
//!
//! Writes the include graph as a plain `digraph`. Layout positions are not
//! carried over; Graphviz computes its own.

use std::io::{self, Write};

use super::{ExportData, Exporter};

/// DOT exporter implementation.
pub struct DotExporter;

/// Escapes a label for a double-quoted DOT string.
fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Exporter for DotExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let scene = &data.scene;

        writeln!(writer, "digraph includes {{")?;
        writeln!(writer, "    // scanned from {}", escape(&data.source_dir))?;

        for label in &scene.labels {
            writeln!(writer, "    \"{}\";", escape(label))?;
        }
        for &(source, target) in &scene.edges {
            writeln!(
                writer,
                "    \"{}\" -> \"{}\";",
                escape(&scene.labels[source]),
                escape(&scene.labels[target])
            )?;
        }

        writeln!(writer, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::{empty_data, sample_data};

    #[test]
    fn test_dot_export_names_every_edge() {
        let output = crate::export::export_to_string(crate::export::ExportFormat::Dot, &sample_data())
            .unwrap();

        assert!(output.starts_with("digraph includes {"));
        assert!(output.contains("\"Renderer.h\" -> \"Scene.h\";"));
        // Duplicate edge written once per occurrence.
        assert_eq!(output.matches("\"Ui.h\" -> \"Scene.h\";").count(), 2);
        assert!(output.trim_end().ends_with('}'));
    }

    #[test]
    fn test_dot_export_lists_nodes() {
        let output = crate::export::export_to_string(crate::export::ExportFormat::Dot, &sample_data())
            .unwrap();
        for node in ["Renderer.h", "Scene.h", "Ui.h"] {
            assert!(output.contains(&format!("\"{}\";", node)));
        }
    }

    #[test]
    fn test_dot_export_empty_graph() {
        let output =
            crate::export::export_to_string(crate::export::ExportFormat::Dot, &empty_data())
                .unwrap();
        assert!(output.contains("digraph includes {"));
        assert!(!output.contains("->"));
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape("a\"b.h"), "a\\\"b.h");
        assert_eq!(escape("plain.h"), "plain.h");
    }
}
