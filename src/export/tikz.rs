//! TikZ export implementation.
//!
//! Writes the graph as a `tikzpicture`, placing each node at its
//! spring-layout position so the LaTeX output mirrors the interactive
//! view.

use std::io::{self, Write};

use super::{ExportData, Exporter};

/// Scale factor from layout coordinates (unit box) to TikZ centimeters.
const TIKZ_SCALE: f64 = 4.0;

/// TikZ exporter implementation.
pub struct TikzExporter;

/// Escapes the TeX special characters that can appear in file names.
fn escape(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '_' | '#' | '%' | '&' | '$' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '{' => escaped.push_str("\\{"),
            '}' => escaped.push_str("\\}"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Exporter for TikzExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let scene = &data.scene;

        writeln!(writer, "% include graph of {}", data.source_dir)?;
        writeln!(writer, "\\begin{{tikzpicture}}")?;

        for (i, (label, position)) in scene.labels.iter().zip(&scene.positions).enumerate() {
            writeln!(
                writer,
                "  \\node ({}) at ({:.3}, {:.3}) {{{}}};",
                node_id(i),
                position.x * TIKZ_SCALE,
                position.y * TIKZ_SCALE,
                escape(label)
            )?;
        }

        for &(source, target) in &scene.edges {
            writeln!(
                writer,
                "  \\draw[->] ({}) -- ({});",
                node_id(source),
                node_id(target)
            )?;
        }

        writeln!(writer, "\\end{{tikzpicture}}")
    }
}

/// Stable node identifier used inside the picture.
fn node_id(index: usize) -> String {
    format!("n{}", index)
}
