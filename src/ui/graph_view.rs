//! Canvas view for the spring-laid-out include graph.
//!
//! Edges are drawn as braille lines between the layout positions and each
//! node carries its file name as a printed label, so the force-directed
//! shape reads directly off the terminal.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

use super::app::View;
use crate::render::GraphScene;

/// Canvas bounds; slightly wider than the layout box so labels near the
/// edge stay visible.
const CANVAS_BOUND: f64 = 1.3;

/// Blocking view over a [`GraphScene`].
pub struct GraphView<'a> {
    scene: &'a GraphScene,
}

impl<'a> GraphView<'a> {
    /// Creates a view over a laid-out graph scene.
    pub fn new(scene: &'a GraphScene) -> Self {
        Self { scene }
    }
}

impl View for GraphView<'_> {
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Canvas
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        render_header(frame, chunks[0]);
        render_canvas(frame, self.scene, chunks[1]);
        render_footer(frame, self.scene, chunks[2]);
    }
}

/// Render the header bar.
fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("srcviz - Include Dependency Graph")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Render the graph canvas: edges first, labels on a layer above.
fn render_canvas(frame: &mut Frame, scene: &GraphScene, area: Rect) {
    let title = format!(
        "Spring Layout ({} nodes, {} edges)",
        scene.node_count(),
        scene.edge_count()
    );

    let canvas = Canvas::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .x_bounds([-CANVAS_BOUND, CANVAS_BOUND])
        .y_bounds([-CANVAS_BOUND, CANVAS_BOUND])
        .paint(|ctx| {
            for &(source, target) in &scene.edges {
                let from = scene.positions[source];
                let to = scene.positions[target];
                ctx.draw(&CanvasLine {
                    x1: from.x,
                    y1: from.y,
                    x2: to.x,
                    y2: to.y,
                    color: Color::DarkGray,
                });
            }

            ctx.layer();

            for (label, position) in scene.labels.iter().zip(&scene.positions) {
                ctx.print(
                    position.x,
                    position.y,
                    Line::from(Span::styled(
                        label.clone(),
                        Style::default().fg(Color::Green),
                    )),
                );
            }
        });
    frame.render_widget(canvas, area);
}

/// Render the footer with key hints and the cycle warning.
fn render_footer(frame: &mut Frame, scene: &GraphScene, area: Rect) {
    let mut spans = vec![Span::styled(
        "q/Esc: close",
        Style::default().fg(Color::Gray),
    )];
    if scene.is_empty() {
        spans.push(Span::styled(
            "  (no include relations found)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    if scene.cyclic {
        spans.push(Span::styled(
            "  cycle detected",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
