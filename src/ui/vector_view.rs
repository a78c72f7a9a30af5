//! Chart view for the vector projection scene.
//!
//! Each labeled segment becomes one line dataset, so the chart legend
//! doubles as the segment legend. Both axes span the fixed symmetric
//! bounds, axis rulers through the origin stand in for a grid, and the
//! plot area is centered as a square-ish region because terminal cells are
//! roughly twice as tall as they are wide.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use super::app::View;
use crate::math::ProjectionScene;

/// Symmetric plot bounds on both axes.
const PLOT_BOUND: f64 = 5.0;

/// One color per segment, in segment order.
const SEGMENT_COLORS: [Color; 6] = [
    Color::Green,   // r
    Color::Yellow,  // v (offset)
    Color::Cyan,    // a
    Color::Magenta, // e
    Color::Blue,    // a - e
    Color::Red,     // r - er
];

/// Blocking view over a [`ProjectionScene`].
pub struct VectorView {
    scene: ProjectionScene,
    labels: Vec<&'static str>,
    series: Vec<[(f64, f64); 2]>,
}

impl VectorView {
    /// Creates a view over a projection scene, materializing the segment
    /// endpoints in the shape chart datasets borrow.
    pub fn new(scene: &ProjectionScene) -> Self {
        let segments = scene.segments();
        let labels = segments.iter().map(|s| s.label).collect();
        let series = segments
            .iter()
            .map(|s| [s.from.to_tuple(), s.to.to_tuple()])
            .collect();
        Self {
            scene: *scene,
            labels,
            series,
        }
    }
}

impl View for VectorView {
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Chart
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        render_header(frame, chunks[0]);
        render_chart(frame, self, chunks[1]);
        render_footer(frame, &self.scene, chunks[2]);
    }
}

/// Render the header bar.
fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("srcviz - Vector Projection")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Axis ruler datasets through the origin; unnamed, so they stay out of
/// the legend.
const X_RULER: [(f64, f64); 2] = [(-PLOT_BOUND, 0.0), (PLOT_BOUND, 0.0)];
const Y_RULER: [(f64, f64); 2] = [(0.0, -PLOT_BOUND), (0.0, PLOT_BOUND)];

/// Render the projection chart with one dataset per segment.
fn render_chart(frame: &mut Frame, view: &VectorView, area: Rect) {
    let mut datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&X_RULER),
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&Y_RULER),
    ];

    for ((label, points), color) in view
        .labels
        .iter()
        .zip(&view.series)
        .zip(SEGMENT_COLORS.iter())
    {
        datasets.push(
            Dataset::default()
                .name(*label)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(points),
        );
    }

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title("Projection onto the 340-degree line")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("x")
                .style(Style::default().fg(Color::Gray))
                .bounds([-PLOT_BOUND, PLOT_BOUND])
                .labels(["-5.0", "0.0", "5.0"]),
        )
        .y_axis(
            Axis::default()
                .title("y")
                .style(Style::default().fg(Color::Gray))
                .bounds([-PLOT_BOUND, PLOT_BOUND])
                .labels(["-5.0", "0.0", "5.0"]),
        );

    frame.render_widget(chart, square_area(area));
}

/// Render the footer with key hints and the two angle readouts.
fn render_footer(frame: &mut Frame, scene: &ProjectionScene, area: Rect) {
    let content = Line::from(vec![
        Span::styled("q/Esc: close", Style::default().fg(Color::Gray)),
        Span::styled(
            format!(
                "  angle(v) = {:.1}  angle(e) = {:.1}",
                scene.v.angle_deg(),
                scene.e().angle_deg()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Centers a square-ish plot region in the given area.
///
/// Terminal cells are about 2:1 tall, so a region twice as wide as it is
/// high reads as equal-aspect.
fn square_area(area: Rect) -> Rect {
    let target_width = u16::try_from((u32::from(area.height) * 2).min(u32::from(area.width)))
        .unwrap_or(area.width);
    Rect {
        x: area.x + (area.width - target_width) / 2,
        y: area.y,
        width: target_width,
        height: area.height,
    }
}
