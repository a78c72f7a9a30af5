//! srcviz - include-dependency graphs and vector projection plots in the terminal
//!
//! Two independent, single-pass batch utilities behind one binary: `deps`
//! scans a directory of header files, builds the directed include graph,
//! and shows it with a spring layout; `project` computes scalar projections
//! of two fixed vectors onto a fixed direction and plots the labeled
//! segments. Both end in a blocking terminal view, or a headless text
//! summary, or (for `deps`) an export file.

pub mod export;
pub mod graph;
pub mod math;
pub mod parser;
pub mod render;
pub mod ui;
