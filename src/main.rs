use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use srcviz::export::{self, ExportData, ExportFormat};
use srcviz::graph::{spring_layout, IncludeGraph, LayoutConfig};
use srcviz::math::ProjectionScene;
use srcviz::parser::{scan_directory, HEADER_SUFFIX, INCLUDE_PREFIX};
use srcviz::render::{GraphScene, Renderer, TextRenderer};
use srcviz::ui::TuiRenderer;

#[derive(Parser)]
#[command(name = "srcviz")]
#[command(version = "0.1.0")]
#[command(about = "Include dependency graphs and vector projection plots in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and display the include dependency graph of a header directory
    Deps {
        /// Directory to scan (defaults to the conventional source dir)
        #[arg(short, long, default_value = "src")]
        path: String,

        /// File name suffix that marks a header file
        #[arg(long, default_value = HEADER_SUFFIX)]
        suffix: String,

        /// Include-directive prefix matched at the start of a line
        #[arg(long, default_value = INCLUDE_PREFIX)]
        prefix: String,

        /// Export the graph instead of displaying it (dot, tikz, json)
        #[arg(short, long)]
        export: Option<String>,

        /// Output file for the export (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Print a text summary instead of opening the interactive view
        #[arg(long)]
        headless: bool,
    },
    /// Compute and display the fixed vector projection scene
    Project {
        /// Print a text summary instead of opening the interactive view
        #[arg(long)]
        headless: bool,
    },
    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Deps {
            path,
            suffix,
            prefix,
            export,
            output,
            headless,
        }) => run_deps(
            &path,
            &suffix,
            &prefix,
            export.as_deref(),
            output.as_deref(),
            headless,
        ),
        Some(Commands::Project { headless }) => run_project(headless),
        Some(Commands::Version) => {
            println!("srcviz v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("srcviz - Include Graphs and Projection Plots");
            println!("Run 'srcviz deps' to display an include dependency graph");
            println!("Run 'srcviz project' to display the vector projection scene");
            println!("Run 'srcviz --help' for more information");
            Ok(())
        }
    }
}

/// Scan, build, lay out, then display or export the include graph.
fn run_deps(
    path: &str,
    suffix: &str,
    prefix: &str,
    export: Option<&str>,
    output: Option<&str>,
    headless: bool,
) -> Result<()> {
    let outcome = scan_directory(Path::new(path), suffix, prefix)
        .with_context(|| format!("failed to scan {}", path))?;

    // Raw directory listing, printed before processing.
    println!("{:?}", outcome.listing);

    let graph = IncludeGraph::from_headers(&outcome.headers);
    let layout = spring_layout(&graph, &LayoutConfig::default());
    let scene = GraphScene::new(&graph, &layout);

    if let Some(format) = export {
        let format: ExportFormat = format.parse().map_err(|e: String| anyhow!(e))?;
        let data = ExportData::new(path, scene);
        return match output {
            Some(file) => {
                let mut writer = File::create(file)
                    .with_context(|| format!("failed to create {}", file))?;
                export::export(format, &data, &mut writer)
                    .with_context(|| format!("failed to write {} export", format))
            }
            None => export::export(format, &data, &mut io::stdout())
                .with_context(|| format!("failed to write {} export", format)),
        };
    }

    if headless {
        TextRenderer::new(io::stdout()).render_graph(&scene)
    } else {
        TuiRenderer.render_graph(&scene)
    }
}

/// Print the two angle readouts, then display the projection scene.
fn run_project(headless: bool) -> Result<()> {
    let scene = ProjectionScene::standard();

    println!("{}", scene.v.angle_deg());
    println!("{}", scene.e().angle_deg());

    if headless {
        TextRenderer::new(io::stdout()).render_projection(&scene)
    } else {
        TuiRenderer.render_projection(&scene)
    }
}
