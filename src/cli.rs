use clap::Parser;
use sbom_merge_graph::application::dto::OutputFormat;
use std::path::PathBuf;

/// Merge a sequence of CycloneDX SBOMs into one dependency graph and lay it out
#[derive(Parser, Debug)]
#[command(name = "sbom-merge-graph")]
#[command(version)]
#[command(about = "Merge a sequence of CycloneDX SBOMs into one dependency graph and lay it out", long_about = None)]
pub struct Args {
    /// SBOM documents (file paths or http(s) URLs), merged in the given order
    #[arg(value_name = "DOCUMENT")]
    pub documents: Vec<String>,

    /// Merge the document at this 1-based position in force mode
    /// (replaces dependency lists instead of appending). Repeatable.
    #[arg(long = "force", value_name = "POS")]
    pub force: Vec<usize>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./sbom-merge-graph.config.yml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Viewport width used for the layout
    #[arg(long)]
    pub width: Option<f64>,

    /// Viewport height used for the layout
    #[arg(long)]
    pub height: Option<f64>,

    /// Margin kept free on every side of the viewport
    #[arg(long)]
    pub margin: Option<f64>,

    /// Step the history back N entries after the last merge
    #[arg(long = "back", value_name = "N", default_value_t = 0)]
    pub back: usize,

    /// Highlight a node in the output. Repeatable.
    #[arg(long = "highlight", value_name = "ID")]
    pub highlight: Vec<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
