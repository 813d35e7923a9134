//! Footprint CLI
//!
//! Breaks down the size of an executable by namespace or by source file.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use footprint::commands::{execute_report, validate_args, ReportArgs, ReportMode};
use footprint::flamegraph::FlamegraphConfig;
use footprint::nm::NmOptions;
use footprint::parser::SymbolType;
use footprint::utils::config::{DEFAULT_FLAMEGRAPH_WIDTH, DEFAULT_NM_PROGRAM};

/// Footprint - where does the size of a binary come from
#[derive(Parser, Debug)]
#[command(name = "footprint")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Binary to inspect
    binary: PathBuf,

    /// How to group the report
    #[arg(long = "by", value_enum, default_value_t = ReportMode::Namespace)]
    mode: ReportMode,

    /// Deepest namespace level to print (0 = unlimited)
    #[arg(short, long, default_value = "0")]
    depth: usize,

    /// Only report one category, by nm code (t, d, r, b, w, u, n, a)
    #[arg(short, long)]
    category: Option<SymbolType>,

    /// Ask nm for source locations (needed for --by file)
    #[arg(short, long)]
    line_numbers: bool,

    /// nm executable to run
    #[arg(long, default_value = DEFAULT_NM_PROGRAM)]
    nm: PathBuf,

    /// Output path for JSON report (optional)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Output path for SVG flamegraph (optional)
    #[arg(short, long)]
    flamegraph: Option<PathBuf>,

    /// Flamegraph title
    #[arg(long)]
    title: Option<String>,

    /// Flamegraph width in pixels
    #[arg(long, default_value_t = DEFAULT_FLAMEGRAPH_WIDTH)]
    width: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let flamegraph_config = cli.flamegraph.as_ref().map(|_| {
        let config = FlamegraphConfig::new().with_width(cli.width);
        match cli.title.clone() {
            Some(title) => config.with_title(title),
            None => config,
        }
    });

    let args = ReportArgs {
        binary: cli.binary,
        mode: cli.mode,
        max_depth: cli.depth,
        category: cli.category,
        nm: NmOptions {
            program: cli.nm,
            line_numbers: cli.line_numbers,
        },
        output_json: cli.json,
        output_svg: cli.flamegraph,
        flamegraph_config,
    };

    validate_args(&args)?;
    execute_report(&args)?;

    Ok(())
}
