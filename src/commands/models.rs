use crate::flamegraph::FlamegraphConfig;
use crate::nm::NmOptions;
use crate::parser::SymbolType;
use clap::ValueEnum;
use std::path::PathBuf;

/// How the report groups symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportMode {
    /// Size rolled up along nested scopes, one tree per category
    #[default]
    Namespace,
    /// Size summed per source file (needs nm line numbers)
    File,
    /// Every parsed symbol, one per line
    Symbols,
}

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Binary to inspect
    pub binary: PathBuf,

    /// Grouping of the console report
    pub mode: ReportMode,

    /// Deepest namespace level printed (0 = unlimited)
    pub max_depth: usize,

    /// Restrict the report to one category
    pub category: Option<SymbolType>,

    /// nm invocation settings
    pub nm: NmOptions,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for SVG flamegraph (optional)
    pub output_svg: Option<PathBuf>,

    /// Flamegraph configuration
    pub flamegraph_config: Option<FlamegraphConfig>,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            binary: PathBuf::new(),
            mode: ReportMode::default(),
            max_depth: 0,
            category: None,
            nm: NmOptions::default(),
            output_json: None,
            output_svg: None,
            flamegraph_config: None,
        }
    }
}
