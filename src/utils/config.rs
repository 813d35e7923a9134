//! Configuration and constants for the CLI.

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Symbol dump tool invoked when `--nm` is not given
pub const DEFAULT_NM_PROGRAM: &str = "nm";

// -C demangles, -S prints sizes. -l (line numbers) is opt-in, it is slow on big binaries.
pub const NM_BASE_ARGS: &[&str] = &["-C", "-S"];
pub const NM_LINE_NUMBERS_ARG: &str = "-l";

/// Separator between nested scopes in a demangled name
pub const SCOPE_SEPARATOR: &str = "::";

/// File key used for symbols that carry no source location
pub const UNKNOWN_FILE: &str = "<unknown>";

// Flamegraph defaults
pub const DEFAULT_FLAMEGRAPH_TITLE: &str = "Binary Size Footprint";
pub const DEFAULT_FLAMEGRAPH_WIDTH: usize = 1200;
