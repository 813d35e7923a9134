//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod report;

// Re-export main command functions
pub use models::{ReportArgs, ReportMode};
pub use report::{execute_report, report_from_lines, validate_args};
