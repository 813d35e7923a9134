//! Output writers for footprint reports and flamegraphs.
//!
//! This module handles:
//! - Console text reports
//! - JSON reports
//! - SVG flamegraphs

pub mod json;
pub mod schema;
pub mod svg;
pub mod text;

// Re-export main functions
pub use json::{read_report, validate_path, write_report};
pub use schema::{to_report, CategoryReport, FileMember, FileReport, FootprintReport};
pub use svg::write_svg;
pub use text::{render_namespace_report, render_symbol_list};
