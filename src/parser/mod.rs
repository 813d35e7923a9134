//! nm output parsing.
//!
//! This module handles:
//! - Classifying nm category codes
//! - Parsing nm lines into symbol records
//! - Splitting demangled names into scope segments

pub mod namespace;
pub mod nm_line;
pub mod symbol_type;

// Re-export main types
pub use namespace::split_namespace;
pub use nm_line::{parse_line, parse_line_bytes, parse_lines, Source, Symbol};
pub use symbol_type::SymbolType;
