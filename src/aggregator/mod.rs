//! Aggregation of parsed symbols into size reports.
//!
//! This module transforms parsed nm records into:
//! - Namespace trees (sizes rolled up along scope paths)
//! - File groups (sizes summed per source file)
//! - Per-category size statistics

pub mod file_groups;
pub mod metrics;
pub mod namespace_tree;

// Re-export main types and functions
pub use file_groups::{group_by_file, render_file_groups, FileGroup};
pub use metrics::{partition_by_type, summarize, SizeSummary};
pub use namespace_tree::{build_namespace_tree, NamespaceNode};
