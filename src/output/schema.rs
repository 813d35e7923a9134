//! Output JSON schema definitions for footprint reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{
    build_namespace_tree, group_by_file, partition_by_type, summarize, FileGroup, NamespaceNode,
    SizeSummary,
};
use crate::parser::{Symbol, SymbolType};
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Binary that was inspected
    pub binary: String,

    /// Number of symbol records parsed
    pub symbol_count: usize,

    /// One entry per category present in the binary
    pub categories: Vec<CategoryReport>,

    /// Size by source file (empty when nm gave no locations)
    #[serde(default)]
    pub files: Vec<FileReport>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

impl FootprintReport {
    /// Report section for one category
    pub fn category(&self, symbol_type: SymbolType) -> Option<&CategoryReport> {
        self.categories
            .iter()
            .find(|c| c.symbol_type == symbol_type)
    }
}

/// Namespace breakdown of one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryReport {
    pub symbol_type: SymbolType,
    pub summary: SizeSummary,
    pub tree: NamespaceNode,
}

/// Size attributed to one source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    pub size: u64,
    pub symbols: Vec<FileMember>,
}

/// A symbol listed under its source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMember {
    pub name: String,
    pub size: Option<u64>,
    pub original: String,
}

impl From<&FileGroup<'_>> for FileReport {
    fn from(group: &FileGroup<'_>) -> Self {
        Self {
            file: group.file.clone(),
            size: group.size,
            symbols: group
                .symbols
                .iter()
                .map(|symbol| FileMember {
                    name: symbol.name.clone(),
                    size: symbol.size,
                    original: symbol.original.clone(),
                })
                .collect(),
        }
    }
}

/// Build the JSON report from parsed symbols
///
/// **Public** - used by commands to create final output
///
/// Files are included only when at least one symbol has a source location.
pub fn to_report(binary: &Path, symbols: &[Symbol]) -> FootprintReport {
    use chrono::Utc;

    let categories = partition_by_type(symbols)
        .into_iter()
        .map(|(symbol_type, members)| CategoryReport {
            symbol_type,
            summary: summarize(members.iter().copied()),
            tree: build_namespace_tree(members.iter().copied()),
        })
        .collect();

    let files = if symbols.iter().any(Symbol::has_source) {
        group_by_file(symbols).iter().map(FileReport::from).collect()
    } else {
        Vec::new()
    };

    FootprintReport {
        version: SCHEMA_VERSION.to_string(),
        binary: binary.display().to_string(),
        symbol_count: symbols.len(),
        categories,
        files,
        generated_at: Utc::now().to_rfc3339(),
    }
}
