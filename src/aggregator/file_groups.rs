//! Flat grouping of symbols by the source file nm reported for them.

use crate::parser::Symbol;
use crate::utils::config::UNKNOWN_FILE;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Symbols sharing one source file
#[derive(Debug, Clone, Serialize)]
pub struct FileGroup<'a> {
    /// Source file path, or `UNKNOWN_FILE` when nm gave none
    pub file: String,

    /// Total size of all members
    pub size: u64,

    /// Members, largest first
    pub symbols: Vec<&'a Symbol>,
}

/// Group symbols by source file
///
/// **Public** - main entry point for the file report
///
/// # Returns
/// Groups sorted by total size (descending, ties by file name), each with
/// its members sorted by size (descending)
pub fn group_by_file<'a, I>(symbols: I) -> Vec<FileGroup<'a>>
where
    I: IntoIterator<Item = &'a Symbol>,
{
    let mut by_file: HashMap<&'a str, FileGroup<'a>> = HashMap::new();

    for symbol in symbols {
        let file = symbol
            .source
            .as_ref()
            .map(|source| source.file.as_str())
            .unwrap_or(UNKNOWN_FILE);

        let group = by_file.entry(file).or_insert_with(|| FileGroup {
            file: file.to_string(),
            size: 0,
            symbols: Vec::new(),
        });
        group.size = group.size.saturating_add(symbol.size_or_zero());
        group.symbols.push(symbol);
    }

    let mut groups: Vec<FileGroup<'a>> = by_file.into_values().collect();
    for group in &mut groups {
        group
            .symbols
            .sort_by(|a, b| b.size_or_zero().cmp(&a.size_or_zero()));
    }
    groups.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.file.cmp(&b.file)));

    debug!("Grouped symbols into {} files", groups.len());
    groups
}

/// Render the file report
///
/// ```text
/// Size by source file:
/// 24 src/foo.c
///   16 foo
///     00000010 00000010 T foo	src/foo.c:3
/// ```
pub fn render_file_groups(groups: &[FileGroup<'_>]) -> String {
    let mut lines = vec!["Size by source file:".to_string()];

    for group in groups {
        lines.push(format!("{} {}", group.size, group.file));
        for symbol in &group.symbols {
            lines.push(format!("  {} {}", symbol.size_or_zero(), symbol.name));
            lines.push(format!("    {}", symbol.original));
        }
    }

    lines.join("\n")
}
