//! Per-category partitioning and size statistics.

use crate::parser::{Symbol, SymbolType};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Split symbols by category, keeping input order within each category
///
/// **Public** - each partition feeds one namespace tree
pub fn partition_by_type<'a, I>(symbols: I) -> BTreeMap<SymbolType, Vec<&'a Symbol>>
where
    I: IntoIterator<Item = &'a Symbol>,
{
    let mut partitions: BTreeMap<SymbolType, Vec<&'a Symbol>> = BTreeMap::new();
    for symbol in symbols {
        partitions.entry(symbol.symbol_type).or_default().push(symbol);
    }

    debug!("Partitioned symbols into {} categories", partitions.len());
    partitions
}

/// Size statistics for a set of symbols
///
/// **Public** - returned from summarize
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSummary {
    /// Number of symbols
    pub symbol_count: usize,

    /// Number of symbols nm reported a size for
    pub sized_count: usize,

    /// Sum of all sizes (saturates at `u64::MAX`)
    pub total_size: u64,

    /// Name and size of the largest symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest: Option<(String, u64)>,
}

impl SizeSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        let largest = match &self.largest {
            Some((name, size)) => format!("{} ({} bytes)", name, size),
            None => "-".to_string(),
        };
        format!(
            "Total: {} bytes | Symbols: {} | Sized: {} | Largest: {}",
            self.total_size, self.symbol_count, self.sized_count, largest
        )
    }
}

/// Calculate size statistics
pub fn summarize<'a, I>(symbols: I) -> SizeSummary
where
    I: IntoIterator<Item = &'a Symbol>,
{
    let mut summary = SizeSummary::default();
    let mut largest: Option<&Symbol> = None;

    for symbol in symbols {
        summary.symbol_count += 1;
        if !symbol.has_size() {
            continue;
        }
        let size = symbol.size_or_zero();
        summary.sized_count += 1;
        summary.total_size = summary.total_size.saturating_add(size);
        if largest.map_or(true, |best| size > best.size_or_zero()) {
            largest = Some(symbol);
        }
    }

    summary.largest = largest.map(|s| (s.name.clone(), s.size_or_zero()));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    #[test]
    fn test_partition_by_type() {
        let symbols: Vec<Symbol> = [
            "00000010 00000004 t foo",
            "20000000 00000008 D counter",
            "00000020 00000002 T bar",
            "U puts",
        ]
        .iter()
        .map(|line| parse_line(line).unwrap())
        .collect();

        let partitions = partition_by_type(&symbols);
        assert_eq!(partitions.len(), 3);
        let text: Vec<&str> = partitions[&SymbolType::Text]
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(text, vec!["foo", "bar"]);
        assert_eq!(partitions[&SymbolType::Data].len(), 1);
        assert_eq!(partitions[&SymbolType::Undefined].len(), 1);
    }

    #[test]
    fn test_summarize() {
        let symbols: Vec<Symbol> = [
            "00000010 00000004 t foo",
            "00000020 00000010 t big",
            "00000030 t unsized",
        ]
        .iter()
        .map(|line| parse_line(line).unwrap())
        .collect();

        let summary = summarize(&symbols);
        assert_eq!(summary.symbol_count, 3);
        assert_eq!(summary.sized_count, 2);
        assert_eq!(summary.total_size, 20);
        assert_eq!(summary.largest, Some(("big".to_string(), 16)));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(std::iter::empty());
        assert_eq!(summary, SizeSummary::default());
        assert!(summary.summary().contains("Largest: -"));
    }
}
