//! Parser for single lines of `nm -C -S [-l]` output.
//!
//! Line grammar: `[ADDRESS] [SIZE] CATEGORY NAME[\tFILE:LINE]`
//!
//! Examples:
//! - `00031456 00000010 t ._433`
//! - `0002fbe1 T __aeabi_drsub` (no size)
//! - `w atexit` (neither address nor size)
//!
//! A lone hex column is always the address. nm never prints a size without
//! an address, so the two optional groups are matched positionally.

use super::symbol_type::SymbolType;
use crate::utils::error::ParseError;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static NM_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:([0-9a-f]+) +)?(?:([0-9a-f]+) +)?(\w) (.*)$").expect("valid nm line pattern")
});

/// Source location reported by `nm -l`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub file: String,

    /// Line marker exactly as printed (may be empty or non-numeric)
    pub line: String,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One parsed nm record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub address: Option<u64>,

    /// Only ever present together with `address`
    pub size: Option<u64>,

    pub symbol_type: SymbolType,

    /// Demangled display name
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,

    /// Trimmed input line, kept for diagnostics
    pub original: String,
}

impl Symbol {
    pub fn has_size(&self) -> bool {
        self.size.is_some()
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Size used for aggregation; unsized symbols contribute nothing
    pub fn size_or_zero(&self) -> u64 {
        self.size.unwrap_or(0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name)?;
        if let Some(size) = self.size {
            write!(f, " {}B", size)?;
        }
        if let Some(source) = &self.source {
            write!(f, " from {}", source)?;
        }
        Ok(())
    }
}

/// Parse one line of nm output
///
/// **Public** - main entry point for line parsing
///
/// # Errors
/// * `ParseError::MalformedLine` - line does not follow the nm grammar
/// * `ParseError::UnrecognizedCategory` - category code outside the known set
pub fn parse_line(line: &str) -> Result<Symbol, ParseError> {
    let trimmed = line.trim();
    let captures = NM_LINE_RE
        .captures(trimmed)
        .ok_or_else(|| ParseError::MalformedLine(trimmed.to_string()))?;

    let address = captures
        .get(1)
        .map(|m| parse_hex(m.as_str(), trimmed))
        .transpose()?;
    let size = captures
        .get(2)
        .map(|m| parse_hex(m.as_str(), trimmed))
        .transpose()?;

    // The pattern guarantees exactly one word character here
    let code = captures[3]
        .chars()
        .next()
        .ok_or_else(|| ParseError::MalformedLine(trimmed.to_string()))?;
    let symbol_type = SymbolType::try_from(code)?;

    let (name, source) = split_source(&captures[4]);

    Ok(Symbol {
        address,
        size,
        symbol_type,
        name: name.to_string(),
        source,
        original: trimmed.to_string(),
    })
}

/// Parse one line given as raw bytes (decoded as UTF-8)
pub fn parse_line_bytes(line: &[u8]) -> Result<Symbol, ParseError> {
    parse_line(std::str::from_utf8(line)?)
}

/// Parse a whole nm listing, stopping at the first bad line
///
/// Lines may be text or raw bytes; each one is decoded on its own. Blank
/// lines are ignored. Failures are wrapped in `ParseError::AtLine` carrying
/// the 1-based line number and the raw text (lossily decoded if it was not
/// valid UTF-8).
pub fn parse_lines<I>(lines: I) -> Result<Vec<Symbol>, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut symbols = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let bytes = line.as_ref();
        if bytes.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let symbol = parse_line_bytes(bytes).map_err(|e| ParseError::AtLine {
            line_number: index + 1,
            raw: String::from_utf8_lossy(bytes).trim().to_string(),
            source: Box::new(e),
        })?;
        symbols.push(symbol);
    }

    debug!("Parsed {} symbols", symbols.len());
    Ok(symbols)
}

fn parse_hex(token: &str, line: &str) -> Result<u64, ParseError> {
    u64::from_str_radix(token, 16).map_err(|_| ParseError::MalformedLine(line.to_string()))
}

/// Split `NAME\tFILE:LINE` into the name and its optional location
fn split_source(rest: &str) -> (&str, Option<Source>) {
    let Some((name, location)) = rest.split_once('\t') else {
        return (rest, None);
    };
    if location.is_empty() {
        return (name, None);
    }

    let (file, line) = location.split_once(':').unwrap_or((location, ""));
    (
        name,
        Some(Source {
            file: file.to_string(),
            line: line.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_source_without_tab() {
        let (name, source) = split_source("main");
        assert_eq!(name, "main");
        assert!(source.is_none());
    }

    #[test]
    fn test_split_source_on_first_colon() {
        let (name, source) = split_source("f\tsrc/a.c:12:3");
        assert_eq!(name, "f");
        let source = source.unwrap();
        assert_eq!(source.file, "src/a.c");
        assert_eq!(source.line, "12:3");
    }

    #[test]
    fn test_split_source_without_colon() {
        let (_, source) = split_source("f\t??");
        let source = source.unwrap();
        assert_eq!(source.file, "??");
        assert_eq!(source.line, "");
    }

    #[test]
    fn test_name_with_spaces_and_parens() {
        let symbol = parse_line("00001000 00000020 T foo::bar(int, char const*) const").unwrap();
        assert_eq!(symbol.name, "foo::bar(int, char const*) const");
        assert_eq!(symbol.size, Some(0x20));
    }

    #[test]
    fn test_hex_overflow_is_malformed() {
        let result = parse_line("1ffffffffffffffff T too_wide");
        assert!(matches!(result, Err(ParseError::MalformedLine(_))));
    }

    #[test]
    fn test_display() {
        let symbol = parse_line("00000010 00000004 t foo\tsrc/foo.c:7").unwrap();
        assert_eq!(symbol.to_string(), "<foo> 4B from src/foo.c:7");

        let symbol = parse_line("U puts").unwrap();
        assert_eq!(symbol.to_string(), "<puts>");
    }
}
