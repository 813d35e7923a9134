//! Symbol category codes as printed by `nm`.
//!
//! Lowercase codes are local symbols, uppercase are global; the report does
//! not distinguish the two, so classification is case-insensitive.

use crate::utils::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage class of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolType {
    Text,
    Weak,
    UninitializedData,
    ReadOnlyData,
    Data,
    Undefined,
    Debug,
    Absolute,
}

impl SymbolType {
    /// Human-readable name used in report headers
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Weak => "Weak",
            Self::UninitializedData => "Uninitialized data",
            Self::ReadOnlyData => "Read-only data",
            Self::Data => "Data",
            Self::Undefined => "Undefined",
            Self::Debug => "Debug",
            Self::Absolute => "Absolute",
        }
    }
}

impl TryFrom<char> for SymbolType {
    type Error = ParseError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Ok(match code.to_ascii_lowercase() {
            't' => Self::Text,
            // 'v' is a weak object, reported together with weak symbols
            'w' | 'v' => Self::Weak,
            'b' => Self::UninitializedData,
            'r' => Self::ReadOnlyData,
            'd' => Self::Data,
            'u' => Self::Undefined,
            'n' => Self::Debug,
            'a' => Self::Absolute,
            _ => return Err(ParseError::UnrecognizedCategory(code)),
        })
    }
}

impl std::str::FromStr for SymbolType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::try_from(code),
            _ => Err(ParseError::MalformedLine(s.to_string())),
        }
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_both_cases() {
        let table = [
            ('t', SymbolType::Text),
            ('w', SymbolType::Weak),
            ('b', SymbolType::UninitializedData),
            ('r', SymbolType::ReadOnlyData),
            ('d', SymbolType::Data),
            ('u', SymbolType::Undefined),
            ('n', SymbolType::Debug),
            ('a', SymbolType::Absolute),
        ];
        for (lower, kind) in table {
            assert_eq!(SymbolType::try_from(lower).unwrap(), kind);
            assert_eq!(
                SymbolType::try_from(lower.to_ascii_uppercase()).unwrap(),
                kind
            );
        }
    }

    #[test]
    fn test_v_is_weak_alias() {
        assert_eq!(SymbolType::try_from('v').unwrap(), SymbolType::Weak);
        assert_eq!(SymbolType::try_from('V').unwrap(), SymbolType::Weak);
    }

    #[test]
    fn test_unknown_code_fails() {
        for code in ['x', 'i', 'p', '?', '-', '0', ' '] {
            match SymbolType::try_from(code) {
                Err(ParseError::UnrecognizedCategory(c)) => assert_eq!(c, code),
                other => panic!("expected UnrecognizedCategory for {code:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_str_requires_single_char() {
        assert_eq!("T".parse::<SymbolType>().unwrap(), SymbolType::Text);
        assert!("tt".parse::<SymbolType>().is_err());
        assert!("".parse::<SymbolType>().is_err());
    }
}
