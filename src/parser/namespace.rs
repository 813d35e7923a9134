//! Split demangled names into nested scope segments.
//!
//! `Foo::Bar<Baz::Qux>::method(int)` becomes
//! `["Foo", "Bar<Baz::Qux>", "method(int)"]`.
//!
//! This is a bracket-balance heuristic, not a C++/Rust grammar. `<` and `(`
//! open, `>` and `)` close, and kinds are never matched against each other,
//! so names like `operator<` or `operator->` can split in odd places. The
//! segments always cover the whole name, so sizes are never lost.

use crate::utils::config::SCOPE_SEPARATOR;

/// Split a display name into scope segments
///
/// **Public** - used to build the namespace tree
///
/// Segments borrow from `name`. An empty name yields no segments.
pub fn split_namespace(name: &str) -> Vec<&str> {
    if name.is_empty() {
        return Vec::new();
    }

    let mut segments: Vec<&str> = Vec::new();
    // Byte offset where the segment being built starts
    let mut segment_start = 0;
    let mut offset = 0;
    let mut depth: usize = 0;

    for part in name.split(SCOPE_SEPARATOR) {
        let part_end = offset + part.len();

        if depth > 0 && !segments.is_empty() {
            // Still inside brackets: extend the previous segment over this part
            segments.pop();
        } else {
            segment_start = offset;
        }
        segments.push(&name[segment_start..part_end]);

        depth = (depth + bracket_opens(part)).saturating_sub(bracket_closes(part));
        offset = part_end + SCOPE_SEPARATOR.len();
    }

    segments
}

fn bracket_opens(part: &str) -> usize {
    part.chars().filter(|c| matches!(c, '<' | '(')).count()
}

fn bracket_closes(part: &str) -> usize {
    part.chars().filter(|c| matches!(c, '>' | ')')).count()
}
