//! Console rendering of footprint reports.

use crate::aggregator::NamespaceNode;
use crate::parser::{Symbol, SymbolType};

/// Render one category's namespace tree under a header line
///
/// ```text
/// == Text (12 bytes) ==
/// 8 Foo
///   8 Foo::bar
/// 4 foo
/// ```
pub fn render_namespace_report(
    symbol_type: SymbolType,
    tree: &NamespaceNode,
    max_depth: usize,
) -> String {
    let header = format!("== {} ({} bytes) ==", symbol_type.label(), tree.size);
    let body = tree.render(max_depth);
    if body.is_empty() {
        header
    } else {
        format!("{}\n{}", header, body)
    }
}

/// One line per symbol followed by the parsed line count
pub fn render_symbol_list<'a, I>(symbols: I) -> String
where
    I: IntoIterator<Item = &'a Symbol>,
{
    let mut lines: Vec<String> = symbols.into_iter().map(Symbol::to_string).collect();
    let count = lines.len();
    lines.push(String::new());
    lines.push(format!("Parsed {} lines", count));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    #[test]
    fn test_namespace_report_header() {
        let mut tree = NamespaceNode::root();
        tree.insert(&["Foo", "bar"], 8);
        tree.insert(&["foo"], 4);

        let rendered = render_namespace_report(SymbolType::Text, &tree, 0);
        assert_eq!(
            rendered,
            "== Text (12 bytes) ==\n8 Foo\n  8 Foo::bar\n4 foo"
        );
    }

    #[test]
    fn test_empty_tree_prints_header_only() {
        let rendered = render_namespace_report(SymbolType::Data, &NamespaceNode::root(), 0);
        assert_eq!(rendered, "== Data (0 bytes) ==");
    }

    #[test]
    fn test_symbol_list() {
        let symbols = vec![
            parse_line("00000010 00000004 t foo").unwrap(),
            parse_line("w atexit").unwrap(),
        ];
        assert_eq!(
            render_symbol_list(&symbols),
            "<foo> 4B\n<atexit>\n\nParsed 2 lines"
        );
    }
}
