//! Namespace tree: sizes rolled up along each symbol's scope path.
//!
//! Every symbol name is split into scope segments and its size is added to
//! each node on the way down, so a node's size is the total of everything
//! declared at or below that scope.
//!
//! Example: `Foo::bar` (8 bytes) and `foo` (4 bytes) give
//! ```text
//! root 12
//! ├── Foo 8
//! │   └── bar 8
//! └── foo 4
//! ```

use crate::parser::{split_namespace, Symbol};
use crate::utils::config::SCOPE_SEPARATOR;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One scope in the namespace tree
///
/// **Public** - owned exclusively by its parent, addressed by segment name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceNode {
    /// Scope segment (empty only for the root)
    pub name: String,

    /// Cumulative size of this scope and everything below it
    pub size: u64,

    /// Child scopes keyed by segment, serialized as a list largest first
    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        with = "children_list"
    )]
    pub children: BTreeMap<String, NamespaceNode>,
}

/// Largest first; the map's name order breaks ties
fn by_size(children: &BTreeMap<String, NamespaceNode>) -> Vec<&NamespaceNode> {
    let mut sorted: Vec<&NamespaceNode> = children.values().collect();
    sorted.sort_by(|a, b| b.size.cmp(&a.size));
    sorted
}

mod children_list {
    use super::{by_size, NamespaceNode};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(
        children: &BTreeMap<String, NamespaceNode>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        by_size(children).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<String, NamespaceNode>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list: Vec<NamespaceNode> = Vec::deserialize(deserializer)?;
        Ok(list
            .into_iter()
            .map(|child| (child.name.clone(), child))
            .collect())
    }
}

impl NamespaceNode {
    /// Create an empty synthetic root
    pub fn root() -> Self {
        Self::default()
    }

    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Add `size` to this node and every node along `path`, creating missing nodes
    ///
    /// An empty path only updates this node. Sizes saturate at `u64::MAX`.
    pub fn insert(&mut self, path: &[&str], size: u64) {
        self.size = self.size.saturating_add(size);
        if let Some((head, tail)) = path.split_first() {
            let child = self
                .children
                .entry(head.to_string())
                .or_insert_with(|| NamespaceNode::new(head));
            child.insert(tail, size);
        }
    }

    /// Look up the node at `path` below this one
    pub fn find(&self, path: &[&str]) -> Option<&NamespaceNode> {
        match path.split_first() {
            None => Some(self),
            Some((head, tail)) => self.children.get(*head)?.find(tail),
        }
    }

    /// Children, largest first (ties by name)
    pub fn children_by_size(&self) -> Vec<&NamespaceNode> {
        by_size(&self.children)
    }

    /// Number of levels below this node
    pub fn depth(&self) -> usize {
        self.children
            .values()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Size attributed to this scope itself rather than to its children
    pub fn exclusive_size(&self) -> u64 {
        let children_size = self
            .children
            .values()
            .fold(0u64, |total, c| total.saturating_add(c.size));
        self.size.saturating_sub(children_size)
    }

    /// Render as indented `<size> <qualified name>` lines, largest subtree first
    ///
    /// The node itself is not printed, only its descendants. With
    /// `max_depth > 0`, nodes more than `max_depth` levels down are omitted.
    pub fn render(&self, max_depth: usize) -> String {
        let mut lines = Vec::new();
        let mut path = Vec::new();
        self.render_children(&mut path, max_depth, &mut lines);
        lines.join("\n")
    }

    fn render_children<'a>(
        &'a self,
        path: &mut Vec<&'a str>,
        max_depth: usize,
        lines: &mut Vec<String>,
    ) {
        if max_depth > 0 && path.len() >= max_depth {
            return;
        }

        for child in self.children_by_size() {
            path.push(&child.name);
            lines.push(format!(
                "{}{} {}",
                "  ".repeat(path.len() - 1),
                child.size,
                path.join(SCOPE_SEPARATOR)
            ));
            child.render_children(path, max_depth, lines);
            path.pop();
        }
    }

    /// Collapsed stack lines (`a;b;c bytes`) from each node's exclusive size
    ///
    /// Zero-size frames are skipped. The counts sum to this node's size
    /// minus its own exclusive size.
    pub fn collapsed_stacks(&self) -> Vec<String> {
        let mut stacks = Vec::new();
        let mut path = Vec::new();
        for child in self.children_by_size() {
            child.collect_stacks(&mut path, &mut stacks);
        }
        stacks
    }

    fn collect_stacks<'a>(&'a self, path: &mut Vec<&'a str>, stacks: &mut Vec<String>) {
        path.push(&self.name);
        let own = self.exclusive_size();
        if own > 0 {
            stacks.push(format!("{} {}", path.join(";"), own));
        }
        for child in self.children_by_size() {
            child.collect_stacks(path, stacks);
        }
        path.pop();
    }
}

/// Build a namespace tree from symbol records
///
/// **Public** - main entry point for tree aggregation
///
/// Unsized symbols still create their path but add nothing to it.
pub fn build_namespace_tree<'a, I>(symbols: I) -> NamespaceNode
where
    I: IntoIterator<Item = &'a Symbol>,
{
    let mut root = NamespaceNode::root();
    let mut count = 0usize;

    for symbol in symbols {
        let path = split_namespace(&symbol.name);
        root.insert(&path, symbol.size_or_zero());
        count += 1;
    }

    debug!(
        "Built namespace tree from {} symbols ({} bytes, {} top-level scopes, depth {})",
        count,
        root.size,
        root.children.len(),
        root.depth()
    );

    root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> NamespaceNode {
        let mut root = NamespaceNode::root();
        root.insert(&["A", "B"], 10);
        root.insert(&["A", "C"], 5);
        root.insert(&["D"], 3);
        root
    }

    #[test]
    fn test_rollup() {
        let root = sample_tree();
        assert_eq!(root.size, 18);
        assert_eq!(root.find(&["A"]).unwrap().size, 15);
        assert_eq!(root.find(&["A", "B"]).unwrap().size, 10);
        assert_eq!(root.find(&["A", "C"]).unwrap().size, 5);
        assert!(root.find(&["A", "Z"]).is_none());
    }

    #[test]
    fn test_empty_path_updates_root_only() {
        let mut root = NamespaceNode::root();
        root.insert(&[], 7);
        assert_eq!(root.size, 7);
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_terminal_and_passing_sizes_both_count() {
        let mut root = NamespaceNode::root();
        root.insert(&["A"], 4);
        root.insert(&["A", "B"], 6);
        let a = root.find(&["A"]).unwrap();
        assert_eq!(a.size, 10);
        assert_eq!(a.exclusive_size(), 4);
    }

    #[test]
    fn test_render_orders_by_size() {
        let root = sample_tree();
        let rendered = root.render(0);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec!["15 A", "  10 A::B", "  5 A::C", "3 D"]);
    }

    #[test]
    fn test_render_respects_max_depth() {
        let root = sample_tree();
        assert_eq!(root.render(1), "15 A\n3 D");
    }

    #[test]
    fn test_depth() {
        assert_eq!(sample_tree().depth(), 2);
        assert_eq!(NamespaceNode::root().depth(), 0);
    }

    #[test]
    fn test_children_serialize_as_size_ordered_list() {
        let mut root = sample_tree();
        root.insert(&["E"], 3);
        let value = serde_json::to_value(&root).unwrap();

        let names: Vec<&str> = value["children"]
            .as_array()
            .unwrap()
            .iter()
            .map(|child| child["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["A", "D", "E"]);

        let a = &value["children"][0];
        assert_eq!(a["size"], 15);
        assert_eq!(a["children"][0]["name"], "B");
        assert_eq!(a["children"][1]["name"], "C");
        assert!(a["children"][0].get("children").is_none());

        let back: NamespaceNode = serde_json::from_value(value).unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn test_collapsed_stacks_cover_all_bytes() {
        let mut root = sample_tree();
        root.insert(&["A"], 2);
        let stacks = root.collapsed_stacks();
        assert_eq!(stacks, vec!["A 2", "A;B 10", "A;C 5", "D 3"]);

        let total: u64 = stacks
            .iter()
            .filter_map(|line| line.rsplit_once(' '))
            .map(|(_, count)| count.parse::<u64>().unwrap())
            .sum();
        assert_eq!(total, root.size);
    }
}
