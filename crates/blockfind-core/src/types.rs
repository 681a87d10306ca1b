//! Core data types for block search results.

use serde::{Deserialize, Serialize};

/// Placeholder title used when a document's source title is empty.
pub const UNTITLED: &str = "(no title)";

/// A node in a parsed block tree.
///
/// An empty `name` marks a non-block content fragment (free text between
/// markers); classification skips those but still owns them in the tree so
/// document order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockNode {
    /// Full block name including namespace (e.g. `core/paragraph`), or empty
    /// for a non-block fragment.
    pub name: String,
    /// Ordered child nodes; empty for leaf blocks and fragments.
    pub children: Vec<BlockNode>,
}

impl BlockNode {
    /// Creates a named block node.
    pub fn block(name: impl Into<String>, children: Vec<BlockNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Creates a nameless content fragment.
    pub fn fragment() -> Self {
        Self {
            name: String::new(),
            children: Vec::new(),
        }
    }

    /// Whether this node is a non-block fragment (skipped by classification).
    pub fn is_fragment(&self) -> bool {
        self.name.is_empty()
    }
}

/// One occurrence of the target block within a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchInstance {
    /// True iff the instance has no enclosing parent block.
    pub is_root: bool,
    /// Ancestor block names, outermost first; empty for root instances.
    pub parent_chain: Vec<String>,
}

impl MatchInstance {
    /// Creates an instance from its ancestor chain.
    pub fn new(parent_chain: Vec<String>) -> Self {
        Self {
            is_root: parent_chain.is_empty(),
            parent_chain,
        }
    }

    /// Nesting depth; always equal to the parent chain length.
    pub fn depth(&self) -> usize {
        self.parent_chain.len()
    }
}

/// A document retained in the search aggregate, with every classified
/// instance of the target block it contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Store-assigned document id.
    pub id: u64,
    /// Document title; never empty (falls back to [`UNTITLED`]).
    pub title: String,
    /// Locator for editing the document.
    pub edit_link: String,
    /// Locator for viewing the document.
    pub view_link: String,
    /// Classified instances, pre-order; never empty in a retained result.
    pub block_instances: Vec<MatchInstance>,
}

impl DocumentResult {
    /// Whether the document has at least one root-level instance.
    pub fn has_root(&self) -> bool {
        self.block_instances.iter().any(|i| i.is_root)
    }

    /// Whether the document has at least one nested instance.
    pub fn has_nested(&self) -> bool {
        self.block_instances.iter().any(|i| !i.is_root)
    }
}

/// Which subset of the aggregate a request wants to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every retained document.
    #[default]
    All,
    /// Only documents with at least one nested instance.
    Nested,
}

/// The set of document types a search is restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Every public, block-editor-capable document type.
    All,
    /// A single document type.
    Type(String),
}

impl Scope {
    /// Parses a request scope field; `"all"` selects every capable type.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Type(value.to_string())
        }
    }

    /// Stable identifier used in cache-key derivation.
    pub fn identifier(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Type(name) => name,
        }
    }

    /// Human-readable form for messages.
    pub fn describe(&self) -> String {
        match self {
            Self::All => "any document type".to_string(),
            Self::Type(name) => format!("\"{name}\""),
        }
    }
}

/// Strips the `core/` namespace prefix, if present.
///
/// Used for the substring pre-filter and the target display label; the exact
/// match test in classification always uses the full name.
pub fn strip_core_prefix(name: &str) -> &str {
    name.strip_prefix("core/").unwrap_or(name)
}

/// Strips any `namespace/` prefix, if present.
pub fn strip_any_namespace(name: &str) -> &str {
    match name.split_once('/') {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => name,
    }
}

/// Turns a block-name fragment into a display label: separators become
/// spaces and each word is title-cased (`pullquote-wide` -> `Pullquote Wide`).
pub fn humanize(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display label for the search target (`core/` stripped, humanized).
pub fn target_label(target: &str) -> String {
    humanize(strip_core_prefix(target))
}

/// Display label for a parent block (any namespace stripped, humanized).
pub fn parent_label(parent: &str) -> String {
    humanize(strip_any_namespace(parent))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn match_instance_root_invariant() {
        let root = MatchInstance::new(vec![]);
        assert!(root.is_root);
        assert_eq!(root.depth(), 0);

        let nested = MatchInstance::new(vec!["core/columns".into(), "core/column".into()]);
        assert!(!nested.is_root);
        assert_eq!(nested.depth(), 2);
    }

    #[test]
    fn document_result_flags_are_independent() {
        let doc = DocumentResult {
            id: 1,
            title: "Mixed".into(),
            edit_link: "/edit/1".into(),
            view_link: "/view/1".into(),
            block_instances: vec![
                MatchInstance::new(vec![]),
                MatchInstance::new(vec!["core/group".into()]),
            ],
        };
        assert!(doc.has_root());
        assert!(doc.has_nested());
    }

    #[test]
    fn scope_parse_and_describe() {
        assert_eq!(Scope::parse("all"), Scope::All);
        assert_eq!(Scope::parse("post"), Scope::Type("post".into()));
        assert_eq!(Scope::All.describe(), "any document type");
        assert_eq!(Scope::Type("page".into()).describe(), "\"page\"");
    }

    #[test]
    fn label_derivation() {
        assert_eq!(target_label("core/pullquote-wide"), "Pullquote Wide");
        // Only `core/` is stripped for the target label.
        assert_eq!(target_label("acme/hero-banner"), "Acme/hero Banner");
        // Any namespace is stripped for parent labels.
        assert_eq!(parent_label("acme/hero-banner"), "Hero Banner");
        assert_eq!(parent_label("columns"), "Columns");
    }

    #[test]
    fn fragment_is_skippable() {
        assert!(BlockNode::fragment().is_fragment());
        assert!(!BlockNode::block("core/quote", vec![]).is_fragment());
    }
}
