//! Block tree parsing for marker-delimited document bodies.
//!
//! The core only consumes [`BlockNode`] trees; the grammar producing them is
//! an adapter concern. [`MarkerParser`] is the reference adapter for the
//! comment-marker syntax the upstream document store emits:
//!
//! ```text
//! <!-- wp:ns/name {"attr":1} -->  ... children ...  <!-- /wp:ns/name -->
//! <!-- wp:name /-->
//! ```
//!
//! Bare (un-namespaced) marker names canonicalize to the `core/` namespace,
//! matching the store's convention. Free text between markers becomes
//! nameless fragment nodes. Malformed input never fails the parse: unmatched
//! closers are ignored and unclosed blocks are closed at end of input.

use crate::{BlockNode, Error, Result};
use regex::Regex;

/// Converts raw document body text into a tree of block nodes.
pub trait BlockParser: Send + Sync {
    /// Parses a document body into an ordered sequence of root nodes.
    fn parse(&self, body: &str) -> Result<Vec<BlockNode>>;
}

/// Reference [`BlockParser`] for the comment-marker block grammar.
pub struct MarkerParser {
    marker: Regex,
}

/// Matches one block marker: optional closing slash, namespaced or bare
/// name, optional JSON attribute object, optional self-closing slash.
const MARKER_PATTERN: &str =
    r"<!--\s+(/)?wp:([a-z][a-z0-9_-]*(?:/[a-z][a-z0-9_-]*)?)(\s+\{(?s:.)*?\})?\s+(/)?-->";

/// An open block whose closer has not been seen yet.
struct OpenBlock {
    name: String,
    children: Vec<BlockNode>,
}

impl MarkerParser {
    /// Creates a parser; fails only if the marker pattern cannot compile.
    pub fn new() -> Result<Self> {
        let marker = Regex::new(MARKER_PATTERN)
            .map_err(|e| Error::Parse(format!("failed to compile marker pattern: {e}")))?;
        Ok(Self { marker })
    }

    fn attach(stack: &mut [OpenBlock], roots: &mut Vec<BlockNode>, node: BlockNode) {
        if let Some(top) = stack.last_mut() {
            top.children.push(node);
        } else {
            roots.push(node);
        }
    }

    fn close_top(stack: &mut Vec<OpenBlock>, roots: &mut Vec<BlockNode>) {
        if let Some(open) = stack.pop() {
            let node = BlockNode {
                name: open.name,
                children: open.children,
            };
            Self::attach(stack, roots, node);
        }
    }
}

/// Bare marker names belong to the store's default namespace.
fn canonicalize(name: &str) -> String {
    if name.contains('/') {
        name.to_string()
    } else {
        format!("core/{name}")
    }
}

impl BlockParser for MarkerParser {
    fn parse(&self, body: &str) -> Result<Vec<BlockNode>> {
        let mut stack: Vec<OpenBlock> = Vec::new();
        let mut roots: Vec<BlockNode> = Vec::new();
        let mut cursor = 0;

        for caps in self.marker.captures_iter(body) {
            let Some(whole) = caps.get(0) else { continue };
            let Some(raw_name) = caps.get(2) else { continue };

            // Whitespace-only gaps between markers carry no content.
            if !body[cursor..whole.start()].trim().is_empty() {
                Self::attach(&mut stack, &mut roots, BlockNode::fragment());
            }
            cursor = whole.end();

            let name = canonicalize(raw_name.as_str());
            let is_closer = caps.get(1).is_some();
            let is_void = caps.get(4).is_some();

            if is_closer {
                // Close up to and including the nearest matching open block;
                // a closer with no open counterpart is ignored.
                if let Some(pos) = stack.iter().rposition(|open| open.name == name) {
                    while stack.len() > pos {
                        Self::close_top(&mut stack, &mut roots);
                    }
                }
            } else if is_void {
                Self::attach(&mut stack, &mut roots, BlockNode::block(name, vec![]));
            } else {
                stack.push(OpenBlock {
                    name,
                    children: Vec::new(),
                });
            }
        }

        if !body[cursor..].trim().is_empty() {
            Self::attach(&mut stack, &mut roots, BlockNode::fragment());
        }

        // Unclosed blocks are closed at end of input.
        while !stack.is_empty() {
            Self::close_top(&mut stack, &mut roots);
        }

        Ok(roots)
    }
}
