//! Match classification over parsed block trees.
//!
//! Walks a tree in pre-order and records every node whose name equals the
//! target, annotated with its ancestor chain. The comparison always uses the
//! full block name, namespace included; prefix stripping is a search and
//! labeling concern, not a matching one.

use crate::{BlockNode, MatchInstance};

/// Collects every instance of `target` in `tree`, pre-order (parent before
/// children, siblings in document order).
pub fn classify(tree: &[BlockNode], target: &str) -> Vec<MatchInstance> {
    let mut instances = Vec::new();
    let mut chain = Vec::new();
    traverse(tree, target, &mut chain, &mut instances);
    instances
}

fn traverse(
    nodes: &[BlockNode],
    target: &str,
    chain: &mut Vec<String>,
    instances: &mut Vec<MatchInstance>,
) {
    for node in nodes {
        // Nameless content fragments are not blocks.
        if node.is_fragment() {
            continue;
        }

        if node.name == target {
            instances.push(MatchInstance::new(chain.clone()));
        }

        // A matching block still has its children visited; a block can
        // contain a nested instance of itself.
        if !node.children.is_empty() {
            chain.push(node.name.clone());
            traverse(&node.children, target, chain, instances);
            chain.pop();
        }
    }
}
