// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit and property-based tests for the Olelo Trie engine.


use super::node::TrieNode;

/// Counts nodes below `node` (excluding it) that are empty and therefore
/// should have been pruned.
pub(super) fn count_dangling(node: &TrieNode) -> usize {
    node.children()
        .map(|(_, child)| usize::from(child.is_empty()) + count_dangling(child))
        .sum()
}
