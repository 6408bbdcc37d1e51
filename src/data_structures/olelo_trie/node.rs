// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Olelo Trie.
//!
//! Each node has one child slot per letter of the alphabet and a flag marking
//! the end of a stored word. Meanings live in the engine's index, not here.

use super::alphabet::{Letter, ALPHABET_SIZE};

/// A node in the Olelo Trie.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Child slots indexed by letter
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// Whether this node represents the end of a word
    terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal;
    }

    /// Child reached through `letter`, if present.
    pub fn child(&self, letter: Letter) -> Option<&TrieNode> {
        self.children[letter.index()].as_deref()
    }

    /// Mutable child reached through `letter`, if present.
    pub fn child_mut(&mut self, letter: Letter) -> Option<&mut TrieNode> {
        self.children[letter.index()].as_deref_mut()
    }

    /// Child reached through `letter`, allocating it when missing.
    pub fn child_or_insert(&mut self, letter: Letter) -> &mut TrieNode {
        self.children[letter.index()].get_or_insert_with(Box::default)
    }

    /// Unlinks and returns the child reached through `letter`.
    pub fn take_child(&mut self, letter: Letter) -> Option<Box<TrieNode>> {
        self.children[letter.index()].take()
    }

    /// Present children in ascending letter order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (Letter, &TrieNode)> {
        Letter::ALL
            .into_iter()
            .zip(self.children.iter())
            .filter_map(|(letter, slot)| slot.as_deref().map(|child| (letter, child)))
    }

    /// A node is empty, and may be pruned, when it ends no word and has no children.
    pub fn is_empty(&self) -> bool {
        !self.terminal && self.children.iter().all(Option::is_none)
    }
}
