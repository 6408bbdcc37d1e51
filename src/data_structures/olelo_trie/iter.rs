// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy prefix traversal.

use std::iter::FusedIterator;

use super::node::TrieNode;

/// Depth-first, pre-order walk over the words stored below a node.
///
/// Children are visited in ascending letter order, so words come out in
/// lexicographic order. Each yielded word is the start prefix followed by the
/// letters on the path to a terminal node.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    stack: Vec<(&'a TrieNode, String)>,
}

impl<'a> Words<'a> {
    /// Starts a traversal at `node`, which is reached by `prefix`.
    pub fn new(node: &'a TrieNode, prefix: impl Into<String>) -> Self {
        Self {
            stack: vec![(node, prefix.into())],
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, word)) = self.stack.pop() {
            // Reverse push so 'a' is popped first.
            for (letter, child) in node.children().rev() {
                let mut next = String::with_capacity(word.len() + 1);
                next.push_str(&word);
                next.push(letter.to_char());
                self.stack.push((child, next));
            }
            if node.is_terminal() {
                return Some(word);
            }
        }
        None
    }
}

impl FusedIterator for Words<'_> {}
