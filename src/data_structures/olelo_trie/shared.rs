// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-shared handle to an [`OleloTrie`].
//!
//! A single read-write lock guards the trie and its meaning index together,
//! so writers always update both as one step and readers never observe one
//! without the other.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{OleloTrie, OleloTrieResult};

/// Cloneable, thread-safe dictionary handle (single writer, many readers).
#[derive(Debug, Clone, Default)]
pub struct SharedOleloTrie {
    inner: Arc<RwLock<OleloTrie>>,
}

impl SharedOleloTrie {
    /// Wraps an existing trie.
    pub fn new(trie: OleloTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    pub fn add(&self, word: &str, meaning: &str) -> OleloTrieResult<bool> {
        self.inner.write().add(word, meaning)
    }

    pub fn search_word(&self, prefix: &str) -> OleloTrieResult<Vec<String>> {
        self.inner.read().search_word(prefix)
    }

    pub fn search_meaning_word(&self, word: &str) -> OleloTrieResult<Vec<String>> {
        self.inner
            .read()
            .search_meaning_word(word)
            .map(<[String]>::to_vec)
    }

    pub fn delete_word(&self, word: &str) -> OleloTrieResult<()> {
        self.inner.write().delete_word(word)
    }

    pub fn change_word(&self, word: &str, new_meaning: &str) -> OleloTrieResult<()> {
        self.inner.write().change_word(word, new_meaning)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `f` with shared access to the trie.
    pub fn read<R>(&self, f: impl FnOnce(&OleloTrie) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Runs `f` with exclusive access to the trie.
    pub fn write<R>(&self, f: impl FnOnce(&mut OleloTrie) -> R) -> R {
        f(&mut *self.inner.write())
    }
}

impl From<OleloTrie> for SharedOleloTrie {
    fn from(trie: OleloTrie) -> Self {
        Self::new(trie)
    }
}
