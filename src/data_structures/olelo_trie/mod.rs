// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Olelo Trie Implementation
//!
//! A bilingual dictionary keyed by English words over a fixed 26-letter
//! alphabet. The trie answers prefix (autocomplete) queries while a
//! word→meanings index holds the ordered meanings of every word.
//!
//! The index is the only place meanings are stored; a trie node carries just
//! a terminal flag. The first meaning of a word is its *primary meaning*,
//! which is what the single-meaning export writes.
//!
//! # Example
//!
//! ```
//! use olelo_lib::data_structures::olelo_trie::OleloTrie;
//!
//! let mut trie = OleloTrie::new();
//! trie.add("Hello", "Xin chao").unwrap();
//! trie.add("School", "Truong hoc").unwrap();
//!
//! assert_eq!(trie.search_word("sch").unwrap(), vec!["school".to_string()]);
//! assert_eq!(trie.search_meaning_word("HELLO").unwrap(), ["xin chao".to_string()]);
//! ```

mod alphabet;
mod error;
mod iter;
mod node;
mod shared;

#[cfg(test)]
mod tests;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use alphabet::{Letter, ALPHABET_SIZE};
pub use error::{OleloTrieError, OleloTrieResult};
pub use iter::Words;
pub use shared::SharedOleloTrie;

use alphabet::letters;
use node::TrieNode;

/// How much of the path is reclaimed when a word is deleted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PruningMode {
    /// Unlink every ancestor that becomes empty, stopping below the root.
    #[default]
    Cascade,
    /// Only unlink the deleted word's own node from its parent.
    SingleLevel,
}

/// Configuration options for the Olelo Trie
#[derive(Debug, Clone)]
pub struct OleloTrieConfig {
    /// Maximum word length accepted (bounds the recursion depth of deletion)
    pub max_word_length: usize,

    /// Pruning behaviour of `delete_word`
    pub pruning: PruningMode,
}

impl Default for OleloTrieConfig {
    fn default() -> Self {
        Self {
            max_word_length: 64,
            pruning: PruningMode::Cascade,
        }
    }
}

/// One row of the full listing: a 1-based sequence number, the word and all
/// of its meanings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryEntry<'a> {
    /// Position in lexicographic order, starting at 1
    pub number: usize,
    /// The English word
    pub word: String,
    /// Meanings in insertion order
    pub meanings: &'a [String],
}

/// Olelo Trie: an English word trie with a word→meanings index.
///
/// Key features:
/// * Case-insensitive input (everything is lowercased)
/// * Lexicographic prefix search
/// * Duplicate-free, insertion-ordered meanings per word
/// * Reclaims empty nodes on deletion
#[derive(Debug, Default)]
pub struct OleloTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Meanings of every stored word
    meanings: HashMap<String, Vec<String>>,

    /// Configuration options
    config: OleloTrieConfig,
}

impl OleloTrie {
    /// Creates a new empty `OleloTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(OleloTrieConfig::default())
    }

    /// Creates a new empty `OleloTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: OleloTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            meanings: HashMap::new(),
            config,
        }
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &OleloTrieConfig {
        &self.config
    }

    /// Adds a word and one of its meanings.
    ///
    /// Both strings are trimmed and lowercased. A meaning already recorded
    /// for the word is not added twice. Nothing is modified when validation
    /// fails.
    ///
    /// # Arguments
    ///
    /// * `word` - The English word.
    /// * `meaning` - A meaning of the word.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the meaning was new for this word.
    /// * `Err(OleloTrieError)` - If the word or meaning was rejected.
    pub fn add<W, M>(&mut self, word: W, meaning: M) -> OleloTrieResult<bool>
    where
        W: AsRef<str>,
        M: AsRef<str>,
    {
        let (word, path) = self.validated_word(word.as_ref())?;
        let meaning = validated_meaning(meaning.as_ref())?;

        let mut node = &mut self.root;
        for letter in path {
            node = node.child_or_insert(letter);
        }
        node.set_terminal(true);

        let meanings = self.meanings.entry_ref(word.as_str()).or_default();
        if meanings.contains(&meaning) {
            debug!(word = %word, meaning = %meaning, "Meaning already present");
            return Ok(false);
        }
        debug!(word = %word, meaning = %meaning, "Meaning added");
        meanings.push(meaning);
        Ok(true)
    }

    /// Returns every stored word starting with `prefix`, in lexicographic order.
    ///
    /// The prefix itself is included when it is a word. An empty prefix
    /// returns every word.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - The matching words.
    /// * `Err(OleloTrieError::NotFound)` - If no stored word starts with `prefix`.
    pub fn search_word<P: AsRef<str>>(&self, prefix: P) -> OleloTrieResult<Vec<String>> {
        Ok(self.words_with_prefix(prefix)?.collect())
    }

    /// Lazy form of [`search_word`](Self::search_word).
    pub fn words_with_prefix<P: AsRef<str>>(&self, prefix: P) -> OleloTrieResult<Words<'_>> {
        let (prefix, path) = letters(prefix.as_ref())?;

        let mut node = &self.root;
        for letter in path {
            node = node
                .child(letter)
                .ok_or_else(|| OleloTrieError::NotFound(prefix.clone()))?;
        }

        Ok(Words::new(node, prefix))
    }

    /// Returns all meanings of `word` in insertion order.
    pub fn search_meaning_word<W: AsRef<str>>(&self, word: W) -> OleloTrieResult<&[String]> {
        let word = word.as_ref().trim().to_lowercase();
        match self.meanings.get(word.as_str()) {
            Some(meanings) => Ok(meanings.as_slice()),
            None => Err(OleloTrieError::NotFound(word)),
        }
    }

    /// Returns the primary (first) meaning of `word`.
    pub fn primary_meaning<W: AsRef<str>>(&self, word: W) -> OleloTrieResult<&str> {
        let word = word.as_ref();
        self.search_meaning_word(word)?
            .first()
            .map(String::as_str)
            .ok_or_else(|| OleloTrieError::Corrupted(word.trim().to_lowercase()))
    }

    /// Checks if `word` is stored.
    pub fn contains<W: AsRef<str>>(&self, word: W) -> bool {
        self.meanings
            .contains_key(word.as_ref().trim().to_lowercase().as_str())
    }

    /// Removes a word and all of its meanings.
    ///
    /// Nodes left empty by the removal are unlinked according to the
    /// configured [`PruningMode`].
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the word was removed.
    /// * `Err(OleloTrieError::NotFound)` - If the path breaks or does not end at a word.
    pub fn delete_word<W: AsRef<str>>(&mut self, word: W) -> OleloTrieResult<()> {
        let (word, path) = self.validated_word(word.as_ref())?;

        match remove_recursive(&mut self.root, &path, self.config.pruning) {
            Removal::Missing => return Err(OleloTrieError::NotFound(word)),
            Removal::Removed { .. } => {}
        }

        if self.meanings.remove(word.as_str()).is_none() {
            return Err(OleloTrieError::Corrupted(word));
        }
        debug!(word = %word, pruning = ?self.config.pruning, "Word deleted");
        Ok(())
    }

    /// Replaces the primary meaning of `word` with `new_meaning`.
    ///
    /// The new meaning takes the primary meaning's position instead of being
    /// appended after the remaining meanings, so an edited word keeps the
    /// edit as the meaning the single-meaning export writes. If the new
    /// meaning was already listed elsewhere for the word, that later copy is
    /// dropped.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the meaning was replaced.
    /// * `Err(OleloTrieError::NotFound)` - If the word is not stored.
    /// * `Err(OleloTrieError::Corrupted)` - If the index has the word but the trie does not.
    pub fn change_word<W, M>(&mut self, word: W, new_meaning: M) -> OleloTrieResult<()>
    where
        W: AsRef<str>,
        M: AsRef<str>,
    {
        let (word, path) = self.validated_word(word.as_ref())?;
        let new_meaning = validated_meaning(new_meaning.as_ref())?;

        if !self.meanings.contains_key(word.as_str()) {
            return Err(OleloTrieError::NotFound(word));
        }

        let mut node = &self.root;
        for letter in path {
            node = node
                .child(letter)
                .ok_or_else(|| OleloTrieError::Corrupted(word.clone()))?;
        }
        if !node.is_terminal() {
            return Err(OleloTrieError::Corrupted(word));
        }

        let meanings = self
            .meanings
            .get_mut(word.as_str())
            .ok_or_else(|| OleloTrieError::Corrupted(word.clone()))?;
        let Some(primary) = meanings.first_mut() else {
            return Err(OleloTrieError::Corrupted(word));
        };
        let old = std::mem::replace(primary, new_meaning);
        let duplicate = meanings[1..].iter().position(|m| *m == meanings[0]);
        if let Some(i) = duplicate {
            meanings.remove(i + 1);
        }
        debug!(word = %word, old = %old, new = %meanings[0], "Primary meaning changed");
        Ok(())
    }

    /// Every stored word in lexicographic order.
    pub fn all_words(&self) -> Words<'_> {
        Words::new(&self.root, String::new())
    }

    /// Every stored word with its meanings, numbered from 1.
    pub fn entries(&self) -> impl Iterator<Item = DictionaryEntry<'_>> + '_ {
        self.all_words().enumerate().map(move |(i, word)| {
            let meanings = self
                .meanings
                .get(word.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();
            DictionaryEntry {
                number: i + 1,
                word,
                meanings,
            }
        })
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.meanings.len()
    }

    /// Checks if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.meanings.is_empty()
    }

    /// Removes every word.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.meanings.clear();
    }

    fn validated_word(&self, word: &str) -> OleloTrieResult<(String, Vec<Letter>)> {
        let word = word.trim();
        if word.is_empty() {
            return Err(OleloTrieError::EmptyWord);
        }
        let (word, path) = letters(word)?;
        if path.len() > self.config.max_word_length {
            return Err(OleloTrieError::WordTooLong {
                word,
                max_length: self.config.max_word_length,
            });
        }
        Ok((word, path))
    }
}

/// Meanings are free text but may not hold the file's field or record separators.
/// Surrounding whitespace is dropped, as it is when a dictionary file is read.
fn validated_meaning(meaning: &str) -> OleloTrieResult<String> {
    let meaning = meaning.trim();
    if meaning.is_empty() {
        return Err(OleloTrieError::EmptyMeaning);
    }
    let meaning = meaning.to_lowercase();
    if let Some(character) = meaning.chars().find(|c| matches!(c, '\t' | '\n' | '\r')) {
        return Err(OleloTrieError::InvalidInput {
            word: meaning,
            character,
        });
    }
    Ok(meaning)
}

/// Outcome of removing the word spelled by the remaining path below a node.
enum Removal {
    /// The path breaks, or does not end at a word.
    Missing,
    /// The word was unmarked; `prune` tells the parent to unlink this node.
    Removed { prune: bool },
}

fn remove_recursive(node: &mut TrieNode, path: &[Letter], pruning: PruningMode) -> Removal {
    let Some((&letter, rest)) = path.split_first() else {
        if !node.is_terminal() {
            return Removal::Missing;
        }
        node.set_terminal(false);
        return Removal::Removed {
            prune: node.is_empty(),
        };
    };

    let Some(child) = node.child_mut(letter) else {
        return Removal::Missing;
    };

    match remove_recursive(child, rest, pruning) {
        Removal::Missing => Removal::Missing,
        Removal::Removed { prune } => {
            if prune {
                node.take_child(letter);
            }
            Removal::Removed {
                prune: prune && pruning == PruningMode::Cascade && node.is_empty(),
            }
        }
    }
}
