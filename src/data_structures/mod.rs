//! Data structures for Olelo.
//!
//! This module contains the dictionary's core data structures. All
//! implementations follow the project requirements:
//! - No unsafe code
//! - Fallible operations return typed errors instead of panicking

pub mod olelo_trie;

// Re-export common data structures
pub use olelo_trie::{
    DictionaryEntry, OleloTrie, OleloTrieConfig, OleloTrieError, OleloTrieResult, PruningMode,
    SharedOleloTrie,
};
