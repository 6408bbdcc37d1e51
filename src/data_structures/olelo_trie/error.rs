// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Olelo Trie.
//!
//! This module defines the error types that can occur during Olelo Trie operations.

/// Errors that can occur in Olelo Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum OleloTrieError {
    /// No word, prefix or meaning entry exists for the given key.
    #[error("No results found for the word {0}!")]
    NotFound(String),

    /// The word contains a character outside the supported alphabet, or the
    /// meaning contains a field/record separator.
    #[error("Unsupported character {character:?} in '{word}'")]
    InvalidInput {
        /// The offending input, lowercased.
        word: String,
        /// The first unsupported character.
        character: char,
    },

    /// Error when an empty word is provided.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when an empty meaning is provided.
    #[error("Empty meaning not allowed")]
    EmptyMeaning,

    /// Error when a word exceeds the maximum depth allowed.
    #[error("Word '{word}' exceeds maximum length of {max_length}")]
    WordTooLong {
        /// The word that was too long.
        word: String,
        /// The maximum allowed length.
        max_length: usize,
    },

    /// The meaning index and the trie disagree about a word.
    #[error("Dictionary is inconsistent for word {0}")]
    Corrupted(String),
}

/// Result type for Olelo Trie operations
pub type OleloTrieResult<T> = Result<T, OleloTrieError>;
