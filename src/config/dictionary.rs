//! Dictionary configuration module.
//!
//! This module defines configuration for the in-memory trie: how long a word
//! may be and how deletion reclaims nodes.

use super::{ConfigResult, Validate};
use crate::data_structures::{OleloTrieConfig, PruningMode};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound for `max_word_length`; deletion recurses once per letter.
const MAX_WORD_LENGTH_LIMIT: usize = 1024;

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Maximum accepted word length in letters
    pub max_word_length: usize,

    /// Pruning behaviour when a word is deleted
    pub pruning: PruningMode,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        let trie = OleloTrieConfig::default();
        Self {
            max_word_length: trie.max_word_length,
            pruning: trie.pruning,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 || self.max_word_length > MAX_WORD_LENGTH_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_word_length".to_string(),
                message: format!("must be between 1 and {MAX_WORD_LENGTH_LIMIT}"),
            });
        }

        Ok(())
    }
}

impl From<&DictionaryConfig> for OleloTrieConfig {
    fn from(config: &DictionaryConfig) -> Self {
        Self {
            max_word_length: config.max_word_length,
            pruning: config.pruning,
        }
    }
}
