//! Test modules for Olelo.
//!
//! Cross-component tests live here:
//! - configuration loading and validation
//! - error types and reporting
//! - dictionary file import and export against a mocked reporter
//!
//! Tests for the trie itself sit next to it in `data_structures::olelo_trie::tests`.

pub mod storage_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    create_test_dir, dictionary_from, entries_strategy, meaning_strategy, word_strategy,
    TestFixture,
};
