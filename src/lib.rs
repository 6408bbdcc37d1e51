//! Olelo Library
//!
//! An in-memory English bilingual dictionary built on a 26-way character
//! trie, together with the pieces needed to run it as a tool: the
//! tab-separated dictionary file format, console rendering, configuration
//! and error reporting.
//!
//! # Architecture
//!
//! - [`data_structures::olelo_trie`] is the core: word trie plus meaning index
//! - [`storage`] reads and writes `word<TAB>meaning` files
//! - [`report`] renders listings as a table or JSON
//! - [`config`] and [`error`] carry the ambient configuration and error types

pub mod config;
pub mod data_structures;
pub mod error;
pub mod report;
pub mod storage;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Olelo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
