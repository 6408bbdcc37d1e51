// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary file import and export.
//!
//! The file is UTF-8 text with one record per line: the word, a TAB, the
//! meaning. Importing is best-effort: a bad line is reported and skipped, and
//! the rest of the file is still loaded.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::data_structures::{OleloTrie, OleloTrieConfig};
use crate::error::storage::{StorageError, StorageResult};
use crate::error::{ErrorContext, ErrorReporter};

/// Component name attached to reported import errors.
const COMPONENT: &str = "storage::import";

/// Which meanings are written for each word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportMode {
    /// One line per word carrying its first meaning.
    PrimaryMeaning,
    /// One line per (word, meaning) pair, in meaning order.
    #[default]
    AllMeanings,
}

/// Counters collected while importing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Entries that added a new meaning
    pub added: usize,
    /// Entries whose meaning was already present
    pub duplicates: usize,
    /// Lines rejected and reported
    pub skipped: usize,
}

/// Reads `word<TAB>meaning` lines from `reader` into `trie`.
///
/// Blank lines are ignored. Lines without a tab, with invalid UTF-8, or
/// rejected by [`OleloTrie::add`] are passed to `reporter` and skipped.
/// Only a failure of the underlying reader aborts the import.
pub fn import_entries<R: BufRead>(
    trie: &mut OleloTrie,
    reader: R,
    reporter: &dyn ErrorReporter,
) -> StorageResult<ImportSummary> {
    let mut summary = ImportSummary::default();

    for (i, raw) in reader.split(b'\n').enumerate() {
        let line_no = i + 1;
        let raw = raw?;

        let line = match std::str::from_utf8(&raw) {
            Ok(line) => line.trim_end_matches('\r'),
            Err(_) => {
                skip(reporter, &mut summary, StorageError::Encoding { line: line_no }, None);
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let (Some(word), Some(meaning)) = (fields.next(), fields.next()) else {
            skip(
                reporter,
                &mut summary,
                StorageError::MalformedLine { line: line_no },
                Some(line),
            );
            continue;
        };

        match trie.add(word.trim(), meaning.trim()) {
            Ok(true) => summary.added += 1,
            Ok(false) => summary.duplicates += 1,
            Err(source) => skip(
                reporter,
                &mut summary,
                StorageError::Entry {
                    line: line_no,
                    source,
                },
                Some(line),
            ),
        }
    }

    debug!(?summary, "Import finished");
    Ok(summary)
}

fn skip(
    reporter: &dyn ErrorReporter,
    summary: &mut ImportSummary,
    error: StorageError,
    line: Option<&str>,
) {
    warn!(error = %error, "Skipping dictionary line");
    summary.skipped += 1;
    let context = ErrorContext::new(error, COMPONENT);
    let context = match line {
        Some(line) => context.with_details(format!("line content: {line:?}")),
        None => context,
    };
    reporter.report(context);
}

/// Writes every word of `trie` to `writer` in lexicographic order.
///
/// # Returns
///
/// The number of lines written.
pub fn export_entries<W: Write>(
    trie: &OleloTrie,
    mut writer: W,
    mode: ExportMode,
) -> StorageResult<usize> {
    let mut lines = 0;
    for word in trie.all_words() {
        match mode {
            ExportMode::PrimaryMeaning => {
                let meaning = trie.primary_meaning(&word)?;
                writeln!(writer, "{word}\t{meaning}")?;
                lines += 1;
            }
            ExportMode::AllMeanings => {
                for meaning in trie.search_meaning_word(&word)? {
                    writeln!(writer, "{word}\t{meaning}")?;
                    lines += 1;
                }
            }
        }
    }
    writer.flush()?;
    Ok(lines)
}

/// Imports the file at `path` into an existing dictionary.
pub fn import_file(
    trie: &mut OleloTrie,
    path: &Path,
    reporter: &dyn ErrorReporter,
) -> StorageResult<ImportSummary> {
    let file = File::open(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let summary = import_entries(trie, BufReader::new(file), reporter)?;
    info!(
        path = %path.display(),
        added = summary.added,
        duplicates = summary.duplicates,
        skipped = summary.skipped,
        "Dictionary file imported"
    );
    Ok(summary)
}

/// Builds a dictionary from the file at `path`.
///
/// A missing file yields an empty dictionary.
pub fn load_dictionary(
    path: &Path,
    config: OleloTrieConfig,
    reporter: &dyn ErrorReporter,
) -> StorageResult<(OleloTrie, ImportSummary)> {
    let mut trie = OleloTrie::with_config(config);
    if !path.exists() {
        warn!(path = %path.display(), "Dictionary file not found, starting empty");
        return Ok((trie, ImportSummary::default()));
    }
    let summary = import_file(&mut trie, path, reporter)?;
    Ok((trie, summary))
}

/// Writes `trie` to the file at `path`, replacing its contents.
///
/// # Returns
///
/// The number of lines written.
pub fn save_dictionary(trie: &OleloTrie, path: &Path, mode: ExportMode) -> StorageResult<usize> {
    let io_error = |source: std::io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    let file = File::create(path).map_err(io_error)?;
    let lines = export_entries(trie, BufWriter::new(file), mode)?;
    info!(path = %path.display(), lines, ?mode, "Dictionary file written");
    Ok(lines)
}
