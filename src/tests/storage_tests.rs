//! Tests for dictionary file import and export.
//!
//! The error reporter is mocked so that each skipped line can be checked.

use super::{dictionary_from, entries_strategy, TestFixture};
use crate::data_structures::{OleloTrie, OleloTrieConfig, OleloTrieError};
use crate::error::storage::StorageError;
use crate::error::{ErrorContext, ErrorReporter, OleloError};
use crate::storage::{
    export_entries, import_entries, load_dictionary, save_dictionary, ExportMode, ImportSummary,
};
use mockall::mock;
use proptest::prelude::*;
use std::io::Cursor;

mock! {
    pub Reporter {}

    impl ErrorReporter for Reporter {
        fn report(&self, context: ErrorContext);
    }
}

impl std::fmt::Debug for MockReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MockReporter")
    }
}

fn silent_reporter() -> MockReporter {
    let mut reporter = MockReporter::new();
    reporter.expect_report().never();
    reporter
}

fn is_import_error(context: &ErrorContext) -> bool {
    context.component == "storage::import" && context.details.is_some()
}

#[test]
fn test_import_reports_each_rejected_line() {
    let mut reporter = MockReporter::new();
    reporter
        .expect_report()
        .withf(is_import_error)
        .times(3)
        .return_const(());

    let input = "hello\txin chao\n\
                 missing tab\n\
                 x-ray\tquang tuyen\n\
                 \tno word\n\
                 school\ttruong hoc\n";
    let mut trie = OleloTrie::new();
    let summary = import_entries(&mut trie, Cursor::new(input), &reporter).unwrap();

    assert_eq!(summary.added, 2);
    assert_eq!(summary.skipped, 3);
    assert_eq!(trie.all_words().collect::<Vec<_>>(), ["hello", "school"]);
}

#[test]
fn test_import_reports_entry_error_kind() {
    let mut reporter = MockReporter::new();
    reporter
        .expect_report()
        .withf(|context| {
            matches!(
                context.error,
                OleloError::Storage(StorageError::Entry {
                    line: 1,
                    source: OleloTrieError::WordTooLong { .. }
                })
            )
        })
        .times(1)
        .return_const(());

    let config = OleloTrieConfig {
        max_word_length: 4,
        ..OleloTrieConfig::default()
    };
    let mut trie = OleloTrie::with_config(config);
    let summary = import_entries(&mut trie, Cursor::new("elephant\tcon voi\n"), &reporter).unwrap();
    assert_eq!(summary.skipped, 1);
    assert!(trie.is_empty());
}

#[test]
fn test_clean_import_reports_nothing() {
    let mut reporter = MockReporter::new();
    reporter.expect_report().never();

    let input = "\n  \nhello\txin chao\nhello\txin chao\n";
    let mut trie = OleloTrie::new();
    let summary = import_entries(&mut trie, Cursor::new(input), &reporter).unwrap();
    assert_eq!(
        summary,
        ImportSummary {
            added: 1,
            duplicates: 1,
            skipped: 0
        }
    );
}

#[test]
fn test_primary_export_drops_secondary_meanings() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.path("dictionaries.txt");
    let trie = dictionary_from([
        ("company", "cong ty"),
        ("company", "nha may"),
        ("hello", "xin chao"),
    ]);

    assert_eq!(save_dictionary(&trie, &path, ExportMode::PrimaryMeaning).unwrap(), 2);

    let (loaded, _) =
        load_dictionary(&path, OleloTrieConfig::default(), &silent_reporter()).unwrap();
    assert_eq!(loaded.search_meaning_word("company").unwrap(), ["cong ty".to_string()]);
    assert_eq!(loaded.len(), 2);
}

#[test]
fn test_padded_meanings_survive_export() {
    let mut trie = OleloTrie::new();
    trie.add("hello", " xin chao ").unwrap();
    assert!(!trie.add("hello", "xin chao").unwrap());
    trie.add("hello", "Chao ban\t").unwrap();

    for mode in [ExportMode::PrimaryMeaning, ExportMode::AllMeanings] {
        let mut out = Vec::new();
        export_entries(&trie, &mut out, mode).unwrap();
        let mut reloaded = OleloTrie::new();
        import_entries(&mut reloaded, Cursor::new(out), &silent_reporter()).unwrap();

        assert_eq!(
            reloaded.primary_meaning("hello").unwrap(),
            trie.primary_meaning("hello").unwrap()
        );
    }
    assert_eq!(
        trie.search_meaning_word("hello").unwrap(),
        ["xin chao".to_string(), "chao ban".to_string()]
    );
}

#[test]
fn test_save_into_directory_path_fails() {
    let fixture = TestFixture::new().unwrap();
    let trie = dictionary_from([("hello", "xin chao")]);
    let result = save_dictionary(&trie, fixture.temp_dir.path(), ExportMode::AllMeanings);
    assert!(matches!(result, Err(StorageError::Io { .. })));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Exporting every meaning and importing the file yields the same dictionary.
    #[test]
    fn prop_all_meanings_export_is_lossless(entries in entries_strategy(30)) {
        let mut trie = OleloTrie::new();
        for (word, meaning) in &entries {
            trie.add(word, meaning).unwrap();
        }

        let mut out = Vec::new();
        export_entries(&trie, &mut out, ExportMode::AllMeanings).unwrap();

        let mut reloaded = OleloTrie::new();
        import_entries(&mut reloaded, Cursor::new(out), &silent_reporter()).unwrap();

        let original: Vec<_> = trie.entries().map(|e| (e.word, e.meanings.to_vec())).collect();
        let copy: Vec<_> = reloaded.entries().map(|e| (e.word, e.meanings.to_vec())).collect();
        prop_assert_eq!(original, copy);
    }

    /// Exporting first meanings and importing the file keeps every word with
    /// its primary meaning.
    #[test]
    fn prop_primary_export_keeps_primary_meanings(entries in entries_strategy(30)) {
        let mut trie = OleloTrie::new();
        for (word, meaning) in &entries {
            trie.add(word, meaning).unwrap();
        }

        let mut out = Vec::new();
        let lines = export_entries(&trie, &mut out, ExportMode::PrimaryMeaning).unwrap();
        prop_assert_eq!(lines, trie.len());

        let mut reloaded = OleloTrie::new();
        import_entries(&mut reloaded, Cursor::new(out), &silent_reporter()).unwrap();

        let original: Vec<_> = trie
            .entries()
            .map(|e| (e.word, e.meanings[0].clone()))
            .collect();
        let copy: Vec<_> = reloaded
            .entries()
            .map(|e| (e.word, e.meanings.to_vec()))
            .collect();
        prop_assert_eq!(original.len(), copy.len());
        for ((word, primary), (reloaded_word, meanings)) in original.into_iter().zip(copy) {
            prop_assert_eq!(word, reloaded_word);
            prop_assert_eq!(meanings, vec![primary]);
        }
    }
}
