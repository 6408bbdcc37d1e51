// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Olelo dictionary.
//! Drives the public API end to end: building a dictionary, querying it,
//! and persisting it through the dictionary file.

use std::sync::{Arc, Barrier};
use std::thread;

use olelo_lib::data_structures::{OleloTrie, OleloTrieError, SharedOleloTrie};
use olelo_lib::error::TracingErrorReporter;
use olelo_lib::storage::{load_dictionary, save_dictionary, ExportMode};

#[test]
fn test_prefix_search() {
    let mut trie = OleloTrie::new();
    trie.add("Hello", "Xin chao").unwrap();
    trie.add("School", "Truong hoc").unwrap();

    assert_eq!(trie.search_word("sch").unwrap(), vec!["school"]);
}

#[test]
fn test_multiple_meanings() {
    let mut trie = OleloTrie::new();
    trie.add("Company", "Cong ty").unwrap();
    trie.add("Company", "Nha may").unwrap();

    assert_eq!(
        trie.search_meaning_word("company").unwrap(),
        ["cong ty".to_string(), "nha may".to_string()]
    );
}

#[test]
fn test_unknown_word() {
    let trie = OleloTrie::new();
    assert_eq!(
        trie.search_meaning_word("xyz"),
        Err(OleloTrieError::NotFound("xyz".to_string()))
    );
}

#[test]
fn test_deleted_word_is_gone() {
    let mut trie = OleloTrie::new();
    trie.add("Hello", "Xin chao").unwrap();
    trie.delete_word("hello").unwrap();

    assert!(matches!(
        trie.search_word("hello"),
        Err(OleloTrieError::NotFound(_))
    ));
    assert!(trie.is_empty());
}

#[test]
fn test_edit_then_persist() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionaries.txt");

    let mut trie = OleloTrie::new();
    trie.add("company", "cong ty").unwrap();
    trie.add("company", "nha may").unwrap();
    trie.add("hello", "xin chao").unwrap();
    trie.change_word("company", "doanh nghiep").unwrap();
    save_dictionary(&trie, &path, ExportMode::AllMeanings).unwrap();

    let (loaded, summary) =
        load_dictionary(&path, Default::default(), &TracingErrorReporter).unwrap();
    assert_eq!(summary.added, 3);
    assert_eq!(
        loaded.search_meaning_word("company").unwrap(),
        ["doanh nghiep".to_string(), "nha may".to_string()]
    );
    assert_eq!(loaded.primary_meaning("hello").unwrap(), "xin chao");
}

#[test]
fn test_file_contents_primary_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionaries.txt");

    let mut trie = OleloTrie::new();
    trie.add("school", "truong hoc").unwrap();
    trie.add("hello", "xin chao").unwrap();
    trie.add("hello", "chao ban").unwrap();
    save_dictionary(&trie, &path, ExportMode::PrimaryMeaning).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "hello\txin chao\nschool\ttruong hoc\n");
}

#[test]
fn test_shared_dictionary_across_threads() {
    let shared = SharedOleloTrie::default();
    let barrier = Arc::new(Barrier::new(3));

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let shared = shared.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                // Either the word is not there yet or it is complete
                match shared.search_meaning_word("hello") {
                    Ok(meanings) => assert_eq!(meanings, vec!["xin chao".to_string()]),
                    Err(e) => assert_eq!(e, OleloTrieError::NotFound("hello".to_string())),
                }
            })
        })
        .collect();

    barrier.wait();
    shared.add("hello", "xin chao").unwrap();

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(shared.len(), 1);
}
