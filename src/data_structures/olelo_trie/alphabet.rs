// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The 26-letter alphabet the trie branches on.
//!
//! Every character entering the trie goes through [`Letter::try_from`], so an
//! out-of-range character is rejected before it can be used as a child slot.

use super::error::{OleloTrieError, OleloTrieResult};

/// Number of child slots in every trie node.
pub const ALPHABET_SIZE: usize = 26;

/// A validated lowercase ASCII letter (`a`..=`z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Every letter in ascending order.
    pub const ALL: [Letter; ALPHABET_SIZE] = {
        let mut all = [Letter(0); ALPHABET_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            all[i] = Letter(i as u8);
            i += 1;
        }
        all
    };

    /// Child slot of this letter, `a` is 0 and `z` is 25.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The letter as a `char`.
    #[inline]
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_lowercase() {
            Ok(Letter(c as u8 - b'a'))
        } else {
            Err(c)
        }
    }
}

/// Lowercases `word` and converts it into trie letters.
///
/// Fails on the first character outside `a`..=`z` after lowercasing.
/// Returns the normalized word alongside its letters.
pub fn letters(word: &str) -> OleloTrieResult<(String, Vec<Letter>)> {
    let normalized = word.to_lowercase();
    let letters = normalized
        .chars()
        .map(|c| {
            Letter::try_from(c).map_err(|character| OleloTrieError::InvalidInput {
                word: normalized.clone(),
                character,
            })
        })
        .collect::<OleloTrieResult<Vec<_>>>()?;
    Ok((normalized, letters))
}
