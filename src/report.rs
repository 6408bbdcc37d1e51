//! Console rendering of dictionary listings.
//!
//! Renders the numbered `(word, meanings)` rows produced by
//! [`OleloTrie::entries`](crate::data_structures::OleloTrie::entries) as a
//! fixed-width table or as JSON.

use std::io::Write;

use crate::data_structures::DictionaryEntry;
use crate::error::OleloResult;

/// Width of the row number column.
const NUMBER_WIDTH: usize = 7;

/// Width of the word column.
const WORD_WIDTH: usize = 30;

/// Output format for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width text table
    #[default]
    Table,
    /// JSON array of entries
    Json,
}

/// Renders `entries` in the requested format.
pub fn render<'a, W, I>(entries: I, format: OutputFormat, writer: W) -> OleloResult<()>
where
    W: Write,
    I: IntoIterator<Item = DictionaryEntry<'a>>,
{
    match format {
        OutputFormat::Table => render_table(entries, writer),
        OutputFormat::Json => render_json(entries, writer),
    }
}

/// Writes a header line and one row per entry, meanings joined by `, `.
pub fn render_table<'a, W, I>(entries: I, mut writer: W) -> OleloResult<()>
where
    W: Write,
    I: IntoIterator<Item = DictionaryEntry<'a>>,
{
    writeln!(
        writer,
        "{:<NUMBER_WIDTH$}{:<WORD_WIDTH$}{}",
        "NO", "English", "Meaning"
    )?;
    for entry in entries {
        writeln!(
            writer,
            "{:<NUMBER_WIDTH$}{:<WORD_WIDTH$}{}",
            entry.number,
            entry.word,
            entry.meanings.join(", ")
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the entries as a pretty-printed JSON array.
pub fn render_json<'a, W, I>(entries: I, mut writer: W) -> OleloResult<()>
where
    W: Write,
    I: IntoIterator<Item = DictionaryEntry<'a>>,
{
    let entries: Vec<DictionaryEntry<'a>> = entries.into_iter().collect();
    serde_json::to_writer_pretty(&mut writer, &entries)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes one item per line.
pub fn render_lines<W, I>(items: I, mut writer: W) -> OleloResult<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for item in items {
        writeln!(writer, "{}", item.as_ref())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::OleloTrie;

    fn sample() -> OleloTrie {
        let mut trie = OleloTrie::new();
        trie.add("Hello", "Xin chao").unwrap();
        trie.add("Company", "Cong ty").unwrap();
        trie.add("Company", "Nha may").unwrap();
        trie
    }

    #[test]
    fn test_render_table() {
        let trie = sample();
        let mut out = Vec::new();
        render_table(trie.entries(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("{:<7}{:<30}Meaning", "NO", "English"));
        assert_eq!(lines[1], format!("{:<7}{:<30}cong ty, nha may", 1, "company"));
        assert_eq!(lines[2], format!("{:<7}{:<30}xin chao", 2, "hello"));
    }

    #[test]
    fn test_render_json() {
        let trie = sample();
        let mut out = Vec::new();
        render(trie.entries(), OutputFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "number": 1, "word": "company", "meanings": ["cong ty", "nha may"] },
                { "number": 2, "word": "hello", "meanings": ["xin chao"] }
            ])
        );
    }

    #[test]
    fn test_render_empty_table_has_header() {
        let trie = OleloTrie::new();
        let mut out = Vec::new();
        render(trie.entries(), OutputFormat::Table, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_render_lines() {
        let mut out = Vec::new();
        render_lines(["school", "schooner"], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "school\nschooner\n");
    }
}
