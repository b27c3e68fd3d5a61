//! Writes extracted tables and raw document text to disk.
//!
//! Each document produces a `<stem>-extracted.json` table and a
//! `<stem>-full-text.txt` copy of the text it was extracted from.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Errors that can occur while writing output files.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Creating the output directory or writing a file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Serializing the table failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Paths of the files written for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    /// The `<stem>-extracted.json` table.
    pub json: PathBuf,
    /// The `<stem>-full-text.txt` raw text.
    pub text: PathBuf,
}

/// Path of the JSON table for `stem` under `dir`.
#[must_use]
pub fn json_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}-extracted.json"))
}

/// Path of the raw text file for `stem` under `dir`.
#[must_use]
pub fn text_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}-full-text.txt"))
}

/// Serializes `table` as pretty-printed JSON with two-space indentation.
///
/// # Errors
///
/// Returns [`OutputError::Json`] if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(table: &T) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(table)?)
}

fn write_file(path: &Path, contents: &str) -> Result<(), OutputError> {
    std::fs::write(path, contents).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the JSON table and the raw text for one document, creating
/// `dir` if it does not exist.
///
/// # Errors
///
/// Returns [`OutputError::Io`] if the directory cannot be created or a
/// file cannot be written.
pub fn write_document(
    dir: &Path,
    stem: &str,
    json: &str,
    text: &str,
) -> Result<WrittenFiles, OutputError> {
    std::fs::create_dir_all(dir).map_err(|source| OutputError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let files = WrittenFiles {
        json: json_path(dir, stem),
        text: text_path(dir, stem),
    };

    write_file(&files.json, json)?;
    write_file(&files.text, text)?;

    log::debug!("Wrote {stem} outputs to {}", dir.display());

    Ok(files)
}

/// Returns at most the first `max_chars` characters of `text`.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .map_or(text, |(end, _)| &text[..end])
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn writes_both_files_and_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("scripts");

        let files = write_document(&out, "lwf", "{}", "raw text").unwrap();

        assert_eq!(files.json, out.join("lwf-extracted.json"));
        assert_eq!(files.text, out.join("lwf-full-text.txt"));
        assert_eq!(std::fs::read_to_string(&files.json).unwrap(), "{}");
        assert_eq!(std::fs::read_to_string(&files.text).unwrap(), "raw text");
    }

    #[test]
    fn unwritable_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();

        let err = write_document(&blocker, "esic", "{}", "text").unwrap_err();

        assert!(matches!(err, OutputError::Io { ref path, .. } if path == &blocker));
    }

    #[test]
    fn json_uses_two_space_indent() {
        let table = BTreeMap::from([("Goa", 1)]);
        assert_eq!(to_json(&table).unwrap(), "{\n  \"Goa\": 1\n}");
    }

    #[test]
    fn preview_respects_char_boundaries() {
        assert_eq!(preview("₹ 2.25 half yearly", 3), "₹ 2");
        assert_eq!(preview("short", 2000), "short");
        assert_eq!(preview("", 10), "");
    }
}
