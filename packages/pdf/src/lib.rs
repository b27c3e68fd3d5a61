#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! PDF text extraction for the LWF and ESIC source documents.
//!
//! Text is pulled with pure-Rust backends behind the [`TextExtractor`]
//! trait. [`extract_text`] tries each backend in order and keeps the
//! first result with more than [`MIN_CONTENT_CHARS`] characters once
//! trimmed. Backend failures never escape: the caller
//! only learns whether usable text was found.

pub mod lopdf_text;
pub mod pdf_extract_text;

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

pub use lopdf_text::LopdfBackend;
pub use pdf_extract_text::PdfExtractBackend;

/// Minimum number of characters (after trimming) for extracted text to
/// count as usable. Scanned or image-only PDFs typically yield less.
pub const MIN_CONTENT_CHARS: usize = 100;

/// Errors produced by a single extraction backend.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// Reading the PDF file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend could not extract text from the document.
    #[error("PDF extraction error: {0}")]
    Extraction(String),

    /// The backend panicked on malformed input.
    #[error("PDF extraction panicked in {backend} (malformed document)")]
    Panicked {
        /// Name of the backend that panicked.
        backend: &'static str,
    },
}

/// A PDF-to-text implementation.
pub trait TextExtractor {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Extracts the full text of the PDF at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError`] if the file cannot be read or parsed.
    fn extract(&self, path: &Path) -> Result<String, PdfError>;
}

/// Text accepted from one backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Name of the backend that produced the text.
    pub backend: &'static str,
    /// The extracted text, untrimmed.
    pub text: String,
}

impl ExtractedText {
    /// Number of characters in the text, not bytes.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Returns `true` if `text` holds more than [`MIN_CONTENT_CHARS`]
/// characters once surrounding whitespace is removed.
#[must_use]
pub fn has_sufficient_content(text: &str) -> bool {
    text.trim().chars().count() > MIN_CONTENT_CHARS
}

/// The default backend order: `pdf-extract` first, `lopdf` second.
#[must_use]
pub fn default_backends() -> [&'static dyn TextExtractor; 2] {
    [&PdfExtractBackend, &LopdfBackend]
}

/// Extracts text from `path` with the first backend that yields usable
/// content.
///
/// Returns `None` when every backend fails or returns too little text.
#[must_use]
pub fn extract_text(path: &Path, backends: &[&dyn TextExtractor]) -> Option<ExtractedText> {
    for backend in backends {
        match backend.extract(path) {
            Ok(text) if has_sufficient_content(&text) => {
                let extracted = ExtractedText {
                    backend: backend.name(),
                    text,
                };
                log::debug!(
                    "{} extracted {} characters from {}",
                    extracted.backend,
                    extracted.char_count(),
                    path.display()
                );
                return Some(extracted);
            }
            Ok(text) => {
                log::warn!(
                    "{} returned only {} characters from {}, trying next backend",
                    backend.name(),
                    text.trim().chars().count(),
                    path.display()
                );
            }
            Err(e) => {
                log::warn!("Error with {}: {e}", backend.name());
            }
        }
    }

    log::warn!("No backend extracted usable text from {}", path.display());

    None
}

/// Extracts text from `path` using [`default_backends`].
#[must_use]
pub fn extract_pdf_text(path: &Path) -> Option<ExtractedText> {
    extract_text(path, &default_backends())
}

/// Runs `f`, converting a panic into [`PdfError::Panicked`].
pub(crate) fn catch_panics<T>(
    backend: &'static str,
    f: impl FnOnce() -> Result<T, PdfError>,
) -> Result<T, PdfError> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or(Err(PdfError::Panicked { backend }))
}
