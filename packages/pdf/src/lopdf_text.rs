//! Secondary backend built on [`lopdf`].
//!
//! Walks the page tree and extracts each page separately, so one broken
//! content stream only loses that page.

use std::path::Path;

use lopdf::Document;

use crate::{PdfError, TextExtractor, catch_panics};

/// Extracts text page by page with [`lopdf::Document::extract_text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfBackend;

impl TextExtractor for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract(&self, path: &Path) -> Result<String, PdfError> {
        if !path.exists() {
            return Err(PdfError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )));
        }

        catch_panics(self.name(), || {
            let doc = Document::load(path)
                .map_err(|e| PdfError::Extraction(format!("failed to load PDF: {e}")))?;

            let mut text = String::new();

            for page_number in doc.get_pages().into_keys() {
                match doc.extract_text(&[page_number]) {
                    Ok(page_text) if !page_text.trim().is_empty() => {
                        text.push_str(&page_text);
                        text.push('\n');
                    }
                    Ok(_) => {}
                    Err(e) => {
                        log::debug!("Skipping page {page_number} of {}: {e}", path.display());
                    }
                }
            }

            Ok(text)
        })
    }
}
