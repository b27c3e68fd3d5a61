//! Primary backend built on [`pdf_extract`].
//!
//! `pdf_extract` can panic on malformed input rather than returning an
//! error, so every call runs inside [`crate::catch_panics`].

use std::path::Path;

use crate::{PdfError, TextExtractor, catch_panics};

/// Extracts text with [`pdf_extract::extract_text_from_mem`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractBackend;

impl TextExtractor for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract(&self, path: &Path) -> Result<String, PdfError> {
        let bytes = std::fs::read(path)?;

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());

        catch_panics(self.name(), || {
            pdf_extract::extract_text_from_mem(&bytes)
                .map_err(|e| PdfError::Extraction(format!("failed to extract text: {e}")))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PdfExtractBackend.extract(&dir.path().join("LWF.pdf"));
        assert!(matches!(result, Err(PdfError::Io(_))));
    }

    #[test]
    fn non_pdf_bytes_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a.pdf");
        std::fs::write(&path, b"this is plain text, not a PDF").unwrap();

        let err = PdfExtractBackend.extract(&path).unwrap_err();

        assert!(matches!(err, PdfError::Extraction(_) | PdfError::Panicked { .. }));
    }
}
