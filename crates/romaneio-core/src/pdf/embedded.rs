//! In-process text extraction backed by lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PdfTextSource, Result};
use crate::error::PdfError;

/// Text extraction backend using the `pdf-extract` crate, with `lopdf`
/// probing the document structure first (encryption, page count).
///
/// `pdf-extract` emits whole-document text. When the text contains form
/// feeds these mark page boundaries; otherwise the whole text is returned
/// as a single page. Callers that need faithful page boundaries should use
/// [`PdftotextExtractor`](super::PdftotextExtractor).
pub struct EmbeddedTextExtractor;

impl EmbeddedTextExtractor {
    pub fn new() -> Self {
        EmbeddedTextExtractor
    }

    fn extract_raw(&self, pdf_bytes: &[u8]) -> Result<String> {
        let mut doc =
            Document::load_mem(pdf_bytes).map_err(|e| PdfError::Parse(e.to_string()))?;

        // PDFs encrypted with an empty password can still be read.
        let decrypted;
        let bytes: &[u8] = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("decrypted PDF with empty password");
            let mut buf = Vec::new();
            doc.save_to(&mut buf)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted = buf;
            &decrypted
        } else {
            pdf_bytes
        };

        if doc.get_pages().is_empty() {
            return Err(PdfError::NoPages);
        }

        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

impl Default for EmbeddedTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfTextSource for EmbeddedTextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<String>> {
        let text = self.extract_raw(pdf_bytes)?;

        if text.contains('\x0c') {
            Ok(text.split('\x0c').map(str::to_string).collect())
        } else {
            Ok(vec![text])
        }
    }

    fn extract_document(&self, pdf_bytes: &[u8]) -> Result<String> {
        let text = self.extract_raw(pdf_bytes)?;
        Ok(text.replace('\x0c', "\n"))
    }

    fn backend_name(&self) -> &str {
        "embedded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let err = EmbeddedTextExtractor::new()
            .extract_pages(b"not a pdf")
            .unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        let err = EmbeddedTextExtractor::new().extract_document(&[]).unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }
}
