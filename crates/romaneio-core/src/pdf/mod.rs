//! PDF text acquisition.

mod embedded;
mod pdftotext;

pub use embedded::EmbeddedTextExtractor;
pub use pdftotext::PdftotextExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF text extraction backends.
///
/// Backends produce plain text only. An empty page list or empty document
/// text is a valid outcome (scanned documents carry no text layer), not an
/// error.
pub trait PdfTextSource {
    /// Extract text content, one string per page, in document order.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<String>>;

    /// Extract the whole document as one string, pages joined by a newline.
    fn extract_document(&self, pdf_bytes: &[u8]) -> Result<String> {
        Ok(self.extract_pages(pdf_bytes)?.join("\n"))
    }

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
