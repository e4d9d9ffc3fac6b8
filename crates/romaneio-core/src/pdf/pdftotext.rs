//! External text extraction via pdftotext (poppler-utils).

use std::io::Write;
use std::process::Command;

use tracing::debug;

use super::{PdfTextSource, Result};
use crate::error::PdfError;

/// Text extraction backend shelling out to `pdftotext -layout`.
///
/// Preserves the whitespace alignment of tabular regions and real page
/// boundaries (pages are separated by a form feed).
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    fn run(&self, pdf_bytes: &[u8]) -> Result<String> {
        // pdftotext reads from a file; the temp copy is scoped so it is
        // removed on every exit path.
        let mut tmpfile = tempfile::NamedTempFile::new()
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PdfError::PdftotextNotFound
                } else {
                    PdfError::TextExtraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(PdfError::PdftotextFailed { code, stderr });
        }

        debug!("pdftotext produced {} bytes of text", output.stdout.len());
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfTextSource for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<String>> {
        Ok(split_form_feed(&self.run(pdf_bytes)?))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split pdftotext output into pages and drop the trailing empty page left
/// by the final form feed.
fn split_form_feed(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split('\x0c').map(str::to_string).collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_form_feed_separates_pages() {
        let pages = split_form_feed("page one\x0cpage two\x0c");
        assert_eq!(pages, vec!["page one".to_string(), "page two".to_string()]);
    }

    #[test]
    fn split_form_feed_single_page() {
        let pages = split_form_feed("only page");
        assert_eq!(pages, vec!["only page".to_string()]);
    }

    #[test]
    fn split_form_feed_keeps_interior_blank_pages() {
        let pages = split_form_feed("one\x0c\x0cthree\x0c");
        assert_eq!(
            pages,
            vec!["one".to_string(), "".to_string(), "three".to_string()]
        );
    }
}
