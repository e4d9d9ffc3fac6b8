//! Error types for the romaneio-core library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the romaneio library.
#[derive(Error, Debug)]
pub enum RomaneioError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF text acquisition.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The input path does not point to an existing file.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from the PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The pdftotext binary is not installed.
    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    /// pdftotext ran but reported a failure.
    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },
}

/// Errors related to quantity extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A matched quantity token could not be parsed as a decimal number.
    #[error("failed to parse quantity '{token}': {reason}")]
    InvalidQuantity { token: String, reason: String },
}

/// Errors related to the catalog configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read or deserialized.
    #[error("failed to load config from {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    /// The configuration contents failed validation.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Result type for the romaneio library.
pub type Result<T> = std::result::Result<T, RomaneioError>;
