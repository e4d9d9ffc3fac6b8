//! Core library for romaneio order-document processing.
//!
//! This crate provides:
//! - PDF text acquisition (in-process `pdf-extract` backend, external
//!   `pdftotext` backend)
//! - Billing-section customer-name extraction ("Razão Social")
//! - Product-quantity extraction by code proximity, with weight conversion
//! - The product-catalog configuration model

pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use extract::company::CompanyNameExtractor;
use extract::quantity::QuantityExtractor;

pub use error::{Result, RomaneioError};
pub use models::config::{ProductCatalog, RomaneioConfig};
pub use models::report::{CompanyName, CompanyOutcome, ExtractionReport, QuantityOutcome};
pub use pdf::{EmbeddedTextExtractor, PdfTextSource, PdftotextExtractor};

/// Read the document and extract the customer's legal name from its
/// billing-data section.
///
/// `excluded_name` (the supplier's own Razão Social) is removed from the
/// capture as a literal, case-insensitive substring.
pub fn extract_company_name(
    path: &Path,
    source: &dyn PdfTextSource,
    excluded_name: &str,
) -> Result<CompanyName> {
    let bytes = read_pdf(path)?;
    let pages = source.extract_pages(&bytes)?;

    info!(
        "extracted {} pages from {} via {}",
        pages.len(),
        path.display(),
        source.backend_name()
    );

    Ok(CompanyNameExtractor::new(excluded_name).extract(&pages))
}

/// Read the document and extract per-product unit counts.
///
/// A code absent from the text, or with no quantity token in any of its
/// lookback windows, is omitted from the result; that is not an error.
pub fn extract_quantities(
    path: &Path,
    source: &dyn PdfTextSource,
    catalog: &ProductCatalog,
) -> Result<BTreeMap<String, u64>> {
    let bytes = read_pdf(path)?;
    let text = source.extract_document(&bytes)?;

    if text.trim().is_empty() {
        // Scanned documents extract to nothing; that is an empty result,
        // not a fault.
        warn!("no text extracted from {}", path.display());
        return Ok(BTreeMap::new());
    }

    Ok(QuantityExtractor::new(catalog).extract(&text)?)
}

/// Run both extractions over one document.
///
/// The halves are independent: a failure in either is folded into its
/// outcome and never suppresses the other.
pub fn extract_report(
    path: &Path,
    source: &dyn PdfTextSource,
    config: &RomaneioConfig,
) -> ExtractionReport {
    let company = extract_company_name(path, source, &config.supplier_name).into();
    let quantities = extract_quantities(path, source, &config.catalog).into();

    ExtractionReport {
        source: path.to_path_buf(),
        backend: source.backend_name().to_string(),
        company,
        quantities,
    }
}

/// Read the PDF into memory, reporting a missing path as its own error.
/// The file handle is scoped to this call.
fn read_pdf(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(error::PdfError::FileNotFound(path.to_path_buf()).into());
    }
    debug!("reading {}", path.display());
    Ok(fs::read(path)?)
}
