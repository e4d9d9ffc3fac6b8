//! CLI subcommands.

pub mod batch;
pub mod catalog;
pub mod extract;

use std::path::Path;

use anyhow::Context;

use romaneio_core::{EmbeddedTextExtractor, PdfTextSource, PdftotextExtractor, RomaneioConfig};

/// Load the extraction config from an explicit path, from the default
/// location if a file exists there, or fall back to the built-in catalog.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<RomaneioConfig> {
    if let Some(path) = config_path {
        return RomaneioConfig::from_file(Path::new(path))
            .with_context(|| format!("failed to load config from {}", path));
    }

    let default_path = catalog::default_config_path();
    if default_path.exists() {
        return RomaneioConfig::from_file(&default_path)
            .with_context(|| format!("failed to load config from {}", default_path.display()));
    }

    Ok(RomaneioConfig::default())
}

/// PDF text extraction backend selection.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Backend {
    /// In-process extraction (pdf-extract)
    Embedded,
    /// External pdftotext (poppler-utils)
    Pdftotext,
}

impl Backend {
    pub fn source(self) -> anyhow::Result<Box<dyn PdfTextSource>> {
        match self {
            Backend::Embedded => Ok(Box::new(EmbeddedTextExtractor::new())),
            Backend::Pdftotext => {
                if !PdftotextExtractor::is_available() {
                    anyhow::bail!(
                        "pdftotext not found on PATH; install poppler-utils or use --backend embedded"
                    );
                }
                Ok(Box::new(PdftotextExtractor::new()))
            }
        }
    }
}
