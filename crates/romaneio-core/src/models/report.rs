//! Result model for a single document extraction run.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::RomaneioError;

/// Outcome of the company-name search over a document's pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyName {
    /// Cleaned legal name captured from the billing section.
    Found(String),
    /// The section marker or the name line is absent. Not a fault.
    NotFound,
}

impl CompanyName {
    /// The captured name, if any.
    pub fn found(&self) -> Option<&str> {
        match self {
            CompanyName::Found(name) => Some(name),
            CompanyName::NotFound => None,
        }
    }
}

/// Company-name half of a report, with failures folded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum CompanyOutcome {
    Found { name: String },
    NotFound,
    Failed { reason: String },
}

impl From<Result<CompanyName, RomaneioError>> for CompanyOutcome {
    fn from(result: Result<CompanyName, RomaneioError>) -> Self {
        match result {
            Ok(CompanyName::Found(name)) => CompanyOutcome::Found { name },
            Ok(CompanyName::NotFound) => CompanyOutcome::NotFound,
            Err(e) => CompanyOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }
}

/// Quantity half of a report, with failures folded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum QuantityOutcome {
    Extracted { quantities: BTreeMap<String, u64> },
    Failed { reason: String },
}

impl From<Result<BTreeMap<String, u64>, RomaneioError>> for QuantityOutcome {
    fn from(result: Result<BTreeMap<String, u64>, RomaneioError>) -> Self {
        match result {
            Ok(quantities) => QuantityOutcome::Extracted { quantities },
            Err(e) => QuantityOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }
}

/// Both extraction results for one document.
///
/// The two halves fail independently; a fault in one never suppresses the
/// result of the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Path of the processed document.
    pub source: PathBuf,

    /// Name of the text extraction backend used.
    pub backend: String,

    /// Customer legal name ("Razão Social") result.
    pub company: CompanyOutcome,

    /// Label -> unit count result.
    pub quantities: QuantityOutcome,
}

impl ExtractionReport {
    /// True when both halves failed outright (e.g. unreadable input).
    pub fn is_total_failure(&self) -> bool {
        matches!(self.company, CompanyOutcome::Failed { .. })
            && matches!(self.quantities, QuantityOutcome::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;

    #[test]
    fn outcomes_fold_errors_into_reasons() {
        let err: RomaneioError = PdfError::FileNotFound("missing.pdf".into()).into();
        let outcome = CompanyOutcome::from(Err(err));
        match outcome {
            CompanyOutcome::Failed { reason } => {
                assert!(reason.contains("file not found"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn not_found_is_not_a_failure() {
        let outcome = CompanyOutcome::from(Ok(CompanyName::NotFound));
        assert_eq!(outcome, CompanyOutcome::NotFound);
    }

    #[test]
    fn report_json_shape_is_tagged() {
        let report = ExtractionReport {
            source: "pedido.pdf".into(),
            backend: "embedded".into(),
            company: CompanyOutcome::Found {
                name: "SENDAS DISTRIBUIDORA S/A".into(),
            },
            quantities: QuantityOutcome::Extracted {
                quantities: BTreeMap::from([("A".to_string(), 3u64)]),
            },
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""status":"found""#));
        assert!(json.contains(r#""A":3"#));
    }
}
