//! Customer legal-name ("Razão Social") extraction from the billing section.

use regex::{Regex, RegexBuilder};
use tracing::debug;

use super::patterns::{BILLING_SECTION, COMPANY_LINE};
use crate::models::report::CompanyName;

/// Extracts the customer's Razão Social from per-page document text.
///
/// The billing section often repeats the supplier's own legal name next to
/// the customer's, so plain capture over-includes it. The configured
/// supplier name is stripped from the capture before it is accepted.
pub struct CompanyNameExtractor {
    supplier_pattern: Option<Regex>,
}

impl CompanyNameExtractor {
    /// `excluded_name` is matched literally and case-insensitively when
    /// stripping captures; metacharacters in it carry no meaning.
    pub fn new(excluded_name: &str) -> Self {
        let supplier_pattern = if excluded_name.trim().is_empty() {
            None
        } else {
            Some(
                RegexBuilder::new(&regex::escape(excluded_name))
                    .case_insensitive(true)
                    .build()
                    .expect("escaped literal is a valid pattern"),
            )
        };
        Self { supplier_pattern }
    }

    /// Scan pages in order and return the first usable capture.
    pub fn extract(&self, pages: &[String]) -> CompanyName {
        for (index, page) in pages.iter().enumerate() {
            if page.is_empty() {
                continue;
            }

            let Some(marker) = BILLING_SECTION.find(page) else {
                continue;
            };
            let window = &page[marker.end()..];

            let Some(caps) = COMPANY_LINE.captures(window) else {
                continue;
            };

            let cleaned = self.strip_supplier(caps[1].trim());
            let cleaned = cleaned.trim();

            if cleaned.is_empty() {
                debug!(
                    "page {}: capture empty after removing supplier name",
                    index + 1
                );
                continue;
            }

            debug!("page {}: captured company name '{}'", index + 1, cleaned);
            return CompanyName::Found(cleaned.to_string());
        }

        CompanyName::NotFound
    }

    fn strip_supplier(&self, raw: &str) -> String {
        match &self.supplier_pattern {
            Some(pattern) => pattern.replace_all(raw, "").into_owned(),
            None => raw.to_string(),
        }
    }
}
