//! Product quantity extraction via code-proximity lookback windows.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, trace};

use super::patterns::QUANTITY_UNIT;
use crate::error::ExtractionError;
use crate::models::config::ProductCatalog;

/// Characters of context examined before each code occurrence.
const LOOKBACK_CHARS: usize = 220;

/// Unit marker attached to a quantity token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUnit {
    /// Weight in kilograms; divided by the product's weight factor.
    Kilograms,
    /// Already a unit count; the weight factor does not apply.
    Units,
}

impl QuantityUnit {
    fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("KG") {
            QuantityUnit::Kilograms
        } else {
            QuantityUnit::Units
        }
    }
}

/// Extracts per-product unit counts from whole-document text.
///
/// Order lines print the quantity token shortly before the product code, so
/// each code occurrence is resolved against the closest token in a fixed
/// lookback window.
pub struct QuantityExtractor<'a> {
    catalog: &'a ProductCatalog,
}

impl<'a> QuantityExtractor<'a> {
    pub fn new(catalog: &'a ProductCatalog) -> Self {
        Self { catalog }
    }

    /// Walk every catalog code and resolve its nearest preceding quantity
    /// token. Codes absent from the text, or without a token in any of
    /// their lookback windows, are omitted from the result.
    pub fn extract(&self, text: &str) -> Result<BTreeMap<String, u64>, ExtractionError> {
        let mut quantities = BTreeMap::new();

        for (code, label) in &self.catalog.products {
            let Some((raw, unit)) = last_candidate(text, code) else {
                trace!("code {} ({}): no quantity token in range", code, label);
                continue;
            };

            let amount = normalize_decimal(&raw)?;
            let weight = self.catalog.weight_for(label);

            let converted = match unit {
                QuantityUnit::Kilograms => amount / weight,
                QuantityUnit::Units => amount,
            };

            let count = converted.floor().to_u64().unwrap_or(0);
            debug!(
                "code {} ({}): token '{}' {:?} -> {} units",
                code, label, raw, unit, count
            );
            quantities.insert(label.clone(), count);
        }

        Ok(quantities)
    }
}

/// Candidate token for a code: per occurrence the last token in the window
/// before it, with a later occurrence's find overwriting an earlier one.
fn last_candidate(text: &str, code: &str) -> Option<(String, QuantityUnit)> {
    let mut candidate = None;

    for (offset, _) in text.match_indices(code) {
        let window = &text[window_start(text, offset)..offset];

        if let Some(caps) = QUANTITY_UNIT.captures_iter(window).last() {
            candidate = Some((caps[1].to_string(), QuantityUnit::from_token(&caps[2])));
        }
    }

    candidate
}

/// Byte offset of the character `LOOKBACK_CHARS` characters before `end`,
/// clamped to the start of the text.
fn window_start(text: &str, end: usize) -> usize {
    text[..end]
        .char_indices()
        .rev()
        .take(LOOKBACK_CHARS)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(end)
}

/// Normalize a matched token (`1.234,00` style) into a decimal value:
/// thousands separators dropped, decimal comma replaced by a point.
fn normalize_decimal(raw: &str) -> Result<Decimal, ExtractionError> {
    let normalized = raw.replace('.', "").replace(',', ".");
    normalized
        .parse()
        .map_err(|e: rust_decimal::Error| ExtractionError::InvalidQuantity {
            token: raw.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> ProductCatalog {
        let products = [("1179486", "A"), ("1179542", "BC"), ("1179519", "SONHO")]
            .into_iter()
            .map(|(code, label)| (code.to_string(), label.to_string()))
            .collect();
        let weights = [
            ("A", Decimal::new(50, 1)),
            ("BC", Decimal::new(30, 1)),
            ("SONHO", Decimal::new(10, 1)),
        ]
        .into_iter()
        .map(|(label, kg)| (label.to_string(), kg))
        .collect();
        ProductCatalog { products, weights }
    }

    fn extract(text: &str) -> BTreeMap<String, u64> {
        let catalog = catalog();
        QuantityExtractor::new(&catalog).extract(text).unwrap()
    }

    #[test]
    fn absent_code_has_no_entry() {
        let result = extract("nothing relevant here 0018,00KG 9999999");
        assert!(result.is_empty());
    }

    #[test]
    fn kg_quantity_is_divided_by_weight_and_floored() {
        // 18.00 kg / 5.0 kg per unit = 3.6 -> 3
        let result = extract("ITEM 01 0018,00KG 1179486");
        assert_eq!(result.get("A"), Some(&3));
    }

    #[test]
    fn un_quantity_is_not_divided() {
        let result = extract("ITEM 01 0004,00UN 1179486");
        assert_eq!(result.get("A"), Some(&4));
    }

    #[test]
    fn thousands_separator_is_normalized() {
        let result = extract("ITEM 01 1.234,00UN 1179486");
        assert_eq!(result.get("A"), Some(&1234));
    }

    #[test]
    fn fractional_remainder_is_floored_not_rounded() {
        // 19.00 / 5.0 = 3.8 -> 3
        let result = extract("0019,00KG 1179486");
        assert_eq!(result.get("A"), Some(&3));
    }

    #[test]
    fn closest_token_in_window_wins() {
        let result = extract("0099,00KG pedido 0010,00KG 1179486");
        assert_eq!(result.get("A"), Some(&2));
    }

    #[test]
    fn later_occurrence_overwrites_earlier_one() {
        let result = extract("0005,00UN 1179486 ........ 0009,00UN 1179486");
        assert_eq!(result.get("A"), Some(&9));
    }

    #[test]
    fn earlier_find_survives_when_later_window_is_empty() {
        let filler = "x".repeat(300);
        let text = format!("0005,00UN 1179486 {} 1179486", filler);
        let result = extract(&text);
        assert_eq!(result.get("A"), Some(&5));
    }

    #[test]
    fn token_outside_lookback_window_is_ignored() {
        let filler = "x".repeat(LOOKBACK_CHARS);
        let text = format!("0018,00KG {} 1179486", filler);
        let result = extract(&text);
        assert!(result.is_empty());
    }

    #[test]
    fn token_inside_lookback_window_is_found() {
        let filler = "x".repeat(LOOKBACK_CHARS - 20);
        let text = format!("0018,00KG {} 1179486", filler);
        let result = extract(&text);
        assert_eq!(result.get("A"), Some(&3));
    }

    #[test]
    fn window_is_measured_in_characters_not_bytes() {
        // Multi-byte filler: 200 'ç' chars are 400 bytes but stay inside
        // the 220-character window.
        let filler = "ç".repeat(200);
        let text = format!("0018,00KG {} 1179486", filler);
        let result = extract(&text);
        assert_eq!(result.get("A"), Some(&3));
    }

    #[test]
    fn missing_weight_entry_falls_back_to_no_conversion() {
        let mut catalog = catalog();
        catalog.weights.remove("A");
        let result = QuantityExtractor::new(&catalog)
            .extract("0018,00KG 1179486")
            .unwrap();
        assert_eq!(result.get("A"), Some(&18));
    }

    #[test]
    fn non_positive_weight_falls_back_to_no_conversion() {
        let mut catalog = catalog();
        catalog.weights.insert("A".into(), Decimal::ZERO);
        let result = QuantityExtractor::new(&catalog)
            .extract("0018,00KG 1179486")
            .unwrap();
        assert_eq!(result.get("A"), Some(&18));
    }

    #[test]
    fn several_codes_resolve_independently() {
        let result = extract("0018,00KG 1179486 | 0006,00KG 1179542 | 0002,00UN 1179519");
        assert_eq!(result.get("A"), Some(&3));
        assert_eq!(result.get("BC"), Some(&2));
        assert_eq!(result.get("SONHO"), Some(&2));
    }

    #[test]
    fn code_without_any_token_is_omitted() {
        let result = extract("pedido 1179486 sem quantidade");
        assert!(result.is_empty());
    }

    #[test]
    fn empty_text_yields_empty_result() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn normalize_decimal_round_trips_known_values() {
        assert_eq!(normalize_decimal("1.234,00").unwrap(), Decimal::new(123400, 2));
        assert_eq!(normalize_decimal("004,00").unwrap(), Decimal::new(400, 2));
    }
}
