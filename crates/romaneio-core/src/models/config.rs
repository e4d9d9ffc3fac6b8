//! Configuration structures: supplier identity and the product catalog.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Main configuration for romaneio extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RomaneioConfig {
    /// The supplier's own legal name. The billing section of order documents
    /// repeats it next to the customer's name, so it is stripped from
    /// captured names.
    pub supplier_name: String,

    /// Product catalog: codes, labels and weight-conversion factors.
    pub catalog: ProductCatalog,
}

impl Default for RomaneioConfig {
    fn default() -> Self {
        Self {
            supplier_name: "MMFOODS IND E COM DE ALIM LTDA".to_string(),
            catalog: ProductCatalog::default(),
        }
    }
}

impl RomaneioConfig {
    /// Load configuration from a JSON file and validate the catalog.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| ConfigError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.catalog.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// Product catalog mapping order codes to labels and labels to unit weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCatalog {
    /// Product code -> short label, as printed on order documents.
    pub products: BTreeMap<String, String>,

    /// Label -> kilograms per sales unit. An entry that is absent or not
    /// positive means the quantity is already in final units.
    pub weights: BTreeMap<String, Decimal>,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        let products = [
            ("1178049", "PANE."),
            ("1178051", "IA"),
            ("1179486", "A"),
            ("1179490", "BAG"),
            ("1179491", "FILÃO"),
            ("1179494", "CHOCO"),
            ("1179501", "CREME"),
            ("1179504", "VOVO"),
            ("1179505", "ITA"),
            ("1179506", "BISNA"),
            ("1179508", "LEITE"),
            ("1179510", "BROA"),
            ("1179512", "COCO"),
            ("1179513", "MILHO"),
            ("1179514", "HAM"),
            ("1179515", "S. ITA"),
            ("1179516", "DOG"),
            ("1179519", "SONHO"),
            ("1179523", "L.MEL"),
            ("1179524", "M SON"),
            ("1179527", "RUSTICA"),
            ("1179535", "BATA"),
            ("1179538", "BF"),
            ("1179540", "CHIPA"),
            ("1179541", "BPQ"),
            ("1179542", "BC"),
            ("1179558", "PQ 15"),
            ("1179573", "MA"),
            ("1179577", "BL LARA"),
            ("1179579", "MBA"),
            ("1179580", "BL FUB"),
            ("1179581", "BL BAU"),
            ("1179582", "BL COCO"),
            ("1179583", "BL CHO"),
        ]
        .into_iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect();

        let weights = [
            ("A", Decimal::new(50, 1)),
            ("BAG", Decimal::new(50, 1)),
            ("BATA", Decimal::new(50, 1)),
            ("BC", Decimal::new(30, 1)),
            ("BF", Decimal::new(30, 1)),
            ("BISNA", Decimal::new(50, 1)),
            ("BL BAU", Decimal::new(18, 1)),
            ("BL CHO", Decimal::new(18, 1)),
            ("BL COCO", Decimal::new(18, 1)),
            ("BL FUB", Decimal::new(18, 1)),
            ("BL LARA", Decimal::new(18, 1)),
            ("BPQ", Decimal::new(30, 1)),
            ("BROA", Decimal::new(50, 1)),
            ("CHIPA", Decimal::new(20, 1)),
            ("CHOCO", Decimal::new(35, 1)),
            ("COCO", Decimal::new(50, 1)),
            ("CREME", Decimal::new(90, 1)),
            ("DOG", Decimal::new(50, 1)),
            ("FILÃO", Decimal::new(50, 1)),
            ("HAM", Decimal::new(50, 1)),
            ("IA", Decimal::new(50, 1)),
            ("ITA", Decimal::new(50, 1)),
            ("L.MEL", Decimal::new(25, 1)),
            ("LEITE", Decimal::new(50, 1)),
            ("M SON", Decimal::new(25, 1)),
            ("MA", Decimal::new(50, 1)),
            ("MBA", Decimal::new(50, 1)),
            ("MILHO", Decimal::new(50, 1)),
            ("PANE.", Decimal::new(35, 1)),
            ("PQ 15", Decimal::new(20, 1)),
            ("RUSTICA", Decimal::new(50, 1)),
            ("S. ITA", Decimal::new(50, 1)),
            ("SONHO", Decimal::new(10, 1)),
            ("VOVO", Decimal::new(50, 1)),
        ]
        .into_iter()
        .map(|(label, kg)| (label.to_string(), kg))
        .collect();

        Self { products, weights }
    }
}

impl ProductCatalog {
    /// Weight factor for a label. Absent or non-positive entries fall back
    /// to 1: the quantity is already a unit count.
    pub fn weight_for(&self, label: &str) -> Decimal {
        match self.weights.get(label) {
            Some(w) if *w > Decimal::ZERO => *w,
            _ => Decimal::ONE,
        }
    }

    /// Validate that the catalog is well-formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.products.is_empty() {
            return Err(ConfigError::Invalid("products must not be empty".into()));
        }

        for (code, label) in &self.products {
            if code.trim().is_empty() {
                return Err(ConfigError::Invalid("product code must not be blank".into()));
            }
            if label.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "product {} has a blank label",
                    code
                )));
            }
        }

        for label in self.weights.keys() {
            if !self.products.values().any(|l| l == label) {
                return Err(ConfigError::Invalid(format!(
                    "weight entry '{}' does not match any product label",
                    label
                )));
            }
        }

        Ok(())
    }
}
