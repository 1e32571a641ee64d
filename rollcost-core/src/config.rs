//! Configuration constants and shop-wide settings for the engine.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::PartType;

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Material thickness covered by one weld pass (1/8").
pub const WELD_PASS_THICKNESS: f64 = 0.125;

/// Markup applied to material cost on a freshly created part.
pub const DEFAULT_MATERIAL_MARKUP_PERCENT: f64 = 20.0;

/// Sales-tax rate used when an order carries none.
pub const DEFAULT_TAX_RATE: f64 = 0.0975;

/// Label of the sentinel seam option that asks for a manual length.
pub const CUSTOM_SEAM_LABEL: &str = "Custom Length";

/// Weld-rate key used when no grade-specific rate matches.
pub const DEFAULT_RATE_KEY: &str = "default";

/// Accepted values of a part's `materialSource`.
pub const MATERIAL_SOURCES: &[&str] = &["we_order", "customer_supplied"];

/// `materialSource` stored when a part has none or an unknown one.
pub const DEFAULT_MATERIAL_SOURCE: &str = "customer_supplied";

/// Menu entry meaning "user typed their own value".
pub const CUSTOM_OPTION: &str = "Custom";

/// Sheet-gauge labels and their decimal thickness in inches.
pub const GAUGE_TABLE: &[(&str, f64)] = &[
    ("24 ga", 0.0239),
    ("20 ga", 0.0359),
    ("16 ga", 0.0598),
    ("14 ga", 0.0747),
    ("12 ga", 0.1046),
    ("11 ga", 0.1196),
    ("10 ga", 0.1345),
];

/// Thickness choices offered on the plate forms.
pub const STANDARD_THICKNESSES: &[&str] = &[
    "24 ga", "20 ga", "16 ga", "14 ga", "12 ga", "11 ga", "10 ga", "3/16\"", "1/4\"", "5/16\"",
    "3/8\"", "1/2\"", "5/8\"", "3/4\"", "7/8\"", "1\"", "1-1/4\"", "1-1/2\"", "2\"",
];

/// Grades offered when the settings provider has none for a part type.
pub const DEFAULT_GRADES: &[&str] = &["A36", "304 S/S", "316 S/S", "AR400"];

/// Check whether a thickness label is one of the standard menu entries.
pub fn is_standard_thickness(label: &str) -> bool {
    STANDARD_THICKNESSES.contains(&label)
}

/// A material grade and the part types it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialGrade {
    pub name: String,
    #[serde(default, rename = "partTypes", alias = "applicablePartTypes")]
    pub part_types: Vec<String>,
}

/// Weld rate per foot keyed by grade name.
///
/// Keeps the order the settings provider returned, since partial grade
/// matching takes the first key that fits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeldRateTable {
    entries: Vec<(String, f64)>,
}

impl WeldRateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rate, replacing an existing entry with the same key.
    pub fn insert(&mut self, grade: impl Into<String>, rate: f64) {
        let grade = grade.into();
        match self.entries.iter_mut().find(|(k, _)| *k == grade) {
            Some(entry) => entry.1 = rate,
            None => self.entries.push((grade, rate)),
        }
    }

    /// Builder-style insert.
    pub fn with_rate(mut self, grade: impl Into<String>, rate: f64) -> Self {
        self.insert(grade, rate);
        self
    }

    /// Look up a rate by exact key.
    pub fn get(&self, grade: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == grade)
            .map(|(_, rate)| *rate)
    }

    /// Iterate entries in provider order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for WeldRateTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeldRateTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RateVisitor;

        impl<'de> Visitor<'de> for RateVisitor {
            type Value = WeldRateTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of grade name to weld rate")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut table = WeldRateTable::new();
                while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
                    // Rates saved from the admin form may arrive as strings.
                    let rate = match &value {
                        serde_json::Value::Number(n) => n.as_f64(),
                        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
                        _ => None,
                    };
                    match rate.filter(|r| r.is_finite()) {
                        Some(rate) => table.insert(key, rate),
                        None => tracing::debug!("Skipping non-numeric weld rate for '{}'", key),
                    }
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(RateVisitor)
    }
}

/// Shop-wide settings resolved once per pricing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopSettings {
    /// Weld rate (currency per foot) by material grade.
    #[serde(default, rename = "weldRates", alias = "weld_rates")]
    pub weld_rates: WeldRateTable,
    /// Material grade definitions.
    #[serde(default, rename = "materialGrades", alias = "material_grades")]
    pub material_grades: Vec<MaterialGrade>,
}

impl ShopSettings {
    /// Settings with no rates and no grades; what a failed lookup resolves to.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Grade menu for a part type, always ending with `Custom`.
    pub fn grade_options(&self, part_type: PartType) -> Vec<String> {
        let key = part_type.key();
        let mut options: Vec<String> = self
            .material_grades
            .iter()
            .filter(|g| g.part_types.iter().any(|t| t == key))
            .map(|g| g.name.clone())
            .collect();
        if options.is_empty() {
            options = DEFAULT_GRADES.iter().map(|g| g.to_string()).collect();
        }
        options.push(CUSTOM_OPTION.to_string());
        options
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a is in range [min, max] with epsilon tolerance.
    #[inline]
    pub fn in_range(a: f64, min: f64, max: f64) -> bool {
        a >= min - EPS && a <= max + EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== WeldRateTable tests ====================

    #[test]
    fn test_rate_table_keeps_document_order() {
        let json = r#"{"stainless": 18, "A36": 12.5, "default": 10}"#;
        let table: WeldRateTable = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["stainless", "A36", "default"]);
        assert_eq!(table.get("A36"), Some(12.5));
    }

    #[test]
    fn test_rate_table_accepts_string_rates() {
        let json = r#"{"A36": "12.50", "junk": "n/a", "bad": null}"#;
        let table: WeldRateTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("A36"), Some(12.5));
    }

    #[test]
    fn test_rate_table_insert_replaces() {
        let mut table = WeldRateTable::new().with_rate("A36", 10.0);
        table.insert("A36", 11.0);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("A36"), Some(11.0));
    }

    #[test]
    fn test_rate_table_serializes_as_map() {
        let table = WeldRateTable::new().with_rate("A36", 10.0).with_rate("AR400", 15.0);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"A36":10.0,"AR400":15.0}"#);
    }

    // ==================== ShopSettings tests ====================

    #[test]
    fn test_grade_options_filtered_by_part_type() {
        let json = r#"{
            "weldRates": {},
            "materialGrades": [
                {"name": "A36", "partTypes": ["plate_roll", "flat_stock"]},
                {"name": "A572-50", "partTypes": ["plate_roll"]},
                {"name": "6061-T6", "partTypes": ["flat_stock"]}
            ]
        }"#;
        let settings: ShopSettings = serde_json::from_str(json).unwrap();
        assert_eq!(
            settings.grade_options(PartType::PlateRoll),
            vec!["A36", "A572-50", "Custom"]
        );
        assert_eq!(
            settings.grade_options(PartType::FlatStock),
            vec!["A36", "6061-T6", "Custom"]
        );
    }

    #[test]
    fn test_grade_options_fall_back_to_defaults() {
        let settings = ShopSettings::empty();
        assert_eq!(
            settings.grade_options(PartType::AngleRoll),
            vec!["A36", "304 S/S", "316 S/S", "AR400", "Custom"]
        );
    }

    #[test]
    fn test_settings_accept_applicable_part_types_alias() {
        let json = r#"{"materialGrades": [{"name": "A36", "applicablePartTypes": ["tee_bar"]}]}"#;
        let settings: ShopSettings = serde_json::from_str(json).unwrap();
        assert!(settings.weld_rates.is_empty());
        assert_eq!(settings.grade_options(PartType::TeeBar), vec!["A36", "Custom"]);
    }

    #[test]
    fn test_standard_thickness() {
        assert!(is_standard_thickness("1-1/4\""));
        assert!(is_standard_thickness("16 ga"));
        assert!(!is_standard_thickness("0.3125"));
    }
}
