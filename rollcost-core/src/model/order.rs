//! Work order: the parts of one job plus order-level charges.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields;
use crate::model::Part;
use crate::parser::parse_positive;

/// A job's part list with its order-level charges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkOrder {
    pub parts: Vec<Part>,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub trucking_cost: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub tax_rate: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkOrder {
    pub fn new(parts: Vec<Part>) -> Self {
        Self {
            parts,
            ..Default::default()
        }
    }

    /// Trucking charge, zero when unset.
    pub fn trucking(&self) -> f64 {
        parse_positive(&self.trucking_cost).unwrap_or(0.0)
    }

    /// Stored tax rate; `None` means the shop default applies.
    pub fn tax_rate(&self) -> Option<f64> {
        parse_positive(&self.tax_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_charges() {
        let json = r#"{"parts": [], "truckingCost": "150", "taxRate": 0.0825, "drNumber": 1042}"#;
        let order: WorkOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.trucking(), 150.0);
        assert_eq!(order.tax_rate(), Some(0.0825));
        assert_eq!(order.extra.get("drNumber"), Some(&Value::from(1042)));
    }

    #[test]
    fn test_order_without_charges() {
        let order = WorkOrder::new(vec![]);
        assert_eq!(order.trucking(), 0.0);
        assert_eq!(order.tax_rate(), None);
    }
}
