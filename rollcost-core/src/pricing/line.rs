//! Per-line pricing.

use serde::Serialize;

/// Price breakdown for one line item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineTotal {
    /// Material cost with markup, per piece.
    pub material_each: f64,
    /// Material plus labor, per piece.
    pub unit_price: f64,
    pub line_total: f64,
}

/// Price a line: `(material × (1 + markup/100) + labor) × quantity`.
///
/// A quantity of zero is priced as one.
pub fn compute_line_total(material_cost: f64, markup_percent: f64, labor_cost: f64, quantity: u32) -> LineTotal {
    let quantity = quantity.max(1);
    let material_each = material_cost * (1.0 + markup_percent / 100.0);
    let unit_price = material_each + labor_cost;
    LineTotal {
        material_each,
        unit_price,
        line_total: unit_price * f64::from(quantity),
    }
}

/// Price a service line: labor only.
pub fn compute_service_total(labor_each: f64, quantity: u32) -> LineTotal {
    compute_line_total(0.0, 0.0, labor_each, quantity)
}
