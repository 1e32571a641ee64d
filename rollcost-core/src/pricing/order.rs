//! Work-order totals.

use serde::Serialize;

use crate::config::DEFAULT_TAX_RATE;
use crate::model::{Part, WorkOrder};
use crate::parser::parse_number;

/// Order-level money summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderTotals {
    pub parts_subtotal: f64,
    pub trucking: f64,
    pub subtotal: f64,
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
}

/// Sum stored part totals and apply trucking and tax.
///
/// `tax_rate` falls back to the shop default when `None`.
pub fn compute_order_totals(parts: &[Part], trucking: f64, tax_rate: Option<f64>) -> OrderTotals {
    let parts_subtotal: f64 = parts.iter().map(|p| parse_number(&p.part_total)).sum();
    let subtotal = parts_subtotal + trucking;
    let tax_rate = tax_rate.unwrap_or(DEFAULT_TAX_RATE);
    let tax_amount = subtotal * tax_rate;
    OrderTotals {
        parts_subtotal,
        trucking,
        subtotal,
        tax_rate,
        tax_amount,
        grand_total: subtotal + tax_amount,
    }
}

/// [`compute_order_totals`] using the charges stored on the order.
pub fn order_totals(order: &WorkOrder) -> OrderTotals {
    compute_order_totals(&order.parts, order.trucking(), order.tax_rate())
}
