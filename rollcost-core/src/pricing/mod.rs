//! Pricing: weld cost, line totals and order totals.

mod line;
mod order;
mod weld;

pub use line::{compute_line_total, compute_service_total, LineTotal};
pub use order::{compute_order_totals, order_totals, OrderTotals};
pub use weld::{apply_auto_rate, compute_weld_cost, resolve_weld_rate, WeldCostCalc};
