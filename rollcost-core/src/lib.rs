//! rollcost-core - Rolling geometry and costing engine for fabrication parts.
//!
//! This library turns a fabricator's raw measurements (roll value, where it
//! was measured, thickness notation, arc angle, tangents) into developed
//! lengths, derives candidate weld seams from a part's shape, and prices
//! parts and the fabrication services billed against them.
//!
//! # Example
//!
//! ```no_run
//! use rollcost_core::{load_settings_or_empty, load_work_order, reprice_work_order, NoPitch};
//! use std::path::Path;
//!
//! let mut order = load_work_order(Path::new("order.json")).unwrap();
//! let settings = load_settings_or_empty(Path::new("settings.json"));
//! let totals = reprice_work_order(&mut order, &settings, &NoPitch);
//! println!("{:.2}", totals.grand_total);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod model;
pub mod parser;
pub mod pricing;
pub mod seam;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use config::{ShopSettings, WeldRateTable};
pub use error::{EngineError, ErrorCode, Result};
pub use geometry::{compute_geometry, GeometryResult, NoPitch, PitchDescriber};
pub use model::{Part, PartType, RollSpec, SeamOption, WorkOrder};
pub use parser::{load_settings, load_settings_or_empty, load_work_order, parse_thickness};
pub use pricing::{compute_line_total, compute_weld_cost, LineTotal, OrderTotals, WeldCostCalc};
pub use seam::extract_seam_options;
pub use transform::{recompute_order, Derived};
pub use validation::{validate_order, ValidationResult};

/// Reprice every part of a work order and total it.
///
/// This is the main high-level function that runs the full pipeline:
/// 1. Validate the parts (problems are logged, not fatal)
/// 2. Recompute derived fields, ordinary parts before service lines
/// 3. Sum the order totals from the stored part totals
pub fn reprice_work_order(
    order: &mut WorkOrder,
    settings: &ShopSettings,
    pitch: &dyn PitchDescriber,
) -> OrderTotals {
    let validation = validate_order(order);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    for error in &validation.errors {
        tracing::warn!("{}", error);
    }

    recompute_order(order, settings, pitch);
    pricing::order_totals(order)
}
