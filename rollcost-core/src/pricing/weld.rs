//! Weld cost for full-weld service lines.

use serde::Serialize;

use crate::config::{WeldRateTable, DEFAULT_RATE_KEY, WELD_PASS_THICKNESS};
use crate::model::RateEntry;

/// Breakdown of a weld price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeldCostCalc {
    /// One pass per 1/8" of material.
    pub passes: f64,
    /// Half the seam length, in inches.
    pub half_seam: f64,
    pub total: f64,
    pub thickness: f64,
    pub seam_length: f64,
    pub price_per_foot: f64,
}

/// Price a weld: `passes × half seam × rate`.
///
/// The rate is per foot but multiplies a length in inches; shop pricing is
/// built on this product and it is kept as is. Returns `None` unless every
/// input is strictly positive.
pub fn compute_weld_cost(thickness: f64, seam_length: f64, price_per_foot: f64) -> Option<WeldCostCalc> {
    if !(thickness > 0.0) || !(seam_length > 0.0) || !(price_per_foot > 0.0) {
        return None;
    }
    let passes = thickness / WELD_PASS_THICKNESS;
    let half_seam = seam_length / 2.0;
    Some(WeldCostCalc {
        passes,
        half_seam,
        total: passes * half_seam * price_per_foot,
        thickness,
        seam_length,
        price_per_foot,
    })
}

/// Look up the automatic weld rate for a material grade.
///
/// Exact key first, then the first key contained in the grade (ignoring
/// case), then the `default` key. A blank grade or a zero default gives no
/// suggestion.
pub fn resolve_weld_rate(grade: &str, rates: &WeldRateTable) -> Option<f64> {
    if grade.is_empty() {
        return None;
    }
    if let Some(rate) = rates.get(grade) {
        return Some(rate);
    }

    let lower = grade.to_lowercase();
    if let Some((key, rate)) = rates.iter().find(|(k, _)| lower.contains(&k.to_lowercase())) {
        tracing::debug!("Weld rate for '{}' matched key '{}'", grade, key);
        return Some(rate);
    }

    rates.get(DEFAULT_RATE_KEY).filter(|r| *r != 0.0)
}

/// Merge an automatic rate into the current one.
///
/// A manual entry is never replaced. Without a suggestion the current value
/// stays.
pub fn apply_auto_rate(current: Option<RateEntry>, auto: Option<f64>) -> Option<RateEntry> {
    match (current, auto) {
        (Some(rate), _) if rate.is_manual() => Some(rate),
        (_, Some(value)) => Some(RateEntry::auto(value)),
        (current, None) => current,
    }
}
