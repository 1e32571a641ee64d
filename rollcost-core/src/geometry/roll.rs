//! Developed-length arithmetic for rolled parts.
//!
//! All lengths are inches and all angles degrees. Nothing is rounded here;
//! rounding is a display concern.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::model::{MeasurePoint, MeasureType, RollDirection, RollSpec};

/// Developed length of a rolled section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryResult {
    /// Neutral-axis diameter.
    pub effective_diameter: f64,
    /// Developed length of the curved portion.
    pub arc_length: f64,
    /// Arc length plus both tangents.
    pub total_length: f64,
    /// Whether tangents were added.
    pub has_tangent: bool,
}

/// Compute the developed length of a rolled part.
///
/// Returns `None` when the roll value or thickness is not positive, when the
/// measure point leaves no positive neutral-axis diameter, or when the arc
/// angle is beyond a full circle.
pub fn compute_geometry(
    roll_value: f64,
    measure_type: MeasureType,
    measure_point: MeasurePoint,
    thickness: f64,
    arc_degrees: Option<f64>,
    tangent_length: Option<f64>,
) -> Option<GeometryResult> {
    if !(roll_value > 0.0) || !(thickness > 0.0) {
        return None;
    }

    let diameter = measure_type.to_diameter(roll_value);
    let effective_diameter = measure_point.to_centerline(diameter, thickness);
    if !(effective_diameter > 0.0) {
        tracing::debug!(
            "Geometry suppressed: {} diameter {} leaves no material at thickness {}",
            measure_point.key(),
            diameter,
            thickness
        );
        return None;
    }

    let mut arc_length = effective_diameter * PI;
    match arc_degrees {
        Some(deg) if deg > 360.0 => {
            tracing::debug!("Geometry suppressed: arc of {} degrees", deg);
            return None;
        }
        Some(deg) if deg > 0.0 => arc_length *= deg / 360.0,
        _ => {}
    }

    let tangent = tangent_length.filter(|t| *t > 0.0);
    let total_length = match tangent {
        Some(t) => arc_length + 2.0 * t,
        None => arc_length,
    };

    Some(GeometryResult {
        effective_diameter,
        arc_length,
        total_length,
        has_tangent: tangent.is_some(),
    })
}

/// [`compute_geometry`] over a part's roll spec.
pub fn compute_for_spec(spec: &RollSpec, thickness: f64) -> Option<GeometryResult> {
    compute_geometry(
        spec.roll_value,
        spec.measure_type,
        spec.measure_point,
        thickness,
        spec.arc_degrees,
        spec.tangent_length,
    )
}

/// Neutral-axis diameter handed to the pitch calculation.
///
/// Unlike [`compute_geometry`] this only needs a roll value; a missing
/// thickness simply means no adjustment.
pub fn centerline_diameter(spec: &RollSpec, thickness: f64) -> f64 {
    if !(spec.roll_value > 0.0) {
        return 0.0;
    }
    spec.measure_point.to_centerline(spec.diameter(), thickness)
}

/// Suggest a roll direction by comparing developed length to stock width.
///
/// Only a suggestion: callers apply it on first population or when the user
/// asks, never over an explicit choice.
pub fn infer_roll_direction(total_length: f64, width: f64) -> Option<RollDirection> {
    if !(total_length > 0.0) || !(width > 0.0) {
        return None;
    }
    if total_length >= width {
        Some(RollDirection::EasyWay)
    } else {
        Some(RollDirection::HardWay)
    }
}
