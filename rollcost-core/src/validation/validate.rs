//! Save-time checks for parts and orders.

use serde::Serialize;

use crate::config::float_cmp::in_range;
use crate::config::CUSTOM_OPTION;
use crate::error::{EngineError, Result};
use crate::geometry::{centerline_diameter, compute_for_spec, infer_roll_direction};
use crate::model::{Part, PartRegistry, PartType, RollDirection, WorkOrder};
use crate::parser::{parse_leading_f64, parse_leading_int, parse_number};

/// Validation result with warnings.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Messages that do not block saving.
    pub warnings: Vec<String>,
    /// Messages that block saving.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }

    /// Merge another result, prefixing each message.
    fn merge_prefixed(&mut self, prefix: &str, other: ValidationResult) {
        self.warnings
            .extend(other.warnings.into_iter().map(|w| format!("{}: {}", prefix, w)));
        self.errors
            .extend(other.errors.into_iter().map(|e| format!("{}: {}", prefix, e)));
        if !other.passed {
            self.passed = false;
        }
    }
}

fn has_roll_value(part: &Part) -> bool {
    !part.roll_value.is_empty() || !part.radius.is_empty() || !part.diameter.is_empty()
}

/// Whether a size like `3x2` names two different legs.
///
/// Only two-part sizes are compared; a leg that is not a plain number
/// counts as different.
fn is_unequal_pair(size: &str) -> bool {
    let legs: Vec<&str> = size.split('x').collect();
    if legs.len() != 2 {
        return false;
    }
    let leg = |s: &str| {
        let s = s.trim();
        if s.is_empty() {
            Some(0.0)
        } else {
            s.parse::<f64>().ok()
        }
    };
    match (leg(legs[0]), leg(legs[1])) {
        (Some(a), Some(b)) => a != b,
        _ => true,
    }
}

/// Require a size selection, and the typed size when `Custom` was picked.
fn check_size(result: &mut ValidationResult, size: &str, custom: &str, name: &str) {
    if size.is_empty() {
        result.add_error(format!("{} size is required", name));
    }
    if size == CUSTOM_OPTION && custom.is_empty() {
        result.add_error(format!("Custom {} size is required", name.to_lowercase()));
    }
}

fn check_thickness(result: &mut ValidationResult, part: &Part) {
    if part.thickness.is_empty() {
        result.add_error("Thickness is required");
    }
}

fn check_roll(result: &mut ValidationResult, part: &Part) {
    if part.roll_type.is_empty() {
        result.add_error("Roll Direction is required");
    }
    if !has_roll_value(part) {
        result.add_error("Roll value is required");
    }
}

/// Run the save checklist for one part.
pub fn validate_part(part: &Part) -> ValidationResult {
    let mut result = ValidationResult::ok();

    match part.part_type {
        PartType::PlateRoll => {
            check_thickness(&mut result, part);
            if part.roll_type.is_empty() {
                result.add_error("Roll Direction (Easy Way / Hard Way) is required");
            }
            if !has_roll_value(part) {
                result.add_error("Roll value (radius or diameter) is required");
            }
        }
        PartType::FlatStock | PartType::PressBrake => check_thickness(&mut result, part),
        PartType::AngleRoll => {
            check_size(&mut result, &part.angle_size, &part.custom_angle_size, "Angle");
            check_thickness(&mut result, part);
            check_roll(&mut result, part);
            if !part.angle_size.is_empty()
                && part.angle_size != CUSTOM_OPTION
                && is_unequal_pair(&part.angle_size)
                && !part.roll_type.is_empty()
                && part.leg_orientation.is_empty()
            {
                result.add_error("Leg orientation is required for unequal angle sizes");
            }
        }
        PartType::PipeRoll => {
            if part.pipe_size.is_empty() && part.outer_diameter.is_empty() {
                result.add_error("Pipe/tube size or OD is required");
            }
            if part.pipe_size == CUSTOM_OPTION && part.outer_diameter.is_empty() {
                result.add_error("Outer diameter is required");
            }
            if !has_roll_value(part) {
                result.add_error("Roll value is required");
            }
        }
        PartType::TubeRoll => {
            check_size(&mut result, &part.tube_size, &part.custom_tube_size, "Tube");
            if part.thickness.is_empty() {
                result.add_error("Wall thickness is required");
            }
            if !has_roll_value(part) {
                result.add_error("Roll value is required");
            }
            if is_unequal_pair(&part.tube_size) && part.roll_type.is_empty() {
                result.add_error("Roll Direction (Easy Way / Hard Way) is required");
            }
        }
        PartType::FlatBar => {
            check_size(&mut result, &part.bar_size, &part.custom_bar_size, "Flat bar");
            check_roll(&mut result, part);
        }
        PartType::ChannelRoll => {
            check_size(&mut result, &part.channel_size, &part.custom_channel_size, "Channel");
            check_roll(&mut result, part);
        }
        PartType::BeamRoll => {
            check_size(&mut result, &part.beam_size, &part.custom_beam_size, "Beam");
            check_roll(&mut result, part);
        }
        PartType::TeeBar => {
            check_size(&mut result, &part.tee_size, &part.custom_tee_size, "Tee");
            check_roll(&mut result, part);
        }
        PartType::ConeRoll => {
            check_thickness(&mut result, part);
            if part.cone_large_dia.is_empty() {
                result.add_error("Large diameter is required");
            }
            if part.cone_small_dia.is_empty() {
                result.add_error("Small diameter is required");
            }
            if part.cone_height.is_empty() {
                result.add_error("Cone height is required");
            }
            let large = parse_leading_f64(&part.cone_large_dia);
            let small = parse_leading_f64(&part.cone_small_dia);
            if let (Some(large), Some(small)) = (large, small) {
                if large <= small {
                    result.add_error("Large diameter must be greater than small diameter");
                }
            }
        }
        PartType::FabService => {
            if part.service().is_none() {
                result.add_error("Service type is required");
            }
            if part.linked_part().is_none() {
                result.add_error("Linked part is required");
            }
        }
        PartType::Other => {}
    }

    if !part.arc_degrees.is_empty() {
        match parse_leading_f64(&part.arc_degrees) {
            Some(deg) if in_range(deg, 0.0, 360.0) => {}
            _ => result.add_error("Arc angle must be between 0 and 360 degrees"),
        }
    }

    match parse_leading_int(&part.quantity) {
        Some(q) if q >= 1 => {}
        _ => result.add_error("Quantity must be at least 1"),
    }

    result.merge(geometry_warnings(part));
    result
}

/// Non-blocking notes about the roll geometry.
fn geometry_warnings(part: &Part) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let descriptor = part.part_type.descriptor();
    if !descriptor.rolled {
        return result;
    }

    let spec = part.roll_spec();
    let thickness = part.thickness_decimal();
    if spec.roll_value > 0.0 && thickness > 0.0 && centerline_diameter(&spec, thickness) <= 0.0 {
        result.add_warning(format!(
            "Roll value {}\" {} leaves no material at thickness {}; no developed length",
            spec.roll_value,
            spec.spec_label(),
            part.thickness
        ));
    }

    let chosen = part.roll_direction();
    if descriptor.has_field("width") && matches!(chosen, Some(RollDirection::EasyWay | RollDirection::HardWay)) {
        let inferred = compute_for_spec(&spec, thickness)
            .and_then(|g| infer_roll_direction(g.total_length, parse_number(&part.width)));
        if let (Some(chosen), Some(inferred)) = (chosen, inferred) {
            if chosen != inferred {
                result.add_warning(format!(
                    "Roll direction {} differs from the suggested {}",
                    chosen.abbreviation(part.part_type),
                    inferred.abbreviation(part.part_type)
                ));
            }
        }
    }

    result
}

/// Validate every part of an order, including service links.
pub fn validate_order(order: &WorkOrder) -> ValidationResult {
    let mut result = ValidationResult::ok();
    if order.parts.is_empty() {
        result.add_warning("Order has no parts");
        return result;
    }

    let registry = PartRegistry::new(&order.parts);
    for part in &order.parts {
        let mut part_result = validate_part(part);
        if part.is_service() {
            if let Some(host_id) = part.linked_part() {
                if let Err(e) = registry.resolve_host(part, host_id) {
                    part_result.add_error(e.to_string());
                }
            }
        }
        result.merge_prefixed(&part.number_label(), part_result);
    }
    result
}

/// Gate a save: blocking messages become [`EngineError::ValidationFailed`].
pub fn ensure_valid(part: &Part) -> Result<ValidationResult> {
    let result = validate_part(part);
    if !result.passed {
        return Err(EngineError::ValidationFailed {
            messages: result.errors,
        });
    }
    Ok(result)
}

/// Quick validation check for command-line --validate flag.
pub fn quick_validate(order: &WorkOrder) -> Result<()> {
    let result = validate_order(order);
    if !result.passed {
        return Err(EngineError::ValidationFailed {
            messages: result.errors,
        });
    }
    Ok(())
}
