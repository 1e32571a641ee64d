//! Explicit user actions on a part.
//!
//! Unlike recomputation these parse their inputs strictly and report bad
//! values as errors.

use crate::config::ShopSettings;
use crate::error::Result;
use crate::generator::format_fixed;
use crate::geometry::{compute_for_spec, infer_roll_direction, GeometryResult};
use crate::model::{MeasurePoint, MeasureType, Part, PartRegistry, RateEntry, RollDirection};
use crate::parser::parse_number;
use crate::pricing::resolve_weld_rate;

/// "Set as length": copy the developed length into `length`.
///
/// Also applies the inferred roll direction when both the total length and
/// the width are positive. Does nothing and returns `None` when there is no
/// developed length.
pub fn set_as_length(part: &mut Part) -> Option<GeometryResult> {
    let geometry = compute_for_spec(&part.roll_spec(), part.thickness_decimal())?;
    part.length = format_fixed(geometry.total_length, 2);
    if let Some(direction) = infer_roll_direction(geometry.total_length, parse_number(&part.width)) {
        part.set_roll_direction(Some(direction));
    }
    Some(geometry)
}

/// Switch between radius and diameter, keeping the entered value.
pub fn set_measure_type(part: &mut Part, raw: &str) -> Result<()> {
    let measure_type: MeasureType = raw.parse()?;
    let mut spec = part.roll_spec();
    spec.measure_type = measure_type;
    part.set_roll_spec(&spec);
    Ok(())
}

/// Change where the roll value was measured.
pub fn set_measure_point(part: &mut Part, raw: &str) -> Result<()> {
    let measure_point: MeasurePoint = raw.parse()?;
    let mut spec = part.roll_spec();
    spec.measure_point = measure_point;
    part.set_roll_spec(&spec);
    Ok(())
}

/// Choose a roll direction; a blank value clears it.
pub fn choose_roll_direction(part: &mut Part, raw: &str) -> Result<()> {
    let direction = if raw.trim().is_empty() {
        None
    } else {
        Some(raw.parse::<RollDirection>()?)
    };
    part.set_roll_direction(direction);
    Ok(())
}

/// Point a service line at a new host part.
///
/// Resets the seam choice to the first option and drops any manual rate.
pub fn relink_service(service: &mut Part, registry: &PartRegistry<'_>, host_id: i64) -> Result<()> {
    let host = registry.resolve_host(service, host_id)?;
    tracing::debug!("{} linked to {}", service.number_label(), host.number_label());
    service.linked_part_id = host_id.to_string();
    service.seam_option_idx = "0".to_string();
    service.weld_price_manual_override = false;
    Ok(())
}

/// Choose a seam option by index.
pub fn select_seam_option(service: &mut Part, index: usize) {
    service.seam_option_idx = index.to_string();
}

/// Enter a weld rate by hand. It sticks until reset.
pub fn set_manual_weld_rate(service: &mut Part, price_per_foot: f64) {
    service.set_weld_rate(Some(RateEntry::manual(price_per_foot)));
}

/// "Reset to default": go back to the automatic rate for the host's grade.
///
/// Clears the rate when the table has no suggestion.
pub fn reset_weld_rate(service: &mut Part, host: Option<&Part>, settings: &ShopSettings) -> Option<RateEntry> {
    let auto = host
        .and_then(|h| resolve_weld_rate(&h.material, &settings.weld_rates))
        .map(RateEntry::auto);
    service.set_weld_rate(auto);
    auto
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::config::WeldRateTable;
    use crate::error::ErrorCode;
    use crate::model::PartType;
    use std::f64::consts::PI;

    fn rolled_plate() -> Part {
        let mut part = Part::new(PartType::PlateRoll);
        part.thickness = "1/2\"".to_string();
        part.width = "48".to_string();
        part.diameter = "36".to_string();
        part.roll_measure_point = "centerline".to_string();
        part
    }

    // ==================== set as length tests ====================

    #[test]
    fn test_set_as_length_writes_length_and_direction() {
        let mut part = rolled_plate();
        let geometry = set_as_length(&mut part).unwrap();
        assert!(approx_eq(geometry.total_length, 36.0 * PI));
        assert_eq!(part.length, "113.10");
        assert_eq!(part.roll_direction(), Some(RollDirection::EasyWay));
    }

    #[test]
    fn test_set_as_length_hard_way() {
        let mut part = rolled_plate();
        part.width = "240".to_string();
        set_as_length(&mut part);
        assert_eq!(part.roll_direction(), Some(RollDirection::HardWay));
    }

    #[test]
    fn test_set_as_length_keeps_direction_without_width() {
        let mut part = rolled_plate();
        part.width.clear();
        part.set_roll_direction(Some(RollDirection::HardWay));
        set_as_length(&mut part);
        assert_eq!(part.length, "113.10");
        assert_eq!(part.roll_direction(), Some(RollDirection::HardWay));
    }

    #[test]
    fn test_set_as_length_without_geometry() {
        let mut part = rolled_plate();
        part.thickness.clear();
        part.length = "96".to_string();
        assert_eq!(set_as_length(&mut part), None);
        assert_eq!(part.length, "96");
    }

    // ==================== roll spec action tests ====================

    #[test]
    fn test_measure_type_switch_doubles_diameter() {
        let mut part = Part::new(PartType::PlateRoll);
        part.thickness = "1/4\"".to_string();
        part.radius = "18".to_string();
        part.roll_measure_point = "centerline".to_string();
        let before = compute_for_spec(&part.roll_spec(), 0.25).unwrap();
        assert_eq!(before.effective_diameter, 36.0);

        set_measure_type(&mut part, "diameter").unwrap();
        assert_eq!(part.diameter, "18");
        assert_eq!(part.radius, "");
        let after = compute_for_spec(&part.roll_spec(), 0.25).unwrap();
        assert_eq!(after.effective_diameter, 18.0);

        set_measure_type(&mut part, "radius").unwrap();
        let again = compute_for_spec(&part.roll_spec(), 0.25).unwrap();
        assert_eq!(again.effective_diameter, 2.0 * after.effective_diameter);
    }

    #[test]
    fn test_strict_action_inputs() {
        let mut part = rolled_plate();
        let err = set_measure_type(&mut part, "chord").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidValue);
        assert!(set_measure_point(&mut part, "middle").is_err());
        assert!(choose_roll_direction(&mut part, "sideways").is_err());

        set_measure_point(&mut part, "outside").unwrap();
        assert_eq!(part.roll_measure_point, "outside");
        choose_roll_direction(&mut part, "on_edge").unwrap();
        assert_eq!(part.roll_type, "on_edge");
        choose_roll_direction(&mut part, "").unwrap();
        assert_eq!(part.roll_direction(), None);
    }

    // ==================== service action tests ====================

    #[test]
    fn test_relink_resets_seam_and_override() {
        let parts = vec![
            rolled_plate().with_id(1, 1),
            rolled_plate().with_id(2, 2),
            Part::new(PartType::FabService).with_id(3, 3),
        ];
        let registry = PartRegistry::new(&parts);
        let mut service = parts[2].clone();
        service.seam_option_idx = "2".to_string();
        set_manual_weld_rate(&mut service, 15.0);

        relink_service(&mut service, &registry, 2).unwrap();
        assert_eq!(service.linked_part(), Some(2));
        assert_eq!(service.seam_option_idx, "0");
        assert!(!service.weld_price_manual_override);
        assert_eq!(service.weld_price_per_foot, "15");
    }

    #[test]
    fn test_relink_rejects_bad_hosts() {
        let parts = vec![
            Part::new(PartType::FabService).with_id(1, 1),
            Part::new(PartType::FabService).with_id(2, 2),
        ];
        let registry = PartRegistry::new(&parts);
        let mut service = parts[1].clone();

        let err = relink_service(&mut service, &registry, 9).unwrap_err();
        assert_eq!(err.code(), ErrorCode::HostNotFound);
        let err = relink_service(&mut service, &registry, 1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidHost);
        assert_eq!(service.linked_part_id, "");
    }

    #[test]
    fn test_reset_weld_rate() {
        let settings = ShopSettings {
            weld_rates: WeldRateTable::new().with_rate("A36", 8.0),
            material_grades: vec![],
        };
        let mut host = rolled_plate();
        host.material = "A36".to_string();
        let mut service = Part::new(PartType::FabService);
        set_manual_weld_rate(&mut service, 15.0);
        select_seam_option(&mut service, 1);
        assert_eq!(service.seam_option_index(), 1);

        assert_eq!(reset_weld_rate(&mut service, Some(&host), &settings), Some(RateEntry::auto(8.0)));
        assert_eq!(service.weld_rate(), Some(RateEntry::auto(8.0)));

        host.material = "Hastelloy".to_string();
        assert_eq!(reset_weld_rate(&mut service, Some(&host), &settings), None);
        assert_eq!(service.weld_rate(), None);
    }
}
