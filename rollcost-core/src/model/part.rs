//! Part record as kept by the part store.
//!
//! Field names follow the persisted contract exactly, so a record loaded
//! from the store and written back keeps every key, including the ones the
//! engine does not interpret. Blank fields are left out on write, except
//! `rollType`, which is written as `null`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields;
use crate::config::DEFAULT_MATERIAL_MARKUP_PERCENT;
use crate::generator::trim_number;
use crate::model::{
    MeasurePoint, MeasureType, PartType, RateEntry, RollDirection, RollSpec, ServiceType,
};
use crate::parser::{
    parse_leading_f64, parse_leading_int, parse_number, parse_positive, parse_quantity,
    parse_thickness,
};

/// A fabrication line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Part {
    #[serde(
        deserialize_with = "fields::id",
        serialize_with = "fields::write_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    #[serde(
        deserialize_with = "fields::id",
        serialize_with = "fields::write_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub part_number: Option<i64>,
    pub part_type: PartType,
    #[serde(deserialize_with = "fields::string", serialize_with = "fields::write_count")]
    pub quantity: String,

    // Material and dimensions, exactly as typed.
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub thickness: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub material: String,
    #[serde(
        rename = "_materialOrigin",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub material_origin: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub width: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub length: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub outer_diameter: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub wall_thickness: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub section_size: String,

    // Roll parameters.
    #[serde(deserialize_with = "fields::string", serialize_with = "fields::write_enum")]
    pub roll_type: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub radius: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub diameter: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub arc_degrees: String,
    #[serde(
        rename = "_rollValue",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub roll_value: String,
    #[serde(
        rename = "_rollMeasureType",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub roll_measure_type: String,
    #[serde(
        rename = "_rollMeasurePoint",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub roll_measure_point: String,
    #[serde(
        rename = "_tangentLength",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub tangent_length: String,

    // Flat stock outline.
    #[serde(
        rename = "_stockType",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub stock_type: String,
    #[serde(
        rename = "_plateShape",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub plate_shape: String,
    #[serde(
        rename = "_plateDiameter",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub plate_diameter: String,
    #[serde(
        rename = "_plateOD",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub plate_od: String,
    #[serde(
        rename = "_plateID",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub plate_id: String,

    // Section size menus.
    #[serde(
        rename = "_angleSize",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub angle_size: String,
    #[serde(
        rename = "_customAngleSize",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub custom_angle_size: String,
    #[serde(
        rename = "_legOrientation",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub leg_orientation: String,
    #[serde(
        rename = "_pipeSize",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub pipe_size: String,
    #[serde(
        rename = "_tubeSize",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub tube_size: String,
    #[serde(
        rename = "_customTubeSize",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub custom_tube_size: String,
    #[serde(
        rename = "_barSize",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub bar_size: String,
    #[serde(
        rename = "_customBarSize",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub custom_bar_size: String,
    #[serde(
        rename = "_channelSize",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub channel_size: String,
    #[serde(
        rename = "_customChannelSize",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub custom_channel_size: String,
    #[serde(
        rename = "_beamSize",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub beam_size: String,
    #[serde(
        rename = "_customBeamSize",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub custom_beam_size: String,
    #[serde(
        rename = "_teeSize",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub tee_size: String,
    #[serde(
        rename = "_customTeeSize",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub custom_tee_size: String,

    // Cone layout.
    #[serde(
        rename = "_coneLargeDia",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub cone_large_dia: String,
    #[serde(
        rename = "_coneSmallDia",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub cone_small_dia: String,
    #[serde(
        rename = "_coneHeight",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub cone_height: String,

    // Pricing inputs and outputs.
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub material_total: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub material_markup_percent: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub labor_total: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub part_total: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub material_description: String,
    #[serde(
        rename = "_rollingDescription",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub rolling_description: String,
    #[serde(deserialize_with = "fields::string", skip_serializing_if = "String::is_empty")]
    pub special_instructions: String,

    // Fabrication service link.
    #[serde(
        rename = "_serviceType",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub service_type: String,
    #[serde(
        rename = "_linkedPartId",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub linked_part_id: String,
    #[serde(
        rename = "_seamOptionIdx",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub seam_option_idx: String,
    #[serde(
        rename = "_customSeamLength",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub custom_seam_length: String,
    #[serde(
        rename = "_weldPricePerFoot",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub weld_price_per_foot: String,
    #[serde(
        rename = "_weldPriceManualOverride",
        deserialize_with = "fields::flag",
        skip_serializing_if = "fields::is_false"
    )]
    pub weld_price_manual_override: bool,
    #[serde(
        rename = "_serviceNotes",
        deserialize_with = "fields::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub service_notes: String,

    /// Keys the engine does not interpret, kept for the round trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Part {
    /// A blank part with the defaults of a new line item.
    pub fn new(part_type: PartType) -> Self {
        Self {
            part_type,
            quantity: "1".to_string(),
            material_markup_percent: trim_number(DEFAULT_MATERIAL_MARKUP_PERCENT),
            roll_measure_point: MeasurePoint::Inside.key().to_string(),
            roll_measure_type: MeasureType::Radius.key().to_string(),
            ..Default::default()
        }
    }

    /// Builder-style identifier setter.
    pub fn with_id(mut self, id: i64, part_number: i64) -> Self {
        self.id = Some(id);
        self.part_number = Some(part_number);
        self
    }

    /// Quantity coerced to at least one.
    pub fn quantity(&self) -> u32 {
        parse_quantity(&self.quantity)
    }

    /// Material thickness in decimal inches (zero when unreadable).
    pub fn thickness_decimal(&self) -> f64 {
        parse_thickness(&self.thickness)
    }

    pub fn is_service(&self) -> bool {
        self.part_type.is_service()
    }

    /// `Part #12`, or `Part #?` for an unsaved part.
    pub fn number_label(&self) -> String {
        match self.part_number {
            Some(n) => format!("Part #{}", n),
            None => "Part #?".to_string(),
        }
    }

    /// Resolve the roll spec from the stored fields.
    ///
    /// A stored radius or diameter wins over the raw roll value, so editing a
    /// saved part reproduces the geometry it was priced with.
    pub fn roll_spec(&self) -> RollSpec {
        let (raw, measure_type) = if !self.radius.is_empty() && self.diameter.is_empty() {
            (self.radius.as_str(), MeasureType::Radius)
        } else if !self.diameter.is_empty() {
            (self.diameter.as_str(), MeasureType::Diameter)
        } else {
            (
                self.roll_value.as_str(),
                self.roll_measure_type.parse().unwrap_or_default(),
            )
        };

        RollSpec {
            roll_value: parse_number(raw),
            measure_type,
            measure_point: self.roll_measure_point.parse().unwrap_or_default(),
            arc_degrees: parse_positive(&self.arc_degrees),
            tangent_length: parse_positive(&self.tangent_length),
        }
    }

    /// Write a roll spec back into the stored fields.
    pub fn set_roll_spec(&mut self, spec: &RollSpec) {
        let value = trim_number(spec.roll_value);
        self.roll_value = value.clone();
        self.roll_measure_type = spec.measure_type.key().to_string();
        self.roll_measure_point = spec.measure_point.key().to_string();
        self.tangent_length = spec.tangent_length.map(trim_number).unwrap_or_default();
        self.arc_degrees = spec.arc_degrees.map(trim_number).unwrap_or_default();
        match spec.measure_type {
            MeasureType::Radius => {
                self.radius = value;
                self.diameter.clear();
            }
            MeasureType::Diameter => {
                self.diameter = value;
                self.radius.clear();
            }
        }
    }

    /// Roll direction, if one has been chosen.
    pub fn roll_direction(&self) -> Option<RollDirection> {
        self.roll_type.parse().ok()
    }

    pub fn set_roll_direction(&mut self, direction: Option<RollDirection>) {
        self.roll_type = direction.map(|d| d.key().to_string()).unwrap_or_default();
    }

    pub fn service(&self) -> Option<ServiceType> {
        self.service_type.parse().ok()
    }

    /// Identifier of the host part this service is billed against.
    pub fn linked_part(&self) -> Option<i64> {
        parse_leading_int(&self.linked_part_id)
    }

    /// Selected seam option index (defaults to the first option).
    pub fn seam_option_index(&self) -> usize {
        parse_leading_int(&self.seam_option_idx)
            .and_then(|i| usize::try_from(i).ok())
            .unwrap_or(0)
    }

    /// Current weld rate with its origin.
    ///
    /// A manual override holds even when the field was cleared, so a lookup
    /// never fills it back in.
    pub fn weld_rate(&self) -> Option<RateEntry> {
        if self.weld_price_manual_override {
            return Some(RateEntry::manual(parse_number(&self.weld_price_per_foot)));
        }
        parse_leading_f64(&self.weld_price_per_foot).map(RateEntry::auto)
    }

    pub fn set_weld_rate(&mut self, rate: Option<RateEntry>) {
        match rate {
            Some(rate) => {
                self.weld_price_per_foot = trim_number(rate.value);
                self.weld_price_manual_override = rate.is_manual();
            }
            None => {
                self.weld_price_per_foot.clear();
                self.weld_price_manual_override = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_part_defaults() {
        let part = Part::new(PartType::PlateRoll);
        assert_eq!(part.quantity(), 1);
        assert_eq!(part.material_markup_percent, "20");
        assert_eq!(part.roll_measure_point, "inside");
        assert_eq!(part.roll_measure_type, "radius");
    }

    #[test]
    fn test_deserialize_persisted_names() {
        let json = r#"{
            "id": 4, "partNumber": "2", "partType": "plate_roll", "quantity": 3,
            "thickness": "1/2\"", "width": "48", "diameter": 36,
            "_rollMeasurePoint": "outside", "_tangentLength": "6",
            "materialTotal": 100, "clientPartNumber": "ABC-1"
        }"#;
        let part: Part = serde_json::from_str(json).unwrap();
        assert_eq!(part.id, Some(4));
        assert_eq!(part.part_number, Some(2));
        assert_eq!(part.quantity(), 3);
        assert_eq!(part.thickness_decimal(), 0.5);
        assert_eq!(part.diameter, "36");
        assert_eq!(part.material_total, "100");
        assert_eq!(part.extra.get("clientPartNumber"), Some(&Value::from("ABC-1")));

        let spec = part.roll_spec();
        assert_eq!(spec.roll_value, 36.0);
        assert_eq!(spec.measure_type, MeasureType::Diameter);
        assert_eq!(spec.measure_point, MeasurePoint::Outside);
        assert_eq!(spec.tangent_length, Some(6.0));
        assert_eq!(spec.arc_degrees, None);
    }

    #[test]
    fn test_blank_fields_are_not_written() {
        let json = r#"{"id": 3, "partType": "flat_stock", "quantity": 2, "thickness": "1/4\"",
                       "width": "48", "_coneHeight": "", "rollType": ""}"#;
        let part: Part = serde_json::from_str(json).unwrap();
        let out = serde_json::to_value(&part).unwrap();
        assert_eq!(
            out,
            serde_json::json!({
                "id": 3,
                "partType": "flat_stock",
                "quantity": 2,
                "thickness": "1/4\"",
                "width": "48",
                "rollType": null
            })
        );
        let back: Part = serde_json::from_value(out).unwrap();
        assert_eq!(back, part);
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let json = r#"{"partType": "flat_bar", "heatNumber": "H123", "flangeOut": true}"#;
        let part: Part = serde_json::from_str(json).unwrap();
        let out = serde_json::to_value(&part).unwrap();
        assert_eq!(out["heatNumber"], Value::from("H123"));
        assert_eq!(out["flangeOut"], Value::from(true));
        assert_eq!(out["partType"], Value::from("flat_bar"));
    }

    // ==================== roll spec tests ====================

    #[test]
    fn test_roll_spec_prefers_radius_when_only_radius_set() {
        let mut part = Part::new(PartType::PlateRoll);
        part.radius = "12".to_string();
        part.roll_value = "99".to_string();
        part.roll_measure_type = "diameter".to_string();
        let spec = part.roll_spec();
        assert_eq!(spec.roll_value, 12.0);
        assert_eq!(spec.measure_type, MeasureType::Radius);
    }

    #[test]
    fn test_roll_spec_falls_back_to_raw_value() {
        let mut part = Part::default();
        part.roll_value = "30".to_string();
        let spec = part.roll_spec();
        assert_eq!(spec.roll_value, 30.0);
        assert_eq!(spec.measure_type, MeasureType::Diameter);
        assert_eq!(spec.measure_point, MeasurePoint::Inside);
    }

    #[test]
    fn test_set_roll_spec_writes_one_of_radius_or_diameter() {
        let mut part = Part::new(PartType::PlateRoll);
        let spec = RollSpec::new(18.0, MeasureType::Radius, MeasurePoint::Centerline).with_arc(90.0);
        part.set_roll_spec(&spec);
        assert_eq!(part.radius, "18");
        assert_eq!(part.diameter, "");
        assert_eq!(part.arc_degrees, "90");
        assert_eq!(part.roll_spec(), spec);

        let spec = RollSpec::new(40.0, MeasureType::Diameter, MeasurePoint::Outside);
        part.set_roll_spec(&spec);
        assert_eq!(part.radius, "");
        assert_eq!(part.diameter, "40");
        assert_eq!(part.arc_degrees, "");
        assert_eq!(part.roll_spec(), spec);
    }

    // ==================== weld rate tests ====================

    #[test]
    fn test_weld_rate_tagging() {
        let mut part = Part::new(PartType::FabService);
        assert_eq!(part.weld_rate(), None);

        part.set_weld_rate(Some(RateEntry::auto(12.5)));
        assert_eq!(part.weld_price_per_foot, "12.5");
        assert!(!part.weld_price_manual_override);
        assert_eq!(part.weld_rate(), Some(RateEntry::auto(12.5)));

        part.set_weld_rate(Some(RateEntry::manual(15.0)));
        assert_eq!(part.weld_rate(), Some(RateEntry::manual(15.0)));

        part.weld_price_per_foot.clear();
        assert_eq!(part.weld_rate(), Some(RateEntry::manual(0.0)));
    }

    #[test]
    fn test_service_link_fields() {
        let json = r#"{"partType": "fab_service", "_serviceType": "weld_100",
                       "_linkedPartId": "7", "_seamOptionIdx": "2",
                       "_weldPriceManualOverride": "true"}"#;
        let part: Part = serde_json::from_str(json).unwrap();
        assert!(part.is_service());
        assert_eq!(part.service(), Some(ServiceType::FullWeld));
        assert_eq!(part.linked_part(), Some(7));
        assert_eq!(part.seam_option_index(), 2);
        assert!(part.weld_price_manual_override);
    }

    #[test]
    fn test_number_label() {
        assert_eq!(Part::default().number_label(), "Part #?");
        assert_eq!(Part::default().with_id(10, 3).number_label(), "Part #3");
    }
}
