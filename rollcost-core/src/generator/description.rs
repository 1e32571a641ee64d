//! Generated description text for parts and service lines.

use crate::generator::trim_number;
use crate::geometry::{centerline_diameter, PitchDescriber};
use crate::model::{Part, RollDirection, SeamOption};

/// Separator between the pieces of a service description.
const SERVICE_SEPARATOR: &str = " — ";

/// Build the material line: `2pc: 1/4" x 48" x 96" A36 Domestic`.
///
/// Absent pieces are left out. Section size and outside diameter stand in
/// for plate dimensions on parts that carry them.
pub fn material_description(part: &Part) -> String {
    let descriptor = part.part_type.descriptor();
    let mut dims: Vec<String> = Vec::new();

    if descriptor.has_field("sectionSize") && !part.section_size.is_empty() {
        dims.push(part.section_size.clone());
    }
    if descriptor.has_field("outerDiameter") && !part.outer_diameter.is_empty() {
        dims.push(format!("{}\" OD", part.outer_diameter));
    }
    if descriptor.has_field("wallThickness") && !part.wall_thickness.is_empty() {
        dims.push(format!("{} wall", part.wall_thickness));
    }
    if !part.thickness.is_empty() {
        dims.push(part.thickness.clone());
    }
    if !part.width.is_empty() {
        dims.push(format!("{}\"", part.width));
    }
    if !part.length.is_empty() {
        dims.push(format!("{}\"", part.length));
    }

    let mut pieces = vec![format!("{}pc:", part.quantity())];
    if !dims.is_empty() {
        pieces.push(dims.join(" x "));
    }
    if !part.material.is_empty() {
        pieces.push(part.material.clone());
    }
    if !part.material_origin.is_empty() {
        pieces.push(part.material_origin.clone());
    }
    pieces.join(" ")
}

/// Build the shop-floor rolling instructions.
///
/// Empty when the part has no roll value. The first line names the roll
/// value, spec and direction (`EW` when none was chosen); pitch lines
/// follow the arc line.
pub fn rolling_description(part: &Part, pitch: &dyn PitchDescriber) -> String {
    let spec = part.roll_spec();
    if !(spec.roll_value > 0.0) {
        return String::new();
    }

    let direction = part
        .roll_direction()
        .unwrap_or(RollDirection::EasyWay)
        .abbreviation(part.part_type);

    let mut lines = vec![format!(
        "Roll to {}\" {} {}",
        trim_number(spec.roll_value),
        spec.spec_label(),
        direction
    )];
    if let Some(arc) = spec.arc_degrees {
        lines.push(format!("Arc: {}°", trim_number(arc)));
    }
    let diameter = centerline_diameter(&spec, part.thickness_decimal());
    lines.extend(pitch.description_lines(part, diameter));
    lines.join("\n")
}

/// Roll line of a printed work order: `Roll: 36" OD (EW) | Arc: 90°`.
///
/// Values are printed as stored. `None` when neither a diameter nor a
/// radius is on the part.
pub fn roll_line(part: &Part) -> Option<String> {
    let value = if !part.diameter.is_empty() {
        &part.diameter
    } else if !part.radius.is_empty() {
        &part.radius
    } else {
        return None;
    };

    let mut line = format!("Roll: {}\" {}", value, part.roll_spec().spec_label());
    if let Some(direction) = part.roll_direction() {
        line.push_str(&format!(" ({})", direction.abbreviation(part.part_type)));
    }
    if !part.arc_degrees.is_empty() {
        line.push_str(&format!(" | Arc: {}°", part.arc_degrees));
    }
    Some(line)
}

/// Describe a service line from its host part and chosen seam.
pub fn service_description(service: &Part, host: Option<&Part>, seam: Option<&SeamOption>) -> String {
    let mut pieces: Vec<String> = Vec::new();
    if let Some(kind) = service.service() {
        pieces.push(kind.label().to_string());
    }
    if let Some(host) = host {
        pieces.push(host.number_label());
    }
    match seam {
        Some(seam) if seam.is_custom() => {
            if !service.custom_seam_length.is_empty() {
                pieces.push(format!("Custom Seam: {}\"", service.custom_seam_length));
            }
        }
        Some(seam) => pieces.push(seam.label.clone()),
        None => {}
    }
    if !service.service_notes.is_empty() {
        pieces.push(service.service_notes.clone());
    }
    pieces.join(SERVICE_SEPARATOR)
}
