//! Candidate weld seams derived from a host part's own geometry.

use serde::Serialize;
use std::f64::consts::PI;

use crate::generator::{format_fixed, trim_number};
use crate::model::{MeasurePoint, Part, SeamFamily, SeamOption};
use crate::parser::{parse_number, parse_thickness};

/// Seam-relevant geometry of a part, one variant per shape family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeamGeometry {
    Cylinder {
        width: f64,
        diameter: f64,
        measure_point: MeasurePoint,
    },
    RoundPlate {
        diameter: f64,
    },
    DonutPlate {
        outer: f64,
        inner: f64,
    },
    RectangularPlate {
        width: f64,
        length: f64,
    },
    Pipe {
        outer_diameter: f64,
    },
    StructuralRoll {
        diameter: f64,
    },
    Unknown,
}

impl SeamGeometry {
    /// Read the seam geometry from a part's stored fields.
    ///
    /// Roll diameters come from the part's roll spec without any thickness
    /// adjustment. A cylinder with no stored measure point is labelled as
    /// measured outside.
    pub fn of(part: &Part) -> Self {
        match part.part_type.descriptor().seam_family {
            SeamFamily::RolledCylinder => SeamGeometry::Cylinder {
                width: parse_number(&part.width),
                diameter: part.roll_spec().diameter(),
                measure_point: part
                    .roll_measure_point
                    .parse()
                    .unwrap_or(MeasurePoint::Outside),
            },
            SeamFamily::FlatStock => flat_stock_geometry(part),
            SeamFamily::Pipe => SeamGeometry::Pipe {
                outer_diameter: parse_number(&part.outer_diameter),
            },
            SeamFamily::StructuralRoll => SeamGeometry::StructuralRoll {
                diameter: part.roll_spec().diameter(),
            },
            SeamFamily::NoSeams => SeamGeometry::Unknown,
        }
    }

    /// Shape-derived seams, without the manual-entry sentinel.
    pub fn candidates(&self) -> Vec<SeamOption> {
        let mut options = Vec::new();
        match *self {
            SeamGeometry::Cylinder {
                width,
                diameter,
                measure_point,
            } => {
                if width > 0.0 {
                    options.push(SeamOption::new(
                        format!("Longitudinal Seam ({}\")", trim_number(width)),
                        width,
                    ));
                }
                if diameter > 0.0 {
                    let circ = PI * diameter;
                    options.push(SeamOption::new(
                        format!(
                            "Circumferential Seam ({} Ø{}\" = {}\")",
                            measure_point.key(),
                            trim_number(diameter),
                            format_fixed(circ, 2)
                        ),
                        circ,
                    ));
                }
            }
            SeamGeometry::RoundPlate { diameter } => {
                if diameter > 0.0 {
                    let circ = PI * diameter;
                    options.push(SeamOption::new(
                        format!(
                            "Circumference (Ø{}\" = {}\")",
                            trim_number(diameter),
                            format_fixed(circ, 2)
                        ),
                        circ,
                    ));
                }
            }
            SeamGeometry::DonutPlate { outer, inner } => {
                for (name, dia) in [("OD", outer), ("ID", inner)] {
                    if dia > 0.0 {
                        let circ = PI * dia;
                        options.push(SeamOption::new(
                            format!(
                                "{} Circumference (Ø{}\" = {}\")",
                                name,
                                trim_number(dia),
                                format_fixed(circ, 2)
                            ),
                            circ,
                        ));
                    }
                }
            }
            SeamGeometry::RectangularPlate { width, length } => {
                if width > 0.0 && length > 0.0 {
                    let perimeter = 2.0 * (width + length);
                    options.push(SeamOption::new(
                        format!("Width seam ({}\")", trim_number(width)),
                        width,
                    ));
                    options.push(SeamOption::new(
                        format!("Length seam ({}\")", trim_number(length)),
                        length,
                    ));
                    options.push(SeamOption::new(
                        format!("Perimeter ({}\")", format_fixed(perimeter, 2)),
                        perimeter,
                    ));
                }
            }
            SeamGeometry::Pipe { outer_diameter } => {
                if outer_diameter > 0.0 {
                    let circ = PI * outer_diameter;
                    options.push(SeamOption::new(
                        format!(
                            "Circumference (OD {}\" = {}\")",
                            trim_number(outer_diameter),
                            format_fixed(circ, 2)
                        ),
                        circ,
                    ));
                }
            }
            SeamGeometry::StructuralRoll { diameter } => {
                if diameter > 0.0 {
                    let circ = PI * diameter;
                    options.push(SeamOption::new(
                        format!(
                            "Circumference (Ø{}\" = {}\")",
                            trim_number(diameter),
                            format_fixed(circ, 2)
                        ),
                        circ,
                    ));
                }
            }
            SeamGeometry::Unknown => {}
        }
        options
    }
}

/// Flat stock is only seamed when cut from plate; a blank stock type counts
/// as plate.
fn flat_stock_geometry(part: &Part) -> SeamGeometry {
    let stock = part.stock_type.trim();
    if !stock.is_empty() && stock != "plate" {
        return SeamGeometry::Unknown;
    }
    match part.plate_shape.trim() {
        "round" => SeamGeometry::RoundPlate {
            diameter: parse_number(&part.plate_diameter),
        },
        "donut" => SeamGeometry::DonutPlate {
            outer: parse_number(&part.plate_od),
            inner: parse_number(&part.plate_id),
        },
        "rectangular" => SeamGeometry::RectangularPlate {
            width: parse_number(&part.width),
            length: parse_number(&part.length),
        },
        _ => SeamGeometry::Unknown,
    }
}

/// Enumerate candidate seams for a part.
///
/// The list always ends with exactly one `Custom Length` entry.
pub fn extract_seam_options(part: &Part) -> Vec<SeamOption> {
    let geometry = SeamGeometry::of(part);
    let mut options = geometry.candidates();
    if options.is_empty() {
        tracing::debug!("No seam candidates for {:?}", geometry);
    }
    options.push(SeamOption::custom());
    options
}

/// What a service line needs to know about its host part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostInfo {
    /// Thickness in decimal inches.
    pub thickness: f64,
    /// Thickness as entered.
    pub thickness_label: String,
    pub grade: String,
    /// Material description, or `Part #N` when there is none.
    pub part_label: String,
    pub seam_options: Vec<SeamOption>,
}

/// Collect host-part details for a service line.
pub fn extract_host_info(part: &Part) -> HostInfo {
    let part_label = if part.material_description.is_empty() {
        part.number_label()
    } else {
        part.material_description.clone()
    };
    HostInfo {
        thickness: parse_thickness(&part.thickness),
        thickness_label: part.thickness.clone(),
        grade: part.material.clone(),
        part_label,
        seam_options: extract_seam_options(part),
    }
}

/// A seam chosen from the option list.
#[derive(Debug, Clone, PartialEq)]
pub struct SeamSelection<'a> {
    pub option: Option<&'a SeamOption>,
    /// Seam length in inches; the manual entry for `Custom Length`.
    pub length_inches: f64,
}

impl SeamSelection<'_> {
    pub fn is_custom(&self) -> bool {
        self.option.is_some_and(|o| o.is_custom())
    }
}

/// Resolve the selected option index and manual length to a seam length.
///
/// An index past the end selects nothing and yields a zero length.
pub fn select_seam<'a>(options: &'a [SeamOption], index: usize, custom_length: &str) -> SeamSelection<'a> {
    let option = options.get(index);
    let length_inches = match option {
        Some(o) if o.is_custom() => parse_number(custom_length),
        Some(o) => o.length_inches,
        None => 0.0,
    };
    SeamSelection {
        option,
        length_inches,
    }
}
