//! Part types and the per-shape descriptors that drive geometry and seams.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// Cross-section or service variant of a part line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartType {
    PlateRoll,
    ConeRoll,
    AngleRoll,
    FlatBar,
    PipeRoll,
    TubeRoll,
    ChannelRoll,
    BeamRoll,
    TeeBar,
    PressBrake,
    FlatStock,
    FabService,
    #[default]
    #[serde(other)]
    Other,
}

/// How a part's own geometry yields candidate weld seams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeamFamily {
    /// Plate rolled into a tube: longitudinal and circumferential seams.
    RolledCylinder,
    /// Cut plate: round, donut or rectangular outline.
    FlatStock,
    /// Round pipe or tube: circumference at the outside diameter.
    Pipe,
    /// Rolled structural section: circumference at the roll diameter.
    StructuralRoll,
    /// No rule; only the manual entry is offered.
    NoSeams,
}

/// Static description of one part type.
#[derive(Debug, Clone, Copy)]
pub struct ShapeDescriptor {
    pub label: &'static str,
    pub seam_family: SeamFamily,
    /// Persisted dimension fields the part type carries.
    pub fields: &'static [&'static str],
    /// Whether leg/flange orientation changes how the section rolls.
    pub orientation_matters: bool,
    /// Priced per piece as material plus labor.
    pub each_priced: bool,
    /// Accepts a roll value (radius or diameter).
    pub rolled: bool,
}

impl ShapeDescriptor {
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains(&field)
    }
}

const PLATE_ROLL: ShapeDescriptor = ShapeDescriptor {
    label: "Plate Roll",
    seam_family: SeamFamily::RolledCylinder,
    fields: &["material", "thickness", "width", "length", "rollType", "radius", "diameter", "arcDegrees"],
    orientation_matters: false,
    each_priced: true,
    rolled: true,
};

const CONE_ROLL: ShapeDescriptor = ShapeDescriptor {
    label: "Cone Layout",
    seam_family: SeamFamily::NoSeams,
    fields: &["material", "thickness", "width", "length"],
    orientation_matters: false,
    each_priced: true,
    rolled: false,
};

const ANGLE_ROLL: ShapeDescriptor = ShapeDescriptor {
    label: "Angle Roll",
    seam_family: SeamFamily::StructuralRoll,
    fields: &["material", "sectionSize", "length", "rollType", "radius", "diameter", "arcDegrees", "flangeOut"],
    orientation_matters: true,
    each_priced: true,
    rolled: true,
};

const FLAT_BAR: ShapeDescriptor = ShapeDescriptor {
    label: "Flat Bar",
    seam_family: SeamFamily::StructuralRoll,
    fields: &["material", "thickness", "width", "length", "rollType", "radius", "diameter", "arcDegrees"],
    orientation_matters: false,
    each_priced: true,
    rolled: true,
};

const PIPE_ROLL: ShapeDescriptor = ShapeDescriptor {
    label: "Round Tube & Pipe",
    seam_family: SeamFamily::Pipe,
    fields: &["material", "outerDiameter", "wallThickness", "length", "radius", "diameter", "arcDegrees"],
    orientation_matters: false,
    each_priced: true,
    rolled: true,
};

const TUBE_ROLL: ShapeDescriptor = ShapeDescriptor {
    label: "Square & Rect Tubing",
    seam_family: SeamFamily::Pipe,
    fields: &["material", "sectionSize", "thickness", "length", "rollType", "radius", "diameter", "arcDegrees"],
    orientation_matters: false,
    each_priced: true,
    rolled: true,
};

const CHANNEL_ROLL: ShapeDescriptor = ShapeDescriptor {
    label: "Channel",
    seam_family: SeamFamily::StructuralRoll,
    fields: &["material", "sectionSize", "length", "rollType", "radius", "diameter", "arcDegrees", "flangeOut"],
    orientation_matters: true,
    each_priced: true,
    rolled: true,
};

const BEAM_ROLL: ShapeDescriptor = ShapeDescriptor {
    label: "Beam",
    seam_family: SeamFamily::StructuralRoll,
    fields: &["material", "sectionSize", "length", "rollType", "radius", "diameter", "arcDegrees", "flangeOut"],
    orientation_matters: true,
    each_priced: true,
    rolled: true,
};

const TEE_BAR: ShapeDescriptor = ShapeDescriptor {
    label: "Tee Bars",
    seam_family: SeamFamily::StructuralRoll,
    fields: &["material", "sectionSize", "length", "rollType", "radius", "diameter", "arcDegrees"],
    orientation_matters: false,
    each_priced: true,
    rolled: true,
};

const PRESS_BRAKE: ShapeDescriptor = ShapeDescriptor {
    label: "Press Brake",
    seam_family: SeamFamily::NoSeams,
    fields: &["material", "thickness", "width", "length"],
    orientation_matters: false,
    each_priced: true,
    rolled: false,
};

const FLAT_STOCK: ShapeDescriptor = ShapeDescriptor {
    label: "Flat Stock",
    seam_family: SeamFamily::FlatStock,
    fields: &["material", "thickness", "width", "length"],
    orientation_matters: false,
    each_priced: true,
    rolled: false,
};

const FAB_SERVICE: ShapeDescriptor = ShapeDescriptor {
    label: "Fab Service",
    seam_family: SeamFamily::NoSeams,
    fields: &[],
    orientation_matters: false,
    each_priced: false,
    rolled: false,
};

const OTHER: ShapeDescriptor = ShapeDescriptor {
    label: "Other",
    seam_family: SeamFamily::NoSeams,
    fields: &[
        "material", "thickness", "width", "length", "sectionSize", "outerDiameter", "wallThickness",
        "rollType", "radius", "diameter", "arcDegrees",
    ],
    orientation_matters: false,
    each_priced: false,
    rolled: true,
};

impl PartType {
    /// Every part type, in menu order.
    pub const ALL: [PartType; 13] = [
        PartType::PlateRoll,
        PartType::ConeRoll,
        PartType::AngleRoll,
        PartType::FlatBar,
        PartType::PipeRoll,
        PartType::TubeRoll,
        PartType::ChannelRoll,
        PartType::BeamRoll,
        PartType::TeeBar,
        PartType::PressBrake,
        PartType::FlatStock,
        PartType::FabService,
        PartType::Other,
    ];

    /// Shape descriptor for this part type.
    pub fn descriptor(&self) -> &'static ShapeDescriptor {
        match self {
            PartType::PlateRoll => &PLATE_ROLL,
            PartType::ConeRoll => &CONE_ROLL,
            PartType::AngleRoll => &ANGLE_ROLL,
            PartType::FlatBar => &FLAT_BAR,
            PartType::PipeRoll => &PIPE_ROLL,
            PartType::TubeRoll => &TUBE_ROLL,
            PartType::ChannelRoll => &CHANNEL_ROLL,
            PartType::BeamRoll => &BEAM_ROLL,
            PartType::TeeBar => &TEE_BAR,
            PartType::PressBrake => &PRESS_BRAKE,
            PartType::FlatStock => &FLAT_STOCK,
            PartType::FabService => &FAB_SERVICE,
            PartType::Other => &OTHER,
        }
    }

    /// Persisted key (`plate_roll`, `tee_bar`, ...).
    pub fn key(&self) -> &'static str {
        match self {
            PartType::PlateRoll => "plate_roll",
            PartType::ConeRoll => "cone_roll",
            PartType::AngleRoll => "angle_roll",
            PartType::FlatBar => "flat_bar",
            PartType::PipeRoll => "pipe_roll",
            PartType::TubeRoll => "tube_roll",
            PartType::ChannelRoll => "channel_roll",
            PartType::BeamRoll => "beam_roll",
            PartType::TeeBar => "tee_bar",
            PartType::PressBrake => "press_brake",
            PartType::FlatStock => "flat_stock",
            PartType::FabService => "fab_service",
            PartType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        self.descriptor().label
    }

    pub fn is_service(&self) -> bool {
        matches!(self, PartType::FabService)
    }

    pub fn is_each_priced(&self) -> bool {
        self.descriptor().each_priced
    }
}

impl FromStr for PartType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartType::ALL
            .iter()
            .copied()
            .find(|t| t.key() == s.trim())
            .ok_or_else(|| EngineError::invalid_value("partType", "a known part type", s))
    }
}

impl std::fmt::Display for PartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
