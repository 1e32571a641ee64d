//! Roll parameters: measurement conventions, direction and the roll spec.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;
use crate::model::PartType;

/// Whether the roll value is a radius or a diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureType {
    Radius,
    #[default]
    Diameter,
}

impl MeasureType {
    pub fn key(&self) -> &'static str {
        match self {
            MeasureType::Radius => "radius",
            MeasureType::Diameter => "diameter",
        }
    }

    /// Convert a roll value measured this way to a diameter.
    pub fn to_diameter(&self, value: f64) -> f64 {
        match self {
            MeasureType::Radius => value * 2.0,
            MeasureType::Diameter => value,
        }
    }
}

impl FromStr for MeasureType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "radius" => Ok(MeasureType::Radius),
            "diameter" => Ok(MeasureType::Diameter),
            _ => Err(EngineError::invalid_value(
                "_rollMeasureType",
                "radius or diameter",
                s,
            )),
        }
    }
}

/// Where on the material the roll value was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurePoint {
    #[default]
    Inside,
    Outside,
    Centerline,
}

impl MeasurePoint {
    pub fn key(&self) -> &'static str {
        match self {
            MeasurePoint::Inside => "inside",
            MeasurePoint::Outside => "outside",
            MeasurePoint::Centerline => "centerline",
        }
    }

    /// Move a measured diameter to the neutral axis.
    pub fn to_centerline(&self, diameter: f64, thickness: f64) -> f64 {
        match self {
            MeasurePoint::Inside => diameter + thickness,
            MeasurePoint::Outside => diameter - thickness,
            MeasurePoint::Centerline => diameter,
        }
    }
}

impl FromStr for MeasurePoint {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "inside" => Ok(MeasurePoint::Inside),
            "outside" => Ok(MeasurePoint::Outside),
            "centerline" => Ok(MeasurePoint::Centerline),
            _ => Err(EngineError::invalid_value(
                "_rollMeasurePoint",
                "inside, outside or centerline",
                s,
            )),
        }
    }
}

/// Shop callout for a measure point and type: ISR, ID, OSR, OD, CLR, CLD.
pub fn spec_label(point: MeasurePoint, kind: MeasureType) -> &'static str {
    match (point, kind) {
        (MeasurePoint::Inside, MeasureType::Radius) => "ISR",
        (MeasurePoint::Inside, MeasureType::Diameter) => "ID",
        (MeasurePoint::Outside, MeasureType::Radius) => "OSR",
        (MeasurePoint::Outside, MeasureType::Diameter) => "OD",
        (MeasurePoint::Centerline, MeasureType::Radius) => "CLR",
        (MeasurePoint::Centerline, MeasureType::Diameter) => "CLD",
    }
}

/// Which axis a section is rolled about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollDirection {
    EasyWay,
    HardWay,
    OnEdge,
}

impl RollDirection {
    pub fn key(&self) -> &'static str {
        match self {
            RollDirection::EasyWay => "easy_way",
            RollDirection::HardWay => "hard_way",
            RollDirection::OnEdge => "on_edge",
        }
    }

    /// Shop-floor abbreviation. Tee bars are called by stem position.
    pub fn abbreviation(&self, part_type: PartType) -> &'static str {
        match (part_type, self) {
            (PartType::TeeBar, RollDirection::EasyWay) => "SO",
            (PartType::TeeBar, RollDirection::OnEdge) => "SU",
            (PartType::TeeBar, RollDirection::HardWay) => "SI",
            (_, RollDirection::EasyWay) => "EW",
            (_, RollDirection::OnEdge) => "OE",
            (_, RollDirection::HardWay) => "HW",
        }
    }
}

impl FromStr for RollDirection {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "easy_way" => Ok(RollDirection::EasyWay),
            "hard_way" => Ok(RollDirection::HardWay),
            "on_edge" => Ok(RollDirection::OnEdge),
            _ => Err(EngineError::invalid_value(
                "rollType",
                "easy_way, hard_way or on_edge",
                s,
            )),
        }
    }
}

/// Roll parameters read from a part. Never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RollSpec {
    pub roll_value: f64,
    pub measure_type: MeasureType,
    pub measure_point: MeasurePoint,
    /// Partial-circle angle in degrees; `None` for a full circle.
    pub arc_degrees: Option<f64>,
    /// Straight length added to each end of the curve.
    pub tangent_length: Option<f64>,
}

impl RollSpec {
    pub fn new(roll_value: f64, measure_type: MeasureType, measure_point: MeasurePoint) -> Self {
        Self {
            roll_value,
            measure_type,
            measure_point,
            arc_degrees: None,
            tangent_length: None,
        }
    }

    pub fn with_arc(mut self, degrees: f64) -> Self {
        self.arc_degrees = Some(degrees);
        self
    }

    pub fn with_tangent(mut self, length: f64) -> Self {
        self.tangent_length = Some(length);
        self
    }

    /// Measured diameter before any thickness adjustment.
    pub fn diameter(&self) -> f64 {
        self.measure_type.to_diameter(self.roll_value)
    }

    /// ISR / ID / OSR / OD / CLR / CLD.
    pub fn spec_label(&self) -> &'static str {
        spec_label(self.measure_point, self.measure_type)
    }
}
