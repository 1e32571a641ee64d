//! Fabrication service types, seam options and weld-rate entries.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::CUSTOM_SEAM_LABEL;
use crate::error::EngineError;

/// Secondary fabrication service billed against a host part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "weld_100")]
    FullWeld,
    #[serde(rename = "tack_weld")]
    TackWeld,
    #[serde(rename = "fit")]
    Fit,
    #[serde(rename = "cut_to_fit")]
    CutToFit,
    #[serde(rename = "other")]
    Other,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::FullWeld,
        ServiceType::TackWeld,
        ServiceType::Fit,
        ServiceType::CutToFit,
        ServiceType::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ServiceType::FullWeld => "weld_100",
            ServiceType::TackWeld => "tack_weld",
            ServiceType::Fit => "fit",
            ServiceType::CutToFit => "cut_to_fit",
            ServiceType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::FullWeld => "100% Weld",
            ServiceType::TackWeld => "Tack Weld",
            ServiceType::Fit => "Fit Only",
            ServiceType::CutToFit => "Cut to Fit",
            ServiceType::Other => "Other Service",
        }
    }

    /// Priced by the weld calculator instead of manual labor.
    pub fn has_weld_calc(&self) -> bool {
        matches!(self, ServiceType::FullWeld)
    }

    /// Shows a seam selection.
    pub fn uses_seam(&self) -> bool {
        matches!(self, ServiceType::FullWeld | ServiceType::TackWeld)
    }
}

impl FromStr for ServiceType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::ALL
            .iter()
            .copied()
            .find(|t| t.key() == s.trim())
            .ok_or_else(|| EngineError::invalid_value("_serviceType", "a known service type", s))
    }
}

/// One candidate seam length offered for a host part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeamOption {
    pub label: String,
    pub length_inches: f64,
}

impl SeamOption {
    pub fn new(label: impl Into<String>, length_inches: f64) -> Self {
        Self {
            label: label.into(),
            length_inches,
        }
    }

    /// Sentinel option asking for a manually entered length.
    pub fn custom() -> Self {
        Self::new(CUSTOM_SEAM_LABEL, 0.0)
    }

    pub fn is_custom(&self) -> bool {
        self.label == CUSTOM_SEAM_LABEL
    }
}

/// Where a weld rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Looked up from the shop rate table.
    Auto,
    /// Typed in by the user; never replaced by a lookup.
    Manual,
}

/// A weld price per foot tagged with its origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub source: RateSource,
    pub value: f64,
}

impl RateEntry {
    pub fn auto(value: f64) -> Self {
        Self {
            source: RateSource::Auto,
            value,
        }
    }

    pub fn manual(value: f64) -> Self {
        Self {
            source: RateSource::Manual,
            value,
        }
    }

    pub fn is_manual(&self) -> bool {
        self.source == RateSource::Manual
    }
}
