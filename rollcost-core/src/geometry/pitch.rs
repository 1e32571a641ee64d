//! Seam to the external pitch/helix calculation.

use crate::model::Part;

/// Produces the pitch lines of a rolling description.
///
/// The pitch calculation itself lives outside the engine; it receives the
/// part and its neutral-axis diameter and returns display lines.
pub trait PitchDescriber {
    fn description_lines(&self, part: &Part, centerline_diameter: f64) -> Vec<String>;
}

/// Pitch describer for parts rolled without pitch.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPitch;

impl PitchDescriber for NoPitch {
    fn description_lines(&self, _part: &Part, _centerline_diameter: f64) -> Vec<String> {
        Vec::new()
    }
}

impl<F> PitchDescriber for F
where
    F: Fn(&Part, f64) -> Vec<String>,
{
    fn description_lines(&self, part: &Part, centerline_diameter: f64) -> Vec<String> {
        self(part, centerline_diameter)
    }
}
