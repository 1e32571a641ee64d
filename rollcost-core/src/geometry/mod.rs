//! Roll geometry: neutral-axis diameter, developed length and direction.

mod pitch;
mod roll;

pub use pitch::{NoPitch, PitchDescriber};
pub use roll::{
    centerline_diameter, compute_for_spec, compute_geometry, infer_roll_direction, GeometryResult,
};
