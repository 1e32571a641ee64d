//! Data model types for parts, roll parameters and services.

pub(crate) mod fields;
mod order;
mod part;
mod part_type;
mod registry;
mod roll;
mod service;

pub use order::WorkOrder;
pub use part::Part;
pub use part_type::{PartType, SeamFamily, ShapeDescriptor};
pub use registry::PartRegistry;
pub use roll::{spec_label, MeasurePoint, MeasureType, RollDirection, RollSpec};
pub use service::{RateEntry, RateSource, SeamOption, ServiceType};
