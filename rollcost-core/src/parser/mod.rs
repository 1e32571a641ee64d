//! Parsers for shop notation and stored records.

mod dimension;
mod records;

pub use dimension::*;
pub use records::{
    load_settings, load_settings_or_empty, load_work_order, parse_work_order,
};
