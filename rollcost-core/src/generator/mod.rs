//! Text generation: number formatting and description strings.

mod description;
mod format;

pub use description::{material_description, roll_line, rolling_description, service_description};
pub use format::{format_currency, format_fixed, format_money, trim_number};
