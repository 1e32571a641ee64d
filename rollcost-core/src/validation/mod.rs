//! Save-time validation.

mod validate;

pub use validate::{ensure_valid, quick_validate, validate_order, validate_part, ValidationResult};
