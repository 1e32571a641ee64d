//! Derived-field recomputation and explicit part actions.

mod actions;
mod recompute;

pub use actions::{
    choose_roll_direction, relink_service, reset_weld_rate, select_seam_option, set_as_length,
    set_manual_weld_rate, set_measure_point, set_measure_type,
};
pub use recompute::{
    prepare_for_save, recompute_order, recompute_part, recompute_service, Derived, PartPricing,
    ServicePricing,
};
