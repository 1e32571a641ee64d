//! Seam extraction for fabrication-service pricing.

mod extract;

pub use extract::{
    extract_host_info, extract_seam_options, select_seam, HostInfo, SeamGeometry, SeamSelection,
};
