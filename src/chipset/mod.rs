//! Chipset splitting into autotile blocks and decoration sheets

/// Group extraction and decoration sheet assembly
pub mod extractor;
/// Region origins of the legacy chipset layout
pub mod layout;

pub use extractor::{ChipsetExtraction, extract_chipset_groups};
