//! Conversion of RPG Maker 200x tile art into sheets modern tile engines understand
//!
//! Chipsets are split into their water, animated, autotile and decoration
//! groups, and each compact 2x3-tile autotile can be expanded into the full
//! 48-tile sheet, one physical tile per terrain boundary case. Every
//! transform is a pure function of its input raster and static layout tables.

#![forbid(unsafe_code)]

/// Autotile classification and expansion
pub mod autotile;
/// Chipset group extraction
pub mod chipset;
/// Input/output operations and error handling
pub mod io;
/// Pixel grids, sheet geometry and colorkey transparency
pub mod raster;

pub use autotile::{classify, compose_tile, expand_autotile};
pub use chipset::{ChipsetExtraction, extract_chipset_groups};
pub use io::error::{ConversionError, Result};
pub use raster::{Raster, apply_color_key};
