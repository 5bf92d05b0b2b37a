//! In-memory rasters and the pixel operations shared by every converter

/// Owned pixel grids with crop and paste
pub mod buffer;
/// Colorkey to alpha conversion
pub mod color_key;
/// Tile sizes and fixed sheet dimensions
pub mod geometry;

pub use buffer::{ColorModel, Raster};
pub use color_key::apply_color_key;
pub use geometry::{MINITILE_SIZE, TILE_SIZE, TileOrigin};
