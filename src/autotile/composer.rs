//! Rebuilds the 48-tile sheet from classified minitiles

use crate::autotile::classifier::{MinitileSet, classify};
use crate::autotile::minitile::CompositionSpec;
use crate::autotile::tables::COMPOSITIONS;
use crate::io::error::Result;
use crate::raster::geometry::{
    AUTOTILE_DIMENSIONS, EXPANDED_COLUMNS, EXPANDED_HEIGHT, EXPANDED_WIDTH, TILE_SIZE,
};
use crate::raster::Raster;

/// Assemble one 16x16 tile from four classified minitiles
///
/// # Errors
///
/// Returns [`crate::ConversionError::MissingClassification`] if a quadrant's
/// role was never classified. The built-in compositions never trigger this
/// for a set produced by [`classify`].
pub fn compose_tile(minitiles: &MinitileSet, spec: &CompositionSpec) -> Result<Raster> {
    let mut tile = Raster::new_rgb(TILE_SIZE, TILE_SIZE);
    for key in spec.keys() {
        let block = minitiles.require(key)?;
        let (x, y) = key.quadrant.offset();
        tile.paste(block, x, y);
    }
    Ok(tile)
}

/// Pixel position of expanded tile `index` inside the sheet
pub const fn tile_position(index: u32) -> (u32, u32) {
    (
        (index % EXPANDED_COLUMNS) * TILE_SIZE,
        (index / EXPANDED_COLUMNS) * TILE_SIZE,
    )
}

/// Expand a compact 48x64 autotile into the 128x96 sheet of 48 tiles
///
/// Tile `i` of [`COMPOSITIONS`] lands at column `i % 8`, row `i / 8`.
/// The result is always RGB.
///
/// # Errors
///
/// Returns [`crate::ConversionError::InvalidDimensions`] if the source is not
/// exactly 48x64 pixels
pub fn expand_autotile(source: &Raster) -> Result<Raster> {
    source.ensure_dimensions("autotile expansion", AUTOTILE_DIMENSIONS)?;
    let minitiles = classify(source)?;

    let mut sheet = Raster::new_rgb(EXPANDED_WIDTH, EXPANDED_HEIGHT);
    for (index, spec) in (0_u32..).zip(COMPOSITIONS.iter()) {
        let tile = compose_tile(&minitiles, spec)?;
        let (x, y) = tile_position(index);
        sheet.paste(&tile, x, y);
    }
    Ok(sheet)
}
