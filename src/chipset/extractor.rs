//! Cuts a chipset sheet into autotile-shaped blocks and decoration sheets

use crate::chipset::layout::{
    ANIMATED_TILE_ORIGINS, AUTOTILE_ORIGINS, HIGH_DECO_PAGE_ORIGINS, LOW_DECO_PAGE_ORIGINS,
    WATER_TILE_ORIGINS,
};
use crate::io::error::{ConversionError, Result};
use crate::raster::color_key::apply_corner_color_key;
use crate::raster::geometry::{
    AUTOTILE_HEIGHT, AUTOTILE_WIDTH, CHIPSET_DIMENSIONS, DECO_PAGE_HEIGHT, DECO_PAGE_WIDTH,
    DECO_SHEET_DIMENSIONS, DECO_SHEET_HEIGHT, DECO_SHEET_WIDTH, TileOrigin,
};
use crate::raster::Raster;

/// Every tile group of one chipset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipsetExtraction {
    /// Three 48x64 water autotiles
    pub water_tiles: Vec<Raster>,
    /// One 48x64 animated tile block
    pub animated_tiles: Vec<Raster>,
    /// Twelve 48x64 terrain autotiles
    pub autotiles: Vec<Raster>,
    /// Lower decoration pages stacked into one opaque 96x384 RGB sheet
    pub low_deco: Raster,
    /// Upper decoration pages stacked into one 96x384 RGBA sheet, keyed on its corner color
    pub high_deco: Raster,
}

impl ChipsetExtraction {
    /// Number of rasters held, decoration sheets included
    pub fn raster_count(&self) -> usize {
        self.water_tiles.len() + self.animated_tiles.len() + self.autotiles.len() + 2
    }
}

/// Crop one 48x64 block per origin, in order
pub fn extract_autotile_blocks(chipset: &Raster, origins: &[TileOrigin]) -> Vec<Raster> {
    origins
        .iter()
        .map(|origin| {
            let (x, y) = origin.pixel();
            chipset.crop(x, y, AUTOTILE_WIDTH, AUTOTILE_HEIGHT)
        })
        .collect()
}

/// Stack one decoration page per origin into an opaque RGB sheet
pub fn stack_deco_pages(chipset: &Raster, origins: &[TileOrigin]) -> Raster {
    let mut sheet = Raster::new_rgb(DECO_SHEET_WIDTH, DECO_SHEET_HEIGHT);
    for (slot, origin) in (0_u32..).zip(origins) {
        let (x, y) = origin.pixel();
        let page = chipset.crop(x, y, DECO_PAGE_WIDTH, DECO_PAGE_HEIGHT);
        sheet.paste(&page, 0, slot * DECO_PAGE_HEIGHT);
    }
    sheet
}

/// Split a 480x256 chipset into its water, animated, autotile and decoration groups
///
/// The chipset itself is left untouched. The high decoration sheet treats the
/// color of its top-left pixel as transparent.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidDimensions`] if the chipset is not
/// exactly 480x256 pixels
pub fn extract_chipset_groups(chipset: &Raster) -> Result<ChipsetExtraction> {
    chipset.ensure_dimensions("chipset extraction", CHIPSET_DIMENSIONS)?;

    let high_pages = stack_deco_pages(chipset, &HIGH_DECO_PAGE_ORIGINS);
    let high_deco = apply_corner_color_key(&high_pages).ok_or_else(|| {
        ConversionError::InvalidDimensions {
            operation: "high decoration keying",
            expected: DECO_SHEET_DIMENSIONS,
            actual: high_pages.dimensions(),
        }
    })?;

    Ok(ChipsetExtraction {
        water_tiles: extract_autotile_blocks(chipset, &WATER_TILE_ORIGINS),
        animated_tiles: extract_autotile_blocks(chipset, &ANIMATED_TILE_ORIGINS),
        autotiles: extract_autotile_blocks(chipset, &AUTOTILE_ORIGINS),
        low_deco: stack_deco_pages(chipset, &LOW_DECO_PAGE_ORIGINS),
        high_deco,
    })
}
