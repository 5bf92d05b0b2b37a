//! Pixel geometry shared by the autotile and chipset layouts
//!
//! Every size is derived from the tile edge so that the fixed legacy layouts
//! stay auditable against the RPG Maker 200x reference sheets.

/// Edge of one output tile in pixels
pub const TILE_SIZE: u32 = 16;
/// Edge of one minitile (a tile quadrant) in pixels
pub const MINITILE_SIZE: u32 = TILE_SIZE / 2;

/// Width of a compact legacy autotile (3 tiles)
pub const AUTOTILE_WIDTH: u32 = TILE_SIZE * 3;
/// Height of a compact legacy autotile (4 tiles)
pub const AUTOTILE_HEIGHT: u32 = TILE_SIZE * 4;

/// Number of tile columns in an expanded autotile sheet
pub const EXPANDED_COLUMNS: u32 = 8;
/// Number of tile rows in an expanded autotile sheet
pub const EXPANDED_ROWS: u32 = 6;
/// Width of the expanded 48-tile autotile sheet
pub const EXPANDED_WIDTH: u32 = TILE_SIZE * EXPANDED_COLUMNS;
/// Height of the expanded 48-tile autotile sheet
pub const EXPANDED_HEIGHT: u32 = TILE_SIZE * EXPANDED_ROWS;

/// Width of a legacy chipset sheet
pub const CHIPSET_WIDTH: u32 = TILE_SIZE * 30;
/// Height of a legacy chipset sheet
pub const CHIPSET_HEIGHT: u32 = TILE_SIZE * 16;

/// Width of one decoration page inside a chipset
pub const DECO_PAGE_WIDTH: u32 = TILE_SIZE * 6;
/// Height of one decoration page inside a chipset
pub const DECO_PAGE_HEIGHT: u32 = TILE_SIZE * 8;
/// Number of pages stacked into one decoration sheet
pub const DECO_PAGES: u32 = 3;
/// Width of an assembled decoration sheet
pub const DECO_SHEET_WIDTH: u32 = DECO_PAGE_WIDTH;
/// Height of an assembled decoration sheet
pub const DECO_SHEET_HEIGHT: u32 = DECO_PAGE_HEIGHT * DECO_PAGES;

/// Source size accepted by autotile classification and expansion
pub const AUTOTILE_DIMENSIONS: (u32, u32) = (AUTOTILE_WIDTH, AUTOTILE_HEIGHT);
/// Size of every expanded autotile sheet
pub const EXPANDED_DIMENSIONS: (u32, u32) = (EXPANDED_WIDTH, EXPANDED_HEIGHT);
/// Source size accepted by chipset extraction
pub const CHIPSET_DIMENSIONS: (u32, u32) = (CHIPSET_WIDTH, CHIPSET_HEIGHT);
/// Size of the stacked low and high decoration sheets
pub const DECO_SHEET_DIMENSIONS: (u32, u32) = (DECO_SHEET_WIDTH, DECO_SHEET_HEIGHT);

/// Position of a tile-aligned region, in tile units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileOrigin {
    /// Column counted in tiles from the left edge
    pub column: u32,
    /// Row counted in tiles from the top edge
    pub row: u32,
}

impl TileOrigin {
    /// Create an origin from tile coordinates
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Top-left corner in pixels
    pub const fn pixel(self) -> (u32, u32) {
        (self.column * TILE_SIZE, self.row * TILE_SIZE)
    }
}
