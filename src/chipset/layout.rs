//! Fixed region origins of an RPG Maker 200x chipset sheet, in tile units

use crate::raster::geometry::TileOrigin;

/// Top-left corners of the three water autotile blocks
pub const WATER_TILE_ORIGINS: [TileOrigin; 3] = [
    TileOrigin::new(0, 0),
    TileOrigin::new(3, 0),
    TileOrigin::new(0, 4),
];

/// Top-left corner of the animated tile block
pub const ANIMATED_TILE_ORIGINS: [TileOrigin; 1] = [TileOrigin::new(3, 4)];

/// Top-left corners of the twelve terrain autotiles
pub const AUTOTILE_ORIGINS: [TileOrigin; 12] = [
    TileOrigin::new(0, 8),
    TileOrigin::new(3, 8),
    TileOrigin::new(0, 12),
    TileOrigin::new(3, 12),
    TileOrigin::new(6, 0),
    TileOrigin::new(9, 0),
    TileOrigin::new(6, 4),
    TileOrigin::new(9, 4),
    TileOrigin::new(6, 8),
    TileOrigin::new(9, 8),
    TileOrigin::new(6, 12),
    TileOrigin::new(9, 12),
];

/// Pages of the lower decoration layer, stacked top to bottom
pub const LOW_DECO_PAGE_ORIGINS: [TileOrigin; 3] = [
    TileOrigin::new(12, 0),
    TileOrigin::new(12, 8),
    TileOrigin::new(18, 0),
];

/// Pages of the upper decoration layer, stacked top to bottom
pub const HIGH_DECO_PAGE_ORIGINS: [TileOrigin; 3] = [
    TileOrigin::new(18, 8),
    TileOrigin::new(24, 0),
    TileOrigin::new(24, 8),
];
