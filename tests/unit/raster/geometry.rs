//! Tests for sheet dimensions and tile origins

#[cfg(test)]
mod tests {
    use remex::raster::geometry::{
        AUTOTILE_DIMENSIONS, CHIPSET_DIMENSIONS, DECO_SHEET_DIMENSIONS, EXPANDED_COLUMNS,
        EXPANDED_DIMENSIONS, EXPANDED_ROWS, MINITILE_SIZE, TILE_SIZE, TileOrigin,
    };

    // Tests the legacy sheet sizes in pixels
    // Verified by changing the tile size
    #[test]
    fn test_fixed_sheet_sizes() {
        assert_eq!(TILE_SIZE, 16);
        assert_eq!(MINITILE_SIZE, 8);
        assert_eq!(AUTOTILE_DIMENSIONS, (48, 64));
        assert_eq!(EXPANDED_DIMENSIONS, (128, 96));
        assert_eq!(CHIPSET_DIMENSIONS, (480, 256));
        assert_eq!(DECO_SHEET_DIMENSIONS, (96, 384));
    }

    // Tests the expanded grid holds exactly one slot per composition
    // Verified by adding a row to the expanded grid
    #[test]
    fn test_expanded_grid_has_48_slots() {
        assert_eq!(EXPANDED_COLUMNS * EXPANDED_ROWS, 48);
    }

    // Tests tile origins convert to pixel corners
    // Verified by swapping column and row in pixel()
    #[test]
    fn test_tile_origin_pixel() {
        assert_eq!(TileOrigin::new(0, 0).pixel(), (0, 0));
        assert_eq!(TileOrigin::new(3, 4).pixel(), (48, 64));
        assert_eq!(TileOrigin::new(24, 8).pixel(), (384, 128));
    }
}
