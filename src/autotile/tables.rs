//! Hand-authored layout tables of the RPG Maker 200x autotile format
//!
//! These tables are data, not logic: they are transcribed from the legacy
//! sheet layout and must stay in sync with it entry for entry.

use crate::autotile::minitile::{CompositionSpec, MinitileRole, Quadrant};
use crate::raster::geometry::TileOrigin;

const NORMAL: MinitileRole = MinitileRole::Normal;
const OUTER: MinitileRole = MinitileRole::OuterCorner;
const INNER: MinitileRole = MinitileRole::InnerCorner;
const HORIZONTAL: MinitileRole = MinitileRole::HorizontalEdge;
const VERTICAL: MinitileRole = MinitileRole::VerticalEdge;
const SHOWCASE: MinitileRole = MinitileRole::Showcase;
const DUMMY: MinitileRole = MinitileRole::Dummy;

const NW: Quadrant = Quadrant::NorthWest;
const NE: Quadrant = Quadrant::NorthEast;
const SW: Quadrant = Quadrant::SouthWest;
const SE: Quadrant = Quadrant::SouthEast;

/// One populated slot of a compact autotile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPosition {
    /// Tile-sized group the minitile belongs to
    pub group: TileOrigin,
    /// Quadrant of the minitile inside its group
    pub quadrant: Quadrant,
    /// Role the minitile plays once extracted
    pub role: MinitileRole,
}

const fn slot(column: u32, row: u32, quadrant: Quadrant, role: MinitileRole) -> GroupPosition {
    GroupPosition {
        group: TileOrigin::new(column, row),
        quadrant,
        role,
    }
}

/// Role of every minitile slot the legacy format actually uses
///
/// Slots not listed here carry no art and are ignored by classification.
pub const GROUP_POSITIONS: [GroupPosition; 28] = [
    slot(0, 0, NW, SHOWCASE),
    slot(0, 0, NE, SHOWCASE),
    slot(0, 0, SW, SHOWCASE),
    slot(0, 0, SE, SHOWCASE),
    slot(1, 0, NW, DUMMY),
    slot(1, 0, NE, DUMMY),
    slot(1, 0, SE, DUMMY),
    slot(1, 0, SW, DUMMY),
    slot(2, 0, NW, OUTER),
    slot(2, 0, NE, OUTER),
    slot(2, 0, SW, OUTER),
    slot(2, 0, SE, OUTER),
    slot(0, 1, NW, INNER),
    slot(2, 1, NE, INNER),
    slot(0, 3, SW, INNER),
    slot(2, 3, SE, INNER),
    slot(1, 1, NW, HORIZONTAL),
    slot(1, 1, NE, HORIZONTAL),
    slot(1, 3, SW, HORIZONTAL),
    slot(1, 3, SE, HORIZONTAL),
    slot(0, 2, NW, VERTICAL),
    slot(2, 2, NE, VERTICAL),
    slot(0, 2, SW, VERTICAL),
    slot(2, 2, SE, VERTICAL),
    slot(1, 2, NW, NORMAL),
    slot(1, 2, NE, NORMAL),
    slot(1, 2, SE, NORMAL),
    slot(1, 2, SW, NORMAL),
];

/// Role stored at `quadrant` of the group at `group`, if that slot is used
pub fn role_at(group: TileOrigin, quadrant: Quadrant) -> Option<MinitileRole> {
    GROUP_POSITIONS
        .iter()
        .rev()
        .find(|position| position.group == group && position.quadrant == quadrant)
        .map(|position| position.role)
}

const fn tile(
    north_west: MinitileRole,
    north_east: MinitileRole,
    south_west: MinitileRole,
    south_east: MinitileRole,
) -> CompositionSpec {
    CompositionSpec::new([north_west, north_east, south_west, south_east])
}

/// Number of tiles in an expanded autotile sheet
pub const COMPOSITION_COUNT: usize = 48;

/// Quadrant roles of the 48 expanded tiles, in row-major sheet order
pub const COMPOSITIONS: [CompositionSpec; COMPOSITION_COUNT] = [
    tile(NORMAL, NORMAL, NORMAL, NORMAL),
    tile(OUTER, NORMAL, NORMAL, NORMAL),
    tile(NORMAL, OUTER, NORMAL, NORMAL),
    tile(OUTER, OUTER, NORMAL, NORMAL),
    tile(NORMAL, NORMAL, NORMAL, OUTER),
    tile(OUTER, NORMAL, NORMAL, OUTER),
    tile(NORMAL, OUTER, NORMAL, OUTER),
    tile(OUTER, OUTER, NORMAL, OUTER),
    tile(NORMAL, NORMAL, OUTER, NORMAL),
    tile(OUTER, NORMAL, OUTER, NORMAL),
    tile(NORMAL, OUTER, OUTER, NORMAL),
    tile(OUTER, OUTER, OUTER, NORMAL),
    tile(NORMAL, NORMAL, OUTER, OUTER),
    tile(OUTER, NORMAL, OUTER, OUTER),
    tile(NORMAL, OUTER, OUTER, OUTER),
    tile(OUTER, OUTER, OUTER, OUTER),
    tile(VERTICAL, NORMAL, VERTICAL, NORMAL),
    tile(VERTICAL, OUTER, VERTICAL, NORMAL),
    tile(VERTICAL, NORMAL, VERTICAL, OUTER),
    tile(VERTICAL, OUTER, VERTICAL, OUTER),
    tile(HORIZONTAL, HORIZONTAL, NORMAL, NORMAL),
    tile(HORIZONTAL, HORIZONTAL, NORMAL, OUTER),
    tile(HORIZONTAL, HORIZONTAL, OUTER, NORMAL),
    tile(HORIZONTAL, HORIZONTAL, OUTER, OUTER),
    tile(NORMAL, VERTICAL, NORMAL, VERTICAL),
    tile(NORMAL, VERTICAL, OUTER, VERTICAL),
    tile(OUTER, VERTICAL, NORMAL, VERTICAL),
    tile(OUTER, VERTICAL, OUTER, VERTICAL),
    tile(NORMAL, NORMAL, HORIZONTAL, HORIZONTAL),
    tile(OUTER, NORMAL, HORIZONTAL, HORIZONTAL),
    tile(NORMAL, OUTER, HORIZONTAL, HORIZONTAL),
    tile(OUTER, OUTER, HORIZONTAL, HORIZONTAL),
    tile(VERTICAL, VERTICAL, VERTICAL, VERTICAL),
    tile(HORIZONTAL, HORIZONTAL, HORIZONTAL, HORIZONTAL),
    tile(INNER, HORIZONTAL, VERTICAL, NORMAL),
    tile(INNER, HORIZONTAL, VERTICAL, OUTER),
    tile(HORIZONTAL, INNER, NORMAL, VERTICAL),
    tile(HORIZONTAL, INNER, OUTER, VERTICAL),
    tile(NORMAL, VERTICAL, HORIZONTAL, INNER),
    tile(OUTER, VERTICAL, HORIZONTAL, INNER),
    tile(VERTICAL, NORMAL, INNER, HORIZONTAL),
    tile(VERTICAL, OUTER, INNER, HORIZONTAL),
    tile(SHOWCASE, SHOWCASE, VERTICAL, VERTICAL),
    tile(SHOWCASE, HORIZONTAL, SHOWCASE, HORIZONTAL),
    tile(VERTICAL, VERTICAL, SHOWCASE, SHOWCASE),
    tile(HORIZONTAL, SHOWCASE, HORIZONTAL, SHOWCASE),
    tile(SHOWCASE, SHOWCASE, SHOWCASE, SHOWCASE),
    tile(DUMMY, DUMMY, DUMMY, DUMMY),
];
