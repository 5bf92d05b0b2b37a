//! Minitile vocabulary: quadrants, boundary roles and composition recipes

use crate::raster::geometry::MINITILE_SIZE;
use std::fmt;

/// Position of a minitile inside its tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    /// Top-left
    NorthWest,
    /// Top-right
    NorthEast,
    /// Bottom-left
    SouthWest,
    /// Bottom-right
    SouthEast,
}

impl Quadrant {
    /// All quadrants in composition order
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Pixel offset of this quadrant from the tile's top-left corner
    pub const fn offset(self) -> (u32, u32) {
        match self {
            Self::NorthWest => (0, 0),
            Self::NorthEast => (MINITILE_SIZE, 0),
            Self::SouthWest => (0, MINITILE_SIZE),
            Self::SouthEast => (MINITILE_SIZE, MINITILE_SIZE),
        }
    }

    /// Quadrant located at a pixel offset inside a tile, if any
    pub const fn from_offset(x: u32, y: u32) -> Option<Self> {
        match (x, y) {
            (0, 0) => Some(Self::NorthWest),
            (MINITILE_SIZE, 0) => Some(Self::NorthEast),
            (0, MINITILE_SIZE) => Some(Self::SouthWest),
            (MINITILE_SIZE, MINITILE_SIZE) => Some(Self::SouthEast),
            _ => None,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NorthWest => "NW",
            Self::NorthEast => "NE",
            Self::SouthWest => "SW",
            Self::SouthEast => "SE",
        };
        f.write_str(name)
    }
}

/// How a minitile takes part in drawing a terrain boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MinitileRole {
    /// Terrain interior, no boundary
    Normal,
    /// Convex corner where terrain ends on two sides
    OuterCorner,
    /// Concave corner where only the diagonal neighbour is missing
    InnerCorner,
    /// Boundary running along the top or bottom edge
    HorizontalEdge,
    /// Boundary running along the left or right edge
    VerticalEdge,
    /// Decorative preview block
    Showcase,
    /// Unused filler, only ever placed in the last expanded tile
    Dummy,
}

impl fmt::Display for MinitileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::OuterCorner => "outer corner",
            Self::InnerCorner => "inner corner",
            Self::HorizontalEdge => "horizontal edge",
            Self::VerticalEdge => "vertical edge",
            Self::Showcase => "showcase",
            Self::Dummy => "dummy",
        };
        f.write_str(name)
    }
}

/// Identifies one classified minitile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MinitileKey {
    /// Quadrant the block is drawn in
    pub quadrant: Quadrant,
    /// Boundary role of the block
    pub role: MinitileRole,
}

impl MinitileKey {
    /// Pair a quadrant with a role
    pub const fn new(quadrant: Quadrant, role: MinitileRole) -> Self {
        Self { quadrant, role }
    }
}

/// Roles to draw in each quadrant of one expanded tile, in NW, NE, SW, SE order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositionSpec([MinitileRole; 4]);

impl CompositionSpec {
    /// Build a recipe from roles listed in NW, NE, SW, SE order
    pub const fn new(roles: [MinitileRole; 4]) -> Self {
        Self(roles)
    }

    /// Role requested for `quadrant`
    pub const fn role(&self, quadrant: Quadrant) -> MinitileRole {
        let [north_west, north_east, south_west, south_east] = self.0;
        match quadrant {
            Quadrant::NorthWest => north_west,
            Quadrant::NorthEast => north_east,
            Quadrant::SouthWest => south_west,
            Quadrant::SouthEast => south_east,
        }
    }

    /// The four keys this recipe pulls from a classified set, in quadrant order
    pub fn keys(&self) -> [MinitileKey; 4] {
        Quadrant::ALL.map(|quadrant| MinitileKey::new(quadrant, self.role(quadrant)))
    }
}
