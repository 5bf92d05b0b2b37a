//! Splits a compact autotile into role-tagged minitiles

use crate::autotile::minitile::{MinitileKey, Quadrant};
use crate::autotile::tables::role_at;
use crate::io::error::{ConversionError, Result};
use crate::raster::geometry::{AUTOTILE_DIMENSIONS, MINITILE_SIZE, TILE_SIZE, TileOrigin};
use crate::raster::Raster;
use std::collections::BTreeMap;

/// Minitile blocks of one autotile, keyed by quadrant and role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinitileSet {
    blocks: BTreeMap<MinitileKey, Raster>,
}

impl MinitileSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a block, replacing any block already stored under `key`
    pub fn insert(&mut self, key: MinitileKey, block: Raster) -> Option<Raster> {
        self.blocks.insert(key, block)
    }

    /// Block stored under `key`
    pub fn get(&self, key: MinitileKey) -> Option<&Raster> {
        self.blocks.get(&key)
    }

    /// Block stored under `key`, or the classification error naming it
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::MissingClassification`] when no block was
    /// classified under `key`
    pub fn require(&self, key: MinitileKey) -> Result<&Raster> {
        self.get(key).ok_or(ConversionError::MissingClassification {
            quadrant: key.quadrant,
            role: key.role,
        })
    }

    /// Whether a block is stored under `key`
    pub fn contains(&self, key: MinitileKey) -> bool {
        self.blocks.contains_key(&key)
    }

    /// Number of classified blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether nothing has been classified
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Classified blocks in key order
    pub fn iter(&self) -> impl Iterator<Item = (&MinitileKey, &Raster)> {
        self.blocks.iter()
    }
}

/// Extract every role-bearing minitile of a 48x64 autotile
///
/// Groups are visited row by row, and the quadrants of each group in
/// NW, NE, SW, SE order. Slots without a role are skipped. A slot mapping to
/// a key that is already filled replaces the earlier block.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidDimensions`] if the source is not
/// exactly 48x64 pixels
pub fn classify(source: &Raster) -> Result<MinitileSet> {
    source.ensure_dimensions("autotile classification", AUTOTILE_DIMENSIONS)?;

    let (width, height) = source.dimensions();
    let mut minitiles = MinitileSet::new();

    for row in 0..height / TILE_SIZE {
        for column in 0..width / TILE_SIZE {
            let group = TileOrigin::new(column, row);
            let (group_x, group_y) = group.pixel();

            for quadrant in Quadrant::ALL {
                let Some(role) = role_at(group, quadrant) else {
                    continue;
                };
                let (offset_x, offset_y) = quadrant.offset();
                let block = source.crop(
                    group_x + offset_x,
                    group_y + offset_y,
                    MINITILE_SIZE,
                    MINITILE_SIZE,
                );
                log::trace!("group ({column}, {row}) {quadrant} classified as {role}");
                minitiles.insert(MinitileKey::new(quadrant, role), block);
            }
        }
    }

    Ok(minitiles)
}
