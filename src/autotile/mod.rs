//! Autotile expansion from the compact legacy layout to a 48-tile sheet
//!
//! [`classifier`] cuts the source into role-tagged minitiles, [`composer`]
//! recombines them following the recipes in [`tables`].

/// Minitile extraction and role tagging
pub mod classifier;
/// Tile composition and sheet assembly
pub mod composer;
/// Quadrants, roles and composition recipes
pub mod minitile;
/// Static role and composition tables
pub mod tables;

pub use classifier::{MinitileSet, classify};
pub use composer::{compose_tile, expand_autotile};
pub use minitile::{CompositionSpec, MinitileKey, MinitileRole, Quadrant};
