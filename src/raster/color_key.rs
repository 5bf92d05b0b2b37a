//! Colorkey transparency for sheets authored without an alpha channel

use crate::raster::Raster;
use image::{Rgb, Rgba};

/// Make every pixel of `key` transparent and every other pixel opaque
///
/// Matching is an exact comparison of the red, green and blue channels;
/// existing alpha is replaced. A key absent from the raster yields a fully
/// opaque result. The output is always RGBA, and keying an already keyed
/// raster with the same color leaves it unchanged.
pub fn apply_color_key(raster: &Raster, key: Rgb<u8>) -> Raster {
    let mut pixels = raster.to_rgba8();
    for Rgba([r, g, b, alpha]) in pixels.pixels_mut() {
        *alpha = if [*r, *g, *b] == key.0 { 0 } else { u8::MAX };
    }
    Raster::Rgba(pixels)
}

/// Key a raster with the color found in its top-left pixel
///
/// Returns `None` for an empty raster.
pub fn apply_corner_color_key(raster: &Raster) -> Option<Raster> {
    raster
        .pixel_rgb(0, 0)
        .map(|key| apply_color_key(raster, key))
}
