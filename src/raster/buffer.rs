//! Owned RGB/RGBA pixel grids with the block operations the converters need
//!
//! A [`Raster`] is always 8 bits per channel. Crops keep the source color
//! model, pastes convert the pasted block to the canvas model the same way a
//! plain image paste without mask would.

use crate::io::error::{ConversionError, Result};
use image::{DynamicImage, Rgb, RgbImage, RgbaImage, imageops};

/// Channel layout of a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Three 8-bit channels
    Rgb,
    /// Four 8-bit channels, the last one being alpha
    Rgba,
}

/// Rectangular grid of 8-bit pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Raster {
    /// Opaque truecolor pixels
    Rgb(RgbImage),
    /// Truecolor pixels with alpha
    Rgba(RgbaImage),
}

impl Raster {
    /// Create a black RGB raster
    pub fn new_rgb(width: u32, height: u32) -> Self {
        Self::Rgb(RgbImage::new(width, height))
    }

    /// Create an RGB raster where every pixel has the same color
    pub fn filled_rgb(width: u32, height: u32, color: Rgb<u8>) -> Self {
        Self::Rgb(RgbImage::from_pixel(width, height, color))
    }

    /// Normalize a decoded image into an 8-bit raster
    ///
    /// Images carrying alpha become RGBA, every other color type (grayscale,
    /// indexed, 16-bit) becomes RGB.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        if image.color().has_alpha() {
            Self::Rgba(image.into_rgba8())
        } else {
            Self::Rgb(image.into_rgb8())
        }
    }

    /// Hand the pixels back to the `image` crate for encoding
    pub fn into_dynamic(self) -> DynamicImage {
        match self {
            Self::Rgb(pixels) => DynamicImage::ImageRgb8(pixels),
            Self::Rgba(pixels) => DynamicImage::ImageRgba8(pixels),
        }
    }

    /// Channel layout of this raster
    pub const fn color_model(&self) -> ColorModel {
        match self {
            Self::Rgb(_) => ColorModel::Rgb,
            Self::Rgba(_) => ColorModel::Rgba,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.dimensions().1
    }

    /// `(width, height)` in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Rgb(pixels) => pixels.dimensions(),
            Self::Rgba(pixels) => pixels.dimensions(),
        }
    }

    /// Color channels of one pixel, ignoring alpha
    pub fn pixel_rgb(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        match self {
            Self::Rgb(pixels) => pixels.get_pixel_checked(x, y).copied(),
            Self::Rgba(pixels) => pixels.get_pixel_checked(x, y).map(|pixel| {
                let [r, g, b, _] = pixel.0;
                Rgb([r, g, b])
            }),
        }
    }

    /// Alpha of one pixel, 255 for RGB rasters
    pub fn pixel_alpha(&self, x: u32, y: u32) -> Option<u8> {
        match self {
            Self::Rgb(pixels) => pixels.get_pixel_checked(x, y).map(|_| u8::MAX),
            Self::Rgba(pixels) => pixels.get_pixel_checked(x, y).map(|pixel| pixel.0[3]),
        }
    }

    /// Copy a rectangle into a new raster of the same color model
    ///
    /// The rectangle is clamped to the raster bounds.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Self {
        match self {
            Self::Rgb(pixels) => Self::Rgb(imageops::crop_imm(pixels, x, y, width, height).to_image()),
            Self::Rgba(pixels) => {
                Self::Rgba(imageops::crop_imm(pixels, x, y, width, height).to_image())
            }
        }
    }

    /// Overwrite the pixels at `(x, y)` with `block`
    ///
    /// The block is converted to this raster's color model first; parts of
    /// the block falling outside the canvas are dropped.
    pub fn paste(&mut self, block: &Self, x: u32, y: u32) {
        let (x, y) = (i64::from(x), i64::from(y));
        match self {
            Self::Rgb(canvas) => imageops::replace(canvas, &block.to_rgb8(), x, y),
            Self::Rgba(canvas) => imageops::replace(canvas, &block.to_rgba8(), x, y),
        }
    }

    /// RGB copy of the pixels, alpha dropped
    pub fn to_rgb8(&self) -> RgbImage {
        match self {
            Self::Rgb(pixels) => pixels.clone(),
            Self::Rgba(pixels) => DynamicImage::ImageRgba8(pixels.clone()).into_rgb8(),
        }
    }

    /// RGBA copy of the pixels, RGB pixels become opaque
    pub fn to_rgba8(&self) -> RgbaImage {
        match self {
            Self::Rgb(pixels) => DynamicImage::ImageRgb8(pixels.clone()).into_rgba8(),
            Self::Rgba(pixels) => pixels.clone(),
        }
    }

    /// Reject rasters whose size differs from `expected`
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidDimensions`] naming `operation` when
    /// the raster is not exactly `expected` pixels wide and high
    pub fn ensure_dimensions(&self, operation: &'static str, expected: (u32, u32)) -> Result<()> {
        let actual = self.dimensions();
        if actual == expected {
            Ok(())
        } else {
            Err(ConversionError::InvalidDimensions {
                operation,
                expected,
                actual,
            })
        }
    }
}

impl From<RgbImage> for Raster {
    fn from(pixels: RgbImage) -> Self {
        Self::Rgb(pixels)
    }
}

impl From<RgbaImage> for Raster {
    fn from(pixels: RgbaImage) -> Self {
        Self::Rgba(pixels)
    }
}

impl From<DynamicImage> for Raster {
    fn from(image: DynamicImage) -> Self {
        Self::from_dynamic(image)
    }
}
