//! PNG decoding and encoding of rasters

use crate::io::configuration::OUTPUT_EXTENSION;
use crate::io::error::{ConversionError, ErrorContext, Result, WithContext};
use crate::raster::Raster;
use image::{ImageFormat, ImageReader};
use std::path::{Path, PathBuf};

/// Decode an image file into a raster
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a decodable image
pub fn load_raster(path: &Path) -> Result<Raster> {
    // Sniff the format so extension-less inputs still decode
    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .with_context(ErrorContext {
            path: Some(path.to_path_buf()),
            operation: Some("open image"),
        })?;
    let image = reader.decode().with_path(path)?;
    Ok(Raster::from_dynamic(image))
}

/// Read the pixel size of an image from its header only
///
/// # Errors
///
/// Returns an error if the file cannot be read or its header is not a
/// recognized image format
pub fn read_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).with_path(path)
}

/// Encode a raster as PNG, creating parent directories as needed
///
/// The PNG format is used whatever the extension of `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_raster(raster: &Raster, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ConversionError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let result = match raster {
        Raster::Rgb(pixels) => pixels.save_with_format(path, ImageFormat::Png),
        Raster::Rgba(pixels) => pixels.save_with_format(path, ImageFormat::Png),
    };
    result.map_err(|e| ConversionError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Whether `path` ends in the output extension, ignoring case
pub fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case(OUTPUT_EXTENSION))
}

/// Append the output extension to a path lacking it
pub fn ensure_png_extension(path: &Path) -> PathBuf {
    if has_png_extension(path) {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(OUTPUT_EXTENSION);
        PathBuf::from(name)
    }
}
