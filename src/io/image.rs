//! Grayscale colormap encoding and PNG persistence

use crate::io::error::{GaborError, Result, computation_error, invalid_parameter};
use image::{DynamicImage, GrayImage, Luma, RgbImage};
use ndarray::Array2;
use std::path::Path;

/// Number of entries in the gray lookup table
const COLORMAP_LEVELS: f64 = 256.0;

/// Map a patch onto 8-bit gray levels
///
/// Samples are min-max normalized to `[0, 1]` and then looked up in a
/// 256-entry linear gray table, so the darkest sample becomes 0 and the
/// brightest 255. A constant patch maps to 0 everywhere. Row `r`, column `c`
/// of the array becomes pixel `(c, r)`.
///
/// # Errors
///
/// Returns an error if:
/// - Any sample is NaN or infinite
/// - A dimension does not fit into `u32`
pub fn encode_grayscale(patch: &Array2<f64>) -> Result<GrayImage> {
    if let Some(bad) = patch.iter().find(|v| !v.is_finite()) {
        return Err(computation_error(
            "grayscale encoding",
            &format!("patch contains non-finite sample {bad}"),
        ));
    }

    let (rows, cols) = patch.dim();
    let width = u32::try_from(cols).map_err(|e| invalid_parameter("patch width", &cols, &e))?;
    let height = u32::try_from(rows).map_err(|e| invalid_parameter("patch height", &rows, &e))?;

    let (min, max) = patch
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;

    Ok(GrayImage::from_fn(width, height, |x, y| {
        let sample = patch.get((y as usize, x as usize)).copied().unwrap_or(min);
        let normalized = if range > 0.0 {
            (sample - min) / range
        } else {
            0.0
        };
        let level = num_traits::clamp((normalized * COLORMAP_LEVELS).floor(), 0.0, 255.0);
        Luma([level as u8])
    }))
}

/// Encode a patch and write it as an RGBA PNG with opaque gray pixels
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written
pub fn save_patch_png(patch: &Array2<f64>, path: &Path) -> Result<()> {
    let gray = encode_grayscale(patch)?;
    DynamicImage::ImageLuma8(gray)
        .to_rgba8()
        .save(path)
        .map_err(|e| GaborError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Read an image from disk as 8-bit RGB
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be decoded
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).map_err(|e| GaborError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(image.to_rgb8())
}

/// Write an RGB image as PNG
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn save_rgb_png(image: &RgbImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|e| GaborError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
