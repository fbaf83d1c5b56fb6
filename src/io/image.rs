//! Packed-image loading and equal-width band splitting

use crate::io::configuration::{REAL_BAND_COUNT, SYNTHESIS_BAND_COUNT};
use crate::io::error::{DatasetError, Result};
use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// Load a packed image from disk
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_packed(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| DatasetError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Split a packed image into `bands` equal-width sub-images
///
/// Split points sit at floor multiples of `width / bands`; when the width is
/// not an exact multiple the final band absorbs the remainder, so paired sets
/// whose widths are exact multiples always split into identical-width bands.
///
/// # Errors
///
/// Returns an error if `bands` is zero or exceeds the image width.
pub fn split_bands(packed: &DynamicImage, bands: u32, path: &Path) -> Result<Vec<DynamicImage>> {
    let (width, height) = packed.dimensions();
    if bands == 0 || width < bands {
        return Err(DatasetError::InvalidPackedImage {
            path: path.to_path_buf(),
            width,
            bands,
        });
    }

    let band_width = width / bands;
    let mut out = Vec::with_capacity(bands as usize);
    for band in 0..bands {
        let x = band * band_width;
        // Last band runs to the image edge
        let w = if band + 1 == bands {
            width - x
        } else {
            band_width
        };
        out.push(packed.crop_imm(x, 0, w, height));
    }

    Ok(out)
}

fn take_band(
    bands: &mut Vec<DynamicImage>,
    packed: &DynamicImage,
    expected: u32,
    path: &Path,
) -> Result<DynamicImage> {
    bands.pop().ok_or_else(|| DatasetError::InvalidPackedImage {
        path: path.to_path_buf(),
        width: packed.width(),
        bands: expected,
    })
}

/// Split a real packed image into its (guide, mask) bands
///
/// # Errors
///
/// Returns an error if the image is narrower than two pixels.
pub fn split_pair(packed: &DynamicImage, path: &Path) -> Result<(DynamicImage, DynamicImage)> {
    let mut bands = split_bands(packed, REAL_BAND_COUNT, path)?;
    let mask = take_band(&mut bands, packed, REAL_BAND_COUNT, path)?;
    let guide = take_band(&mut bands, packed, REAL_BAND_COUNT, path)?;
    Ok((guide, mask))
}

/// Split a synthetic packed image into its (style, content, mask) bands
///
/// # Errors
///
/// Returns an error if the image is narrower than three pixels.
pub fn split_triplet(
    packed: &DynamicImage,
    path: &Path,
) -> Result<(DynamicImage, DynamicImage, DynamicImage)> {
    let mut bands = split_bands(packed, SYNTHESIS_BAND_COUNT, path)?;
    let mask = take_band(&mut bands, packed, SYNTHESIS_BAND_COUNT, path)?;
    let content = take_band(&mut bands, packed, SYNTHESIS_BAND_COUNT, path)?;
    let style = take_band(&mut bands, packed, SYNTHESIS_BAND_COUNT, path)?;
    Ok((style, content, mask))
}
