//! Image orchestration for QIM steganography.
//!
//! Coordinates luma reduction, the block transform and the codec so callers can
//! hide and unveil payloads in image files directly. Stego images are always
//! written as PNG: any lossy re-encoding destroys the embedded frame.

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat};

use crate::error::{QimError, Result};
use crate::grid::SampleGrid;
use crate::options::QimOptions;
use crate::quality::{quality_metrics, QualityMetrics};
use crate::transform::{forward, inverse};
use crate::{QimDecoder, QimEncoder};

/// Reduces `image` to its luma channel, truncated to whole blocks.
pub fn luma_grid(image: &DynamicImage) -> SampleGrid {
    SampleGrid::from_luma(&image.to_luma8())
}

/// Embed `payload` into the luma channel of `cover`.
///
/// The result is grayscale and has block aligned dimensions. It is decoded once
/// more before being returned; if the payload does not come back intact,
/// [`QimError::UnreliableCarrier`] is returned instead.
pub fn hide_in_image(
    cover: &DynamicImage,
    payload: &[u8],
    options: &QimOptions,
) -> Result<GrayImage> {
    let grid = luma_grid(cover);
    if grid.dimensions() != (cover.height() as usize, cover.width() as usize) {
        log::info!(
            "cover of {}x{} truncated to {}x{} to fit whole blocks",
            cover.width(),
            cover.height(),
            grid.cols(),
            grid.rows()
        );
    }

    let mut coefficients = forward(&grid);
    QimEncoder::with_options(*options).embed(&mut coefficients, payload)?;
    let stego = inverse(&coefficients).to_luma_image();

    ensure_payload_survives(&stego, payload, options)?;
    Ok(stego)
}

/// Reads `payload` back from the final pixels of `stego`.
///
/// Clamping to `[0, 255]` and rounding to `u8` can flip embedded parities,
/// which would otherwise only show up as wrong bytes on unveil.
fn ensure_payload_survives(
    stego: &GrayImage,
    payload: &[u8],
    options: &QimOptions,
) -> Result<()> {
    let coefficients = forward(&SampleGrid::from_luma(stego));
    let corrupted_bytes = match QimDecoder::with_options(*options).extract(&coefficients) {
        Ok(unveiled) if unveiled == payload => return Ok(()),
        Ok(unveiled) => {
            let differing = unveiled.iter().zip(payload).filter(|(a, b)| a != b).count();
            differing + unveiled.len().abs_diff(payload.len())
        }
        Err(e) => {
            log::debug!("stego image lost its frame: {e}");
            payload.len()
        }
    };

    log::error!(
        "{corrupted_bytes} of {} payload bytes do not survive pixel conversion",
        payload.len()
    );
    Err(QimError::UnreliableCarrier {
        payload_len: payload.len(),
        corrupted_bytes,
    })
}

/// Extract the payload hidden in the luma channel of `image`.
pub fn unveil_from_image(image: &DynamicImage, options: &QimOptions) -> Result<Vec<u8>> {
    let coefficients = forward(&luma_grid(image));
    QimDecoder::with_options(*options).extract(&coefficients)
}

/// Bits, header included, the image can carry.
pub fn image_capacity_bits(image: &DynamicImage) -> usize {
    let grid = luma_grid(image);
    crate::capacity::capacity_bits(grid.blocks_tall() * grid.blocks_wide())
}

/// Largest payload in bytes the image can carry.
pub fn image_capacity(image: &DynamicImage) -> usize {
    let grid = luma_grid(image);
    crate::capacity::max_payload_len(grid.blocks_tall() * grid.blocks_wide())
}

pub fn open_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| {
        log::error!("Error opening image {path:?}: {e}");
        QimError::InvalidImageMedia(e)
    })
}

/// Hides `payload` in the image at `cover` and stores the result as PNG at `output`.
pub fn hide_in_file(
    cover: &Path,
    output: &Path,
    payload: &[u8],
    options: &QimOptions,
) -> Result<()> {
    let stego = hide_in_image(&open_image(cover)?, payload, options)?;
    save_png(&stego, output)
}

/// Unveils the payload from the image file at `secret`.
pub fn unveil_from_file(secret: &Path, options: &QimOptions) -> Result<Vec<u8>> {
    unveil_from_image(&open_image(secret)?, options)
}

/// Compares the luma channels of two image files.
///
/// The original is truncated to whole blocks first, so a cover can be compared
/// against the stego image produced from it.
pub fn quality_of_files(original: &Path, stego: &Path) -> Result<QualityMetrics> {
    let original = luma_grid(&open_image(original)?);
    let stego = luma_grid(&open_image(stego)?);
    quality_metrics(&original, &stego)
}

fn save_png(image: &GrayImage, output: &Path) -> Result<()> {
    if let Some(ext) = output.extension().and_then(|e| e.to_str()) {
        if !ext.eq_ignore_ascii_case("png") {
            log::warn!("{output:?} will contain PNG data despite its .{ext} extension");
        }
    }

    image
        .save_with_format(output, ImageFormat::Png)
        .map_err(|e| match e {
            image::ImageError::IoError(source) => QimError::WriteError { source },
            e => {
                log::error!("Error saving image: {e}");
                QimError::ImageEncodingError(e)
            }
        })
}
