//! Image decoding and resampling to the planned grid size.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba, RgbaImage};

use crate::error::RenderError;
use crate::frame::{Dimensions, PixelBuffer};

/// Filter used when scaling the source down to the character grid.
pub const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// Read and decode an image file.
///
/// The format is guessed from the file contents, not the extension.
pub fn load_image(path: &Path) -> Result<DynamicImage, RenderError> {
    let bytes = std::fs::read(path).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let img = image::load_from_memory(&bytes)?;
    log::debug!(
        "decoded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Resample an image to exactly `dims` and return its RGBA pixels.
///
/// The source is composited over transparent black: colour is premultiplied
/// by alpha before resampling and divided back out afterwards, so colour
/// hidden under fully transparent pixels never reaches the output. A fully
/// transparent pixel comes out as `[0, 0, 0, 0]`.
pub fn rasterize(img: &DynamicImage, dims: Dimensions) -> Result<PixelBuffer, RenderError> {
    if dims.width == 0 || dims.height == 0 {
        return Err(RenderError::DegeneratePlan {
            width: dims.width,
            height: dims.height,
        });
    }

    let mut rgba = img.to_rgba8();
    premultiply(&mut rgba);
    let mut resized = if rgba.width() == dims.width && rgba.height() == dims.height {
        rgba
    } else {
        image::imageops::resize(&rgba, dims.width, dims.height, RESIZE_FILTER)
    };
    unpremultiply(&mut resized);

    PixelBuffer::new(resized.into_raw(), dims.width, dims.height)
}

fn premultiply(img: &mut RgbaImage) {
    for Rgba(px) in img.pixels_mut() {
        let a = u32::from(px[3]);
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * a + 127) / 255) as u8;
        }
    }
}

fn unpremultiply(img: &mut RgbaImage) {
    for Rgba(px) in img.pixels_mut() {
        let a = u32::from(px[3]);
        if a == 0 {
            *px = [0, 0, 0, 0];
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// Write a pixel buffer as an image; the format follows the file extension.
///
/// A missing or unsupported extension falls back to PNG. Formats without an
/// alpha channel (JPEG) get the colour channels only.
pub fn save_buffer(buffer: &PixelBuffer, path: &Path) -> Result<(), RenderError> {
    let img: RgbaImage =
        ImageBuffer::from_raw(buffer.width(), buffer.height(), buffer.as_bytes().to_vec())
            .ok_or_else(|| RenderError::invalid("pixel buffer does not match its dimensions"))?;

    let format = match ImageFormat::from_path(path) {
        Ok(format) if format.writing_enabled() => format,
        _ => {
            log::warn!("no image encoder for {}; writing PNG", path.display());
            ImageFormat::Png
        }
    };

    let img = DynamicImage::ImageRgba8(img);
    match format {
        ImageFormat::Jpeg => {
            DynamicImage::ImageRgb8(img.to_rgb8()).save_with_format(path, format)?
        }
        _ => img.save_with_format(path, format)?,
    }
    log::info!("wrote {} preview to {}", buffer.dimensions(), path.display());
    Ok(())
}
