//! RGB to luminance conversion.

use crate::frame::PixelBuffer;

/// Red channel weight.
pub const RED_WEIGHT: f64 = 0.21;
/// Green channel weight.
pub const GREEN_WEIGHT: f64 = 0.72;
/// Blue channel weight.
pub const BLUE_WEIGHT: f64 = 0.07;

/// Luminance of one pixel: `0.21*R + 0.72*G + 0.07*B`.
///
/// The result lies in [0, 255]. It is not rounded; [`super::glyph_for`] does
/// its own rounding.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    RED_WEIGHT * r as f64 + GREEN_WEIGHT * g as f64 + BLUE_WEIGHT * b as f64
}

/// Convert an RGBA buffer to one luminance sample per pixel.
///
/// Alpha is discarded. Output order matches the buffer's pixel order and its
/// length is `width * height`.
pub fn to_luminance(buffer: &PixelBuffer) -> Vec<f64> {
    let mut samples = Vec::with_capacity(buffer.pixel_count());
    to_luminance_into(buffer, &mut samples);
    samples
}

/// Convert an RGBA buffer to luminance, reusing an existing buffer.
///
/// # Returns
/// The number of samples written
pub fn to_luminance_into(buffer: &PixelBuffer, out: &mut Vec<f64>) -> usize {
    out.clear();
    out.reserve(buffer.pixel_count());

    for px in buffer.pixels() {
        out.push(luminance(px[0], px[1], px[2]));
    }

    out.len()
}

/// Grayscale copy of the buffer for previews.
///
/// Every pixel becomes R=G=B=luminance (rounded and clamped to a byte) with
/// alpha unchanged. The text pipeline never needs this.
pub fn to_grayscale_preview(buffer: &PixelBuffer) -> PixelBuffer {
    buffer.map_pixels(|px| {
        let y = luminance(px[0], px[1], px[2]).round().clamp(0.0, 255.0) as u8;
        [y, y, y, px[3]]
    })
}
