//! Brightness to character mapping.

use super::charset::DensityRamp;

/// Ramp index for a luminance sample.
///
/// `index = ceil((N - 1) * v / 255)`. The ceiling is deliberate: only a
/// sample of exactly 0 reaches index 0, anything in `(0, 255 / (N - 1)]`
/// already lands on index 1. Switching to `round` or `floor` changes the
/// density of every rendered image.
///
/// Out-of-range samples are clamped to [0, 255] and the index to `N - 1`.
#[inline]
pub fn glyph_index(v: f64, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, 255.0) };
    let max = levels - 1;
    let idx = ((max as f64) * v / 255.0).ceil() as usize;
    idx.min(max)
}

/// Map one luminance sample to its ramp character.
///
/// # Example
/// ```
/// use pic2ascii::ascii::{glyph_for, DensityRamp};
///
/// let ramp = DensityRamp::default();
/// assert_eq!(glyph_for(0.0, &ramp), '@');
/// assert_eq!(glyph_for(1.0, &ramp), '%');
/// assert_eq!(glyph_for(255.0, &ramp), '.');
/// ```
#[inline]
pub fn glyph_for(v: f64, ramp: &DensityRamp) -> char {
    ramp.as_chars()[glyph_index(v, ramp.len())]
}

/// Map a sequence of luminance samples to characters.
pub fn map_to_chars(samples: &[f64], ramp: &DensityRamp) -> Vec<char> {
    samples.iter().map(|&v| glyph_for(v, ramp)).collect()
}
