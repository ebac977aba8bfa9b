//! Assembly of mapped characters into row-delimited text.

use std::fmt;

use super::charset::DensityRamp;
use super::mapping::glyph_for;
use crate::error::RenderError;
use crate::frame::Dimensions;

/// Finished text rendering and the grid size it was composed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    text: String,
    dimensions: Dimensions,
}

impl AsciiGrid {
    /// The full text, one `\n` after every row including the last.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Rows without their trailing newlines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Walk the samples in order, mapping each to a ramp character and inserting
/// a newline after every `width`-th one (the last row included).
///
/// Nothing is reordered or trimmed.
///
/// # Errors
/// `InvalidInput` if `width` is zero, or if the sample count is zero or not a
/// multiple of `width`.
pub fn compose(samples: &[f64], width: u32, ramp: &DensityRamp) -> Result<AsciiGrid, RenderError> {
    let w = width as usize;
    if w == 0 {
        return Err(RenderError::invalid("grid width must be positive"));
    }
    if samples.is_empty() || samples.len() % w != 0 {
        return Err(RenderError::invalid(format!(
            "{} samples do not fill rows of width {}",
            samples.len(),
            width
        )));
    }

    let rows = samples.len() / w;
    // Ramp glyphs may be multi-byte; reserve for the common ASCII case.
    let mut text = String::with_capacity(samples.len() + rows);

    for (i, &v) in samples.iter().enumerate() {
        text.push(glyph_for(v, ramp));
        if (i + 1) % w == 0 {
            text.push('\n');
        }
    }

    Ok(AsciiGrid {
        text,
        dimensions: Dimensions::new(width, rows as u32),
    })
}
