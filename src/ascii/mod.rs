//! Image to text rendering.
//!
//! The pipeline runs in four steps:
//!
//! 1. **Dimension planning** - fit the source into the output bounds,
//!    correcting width for the font's cell aspect ratio
//! 2. **Luminance extraction** - RGBA to one brightness sample per pixel
//! 3. **Glyph mapping** - brightness to a character of a [`DensityRamp`]
//! 4. **Composition** - characters joined into newline-terminated rows
//!
//! Resampling the image to the planned size happens in between steps 1 and
//! 2, see [`crate::raster`].

mod charset;
mod compose;
mod dimensions;
mod grayscale;
mod mapping;

pub use charset::{CharSet, DensityRamp, BLOCKS_RAMP, MINIMAL_RAMP, STANDARD_RAMP};
pub use compose::{compose, AsciiGrid};
pub use dimensions::{plan_dimensions, Bounds, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
pub use grayscale::{
    luminance, to_grayscale_preview, to_luminance, to_luminance_into, BLUE_WEIGHT, GREEN_WEIGHT,
    RED_WEIGHT,
};
pub use mapping::{glyph_for, glyph_index, map_to_chars};
