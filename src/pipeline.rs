//! Conversion pipeline tying the rendering stages together.
//!
//! ```text
//! image ─► plan_dimensions ─► rasterize ─► to_luminance ─► compose ─► AsciiGrid
//!                                              │
//!                                              └─► to_grayscale_preview (optional)
//! ```
//!
//! A [`Converter`] is immutable once built and holds no per-request state, so
//! one instance can serve any number of conversions, from any thread.

use std::path::Path;

use image::DynamicImage;

use crate::ascii::{self, AsciiGrid, Bounds, DensityRamp};
use crate::error::RenderError;
use crate::font::FontRatio;
use crate::frame::PixelBuffer;
use crate::raster;

/// Settings for a conversion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderOptions {
    pub bounds: Bounds,
    pub ramp: DensityRamp,
    /// Also produce a grayscale copy of the rasterized image
    pub preview: bool,
}

/// Result of one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub grid: AsciiGrid,
    /// Grayscale preview at grid size, only when requested
    pub preview: Option<PixelBuffer>,
}

/// Image to text converter.
#[derive(Debug, Clone)]
pub struct Converter {
    options: RenderOptions,
    ratio: FontRatio,
}

impl Converter {
    pub fn new(options: RenderOptions, ratio: FontRatio) -> Self {
        Self { options, ratio }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn font_ratio(&self) -> FontRatio {
        self.ratio
    }

    /// Decode the file at `path` and render it.
    pub fn render_path(&self, path: &Path) -> Result<Conversion, RenderError> {
        let img = raster::load_image(path)?;
        self.render_image(&img)
    }

    /// Plan the grid for a decoded image, resample it and render.
    pub fn render_image(&self, img: &DynamicImage) -> Result<Conversion, RenderError> {
        let dims = ascii::plan_dimensions(img.width(), img.height(), self.ratio, self.options.bounds)?;
        let buffer = raster::rasterize(img, dims)?;
        self.render_buffer(&buffer)
    }

    /// Render a buffer that is already at grid size: one pixel per character.
    pub fn render_buffer(&self, buffer: &PixelBuffer) -> Result<Conversion, RenderError> {
        let samples = ascii::to_luminance(buffer);
        let grid = ascii::compose(&samples, buffer.width(), &self.options.ramp)?;
        let preview = self
            .options
            .preview
            .then(|| ascii::to_grayscale_preview(buffer));

        log::debug!("rendered {} grid", grid.dimensions());
        Ok(Conversion { grid, preview })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter(preview: bool) -> Converter {
        let options = RenderOptions {
            preview,
            ..RenderOptions::default()
        };
        Converter::new(options, FontRatio::new(2.0).unwrap())
    }

    #[test]
    fn test_render_buffer_maps_black_and_white() {
        let buf = PixelBuffer::new(
            vec![
                0, 0, 0, 255, 255, 255, 255, 255, //
                255, 255, 255, 255, 0, 0, 0, 255,
            ],
            2,
            2,
        )
        .unwrap();
        let out = converter(false).render_buffer(&buf).unwrap();
        assert_eq!(out.grid.as_str(), "@.\n.@\n");
        assert!(out.preview.is_none());
    }

    #[test]
    fn test_preview_only_when_requested() {
        let buf = PixelBuffer::new(vec![128; 4], 1, 1).unwrap();
        let out = converter(true).render_buffer(&buf).unwrap();
        let preview = out.preview.unwrap();
        assert_eq!(preview.dimensions(), buf.dimensions());
    }

    #[test]
    fn test_converter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
    }
}
