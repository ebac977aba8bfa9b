//! Pixel buffer and grid size types shared by the pipeline stages.

use std::fmt;

use crate::error::RenderError;

/// Bytes per pixel in an RGBA buffer.
pub const BYTES_PER_PIXEL: usize = 4;

/// Size of a character grid, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of cells in the grid.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Interleaved RGBA pixels, row-major, top-to-bottom and left-to-right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes.
    ///
    /// Fails with [`RenderError::InvalidInput`] if either dimension is zero or
    /// `data.len() != 4 * width * height`. The buffer is never truncated or
    /// padded to fit.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::invalid(format!(
                "pixel buffer dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        let expected = BYTES_PER_PIXEL as u64 * width as u64 * height as u64;
        if data.len() as u64 != expected {
            return Err(RenderError::invalid(format!(
                "pixel buffer holds {} bytes, expected {} for {}x{} RGBA",
                data.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of pixels in the buffer.
    pub fn pixel_count(&self) -> usize {
        self.data.len() / BYTES_PER_PIXEL
    }

    /// Iterate over `[r, g, b, a]` pixels in buffer order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(BYTES_PER_PIXEL)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Build a same-sized buffer by transforming each pixel.
    pub fn map_pixels(&self, mut f: impl FnMut(&[u8]) -> [u8; 4]) -> PixelBuffer {
        let mut data = Vec::with_capacity(self.data.len());
        for px in self.pixels() {
            data.extend_from_slice(&f(px));
        }
        PixelBuffer {
            data,
            width: self.width,
            height: self.height,
        }
    }
}
