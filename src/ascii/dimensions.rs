//! Dimension planning for aspect-ratio-correct text rendering.

use crate::error::RenderError;
use crate::font::FontRatio;
use crate::frame::Dimensions;

/// Default maximum output width in characters.
pub const DEFAULT_MAX_WIDTH: u32 = 50;

/// Default maximum output height in characters.
pub const DEFAULT_MAX_HEIGHT: u32 = 50;

/// Upper limits for the planned character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub max_width: u32,
    pub max_height: u32,
}

impl Bounds {
    pub fn new(max_width: u32, max_height: u32) -> Result<Self, RenderError> {
        if max_width == 0 || max_height == 0 {
            return Err(RenderError::invalid(format!(
                "output bounds must be positive, got {}x{}",
                max_width, max_height
            )));
        }
        Ok(Self {
            max_width,
            max_height,
        })
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

/// Compute the character grid size for a source image.
///
/// The source width is first rectified by the font ratio
/// (`floor(ratio * width)`), so that tall glyph cells do not squash the
/// picture horizontally. Then:
///
/// 1. If the source height exceeds `max_height`, both axes are scaled so the
///    height is exactly `max_height`. This check always wins.
/// 2. Otherwise, if the *unrectified* source width exceeds `max_width`, the
///    width is pinned to `max_width` and the height scaled by
///    `max_width / rectified`.
/// 3. Otherwise the rectified width and the source height are used as-is.
///
/// Step 2 compares the raw width, not the rectified one. This means an image
/// whose rectified width overflows `max_width` can pass through step 3
/// unclamped. Existing renderings depend on it; do not "fix" it.
///
/// All divisions floor.
///
/// # Errors
/// * `InvalidInput` if the source has a zero dimension
/// * `DegeneratePlan` if either planned dimension comes out as zero
///
/// # Example
/// ```
/// use pic2ascii::ascii::{plan_dimensions, Bounds};
/// use pic2ascii::font::FontRatio;
///
/// let ratio = FontRatio::new(2.0).unwrap();
/// let dims = plan_dimensions(100, 40, ratio, Bounds::default()).unwrap();
/// assert_eq!((dims.width, dims.height), (50, 10));
/// ```
pub fn plan_dimensions(
    img_width: u32,
    img_height: u32,
    ratio: FontRatio,
    bounds: Bounds,
) -> Result<Dimensions, RenderError> {
    if img_width == 0 || img_height == 0 {
        return Err(RenderError::invalid(format!(
            "source image must have positive dimensions, got {}x{}",
            img_width, img_height
        )));
    }

    let rectified = (ratio.get() * img_width as f64).floor();
    // Clamp before the integer cast so absurd ratios cannot wrap.
    let rectified = rectified.min(u32::MAX as f64) as u64;
    let width = img_width as u64;
    let height = img_height as u64;
    let max_width = bounds.max_width as u64;
    let max_height = bounds.max_height as u64;

    let (out_w, out_h) = if height > max_height {
        (rectified * max_height / height, max_height)
    } else if width > max_width {
        if rectified == 0 {
            // Width is pinned to the bound; the height has no finite value.
            return Err(RenderError::DegeneratePlan {
                width: bounds.max_width,
                height: 0,
            });
        }
        (max_width, height * max_width / rectified)
    } else {
        (rectified, height)
    };

    let dims = Dimensions::new(
        out_w.min(u32::MAX as u64) as u32,
        out_h.min(u32::MAX as u64) as u32,
    );
    if dims.width == 0 || dims.height == 0 {
        return Err(RenderError::DegeneratePlan {
            width: dims.width,
            height: dims.height,
        });
    }

    log::debug!(
        "planned {} grid for {}x{} source (font ratio {})",
        dims,
        img_width,
        img_height,
        ratio
    );

    Ok(dims)
}
