//! Error types for the rendering pipeline.

use std::path::PathBuf;

/// Errors that can occur while converting an image to text.
///
/// Every variant is terminal for the current conversion: the pipeline holds
/// no state, so recovering means calling it again with different input.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Pixel buffer, dimensions or ramp are inconsistent
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The planned character grid has a zero dimension
    #[error("degenerate output size {width}x{height}; the image is too narrow for this font ratio")]
    DegeneratePlan { width: u32, height: u32 },

    /// The font aspect ratio could not be measured
    #[error("font metrics unavailable: {0}")]
    EnvironmentUnavailable(String),

    /// Image decoding or encoding failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Reading or writing a file failed
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        RenderError::InvalidInput(msg.into())
    }
}
