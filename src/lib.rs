//! pic2ascii library crate.
//!
//! Converts raster images into monospace text art. The rendering core lives
//! in [`ascii`]; [`pipeline::Converter`] strings it together with decoding and
//! resampling from [`raster`].

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod font;
pub mod frame;
pub mod pipeline;
pub mod raster;

pub use error::RenderError;
pub use font::FontRatio;
pub use frame::{Dimensions, PixelBuffer};
pub use pipeline::{Conversion, Converter, RenderOptions};
