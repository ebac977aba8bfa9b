//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::CharacterSet;
use crate::font::MAX_FONT_RATIO;

/// Parse and validate a font ratio (positive, at most `MAX_FONT_RATIO`)
fn parse_font_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(format!("Font ratio must be a positive number, got {}", s));
    }
    if ratio > MAX_FONT_RATIO {
        return Err(format!(
            "Font ratio must be at most {}, got {}",
            MAX_FONT_RATIO, s
        ));
    }
    Ok(ratio)
}

/// Convert an image into monospace text art
#[derive(Parser, Debug)]
#[command(name = "pic2ascii")]
#[command(version, about = "Convert images into monospace text art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file to convert
    pub image: Option<PathBuf>,

    /// Maximum output width in characters (default: 50)
    #[arg(long)]
    pub max_width: Option<u32>,

    /// Maximum output height in characters (default: 50)
    #[arg(long)]
    pub max_height: Option<u32>,

    /// Density ramp preset
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Custom density ramp, densest character first (overrides --charset)
    #[arg(long)]
    pub ramp: Option<String>,

    /// Glyph height / width of the display font (measured from the terminal if omitted)
    #[arg(long, value_parser = parse_font_ratio)]
    pub font_ratio: Option<f64>,

    /// Write the text to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also write a grayscale preview image
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the measured font ratio of the current terminal
    Probe,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
