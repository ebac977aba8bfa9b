//! Subcommand handlers: convert, probe and config actions.

use std::path::{Path, PathBuf};

use super::args::{Args, ConfigAction};
use crate::ascii::{Bounds, CharSet, DensityRamp};
use crate::config::{self, Config, ConfigError};
use crate::error::RenderError;
use crate::font::{FixedRatio, FontMetricsProbe, FontRatio, TerminalProbe};
use crate::pipeline::{Converter, RenderOptions};
use crate::raster;

/// Errors surfaced by the command-line front-end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("no image given; run `pic2ascii <IMAGE>` or see --help")]
    MissingImage,

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Extra advice printed after the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Render(RenderError::EnvironmentUnavailable(_)) => Some(
                "The terminal did not report its cell size. Pass --font-ratio (e.g. 2.0) \
                 or set render.font_ratio in the config file.",
            ),
            CliError::Render(RenderError::DegeneratePlan { .. }) => {
                Some("Try a larger --max-width or a larger --font-ratio.")
            }
            _ => None,
        }
    }
}

/// Effective settings after merging config file and flags. Flags win.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bounds: Bounds,
    pub ramp: DensityRamp,
    pub font_ratio: Option<FontRatio>,
    pub preview: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(args: &Args, config: &Config) -> Result<Self, RenderError> {
        let bounds = Bounds::new(
            args.max_width.unwrap_or(config.render.max_width),
            args.max_height.unwrap_or(config.render.max_height),
        )?;

        let ramp = match (&args.ramp, args.charset) {
            (Some(ramp), _) => DensityRamp::new(ramp)?,
            (None, Some(cs)) => CharSet::from(cs).ramp(),
            (None, None) => config.ramp()?,
        };

        let font_ratio = match args.font_ratio {
            Some(r) => Some(FontRatio::new(r)?),
            None => config.font_ratio()?,
        };

        let preview = args.preview.clone().or_else(|| config.output.preview.clone());

        Ok(Self {
            bounds,
            ramp,
            font_ratio,
            preview,
        })
    }

    /// The configured ratio, or a terminal measurement when none is set.
    pub fn measure_ratio(&self) -> Result<FontRatio, RenderError> {
        match self.font_ratio {
            Some(ratio) => FixedRatio(ratio).measure(),
            None => TerminalProbe.measure(),
        }
    }
}

/// Convert the image named on the command line.
pub fn convert(args: &Args) -> Result<(), CliError> {
    let image = args.image.as_deref().ok_or(CliError::MissingImage)?;
    let config = Config::load(args.config.as_deref())?;
    let settings = Settings::resolve(args, &config)?;
    let ratio = settings.measure_ratio()?;
    log::info!(
        "converting {} (bounds {}x{}, font ratio {})",
        image.display(),
        settings.bounds.max_width,
        settings.bounds.max_height,
        ratio
    );

    let options = RenderOptions {
        bounds: settings.bounds,
        ramp: settings.ramp.clone(),
        preview: settings.preview.is_some(),
    };
    let conversion = Converter::new(options, ratio).render_path(image)?;

    match &args.output {
        Some(path) => write_text(path, conversion.grid.as_str())?,
        None => print!("{}", conversion.grid),
    }

    if let (Some(path), Some(preview)) = (&settings.preview, &conversion.preview) {
        raster::save_buffer(preview, path)?;
    }
    Ok(())
}

fn write_text(path: &Path, text: &str) -> Result<(), CliError> {
    std::fs::write(path, text).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Measure and print the terminal's font ratio.
pub fn probe() -> Result<(), CliError> {
    let ratio = TerminalProbe.measure()?;
    println!("Font ratio: {}", ratio);
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: &ConfigAction, args: &Args) -> Result<(), CliError> {
    let config_path = args.config.clone().unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(args.config.as_deref())?;
            let settings = Settings::resolve(args, &config)?;

            println!("Current configuration:");
            println!("  Max width: {}", settings.bounds.max_width);
            println!("  Max height: {}", settings.bounds.max_height);
            println!("  Ramp: \"{}\"", settings.ramp);
            match settings.font_ratio {
                Some(ratio) => println!("  Font ratio: {}", ratio),
                None => println!("  Font ratio: measured from terminal"),
            }
            match settings.preview {
                Some(ref path) => println!("  Preview: {}", path.display()),
                None => println!("  Preview: off"),
            }
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            config::write_default(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flags_override_config() {
        let config = Config::parse("[render]\nmax_width = 30\nfont_ratio = 1.5\n").unwrap();
        let args = Args::parse_from(["pic2ascii", "--max-width", "80", "--font-ratio", "2.0"]);
        let settings = Settings::resolve(&args, &config).unwrap();
        assert_eq!(settings.bounds, Bounds::new(80, 50).unwrap());
        assert_eq!(settings.font_ratio, Some(FontRatio::new(2.0).unwrap()));
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let config = Config::parse("[render]\nmax_height = 20\ncharset = \"minimal\"\n").unwrap();
        let args = Args::parse_from(["pic2ascii"]);
        let settings = Settings::resolve(&args, &config).unwrap();
        assert_eq!(settings.bounds, Bounds::new(50, 20).unwrap());
        assert_eq!(settings.ramp, CharSet::Minimal.ramp());
        assert!(settings.font_ratio.is_none());
    }

    #[test]
    fn test_ramp_flag_beats_charset_flag() {
        let args = Args::parse_from(["pic2ascii", "--charset", "blocks", "--ramp", "X-"]);
        let settings = Settings::resolve(&args, &Config::default()).unwrap();
        assert_eq!(settings.ramp.to_string(), "X-");
    }

    #[test]
    fn test_short_ramp_flag_is_invalid() {
        let args = Args::parse_from(["pic2ascii", "--ramp", "X"]);
        let err = Settings::resolve(&args, &Config::default()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidInput(_)));
    }

    #[test]
    fn test_fixed_ratio_skips_terminal() {
        let args = Args::parse_from(["pic2ascii", "--font-ratio", "1.75"]);
        let settings = Settings::resolve(&args, &Config::default()).unwrap();
        assert_eq!(settings.measure_ratio().unwrap().get(), 1.75);
    }

    /// Write an opaque black PNG and an empty config file into `dir`.
    fn convert_args(dir: &Path, preview: &Path) -> Args {
        let source = dir.join("black.png");
        image::RgbaImage::from_pixel(8, 4, image::Rgba([0, 0, 0, 255]))
            .save(&source)
            .unwrap();
        let config = dir.join("config.toml");
        std::fs::write(&config, "").unwrap();

        let argv: Vec<std::ffi::OsString> = vec![
            "pic2ascii".into(),
            source.into_os_string(),
            "--font-ratio".into(),
            "1.0".into(),
            "-o".into(),
            dir.join("out.txt").into_os_string(),
            "--preview".into(),
            preview.as_os_str().to_owned(),
            "-c".into(),
            config.into_os_string(),
        ];
        Args::parse_from(argv)
    }

    #[test]
    fn test_convert_writes_text_and_jpeg_preview() {
        let dir = tempfile::tempdir().unwrap();
        let preview = dir.path().join("gray.jpg");
        convert(&convert_args(dir.path(), &preview)).unwrap();

        let text = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert_eq!(text, "@@@@@@@@\n".repeat(4));
        let written = image::open(&preview).unwrap();
        assert_eq!((written.width(), written.height()), (8, 4));
    }

    #[test]
    fn test_convert_keeps_text_when_preview_fails() {
        let dir = tempfile::tempdir().unwrap();
        let preview = dir.path().join("missing-dir/gray.png");
        let err = convert(&convert_args(dir.path(), &preview)).unwrap_err();

        assert!(matches!(err, CliError::Render(RenderError::Image(_))));
        let text = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_environment_error_has_hint() {
        let err = CliError::from(RenderError::EnvironmentUnavailable("headless".into()));
        assert!(err.hint().unwrap().contains("--font-ratio"));
        assert!(CliError::MissingImage.hint().is_none());
    }
}
