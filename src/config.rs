//! Configuration file handling for pic2ascii.
//!
//! Loads configuration from `~/.config/pic2ascii/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{Bounds, CharSet, DensityRamp, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
use crate::error::RenderError;
use crate::font::FontRatio;

/// Configuration file structure for pic2ascii.
/// Loaded from ~/.config/pic2ascii/config.toml (or custom path via --config).
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_max_width")]
    pub max_width: u32,
    #[serde(default = "default_max_height")]
    pub max_height: u32,
    /// Preset name: standard, blocks, minimal
    #[serde(default)]
    pub charset: Option<String>,
    /// Custom ramp, densest first; wins over `charset`
    #[serde(default)]
    pub ramp: Option<String>,
    /// Fixed font ratio; measured from the terminal when unset
    #[serde(default)]
    pub font_ratio: Option<f64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            charset: None,
            ramp: None,
            font_ratio: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct OutputConfig {
    /// Where to write the grayscale preview image
    #[serde(default)]
    pub preview: Option<PathBuf>,
}

fn default_max_width() -> u32 {
    DEFAULT_MAX_WIDTH
}

fn default_max_height() -> u32 {
    DEFAULT_MAX_HEIGHT
}

impl Config {
    /// Load configuration from a file path.
    ///
    /// With no explicit path, a missing default file yields the default
    /// config. An explicit path that does not exist is an error, as is any
    /// file that exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path.is_some();
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("loaded config from {}", path.display());
            Ok(config)
        } else if explicit {
            Err(ConfigError::NotFound { path })
        } else {
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Output bounds from the `[render]` section.
    pub fn bounds(&self) -> Result<Bounds, RenderError> {
        Bounds::new(self.render.max_width, self.render.max_height)
    }

    /// Density ramp: the custom `ramp` if set, else the `charset` preset.
    pub fn ramp(&self) -> Result<DensityRamp, RenderError> {
        if let Some(ref ramp) = self.render.ramp {
            return DensityRamp::new(ramp);
        }
        match self.render.charset {
            Some(ref name) => CharSet::from_name(name)
                .map(|cs| cs.ramp())
                .ok_or_else(|| RenderError::invalid(format!("unknown charset '{}'", name))),
            None => Ok(DensityRamp::default()),
        }
    }

    /// Configured font ratio, if any.
    pub fn font_ratio(&self) -> Result<Option<FontRatio>, RenderError> {
        self.render.font_ratio.map(FontRatio::new).transpose()
    }
}

/// Commented default configuration written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# pic2ascii configuration

[render]
# Maximum output size in characters
max_width = 50
max_height = 50
# Character set: standard, blocks, minimal
charset = "standard"
# Custom density ramp, densest character first (overrides charset)
# ramp = "@%#*+=-:."
# Glyph height / width of your terminal font.
# Measured from the terminal when unset.
# font_ratio = 2.0

[output]
# Also write a grayscale preview image
# preview = "preview.png"
"#;

/// Write the default configuration, refusing to overwrite an existing file.
pub fn write_default(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!("wrote default config to {}", path.display());
    Ok(())
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    NotFound {
        path: PathBuf,
    },
    AlreadyExists {
        path: PathBuf,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to access config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::NotFound { path } => {
                write!(f, "Config file not found: {}", path.display())
            }
            ConfigError::AlreadyExists { path } => {
                write!(f, "Config file already exists: {}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::NotFound { .. } | ConfigError::AlreadyExists { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("pic2ascii").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/pic2ascii/config.toml")
        })
}
