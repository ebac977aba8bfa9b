//! Density ramps used for brightness to character mapping.

use crate::error::RenderError;

/// Standard density ramp (9 levels).
/// Characters ordered from densest (@) to sparsest (.).
pub const STANDARD_RAMP: &str = "@%#*+=-:.";

/// Block ramp (5 levels) using Unicode shade characters.
pub const BLOCKS_RAMP: &str = "█▓▒░ ";

/// Minimal ramp (4 levels).
/// Clean, less noisy look.
pub const MINIMAL_RAMP: &str = "#:. ";

/// Named ramp presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Standard density ramp (9 levels)
    #[default]
    Standard,
    /// Unicode shade blocks (5 levels)
    Blocks,
    /// Minimal ramp (4 levels)
    Minimal,
}

impl CharSet {
    /// Characters of this preset, densest first.
    pub fn chars(&self) -> &'static str {
        match self {
            CharSet::Standard => STANDARD_RAMP,
            CharSet::Blocks => BLOCKS_RAMP,
            CharSet::Minimal => MINIMAL_RAMP,
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
        }
    }

    /// Look a preset up by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "standard" => Some(CharSet::Standard),
            "blocks" => Some(CharSet::Blocks),
            "minimal" => Some(CharSet::Minimal),
            _ => None,
        }
    }

    pub fn ramp(&self) -> DensityRamp {
        DensityRamp {
            chars: self.chars().chars().collect(),
        }
    }
}

/// Ordered characters from darkest/densest to lightest/sparsest.
///
/// Always holds at least two characters, none of them control characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityRamp {
    chars: Vec<char>,
}

impl DensityRamp {
    /// Build a ramp from a string, densest character first.
    pub fn new(ramp: &str) -> Result<Self, RenderError> {
        let chars: Vec<char> = ramp.chars().collect();
        if chars.len() < 2 {
            return Err(RenderError::invalid(format!(
                "density ramp needs at least 2 characters, got {}",
                chars.len()
            )));
        }
        if let Some(c) = chars.iter().find(|c| c.is_control()) {
            return Err(RenderError::invalid(format!(
                "density ramp cannot contain control character {:?}",
                c
            )));
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Densest character.
    pub fn darkest(&self) -> char {
        self.chars[0]
    }

    /// Sparsest character.
    pub fn lightest(&self) -> char {
        self.chars[self.chars.len() - 1]
    }
}

impl Default for DensityRamp {
    fn default() -> Self {
        CharSet::Standard.ramp()
    }
}

impl std::fmt::Display for DensityRamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
