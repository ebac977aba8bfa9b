//! CLI enum types.

use clap::ValueEnum;

use crate::ascii;

/// Density ramp preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Standard,
    Blocks,
    Minimal,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
            CharacterSet::Minimal => ascii::CharSet::Minimal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_conversion() {
        assert_eq!(ascii::CharSet::from(CharacterSet::Standard), ascii::CharSet::Standard);
        assert_eq!(ascii::CharSet::from(CharacterSet::Blocks), ascii::CharSet::Blocks);
        assert_eq!(ascii::CharSet::from(CharacterSet::Minimal), ascii::CharSet::Minimal);
    }
}
