use crate::error::{BytewordsError, Result};
use crate::wordlist::{MINIMAL_WORD_LENGTH, WORD_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation style for encoded text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Full words separated by spaces
    #[default]
    Standard,
    /// Full words separated by hyphens
    Uri,
    /// First and last letters only, no separator
    Minimal,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Standard, Style::Uri, Style::Minimal];

    /// Separator between tokens, or None for the minimal style
    pub fn separator(self) -> Option<char> {
        match self {
            Self::Standard => Some(' '),
            Self::Uri => Some('-'),
            Self::Minimal => None,
        }
    }

    /// Characters per token
    pub fn word_length(self) -> usize {
        match self {
            Self::Standard | Self::Uri => WORD_LENGTH,
            Self::Minimal => MINIMAL_WORD_LENGTH,
        }
    }

    /// Whether tokens are full 4-letter words
    pub fn uses_full_words(self) -> bool {
        self.word_length() == WORD_LENGTH
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Uri => "uri",
            Self::Minimal => "minimal",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Style {
    type Err = BytewordsError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "uri" => Ok(Self::Uri),
            "minimal" => Ok(Self::Minimal),
            _ => Err(BytewordsError::InvalidStyle(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_table() {
        assert_eq!(Style::Standard.separator(), Some(' '));
        assert_eq!(Style::Uri.separator(), Some('-'));
        assert_eq!(Style::Minimal.separator(), None);

        assert_eq!(Style::Standard.word_length(), 4);
        assert_eq!(Style::Uri.word_length(), 4);
        assert_eq!(Style::Minimal.word_length(), 2);

        assert!(Style::Uri.uses_full_words());
        assert!(!Style::Minimal.uses_full_words());
    }

    #[test]
    fn test_parse_style() {
        assert_eq!("standard".parse::<Style>().unwrap(), Style::Standard);
        assert_eq!("URI".parse::<Style>().unwrap(), Style::Uri);
        assert_eq!(" minimal ".parse::<Style>().unwrap(), Style::Minimal);
    }

    #[test]
    fn test_parse_unknown_style() {
        let err = "compact".parse::<Style>().unwrap_err();
        assert!(matches!(err, BytewordsError::InvalidStyle(ref s) if s == "compact"));
    }

    #[test]
    fn test_display_roundtrip() {
        for style in Style::ALL {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Style::Uri).unwrap(), "\"uri\"");
        let parsed: Style = serde_json::from_str("\"minimal\"").unwrap();
        assert_eq!(parsed, Style::Minimal);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(Style::default(), Style::Standard);
    }
}
