//! Output text encodings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};

/// Output charset for the delivered document body.
///
/// Characters with no representation in the target charset are replaced
/// with `?` rather than failing delivery mid-body; an unknown charset name
/// is rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    /// UTF-8, the default.
    #[default]
    Utf8,
    /// US-ASCII.
    Ascii,
    /// ISO-8859-1.
    Latin1,
}

impl Encoding {
    /// Resolve a charset name, accepting the common aliases
    /// case-insensitively.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "us-ascii" | "ascii" => Ok(Self::Ascii),
            "iso-8859-1" | "latin-1" | "latin1" => Ok(Self::Latin1),
            _ => Err(ExportError::unsupported_encoding(name)),
        }
    }

    /// Canonical charset name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Ascii => "US-ASCII",
            Self::Latin1 => "ISO-8859-1",
        }
    }

    /// Encode text into this charset, substituting `?` for unmappable
    /// characters.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Ascii => text
                .chars()
                .map(|ch| if ch.is_ascii() { ch as u8 } else { b'?' })
                .collect(),
            Self::Latin1 => text
                .chars()
                .map(|ch| if (ch as u32) <= 0xFF { ch as u8 } else { b'?' })
                .collect(),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Encoding {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
