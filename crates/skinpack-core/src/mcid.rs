//! Minecraft player name (MCID) validation.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::error::SkinpackError;

static MCID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{3,16}$").expect("MCID pattern compiles"));

/// A validated player name: 3-16 ASCII letters, digits or underscores, case preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate raw input. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, SkinpackError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(SkinpackError::EmptyInput);
        }
        if !MCID_RE.is_match(name) {
            return Err(SkinpackError::InvalidFormat);
        }
        Ok(Username(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
