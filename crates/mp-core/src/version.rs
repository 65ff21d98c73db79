//! Strongly-typed change-unit version identifier.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits in the canonical zero-padded rendering.
pub const VERSION_WIDTH: usize = 3;

/// Highest representable version number.
pub const MAX_VERSION: u16 = 999;

/// Fixed-width numeric version of a change-unit (`"000"`..`"999"`).
///
/// Ordering is numeric, so version sequences compare the same way whether
/// sorted as numbers or as their zero-padded file-name prefixes. `Display`
/// always re-pads to [`VERSION_WIDTH`] digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version(u16);

impl Version {
    /// Create a new `Version` from a raw number.
    pub fn new(number: u16) -> CoreResult<Self> {
        if number > MAX_VERSION {
            return Err(CoreError::InvalidVersion {
                raw: number.to_string(),
                reason: format!("must be at most {MAX_VERSION}"),
            });
        }
        Ok(Self(number))
    }

    /// Parse the fixed-width form: exactly [`VERSION_WIDTH`] ASCII digits.
    pub fn parse(raw: &str) -> CoreResult<Self> {
        if raw.len() != VERSION_WIDTH {
            return Err(CoreError::InvalidVersion {
                raw: raw.to_string(),
                reason: format!("must be exactly {VERSION_WIDTH} digits"),
            });
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidVersion {
                raw: raw.to_string(),
                reason: "must contain only ASCII digits".to_string(),
            });
        }
        // Three digits always fit in u16.
        let number: u16 = raw.parse().map_err(|_| CoreError::InvalidVersion {
            raw: raw.to_string(),
            reason: "not a number".to_string(),
        })?;
        Ok(Self(number))
    }

    /// Return the raw version number.
    pub fn number(&self) -> u16 {
        self.0
    }

    /// The next version in the sequence, or `VersionOverflow` past the maximum.
    pub fn next(&self) -> CoreResult<Self> {
        if self.0 >= MAX_VERSION {
            return Err(CoreError::VersionOverflow {
                last: self.to_string(),
            });
        }
        Ok(Self(self.0 + 1))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = VERSION_WIDTH)
    }
}

impl FromStr for Version {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = CoreError;

    fn try_from(s: String) -> CoreResult<Self> {
        Self::parse(&s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.to_string()
    }
}

#[cfg(test)]
#[path = "version_test.rs"]
mod tests;
