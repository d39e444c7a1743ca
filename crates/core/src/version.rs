//! Unicode and emoji version numbers
//!
//! UCD and emoji versions are numbered independently until they align at 11.0.
//! [`Version::to_emoji`] converts a UCD version into the emoji version that
//! shipped alongside it.

use crate::error::{Result, VersionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A version number with three components
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    /// Major component
    pub major: u16,
    /// Minor component
    pub minor: u16,
    /// Patch component
    pub patch: u16,
}

/// Oldest UCD version the database can ingest
pub const FIRST_SUPPORTED_VERSION: Version = Version::new(4, 1, 0);

/// Published UCD versions, oldest first
pub const KNOWN_UCD_VERSIONS: &[Version] = &[
    Version::new(1, 1, 0),
    Version::new(2, 0, 0),
    Version::new(2, 1, 0),
    Version::new(3, 0, 0),
    Version::new(3, 1, 0),
    Version::new(3, 2, 0),
    Version::new(4, 0, 0),
    Version::new(4, 1, 0),
    Version::new(5, 0, 0),
    Version::new(5, 1, 0),
    Version::new(5, 2, 0),
    Version::new(6, 0, 0),
    Version::new(6, 1, 0),
    Version::new(6, 2, 0),
    Version::new(6, 3, 0),
    Version::new(7, 0, 0),
    Version::new(8, 0, 0),
    Version::new(9, 0, 0),
    Version::new(10, 0, 0),
    Version::new(11, 0, 0),
    Version::new(12, 0, 0),
    Version::new(12, 1, 0),
    Version::new(13, 0, 0),
    Version::new(14, 0, 0),
    Version::new(15, 0, 0),
    Version::new(15, 1, 0),
];

/// Published emoji versions, oldest first
///
/// 0.0, 0.6 and 0.7 label the UCD releases before emoji data had files of its own.
pub const KNOWN_EMOJI_VERSIONS: &[Version] = &[
    Version::new(0, 0, 0),
    Version::new(0, 6, 0),
    Version::new(0, 7, 0),
    Version::new(1, 0, 0),
    Version::new(2, 0, 0),
    Version::new(3, 0, 0),
    Version::new(4, 0, 0),
    Version::new(5, 0, 0),
    Version::new(11, 0, 0),
    Version::new(12, 0, 0),
    Version::new(12, 1, 0),
    Version::new(13, 0, 0),
    Version::new(13, 1, 0),
    Version::new(14, 0, 0),
    Version::new(15, 0, 0),
    Version::new(15, 1, 0),
];

fn last(versions: &[Version]) -> Version {
    versions.last().copied().unwrap_or(FIRST_SUPPORTED_VERSION)
}

impl Version {
    /// Create a version
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version with at most three components, padding missing ones with zero
    pub fn parse(text: &str) -> Result<Self> {
        let malformed = || VersionError::Malformed(text.to_string());

        let components = text
            .trim()
            .split('.')
            .map(|c| c.parse::<u16>().map_err(|_| malformed()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        match components.as_slice() {
            [major] => Ok(Version::new(*major, 0, 0)),
            [major, minor] => Ok(Version::new(*major, *minor, 0)),
            [major, minor, patch] => Ok(Version::new(*major, *minor, *patch)),
            _ => Err(malformed().into()),
        }
    }

    /// Check for a known UCD version or one after the latest known version
    pub fn is_ucd(&self) -> bool {
        KNOWN_UCD_VERSIONS.contains(self) || *self > last(KNOWN_UCD_VERSIONS)
    }

    /// Check for a UCD version the database can ingest
    pub fn is_supported_ucd(&self) -> bool {
        self.is_ucd() && *self >= FIRST_SUPPORTED_VERSION
    }

    /// Check for a known emoji version or one after the latest known version
    pub fn is_emoji(&self) -> bool {
        KNOWN_EMOJI_VERSIONS.contains(self) || *self > last(KNOWN_EMOJI_VERSIONS)
    }

    /// Fail unless this is a supported UCD version
    pub fn validate_ucd(self) -> Result<Self> {
        if !self.is_ucd() {
            Err(VersionError::Unknown(self).into())
        } else if self < FIRST_SUPPORTED_VERSION {
            Err(VersionError::Unsupported(self).into())
        } else {
            Ok(self)
        }
    }

    /// Emoji version corresponding to this UCD version
    pub fn to_emoji(&self) -> Version {
        match self.major {
            0..=5 => Version::new(0, 0, 0),
            6 => Version::new(0, 6, 0),
            7 => Version::new(0, 7, 0),
            8..=10 => Version::new(1 + 2 * (self.major - 8), 0, 0),
            13 => Version::new(13, 0, 0),
            _ => *self,
        }
    }

    /// Format as `major.minor`
    pub fn short_format(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// Format as `Emajor.minor`, the notation of emoji data comments
    pub fn emoji_format(&self) -> String {
        format!("E{}.{}", self.major, self.minor)
    }

    /// Supported UCD versions, oldest first
    pub fn all_supported() -> impl Iterator<Item = Version> {
        KNOWN_UCD_VERSIONS
            .iter()
            .copied()
            .filter(|v| *v >= FIRST_SUPPORTED_VERSION)
    }

    /// Latest known UCD version
    pub fn latest_known() -> Version {
        last(KNOWN_UCD_VERSIONS)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version({self})")
    }
}

impl FromStr for Version {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = crate::error::Error;

    fn try_from(s: String) -> Result<Self> {
        Version::parse(&s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.to_string()
    }
}
