//! Error types for the Unicode database
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The taxonomy has three families callers are expected to distinguish:
//! - [`VersionError`]: a version is malformed, unknown, unsupported or not yet released
//! - [`FormatError`]: a code point literal or a UCD file record is malformed
//! - [`Error::Transport`]: the network layer failed; the source is kept as-is
//!
//! Broken internal invariants are not errors. They are checked with assertions.

use crate::version::Version;
use std::io;
use thiserror::Error;

/// Result type alias for database operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error of a failed network request
pub type TransportSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types for the Unicode database
#[derive(Debug, Error)]
pub enum Error {
    /// Version is malformed, unsupported or not yet released
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// Code point literal or file record is malformed
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Value cannot be represented as the requested shape
    #[error("Cannot convert {value} to {target}")]
    Conversion {
        /// Display form of the value
        value: String,
        /// Name of the target shape
        target: &'static str,
    },

    /// Network request failed
    #[error("Transport error for {url}: {source}")]
    Transport {
        /// Requested URL
        url: String,
        /// Error reported by the transport
        #[source]
        source: TransportSource,
    },

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File is not part of the mirrored UCD file set
    #[error("Not a supported UCD file: {0}")]
    UnsupportedFile(String),

    /// Invalid operation for the current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Versioning errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Text is not a version number
    #[error("\"{0}\" is not a valid version")]
    Malformed(String),

    /// Version is neither a known release nor after the latest known release
    #[error("{0} is not a known Unicode version")]
    Unknown(Version),

    /// Version predates the oldest supported release
    #[error("{0} is before the oldest supported version 4.1")]
    Unsupported(Version),

    /// Version is after the latest published release
    #[error("{version} has not been released yet; latest version is {latest}")]
    Unreleased {
        /// Requested version
        version: Version,
        /// Latest published version
        latest: Version,
    },

    /// Mirrored components disagree on their version
    #[error("Inconsistent versions for {component}: {first} vs {second}")]
    Inconsistent {
        /// Component name
        component: String,
        /// First version seen
        first: String,
        /// Conflicting version
        second: String,
    },
}

/// Format errors for code point literals and UCD file records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Text is not a code point literal
    #[error("\"{text}\" is not a valid code point literal ({codepoints})")]
    InvalidCodePoint {
        /// Offending text
        text: String,
        /// Code points of the offending text, as `U+XXXX` list
        codepoints: String,
    },

    /// Integer is outside the Unicode scalar range
    #[error("0x{0:X} is outside the code point range 0..=0x10FFFF")]
    OutOfRange(u32),

    /// Sequence has no code points
    #[error("Code point sequence must not be empty")]
    EmptySequence,

    /// Range start is after its stop
    #[error("Range start U+{start:04X} is after stop U+{stop:04X}")]
    InvalidRange {
        /// Range start
        start: u32,
        /// Range stop
        stop: u32,
    },

    /// Line of a UCD file cannot be parsed
    #[error("Malformed record \"{line}\"")]
    MalformedRecord {
        /// Offending line
        line: String,
    },

    /// Property value is not a known value of the property
    #[error("\"{value}\" is not a value of {property}")]
    UnknownValue {
        /// Property name
        property: &'static str,
        /// Offending value
        value: String,
    },

    /// "First" record of a large range is not followed by its "Last" record
    #[error("Unpaired range record at U+{codepoint:04X} ({label})")]
    UnpairedRange {
        /// Code point of the offending record
        codepoint: u32,
        /// Name field of the offending record
        label: String,
    },

    /// Default declaration has the wrong number of values
    #[error("Default declaration has {actual} values, expected {expected}")]
    DefaultCardinality {
        /// Expected number of values
        expected: usize,
        /// Actual number of values
        actual: usize,
    },
}

impl Error {
    /// Wrap a transport failure for `url`
    pub fn transport<E>(url: impl Into<String>, source: E) -> Self
    where
        E: Into<TransportSource>,
    {
        Error::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Check whether this is a versioning error
    pub fn is_version(&self) -> bool {
        matches!(self, Error::Version(_))
    }

    /// Check whether this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}

impl From<std::fmt::Error> for Error {
    fn from(e: std::fmt::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
