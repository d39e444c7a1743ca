//! Core types for the Unicode database
//!
//! This crate defines the foundational types used throughout the system:
//! - CodePoint, CodePointRange, CodePointSequence: validated code point values
//! - CodePoints: the key of a parsed UCD record
//! - CodePointSet: normalized set of code points, the result of queries
//! - Version: UCD and emoji version numbers
//! - Property model: binary properties, enumerated property values, predicates
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

#[doc(hidden)]
pub use regex_lite;

/// A lazily compiled, process-wide regular expression for a literal pattern
#[macro_export]
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: ::std::sync::OnceLock<$crate::regex_lite::Regex> = ::std::sync::OnceLock::new();
        RE.get_or_init(|| $crate::regex_lite::Regex::new($re).unwrap())
    }};
}

pub mod codepoint;
pub mod error;
pub mod property;
pub mod set;
pub mod version;

pub use codepoint::{codepoints_to_ranges, CodePoint, CodePointRange, CodePointSequence, CodePoints};
pub use error::{Error, FormatError, Result, VersionError};
pub use property::{
    Age, BinaryProperty, Block, CanonicalCombiningClass, ComplexProperty, EastAsianWidth,
    GeneralCategory, GraphemeClusterBreak, IndicConjunctBreak, IndicSyllabicCategory, Predicate,
    PropertyValue, Script,
};
pub use set::CodePointSet;
pub use version::{Version, FIRST_SUPPORTED_VERSION, KNOWN_EMOJI_VERSIONS, KNOWN_UCD_VERSIONS};
