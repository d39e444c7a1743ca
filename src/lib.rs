//! ucdb - versioned Unicode character database
//!
//! ucdb answers questions about code points for any Unicode version from 4.1
//! onward. It keeps a local mirror of the official UCD files, ingests the
//! files of the requested version into range tables, and looks up properties,
//! display widths and grapheme cluster boundaries.
//!
//! # Quick Start
//!
//! ```ignore
//! use ucdb::{and_of, BinaryProperty, CodePoint, Database, DatabaseConfig, Query};
//!
//! // Latest version, mirrored in the per-user cache directory
//! let db = Database::with_config(DatabaseConfig::default());
//!
//! let data = db.lookup(CodePoint::new(0x23)?)?;
//! println!("{data}"); // U+0023 Po NUMBER SIGN
//!
//! let pictographs = and_of([
//!     Query::from(BinaryProperty::Emoji),
//!     Query::from(BinaryProperty::Extended_Pictographic),
//! ]) - BinaryProperty::Emoji_Component;
//! let set = pictographs.simplify().materialize(&db)?;
//! ```
//!
//! # Architecture
//!
//! - `ucdb-core`: code points, sets, versions, property model, errors
//! - `ucdb-parser`: UCD file records and default declarations
//! - `ucdb-mirror`: local mirror of unicode.org with a manifest
//! - `ucdb-engine`: the [`Database`] facade
//! - `ucdb-query`: set algebra over property predicates

pub use ucdb_core::{
    Age, BinaryProperty, Block, CanonicalCombiningClass, CodePoint, CodePointRange,
    CodePointSequence, CodePointSet, CodePoints, ComplexProperty, EastAsianWidth, Error,
    FormatError, GeneralCategory, GraphemeClusterBreak, IndicConjunctBreak,
    IndicSyllabicCategory, Predicate, Result, Script, Version, VersionError,
};
pub use ucdb_engine::{
    BreakClass, CharacterData, Database, DatabaseConfig, EmojiSequence, PropertyId, Selection,
    CONFIG_FILE_NAME,
};
pub use ucdb_mirror::{
    Annotations, Cldr, HttpTransport, Mirror, MirrorConfig, OfflineTransport, Transport,
};
pub use ucdb_query::{and_of, not_of, or_of, sub_of, Operator, PropertySource, Query};

/// Curated selections of code points
pub mod selection {
    pub use ucdb_engine::selection::*;
}
