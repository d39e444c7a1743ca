//! Unicode character database engine
//!
//! This crate turns a mirrored UCD version into answers:
//! - Database: configuration, lazy preparation, lookups, optimization
//! - RangeTable / RangeList: sorted range data with bisecting lookup
//! - UcdData: every table ingested for one UCD version
//! - Names: character names, including derived ideograph and Hangul names
//! - EmojiSequences: emoji sequences with names and emoji ages
//! - Widths: the fixed-width heuristic of terminal emulators
//! - Grapheme clusters: break classes and a boundary state machine
//!
//! The engine is the only component that knows about:
//! - Which file holds which property
//! - Per-version quirks of the data files
//! - The mapping from data to grapheme cluster break classes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod character;
pub mod data;
pub mod database;
pub mod emoji;
pub mod grapheme;
pub mod names;
pub mod selection;
pub mod tables;
pub mod width;

pub use character::CharacterData;
pub use data::{PropertyId, UcdData};
pub use database::{Database, DatabaseConfig, CONFIG_FILE_NAME};
pub use emoji::{EmojiSequence, EmojiSequences};
pub use grapheme::{grapheme_breaks, BreakClass, BreakState};
pub use names::Names;
pub use selection::Selection;
pub use tables::{RangeList, RangeTable};
pub use width::{fixed_width, WidthProperties};
