//! Queries over Unicode properties
//!
//! This crate provides:
//! - Query: an immutable expression tree over property predicates
//! - Builders `and_of`, `or_of`, `sub_of`, `not_of`, plus `& | - !` sugar
//! - One-pass symbolic simplification
//! - PropertySource trait for materializing queries against a database
//!
//! # Usage
//!
//! ```ignore
//! use ucdb_core::{BinaryProperty, EastAsianWidth};
//! use ucdb_query::{and_of, Query};
//!
//! let ambiguous_pictographs = and_of([
//!     Query::from(EastAsianWidth::Ambiguous),
//!     Query::from(BinaryProperty::Extended_Pictographic),
//! ]);
//! let set = ambiguous_pictographs.simplify().materialize(&db)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod expr;
pub mod source;

pub use expr::{and_of, not_of, or_of, sub_of, Operator, Query};
pub use source::PropertySource;
