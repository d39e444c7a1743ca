//! Parser for Unicode Character Database files
//!
//! This crate turns UCD text files into typed data:
//! - Records: lazy (tag, code points, fields) triples of one file
//! - Partitioned: records converted by a caller-supplied function, split into
//!   `# @missing:` defaults and ordinary records
//! - simplify_range_data: merge-fold of adjacent, value-equal ranges
//! - BreakTestCase: reference boundary tests such as `GraphemeBreakTest.txt`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod emoji;
pub mod ingest;
pub mod record;
pub mod simplify;

pub use break_test::{parse_break_tests, parse_break_tests_str, BreakTestCase};
pub use emoji::emoji_age;
pub use ingest::{ingest, partition_records, Partitioned};
pub use record::{parse_line, parse_records, ParseOptions, Record, Records, Tag};
pub use simplify::{simplify_range_data, simplify_ranges};
