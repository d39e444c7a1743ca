//! Separating default declarations from records

use crate::record::{ParseOptions, Record, Records, Tag};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;
use ucdb_core::{CodePoints, Result};

/// Converted records of one file, split by tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioned<T> {
    /// Converted `# @missing:` declarations
    pub defaults: Vec<T>,
    /// Converted ordinary records
    pub records: Vec<T>,
}

impl<T> Default for Partitioned<T> {
    fn default() -> Self {
        Partitioned {
            defaults: Vec::new(),
            records: Vec::new(),
        }
    }
}

/// Convert records and split them into defaults and ordinary records
///
/// `intern` converts the key and fields of each record into the caller's
/// representation. Returning `Ok(None)` drops the record, which is how callers
/// pick one property out of a multi-property file.
pub fn partition_records<I, T, F>(records: I, mut intern: F) -> Result<Partitioned<T>>
where
    I: IntoIterator<Item = Result<Record>>,
    F: FnMut(CodePoints, Vec<String>) -> Result<Option<T>>,
{
    let mut result = Partitioned::default();
    for record in records {
        let Record {
            tag,
            codepoints,
            fields,
        } = record?;
        let Some(value) = intern(codepoints, fields)? else {
            continue;
        };
        match tag {
            Tag::Default => result.defaults.push(value),
            Tag::Record => result.records.push(value),
        }
    }
    Ok(result)
}

/// Read, parse and partition a UCD file
pub fn ingest<T, F>(path: &Path, options: ParseOptions, intern: F) -> Result<Partitioned<T>>
where
    F: FnMut(CodePoints, Vec<String>) -> Result<Option<T>>,
{
    let file = File::open(path)?;
    let records = Records::new(BufReader::new(file).lines(), options);
    let result = partition_records(records, intern)?;
    debug!(
        target: "ucdb::parser",
        path = %path.display(),
        defaults = result.defaults.len(),
        records = result.records.len(),
        "Ingested UCD file"
    );
    Ok(result)
}
