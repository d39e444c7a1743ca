//! Line-oriented records of UCD files
//!
//! A UCD file is a sequence of lines. Each data line holds semicolon-separated
//! fields followed by an optional `#` comment:
//!
//! ```text
//! 0023          ; Emoji                # E0.0   [1] (#️)       hash sign
//! 1F1E6..1F1FF  ; Emoji_Component      # E0.0  [26] (🇦..🇿)    regional indicator
//! # @missing: 0000..10FFFF; Unknown
//! # EOF
//! ```
//!
//! Lines starting with `# @missing:` declare defaults. A line starting with
//! `# EOF` ends the file. All other comment lines and blank lines are skipped.

use std::io;
use ucdb_core::{CodePoint, CodePointRange, CodePointSequence, CodePoints, FormatError, Result};

const EOF_MARKER: &str = "# EOF";
const MISSING_MARKER: &str = "# @missing:";

/// Kind of record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `# @missing:` default declaration
    Default,
    /// Ordinary data line
    Record,
}

/// A parsed line with its fields still as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Default declaration or ordinary record
    pub tag: Tag,
    /// Key of the record; [`CodePoint::MIN`] for files without code points
    pub codepoints: CodePoints,
    /// Remaining fields, whitespace-trimmed; empty fields stay empty strings
    pub fields: Vec<String>,
}

/// How to split a line into key and fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Parse the first field as code points
    pub with_codepoints: bool,
    /// Append the comment as an extra last field
    pub with_comment: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            with_codepoints: true,
            with_comment: false,
        }
    }
}

impl ParseOptions {
    /// Options for files whose first field is not a code point
    pub fn without_codepoints() -> Self {
        ParseOptions {
            with_codepoints: false,
            with_comment: false,
        }
    }

    /// Options that keep the comment as the last field
    pub fn with_comment() -> Self {
        ParseOptions {
            with_codepoints: true,
            with_comment: true,
        }
    }
}

fn malformed(line: &str) -> ucdb_core::Error {
    FormatError::MalformedRecord {
        line: line.to_string(),
    }
    .into()
}

fn parse_codepoints(field: &str, line: &str) -> Result<CodePoints> {
    let tokens: Vec<&str> = field.split_whitespace().collect();
    let parse = |text: &str| CodePoint::parse(text).map_err(|_| malformed(line));

    match tokens.as_slice() {
        [] => Err(malformed(line)),
        [single] => match single.split_once("..") {
            Some((start, stop)) => {
                let range = CodePointRange::new(parse(start)?, parse(stop)?)
                    .map_err(|_| malformed(line))?;
                Ok(CodePoints::Range(range))
            }
            None => Ok(CodePoints::Point(parse(single)?)),
        },
        many => {
            let codepoints = many.iter().map(|t| parse(t)).collect::<Result<Vec<_>>>()?;
            Ok(CodePoints::Sequence(CodePointSequence::new(codepoints)?))
        }
    }
}

/// Parse one data line, without its tag
pub fn parse_line(line: &str, options: ParseOptions) -> Result<(CodePoints, Vec<String>)> {
    let (data, comment) = match line.split_once('#') {
        Some((data, comment)) => (data, Some(comment)),
        None => (line, None),
    };

    let mut fields: Vec<String> = data.trim().split(';').map(|f| f.trim().to_string()).collect();
    if options.with_comment {
        fields.push(comment.unwrap_or("").trim().to_string());
    }
    if !options.with_codepoints {
        return Ok((CodePoints::Point(CodePoint::MIN), fields));
    }

    let key = fields.remove(0);
    Ok((parse_codepoints(&key, line)?, fields))
}

/// Lazy iterator over the records of a UCD file
///
/// Stops after the first error.
pub struct Records<I> {
    lines: I,
    options: ParseOptions,
    done: bool,
}

impl<I> Records<I> {
    /// Wrap an iterator over lines
    pub fn new(lines: I, options: ParseOptions) -> Self {
        Records {
            lines,
            options,
            done: false,
        }
    }
}

impl<I, S> Iterator for Records<I>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            };
            let line = line.as_ref();

            let (tag, body) = if line.trim().is_empty() {
                continue;
            } else if line.starts_with(EOF_MARKER) {
                self.done = true;
                return None;
            } else if let Some(body) = line.strip_prefix(MISSING_MARKER) {
                (Tag::Default, body.trim())
            } else if line.starts_with('#') {
                continue;
            } else {
                (Tag::Record, line)
            };

            let result = parse_line(body, self.options).map(|(codepoints, fields)| Record {
                tag,
                codepoints,
                fields,
            });
            if result.is_err() {
                self.done = true;
            }
            return Some(result);
        }
        None
    }
}

/// Parse the records of a UCD file held in memory
pub fn parse_records(text: &str, options: ParseOptions) -> Records<impl Iterator<Item = io::Result<&str>>> {
    Records::new(text.lines().map(Ok), options)
}
