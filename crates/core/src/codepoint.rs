//! Code points, ranges of code points, and sequences of code points
//!
//! All three are immutable values with validated bounds:
//! - [`CodePoint`]: a scalar in `0..=0x10FFFF` (surrogates included, as in the UCD)
//! - [`CodePointRange`]: a closed, non-empty range `start..=stop`
//! - [`CodePointSequence`]: a non-empty list, e.g. an emoji ZWJ sequence
//!
//! [`CodePoints`] is the key of a parsed UCD record and may hold any of the three.

use crate::error::{Error, FormatError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CodePoint
// =============================================================================

/// A Unicode code point
///
/// Surrogates are valid code points here, since the UCD assigns them properties.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CodePoint(u32);

impl CodePoint {
    /// Smallest code point
    pub const MIN: CodePoint = CodePoint(0);
    /// Largest code point
    pub const MAX: CodePoint = CodePoint(0x10_FFFF);

    /// U+0000 NULL
    pub const NULL: CodePoint = CodePoint(0x0000);
    /// U+007F DELETE
    pub const DELETE: CodePoint = CodePoint(0x007F);
    /// U+00A0 NO-BREAK SPACE
    pub const NO_BREAK_SPACE: CodePoint = CodePoint(0x00A0);
    /// U+00AD SOFT HYPHEN
    pub const SOFT_HYPHEN: CodePoint = CodePoint(0x00AD);
    /// U+1160 HANGUL JUNGSEONG FILLER, first conjoining vowel or trailing consonant
    pub const HANGUL_JUNGSEONG_FILLER: CodePoint = CodePoint(0x1160);
    /// U+11FF HANGUL JONGSEONG SSANGNIEUN, last conjoining vowel or trailing consonant
    pub const HANGUL_JONGSEONG_SSANGNIEUN: CodePoint = CodePoint(0x11FF);
    /// U+AC00, first precomposed Hangul syllable
    pub const HANGUL_SYLLABLE_FIRST: CodePoint = CodePoint(0xAC00);
    /// U+D7A3, last precomposed Hangul syllable
    pub const HANGUL_SYLLABLE_LAST: CodePoint = CodePoint(0xD7A3);
    /// U+200B ZERO WIDTH SPACE
    pub const ZERO_WIDTH_SPACE: CodePoint = CodePoint(0x200B);
    /// U+200D ZERO WIDTH JOINER
    pub const ZERO_WIDTH_JOINER: CodePoint = CodePoint(0x200D);
    /// U+FE0E VARIATION SELECTOR-15, requesting text presentation
    pub const TEXT_VARIATION_SELECTOR: CodePoint = CodePoint(0xFE0E);
    /// U+FE0F VARIATION SELECTOR-16, requesting emoji presentation
    pub const EMOJI_VARIATION_SELECTOR: CodePoint = CodePoint(0xFE0F);
    /// U+1F1E6 REGIONAL INDICATOR SYMBOL LETTER A
    pub const REGIONAL_INDICATOR_A: CodePoint = CodePoint(0x1_F1E6);
    /// U+1F1FF REGIONAL INDICATOR SYMBOL LETTER Z
    pub const REGIONAL_INDICATOR_Z: CodePoint = CodePoint(0x1_F1FF);

    /// Create a code point, failing outside `0..=0x10FFFF`
    pub fn new(value: u32) -> Result<Self> {
        if value <= Self::MAX.0 {
            Ok(CodePoint(value))
        } else {
            Err(FormatError::OutOfRange(value).into())
        }
    }

    /// Parse a code point literal
    ///
    /// Accepted forms:
    /// - a single character
    /// - a character followed by U+FE0E or U+FE0F, which is dropped
    /// - `U+` followed by 4 to 6 hexadecimal digits
    /// - 4 to 6 hexadecimal digits
    pub fn parse(text: &str) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        match chars.as_slice() {
            [c] => return Ok(CodePoint::from(*c)),
            [c, '\u{FE0E}' | '\u{FE0F}'] => return Ok(CodePoint::from(*c)),
            _ => {}
        }

        let digits = match text.strip_prefix("U+") {
            Some(rest) if (6..=8).contains(&chars.len()) => Some(rest),
            _ if (4..=6).contains(&chars.len()) => Some(text),
            _ => None,
        };

        if let Some(digits) = digits {
            if digits.chars().all(|c| c.is_ascii_hexdigit()) {
                if let Ok(value) = u32::from_str_radix(digits, 16) {
                    return CodePoint::new(value);
                }
            }
        }

        Err(FormatError::InvalidCodePoint {
            text: text.to_string(),
            codepoints: chars
                .iter()
                .map(|c| CodePoint::from(*c).to_string())
                .collect::<Vec<_>>()
                .join(" "),
        }
        .into())
    }

    /// Numeric value
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Character for this code point, `None` for surrogates
    #[inline]
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Next code point, `None` after [`CodePoint::MAX`]
    pub fn next(self) -> Option<CodePoint> {
        (self.0 < Self::MAX.0).then(|| CodePoint(self.0 + 1))
    }

    /// Previous code point, `None` before [`CodePoint::MIN`]
    pub fn prev(self) -> Option<CodePoint> {
        self.0.checked_sub(1).map(CodePoint)
    }

    /// Check for a regional indicator symbol letter
    pub fn is_regional_indicator(self) -> bool {
        (Self::REGIONAL_INDICATOR_A..=Self::REGIONAL_INDICATOR_Z).contains(&self)
    }

    /// Check for U+FE0E or U+FE0F
    pub fn is_presentation_selector(self) -> bool {
        self == Self::TEXT_VARIATION_SELECTOR || self == Self::EMOJI_VARIATION_SELECTOR
    }

    /// Single-point range
    pub const fn to_range(self) -> CodePointRange {
        CodePointRange {
            start: self,
            stop: self,
        }
    }

    /// Single-point sequence
    pub fn to_sequence(self) -> CodePointSequence {
        CodePointSequence(vec![self])
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

impl fmt::Debug for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for CodePoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CodePoint::parse(s)
    }
}

impl TryFrom<u32> for CodePoint {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        CodePoint::new(value)
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        CodePoint(c as u32)
    }
}

impl From<CodePoint> for u32 {
    fn from(cp: CodePoint) -> Self {
        cp.0
    }
}

// =============================================================================
// CodePointRange
// =============================================================================

/// A closed, non-empty range of code points
///
/// Ranges order by `stop` first, which is the key of the upper-bound search
/// over sorted range tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodePointRange {
    start: CodePoint,
    stop: CodePoint,
}

#[allow(clippy::len_without_is_empty)]
impl CodePointRange {
    /// The full code point range
    pub const ALL: CodePointRange = CodePointRange {
        start: CodePoint::MIN,
        stop: CodePoint::MAX,
    };

    /// Create a range, failing if `start > stop`
    pub fn new(start: CodePoint, stop: CodePoint) -> Result<Self> {
        if start <= stop {
            Ok(CodePointRange { start, stop })
        } else {
            Err(FormatError::InvalidRange {
                start: start.value(),
                stop: stop.value(),
            }
            .into())
        }
    }

    /// Create a range from two integers
    pub fn of(start: u32, stop: u32) -> Result<Self> {
        CodePointRange::new(CodePoint::new(start)?, CodePoint::new(stop)?)
    }

    /// First code point
    #[inline]
    pub const fn start(&self) -> CodePoint {
        self.start
    }

    /// Last code point
    #[inline]
    pub const fn stop(&self) -> CodePoint {
        self.stop
    }

    /// Number of code points
    #[inline]
    pub const fn len(&self) -> usize {
        (self.stop.0 - self.start.0 + 1) as usize
    }

    /// Check for a single code point
    pub fn is_singleton(&self) -> bool {
        self.start == self.stop
    }

    /// Check containment
    #[inline]
    pub fn contains(&self, cp: CodePoint) -> bool {
        self.start <= cp && cp <= self.stop
    }

    /// Check whether the two ranges overlap or are adjacent
    pub fn can_merge(&self, other: &CodePointRange) -> bool {
        // Widened so that start - 1 and stop + 1 cannot wrap.
        let (start, stop) = (i64::from(self.start.0), i64::from(self.stop.0));
        start - 1 <= i64::from(other.stop.0) && i64::from(other.start.0) <= stop + 1
    }

    /// Smallest range enclosing both, if they overlap or are adjacent
    pub fn merge(&self, other: &CodePointRange) -> Option<CodePointRange> {
        self.can_merge(other).then(|| CodePointRange {
            start: self.start.min(other.start),
            stop: self.stop.max(other.stop),
        })
    }

    /// The only code point of a single-point range
    pub fn to_singleton(&self) -> Result<CodePoint> {
        if self.is_singleton() {
            Ok(self.start)
        } else {
            Err(Error::Conversion {
                value: self.to_string(),
                target: "code point",
            })
        }
    }

    /// Single-point sequence of a single-point range
    pub fn to_sequence(&self) -> Result<CodePointSequence> {
        if self.is_singleton() {
            Ok(self.start.to_sequence())
        } else {
            Err(Error::Conversion {
                value: self.to_string(),
                target: "sequence",
            })
        }
    }

    /// Iterate over the code points in order
    pub fn codepoints(&self) -> impl DoubleEndedIterator<Item = CodePoint> + Clone {
        (self.start.0..=self.stop.0).map(CodePoint)
    }
}

impl Ord for CodePointRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.stop
            .cmp(&other.stop)
            .then_with(|| self.start.cmp(&other.start))
    }
}

impl PartialOrd for CodePointRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<CodePoint> for CodePointRange {
    fn from(cp: CodePoint) -> Self {
        cp.to_range()
    }
}

impl fmt::Display for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.stop)
    }
}

impl fmt::Debug for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// =============================================================================
// CodePointSequence
// =============================================================================

/// A non-empty sequence of code points
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<CodePoint>", into = "Vec<CodePoint>")]
pub struct CodePointSequence(Vec<CodePoint>);

#[allow(clippy::len_without_is_empty)]
impl CodePointSequence {
    /// Create a sequence, failing on empty input
    pub fn new(codepoints: Vec<CodePoint>) -> Result<Self> {
        if codepoints.is_empty() {
            Err(FormatError::EmptySequence.into())
        } else {
            Ok(CodePointSequence(codepoints))
        }
    }

    /// Parse whitespace-separated code point literals
    pub fn parse(text: &str) -> Result<Self> {
        let codepoints = text
            .split_whitespace()
            .map(CodePoint::parse)
            .collect::<Result<Vec<_>>>()?;
        CodePointSequence::new(codepoints)
    }

    /// Sequence of the characters of `text`
    pub fn from_text(text: &str) -> Result<Self> {
        CodePointSequence::new(text.chars().map(CodePoint::from).collect())
    }

    /// Number of code points
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First code point
    pub fn head(&self) -> CodePoint {
        self.0[0]
    }

    /// Code points as a slice
    pub fn as_slice(&self) -> &[CodePoint] {
        &self.0
    }

    /// Iterate over the code points
    pub fn iter(&self) -> std::slice::Iter<'_, CodePoint> {
        self.0.iter()
    }

    /// Check for a single code point
    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    /// The only code point of a single-point sequence
    pub fn to_singleton(&self) -> Result<CodePoint> {
        if self.is_singleton() {
            Ok(self.0[0])
        } else {
            Err(Error::Conversion {
                value: self.to_string(),
                target: "code point",
            })
        }
    }

    /// Single-point range of a single-point sequence
    pub fn to_range(&self) -> Result<CodePointRange> {
        self.to_singleton()
            .map(CodePoint::to_range)
            .map_err(|_| Error::Conversion {
                value: self.to_string(),
                target: "range",
            })
    }

    /// Text of the sequence, with surrogates replaced by U+FFFD
    pub fn to_text(&self) -> String {
        self.0
            .iter()
            .map(|cp| cp.to_char().unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl TryFrom<Vec<CodePoint>> for CodePointSequence {
    type Error = Error;

    fn try_from(codepoints: Vec<CodePoint>) -> Result<Self> {
        CodePointSequence::new(codepoints)
    }
}

impl From<CodePointSequence> for Vec<CodePoint> {
    fn from(seq: CodePointSequence) -> Self {
        seq.0
    }
}

impl From<CodePoint> for CodePointSequence {
    fn from(cp: CodePoint) -> Self {
        cp.to_sequence()
    }
}

impl<'a> IntoIterator for &'a CodePointSequence {
    type Item = &'a CodePoint;
    type IntoIter = std::slice::Iter<'a, CodePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CodePointSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cp) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cp}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CodePointSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// =============================================================================
// CodePoints
// =============================================================================

/// Key of a UCD record: a single code point, a range, or a sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodePoints {
    /// Single code point
    Point(CodePoint),
    /// Closed range
    Range(CodePointRange),
    /// Sequence of two or more code points
    Sequence(CodePointSequence),
}

impl CodePoints {
    /// Check for a single code point in any shape
    pub fn is_singleton(&self) -> bool {
        match self {
            CodePoints::Point(_) => true,
            CodePoints::Range(r) => r.is_singleton(),
            CodePoints::Sequence(s) => s.is_singleton(),
        }
    }

    /// First code point
    pub fn head(&self) -> CodePoint {
        match self {
            CodePoints::Point(cp) => *cp,
            CodePoints::Range(r) => r.start(),
            CodePoints::Sequence(s) => s.head(),
        }
    }

    /// Convert to a single code point
    pub fn to_point(&self) -> Result<CodePoint> {
        match self {
            CodePoints::Point(cp) => Ok(*cp),
            CodePoints::Range(r) => r.to_singleton(),
            CodePoints::Sequence(s) => s.to_singleton(),
        }
    }

    /// Convert to a range
    pub fn to_range(&self) -> Result<CodePointRange> {
        match self {
            CodePoints::Point(cp) => Ok(cp.to_range()),
            CodePoints::Range(r) => Ok(*r),
            CodePoints::Sequence(s) => s.to_range(),
        }
    }

    /// Convert to a sequence
    pub fn to_sequence(&self) -> Result<CodePointSequence> {
        match self {
            CodePoints::Point(cp) => Ok(cp.to_sequence()),
            CodePoints::Range(r) => r.to_sequence(),
            CodePoints::Sequence(s) => Ok(s.clone()),
        }
    }

    /// Iterate over all code points
    pub fn codepoints(&self) -> Box<dyn Iterator<Item = CodePoint> + '_> {
        match self {
            CodePoints::Point(cp) => Box::new(std::iter::once(*cp)),
            CodePoints::Range(r) => Box::new(r.codepoints()),
            CodePoints::Sequence(s) => Box::new(s.iter().copied()),
        }
    }
}

impl fmt::Display for CodePoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodePoints::Point(cp) => write!(f, "{cp}"),
            CodePoints::Range(r) => write!(f, "{r}"),
            CodePoints::Sequence(s) => write!(f, "{s}"),
        }
    }
}

impl From<CodePoint> for CodePoints {
    fn from(cp: CodePoint) -> Self {
        CodePoints::Point(cp)
    }
}

impl From<CodePointRange> for CodePoints {
    fn from(r: CodePointRange) -> Self {
        CodePoints::Range(r)
    }
}

impl From<CodePointSequence> for CodePoints {
    fn from(s: CodePointSequence) -> Self {
        CodePoints::Sequence(s)
    }
}

/// Collapse ascending code points into maximal ranges
///
/// Duplicates are absorbed; a code point below its predecessor starts a new range.
pub fn codepoints_to_ranges<I>(codepoints: I) -> Vec<CodePointRange>
where
    I: IntoIterator<Item = CodePoint>,
{
    let mut ranges: Vec<CodePointRange> = Vec::new();
    for cp in codepoints {
        match ranges.last_mut() {
            Some(last) if last.start <= cp && cp.0 <= last.stop.0.saturating_add(1) => {
                last.stop = last.stop.max(cp);
            }
            _ => ranges.push(cp.to_range()),
        }
    }
    ranges
}
