//! Character names from `UnicodeData.txt`
//!
//! Most characters are listed one per line with their name. Large blocks of
//! similar characters are listed as a pair of lines instead:
//!
//! ```text
//! 4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;
//! 9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;
//! ```
//!
//! The names of ideographs in such ranges are derived from their code points;
//! Hangul syllable names are composed from their jamo. Other ranges, such as
//! private use or surrogates, have no names, and neither do labels like
//! `<control>`.

use std::collections::HashMap;
use tracing::debug;
use ucdb_core::{CodePoint, CodePointRange, CodePoints, FormatError, Result};

const FIRST_SUFFIX: &str = ", First>";
const LAST_SUFFIX: &str = ", Last>";

/// Name prefixes of ideograph ranges, keyed by the label of the range
const IDEOGRAPH_PREFIXES: &[(&str, &str)] = &[
    ("<CJK Ideograph", "CJK UNIFIED IDEOGRAPH-"),
    ("<Tangut Ideograph", "TANGUT IDEOGRAPH-"),
    ("<Khitan Small Script", "KHITAN SMALL SCRIPT CHARACTER-"),
    ("<Nushu Character", "NUSHU CHARACTER-"),
];

const HANGUL_LABEL: &str = "<Hangul Syllable";

const JAMO_L: [&str; 19] = [
    "G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ", "C", "K", "T", "P",
    "H",
];
const JAMO_V: [&str; 21] = [
    "A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE", "YO", "U", "WEO", "WE",
    "WI", "YU", "EU", "YI", "I",
];
const JAMO_T: [&str; 28] = [
    "", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS", "LT", "LP", "LH", "M",
    "B", "BS", "S", "SS", "NG", "J", "C", "K", "T", "P", "H",
];

/// How the names of a First/Last range are formed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameRule {
    /// Prefix followed by the hexadecimal code point
    Ideograph(&'static str),
    /// Composed from jamo short names
    Hangul,
    /// No names
    Unnamed,
}

impl NameRule {
    fn for_label(label: &str) -> NameRule {
        if label.starts_with(HANGUL_LABEL) {
            return NameRule::Hangul;
        }
        IDEOGRAPH_PREFIXES
            .iter()
            .find(|(head, _)| label.starts_with(head))
            .map(|(_, prefix)| NameRule::Ideograph(prefix))
            .unwrap_or(NameRule::Unnamed)
    }

    fn apply(self, cp: CodePoint) -> Option<String> {
        match self {
            NameRule::Ideograph(prefix) => Some(format!("{prefix}{:04X}", cp.value())),
            NameRule::Hangul => hangul_syllable_name(cp),
            NameRule::Unnamed => None,
        }
    }
}

/// Algorithmic name of a precomposed Hangul syllable
pub fn hangul_syllable_name(cp: CodePoint) -> Option<String> {
    if !(CodePoint::HANGUL_SYLLABLE_FIRST..=CodePoint::HANGUL_SYLLABLE_LAST).contains(&cp) {
        return None;
    }
    let index = (cp.value() - CodePoint::HANGUL_SYLLABLE_FIRST.value()) as usize;
    let (l, v, t) = (index / 588, (index % 588) / 28, index % 28);
    Some(format!("HANGUL SYLLABLE {}{}{}", JAMO_L[l], JAMO_V[v], JAMO_T[t]))
}

/// Character names of one UCD version
#[derive(Debug, Clone, Default)]
pub struct Names {
    points: HashMap<CodePoint, String>,
    ranges: Vec<(CodePointRange, NameRule)>,
}

impl Names {
    /// Build names from parsed `UnicodeData.txt` records
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<(CodePoints, Vec<String>)>>,
    {
        let mut names = Names::default();
        let mut first: Option<(CodePoint, String)> = None;

        for record in records {
            let (codepoints, fields) = record?;
            let cp = codepoints.to_point()?;
            let label = fields.first().cloned().unwrap_or_default();

            if let Some((start, start_label)) = first.take() {
                let head = &start_label[..start_label.len() - FIRST_SUFFIX.len()];
                let matches = label
                    .strip_suffix(LAST_SUFFIX)
                    .is_some_and(|stem| stem == head);
                if !matches {
                    return Err(unpaired(start, start_label));
                }
                let range = CodePointRange::new(start, cp)?;
                names.ranges.push((range, NameRule::for_label(head)));
                continue;
            }

            if label.ends_with(FIRST_SUFFIX) {
                first = Some((cp, label));
            } else if label.ends_with(LAST_SUFFIX) {
                return Err(unpaired(cp, label));
            } else if !label.starts_with('<') {
                names.points.insert(cp, label);
            }
        }

        if let Some((start, label)) = first {
            return Err(unpaired(start, label));
        }

        names.ranges.sort_by_key(|(r, _)| r.start());
        debug!(
            target: "ucdb::db",
            points = names.points.len(),
            ranges = names.ranges.len(),
            "Read character names"
        );
        Ok(names)
    }

    /// Name of a code point, `None` for unnamed and unassigned code points
    pub fn get(&self, cp: CodePoint) -> Option<String> {
        if let Some(name) = self.points.get(&cp) {
            return Some(name.clone());
        }
        let index = self.ranges.partition_point(|(r, _)| r.stop() < cp);
        self.ranges
            .get(index)
            .filter(|(range, _)| range.contains(cp))
            .and_then(|(_, rule)| rule.apply(cp))
    }

    /// Number of individually named code points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether there are no names at all
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.ranges.is_empty()
    }
}

fn unpaired(cp: CodePoint, label: String) -> ucdb_core::Error {
    FormatError::UnpairedRange {
        codepoint: cp.value(),
        label,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ucdb_parser::{parse_records, ParseOptions};

    const UNICODE_DATA: &str = "\
0000;<control>;Cc;0;BN;;;;;N;NULL;;;;
0023;NUMBER SIGN;Po;0;ET;;;;;N;;;;;
3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;
4DBF;<CJK Ideograph Extension A, Last>;Lo;0;L;;;;;N;;;;;
AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;
D7A3;<Hangul Syllable, Last>;Lo;0;L;;;;;N;;;;;
D800;<Non Private Use High Surrogate, First>;Cs;0;L;;;;;N;;;;;
DB7F;<Non Private Use High Surrogate, Last>;Cs;0;L;;;;;N;;;;;
17000;<Tangut Ideograph, First>;Lo;0;L;;;;;N;;;;;
187F7;<Tangut Ideograph, Last>;Lo;0;L;;;;;N;;;;;
";

    fn cp(value: u32) -> CodePoint {
        CodePoint::new(value).unwrap()
    }

    fn names(text: &str) -> Result<Names> {
        Names::from_records(
            parse_records(text, ParseOptions::default()).map(|r| r.map(|r| (r.codepoints, r.fields))),
        )
    }

    #[test]
    fn test_listed_and_derived_names() {
        let names = names(UNICODE_DATA).unwrap();
        assert_eq!(names.get(cp(0x23)).as_deref(), Some("NUMBER SIGN"));
        assert_eq!(names.get(cp(0)), None);
        assert_eq!(names.get(cp(0x3400)).as_deref(), Some("CJK UNIFIED IDEOGRAPH-3400"));
        assert_eq!(names.get(cp(0x4DBF)).as_deref(), Some("CJK UNIFIED IDEOGRAPH-4DBF"));
        assert_eq!(names.get(cp(0x4DC0)), None);
        assert_eq!(names.get(cp(0x17001)).as_deref(), Some("TANGUT IDEOGRAPH-17001"));
        assert_eq!(names.get(cp(0xD800)), None);
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_hangul_names() {
        let names = names(UNICODE_DATA).unwrap();
        assert_eq!(names.get(cp(0xAC00)).as_deref(), Some("HANGUL SYLLABLE GA"));
        assert_eq!(names.get(cp(0xAC01)).as_deref(), Some("HANGUL SYLLABLE GAG"));
        assert_eq!(names.get(cp(0xD7A3)).as_deref(), Some("HANGUL SYLLABLE HIH"));
        assert_eq!(hangul_syllable_name(cp(0xD4DB)).as_deref(), Some("HANGUL SYLLABLE PWILH"));
        assert_eq!(hangul_syllable_name(cp(0xD7A4)), None);
    }

    #[test]
    fn test_unpaired_ranges_fail() {
        let missing_last = "3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;\n";
        let err = names(missing_last).unwrap_err();
        assert!(matches!(
            err,
            ucdb_core::Error::Format(FormatError::UnpairedRange { codepoint: 0x3400, .. })
        ));

        let interrupted = "\
3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;
3401;SOMETHING ELSE;Lo;0;L;;;;;N;;;;;
";
        assert!(names(interrupted).is_err());

        let mismatched = "\
3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;
4DBF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;
";
        assert!(names(mismatched).is_err());

        let lonely_last = "4DBF;<CJK Ideograph Extension A, Last>;Lo;0;L;;;;;N;;;;;\n";
        assert!(names(lonely_last).is_err());
    }
}
