//! Integration tests for grapheme cluster segmentation
//!
//! Boundary cases use the format of `GraphemeBreakTest.txt` and run against
//! the property excerpts of the fixture mirror. The complete reference files
//! need unicode.org and only run with `--ignored`.

mod common;

use common::*;

use std::io::{BufRead, BufReader};
use ucdb_core::Version;
use ucdb_engine::{BreakClass, Database};
use ucdb_parser::{parse_break_tests, parse_break_tests_str};

const BREAK_TESTS: &str = "\
# GraphemeBreakTest excerpt
\u{F7} 0020 \u{F7} 0020 \u{F7}\t#  \u{F7} [0.2] SPACE (Other) \u{F7} [999.0] SPACE (Other) \u{F7} [0.3]
\u{F7} 000D \u{D7} 000A \u{F7}\t#  \u{F7} [0.2] <CARRIAGE RETURN (CR)> \u{D7} [3.0] <LINE FEED (LF)> \u{F7} [0.3]
\u{F7} 000A \u{F7} 0301 \u{F7}\t#  \u{F7} [0.2] <LINE FEED (LF)> \u{F7} [4.0] COMBINING ACUTE ACCENT (Extend_ExtCccZwj) \u{F7} [0.3]
\u{F7} 0041 \u{F7} 000D \u{F7}\t#  \u{F7} [0.2] LATIN CAPITAL LETTER A (Other) \u{F7} [5.0] <CARRIAGE RETURN (CR)> \u{F7} [0.3]
\u{F7} 0041 \u{D7} 0301 \u{F7}\t#  \u{F7} [0.2] LATIN CAPITAL LETTER A (Other) \u{D7} [9.0] COMBINING ACUTE ACCENT (Extend_ExtCccZwj) \u{F7} [0.3]
\u{F7} 1100 \u{D7} 1161 \u{F7}\t#  \u{F7} [0.2] HANGUL CHOSEONG KIYEOK (L) \u{D7} [6.0] HANGUL JUNGSEONG A (V) \u{F7} [0.3]
\u{F7} 1100 \u{D7} AC01 \u{F7}\t#  \u{F7} [0.2] HANGUL CHOSEONG KIYEOK (L) \u{D7} [6.0] HANGUL SYLLABLE GAG (LVT) \u{F7} [0.3]
\u{F7} AC00 \u{D7} 11A8 \u{F7} 1100 \u{F7}\t#  \u{F7} [0.2] HANGUL SYLLABLE GA (LV) \u{D7} [7.0] HANGUL JONGSEONG KIYEOK (T) \u{F7} [999.0] HANGUL CHOSEONG KIYEOK (L) \u{F7} [0.3]
\u{F7} 1F1E6 \u{D7} 1F1E6 \u{F7} 1F1E6 \u{F7}\t#  \u{F7} [0.2] REGIONAL INDICATOR SYMBOL LETTER A (RI) \u{D7} [12.0] REGIONAL INDICATOR SYMBOL LETTER A (RI) \u{F7} [999.0] REGIONAL INDICATOR SYMBOL LETTER A (RI) \u{F7} [0.3]
\u{F7} 1F9D1 \u{D7} 200D \u{D7} 1F4BB \u{F7}\t#  \u{F7} [0.2] ADULT (ExtPict) \u{D7} [9.0] ZERO WIDTH JOINER (ZWJ_ExtCccZwj) \u{D7} [11.0] PERSONAL COMPUTER (ExtPict) \u{F7} [0.3]
\u{F7} 0041 \u{D7} 200D \u{F7} 1F4BB \u{F7}\t#  \u{F7} [0.2] LATIN CAPITAL LETTER A (Other) \u{D7} [9.0] ZERO WIDTH JOINER (ZWJ_ExtCccZwj) \u{F7} [999.0] PERSONAL COMPUTER (ExtPict) \u{F7} [0.3]
\u{F7} 1F468 \u{D7} 1F3FE \u{F7}\t#  \u{F7} [0.2] MAN (ExtPict) \u{D7} [9.0] EMOJI MODIFIER FITZPATRICK TYPE-5 (Extend) \u{F7} [0.3]
\u{F7} 0915 \u{D7} 094D \u{D7} 0915 \u{F7}\t#  \u{F7} [0.2] DEVANAGARI LETTER KA (ConjunctLinkingScripts_LinkingConsonant) \u{D7} [9.0] DEVANAGARI SIGN VIRAMA (Extend_ConjunctLinker) \u{D7} [9.3] DEVANAGARI LETTER KA (ConjunctLinkingScripts_LinkingConsonant) \u{F7} [0.3]
\u{F7} 0915 \u{D7} 0301 \u{D7} 094D \u{D7} 0915 \u{F7}\t#  \u{F7} [0.2] DEVANAGARI LETTER KA \u{D7} [9.0] COMBINING ACUTE ACCENT \u{D7} [9.0] DEVANAGARI SIGN VIRAMA \u{D7} [9.3] DEVANAGARI LETTER KA \u{F7} [0.3]
\u{F7} 0915 \u{D7} 0301 \u{F7} 0915 \u{F7}\t#  \u{F7} [0.2] DEVANAGARI LETTER KA \u{D7} [9.0] COMBINING ACUTE ACCENT \u{F7} [999.0] DEVANAGARI LETTER KA \u{F7} [0.3]
";

// ============================================================================
// Reference cases
// ============================================================================

#[test]
fn test_reference_cases() {
    let dir = fixture_mirror();
    let db = database(dir.path(), V15_1);

    let cases = parse_break_tests_str(BREAK_TESTS).unwrap();
    assert_eq!(cases.len(), 15);
    for case in cases {
        let breaks = db.grapheme_cluster_breaks(case.codepoints.as_slice()).unwrap();
        assert_eq!(breaks, case.breaks, "{}", case.comment);
    }
}

#[test]
fn test_is_grapheme_cluster() {
    let dir = fixture_mirror();
    let db = database(dir.path(), V15_1);

    assert!(db.is_grapheme_cluster(&cps(&[0x1F9D1, 0x200D, 0x1F4BB])).unwrap());
    assert!(db.is_grapheme_cluster(&cps(&[0x1F1E9, 0x1F1EA])).unwrap());
    assert!(!db.is_grapheme_cluster(&cps(&[0x41, 0x41])).unwrap());
    assert!(!db.is_grapheme_cluster(&[]).unwrap());
    assert!(db.grapheme_cluster_breaks(&[]).unwrap().is_empty());
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_classification_layers() {
    let dir = fixture_mirror();
    let db = database(dir.path(), V15_1);

    assert_eq!(db.grapheme_cluster(cp(0x915)).unwrap(), BreakClass::InCBConsonant);
    assert_eq!(db.grapheme_cluster(cp(0x94D)).unwrap(), BreakClass::InCBLinker);
    assert_eq!(db.grapheme_cluster(cp(0x301)).unwrap(), BreakClass::InCBExtend);
    assert_eq!(db.grapheme_cluster(cp(0x200D)).unwrap(), BreakClass::ZWJ);
    assert_eq!(db.grapheme_cluster(cp(0x1F468)).unwrap(), BreakClass::ExtendedPictographic);
    assert_eq!(db.grapheme_cluster(cp(0x1F1E6)).unwrap(), BreakClass::RegionalIndicator);
    assert_eq!(db.grapheme_cluster(cp(0x0D)).unwrap(), BreakClass::CR);
    assert_eq!(db.grapheme_cluster(cp(0x41)).unwrap(), BreakClass::Other);
    assert_eq!(db.grapheme_cluster(cp(0xAC00)).unwrap(), BreakClass::LV);
}

// ============================================================================
// Version-dependent rules
// ============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_regional_indicators_never_break_before_9_0() {
        let dir = fixture_mirror();
        let db = database(dir.path(), V8_0);

        let flags = cps(&[0x1F1E6, 0x1F1E6, 0x1F1E6]);
        assert_eq!(db.grapheme_cluster_breaks(&flags).unwrap(), vec![0, 3]);
        assert!(db.is_grapheme_cluster(&flags).unwrap());
    }

    #[test]
    fn test_no_pictographic_rules_without_data() {
        let dir = fixture_mirror();
        let db = database(dir.path(), V8_0);

        // 8.0 has no Extended_Pictographic data, so the ZWJ rule cannot apply
        assert_eq!(
            db.grapheme_cluster_breaks(&cps(&[0x1F9D1, 0x200D, 0x1F4BB])).unwrap(),
            vec![0, 2, 3]
        );
    }
}

// ============================================================================
// Complete reference files
// ============================================================================

mod reference_files {
    use super::*;

    /// Run every case of a version's GraphemeBreakTest.txt against its data
    fn check_reference_file(version: Version) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::with_config(config(dir.path(), version));
        db.prepare().unwrap();

        let file = db
            .mirror()
            .unwrap()
            .open("GraphemeBreakTest.txt", version)
            .unwrap()
            .unwrap();
        let cases = parse_break_tests(BufReader::new(file).lines()).unwrap();
        assert!(!cases.is_empty());

        let failures: Vec<_> = cases
            .iter()
            .filter(|case| {
                db.grapheme_cluster_breaks(case.codepoints.as_slice()).unwrap() != case.breaks
            })
            .map(|case| case.comment.as_str())
            .collect();
        assert!(
            failures.is_empty(),
            "{} of {} cases fail for {version}:\n{}",
            failures.len(),
            cases.len(),
            failures.join("\n")
        );
    }

    #[test]
    #[ignore = "requires access to unicode.org"]
    fn test_reference_file_15_1() {
        check_reference_file(V15_1);
    }

    #[test]
    #[ignore = "requires access to unicode.org"]
    fn test_reference_file_with_emoji_modifiers() {
        check_reference_file(Version::new(10, 0, 0));
    }

    #[test]
    #[ignore = "requires access to unicode.org"]
    fn test_reference_file_without_flag_pairs() {
        check_reference_file(V8_0);
    }
}
