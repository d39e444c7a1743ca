//! Point lookups from mirror to answer

use crate::common::*;
use ucdb::{Block, BinaryProperty, EastAsianWidth, GeneralCategory};
use ucdb_parser::{parse_records, ParseOptions, Tag};

#[test]
fn test_number_sign() {
    let dir = fixture_mirror();
    let db = database(dir.path(), V15_0);

    let data = db.lookup(cp(0x23)).unwrap();
    assert_eq!(data.category, GeneralCategory::Other_Punctuation);
    assert_eq!(data.east_asian_width, EastAsianWidth::Narrow);
    assert_eq!(data.age.map(|age| age.alias()), Some("1.1"));
    assert_eq!(data.block, Some(Block::Basic_Latin));
    assert!(data.has(BinaryProperty::Emoji));
    assert!(data.has(BinaryProperty::Emoji_Component));
    assert!(!data.has(BinaryProperty::Extended_Pictographic));
    assert_eq!(data.to_string(), "U+0023 Po NUMBER SIGN");
    assert_eq!(db.fixed_width(cp(0x23)).unwrap(), 1);
}

#[test]
fn test_unassigned_in_named_block() {
    let dir = fixture_mirror();
    let db = database(dir.path(), V15_0);

    let data = db.lookup(cp(0x1F2FF)).unwrap();
    assert_eq!(data.category, GeneralCategory::Unassigned);
    assert_eq!(data.age, None);
    assert_eq!(data.name, None);
    assert_eq!(data.block, Some(Block::Enclosed_Ideographic_Supplement));
    assert_eq!(data.east_asian_width, EastAsianWidth::Wide);
    // From the default declaration, not a listed range
    assert!(data.has(BinaryProperty::Extended_Pictographic));
    assert!(!data.has(BinaryProperty::Emoji));
}

#[test]
fn test_lookup_prepares_lazily() {
    let dir = fixture_mirror();
    let db = database(dir.path(), V15_0);

    assert!(!db.is_prepared());
    db.name(cp(0x41)).unwrap();
    assert!(db.is_prepared());
    assert_eq!(db.version().unwrap(), V15_0);
}

mod edge_cases {
    use super::*;

    /// Category by scanning the excerpt's records, last match wins
    fn scan_category(value: u32) -> GeneralCategory {
        let mut category = GeneralCategory::Unassigned;
        for record in parse_records(GENERAL_CATEGORY, ParseOptions::default()) {
            let record = record.unwrap();
            if record.tag == Tag::Record && record.codepoints.to_range().unwrap().contains(cp(value)) {
                category = record.fields[0].parse().unwrap();
            }
        }
        category
    }

    #[test]
    fn test_lookup_agrees_with_linear_scan() {
        let dir = fixture_mirror();
        let spot_checks = [
            0x0, 0x1F, 0x20, 0x21, 0x23, 0x24, 0x40, 0x41, 0x5A, 0x5B, 0x377, 0x378, 0x379,
            0x4E00, 0x9FFF, 0xAC00, 0xD7A3, 0xD7A4, 0x1F1E5, 0x1F1E6, 0x1F1FF, 0xE0001,
            0x10FFFF,
        ];

        for version in [V4_1, V9_0, V15_1] {
            let db = database(dir.path(), version);
            for value in spot_checks {
                assert_eq!(
                    db.resolve_general_category(cp(value)).unwrap(),
                    scan_category(value),
                    "U+{value:04X} in {version}"
                );
            }
        }
    }

    #[test]
    fn test_optimized_lookups_are_unchanged() {
        let dir = fixture_mirror();
        let plain = database(dir.path(), V15_1);
        let mut optimized = database(dir.path(), V15_1);
        optimized.optimize().unwrap();

        for value in [0x0, 0x23, 0x41, 0x231A, 0x4E00, 0x1F1E6, 0x1F2FF, 0x10FFFF] {
            assert_eq!(
                plain.lookup(cp(value)).unwrap(),
                optimized.lookup(cp(value)).unwrap()
            );
        }
    }

    #[test]
    fn test_version_without_emoji_data() {
        let dir = fixture_mirror();
        let db = database(dir.path(), V4_1);

        assert!(!db.test(cp(0x23), BinaryProperty::Emoji).unwrap());
        assert_eq!(db.count(BinaryProperty::Extended_Pictographic).unwrap(), 0);
    }
}
