//! Offline fixture mirror shared by the end-to-end tests
//!
//! The mirror holds 4.1, 9.0, 15.0 and 15.1 with a fresh manifest. Every file
//! exists; most are placeholders and a few carry excerpts of real data.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use ucdb::{CodePoint, Database, DatabaseConfig, OfflineTransport, Version};
use ucdb_mirror::{FileManager, Manifest, UCD_FILES};

pub const V4_1: Version = Version::new(4, 1, 0);
pub const V9_0: Version = Version::new(9, 0, 0);
pub const V15_0: Version = Version::new(15, 0, 0);
pub const V15_1: Version = Version::new(15, 1, 0);

pub const VERSIONS: [Version; 4] = [V4_1, V9_0, V15_0, V15_1];

pub fn cp(value: u32) -> CodePoint {
    CodePoint::new(value).unwrap()
}

pub const UNICODE_DATA: &str = "\
0023;NUMBER SIGN;Po;0;ET;;;;;N;;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
1F1E6;REGIONAL INDICATOR SYMBOL LETTER A;So;0;L;;;;;N;;;;;
";

pub const GENERAL_CATEGORY: &str = "\
# @missing: 0000..10FFFF; Cn
0000..001F    ; Cc
0020          ; Zs
0021..0023    ; Po
0041..005A    ; Lu
0378..0379    ; Cn
4E00..9FFF    ; Lo
AC00..D7A3    ; Lo
1F1E6..1F1FF  ; So
E0001         ; Cf
";

pub const BLOCKS: &str = "\
0000..007F; Basic Latin
1F100..1F1FF; Enclosed Alphanumeric Supplement
1F200..1F2FF; Enclosed Ideographic Supplement
";

pub const AGE: &str = "\
# @missing: 0000..10FFFF; Unassigned
0000..007E    ; 1.1
1F1E6..1F1FF  ; 6.0
";

pub const EAST_ASIAN_WIDTH: &str = "\
# @missing: 0000..10FFFF; N
# @missing: 1F000..1FFFD; W
0020..007E;Na
1F1E6..1F1FF;N
";

pub const GRAPHEME_BREAK: &str = "\
0000..001F    ; Control
1F1E6..1F1FF  ; Regional_Indicator
";

pub const EMOJI_DATA: &str = "\
# @missing: 0000..10FFFF  ; Emoji ; No
# @missing: 1F200..1FAFF  ; Extended_Pictographic ; Yes
0023          ; Emoji
231A..231B    ; Emoji
1F1E6..1F1FF  ; Emoji
0023          ; Emoji_Component
1F1E6..1F1FF  ; Emoji_Component
231A..231B    ; Extended_Pictographic
";

/// Excerpts of 15.0 and 15.1
pub const RECENT_FILES: &[(&str, &str)] = &[
    ("UnicodeData.txt", UNICODE_DATA),
    ("DerivedGeneralCategory.txt", GENERAL_CATEGORY),
    ("Blocks.txt", BLOCKS),
    ("DerivedAge.txt", AGE),
    ("EastAsianWidth.txt", EAST_ASIAN_WIDTH),
    ("GraphemeBreakProperty.txt", GRAPHEME_BREAK),
    ("emoji-data.txt", EMOJI_DATA),
];

/// Excerpts of 4.1 and 9.0
pub const EARLY_FILES: &[(&str, &str)] = &[
    ("DerivedGeneralCategory.txt", GENERAL_CATEGORY),
    ("GraphemeBreakProperty.txt", GRAPHEME_BREAK),
];

fn populate(root: &Path, version: Version, excerpts: &[(&str, &str)]) {
    let files = FileManager::new(root, V15_1);
    fs::create_dir_all(root.join(version.to_string())).unwrap();
    for filename in UCD_FILES {
        if files.url(filename, version).unwrap().is_some() {
            fs::write(files.path(filename, version), "# placeholder\n").unwrap();
        }
    }
    for (filename, content) in excerpts {
        fs::write(files.path(filename, version), content).unwrap();
    }
}

/// Mirror with all fixture versions and a fresh manifest
pub fn fixture_mirror() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for version in VERSIONS {
        let excerpts = if version >= V15_0 { RECENT_FILES } else { EARLY_FILES };
        populate(dir.path(), version, excerpts);
    }
    Manifest::new(dir.path(), V15_1, None)
        .with_inventory(VERSIONS)
        .save()
        .unwrap();
    dir
}

/// Database for a version of the fixture mirror, never touching the network
pub fn database(root: &Path, version: Version) -> Database {
    let config = DatabaseConfig {
        version: Some(version.to_string()),
        ..DatabaseConfig::with_root(root)
    };
    Database::with_config(config).with_transport(Arc::new(OfflineTransport))
}
