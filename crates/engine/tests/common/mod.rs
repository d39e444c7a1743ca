//! Fixture mirrors for engine integration tests
//!
//! A fixture mirror holds a fresh manifest and a placeholder for every file of
//! each version, so that databases prepare without touching the network.
//! Selected files carry small, hand-written excerpts of real UCD data.

#![allow(dead_code)]

use chrono::Utc;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

use ucdb_core::{CodePoint, Version};
use ucdb_engine::{Database, DatabaseConfig};
use ucdb_mirror::{Cldr, FileManager, Manifest, OfflineTransport, UCD_FILES};

pub const V8_0: Version = Version::new(8, 0, 0);
pub const V15_1: Version = Version::new(15, 1, 0);

pub fn cp(value: u32) -> CodePoint {
    CodePoint::new(value).unwrap()
}

pub fn cps(values: &[u32]) -> Vec<CodePoint> {
    values.iter().map(|v| cp(*v)).collect()
}

// ============================================================================
// File excerpts
// ============================================================================

pub const UNICODE_DATA: &str = "\
0000;<control>;Cc;0;BN;;;;;N;NULL;;;;
000D;<control>;Cc;0;B;;;;;N;CARRIAGE RETURN (CR);;;;
0023;NUMBER SIGN;Po;0;ET;;;;;N;;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0301;COMBINING ACUTE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING ACUTE ACCENT;;;;
0915;DEVANAGARI LETTER KA;Lo;0;L;;;;;N;;;;;
094D;DEVANAGARI SIGN VIRAMA;Mn;9;NSM;;;;;N;;;;;
1100;HANGUL CHOSEONG KIYEOK;Lo;0;L;;;;;N;;;;;
1161;HANGUL JUNGSEONG A;Lo;0;L;;;;;N;;;;;
200B;ZERO WIDTH SPACE;Cf;0;BN;;;;;N;;;;;
200D;ZERO WIDTH JOINER;Cf;0;BN;;;;;N;;;;;
231A;WATCH;So;0;ON;;;;;N;;;;;
4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;
9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;
AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;
D7A3;<Hangul Syllable, Last>;Lo;0;L;;;;;N;;;;;
E000;<Private Use, First>;Co;0;L;;;;;N;;;;;
F8FF;<Private Use, Last>;Co;0;L;;;;;N;;;;;
FE0F;VARIATION SELECTOR-16;Mn;0;NSM;;;;;N;;;;;
1F1E6;REGIONAL INDICATOR SYMBOL LETTER A;So;0;L;;;;;N;;;;;
1F468;MAN;So;0;ON;;;;;N;;;;;
1F4BB;PERSONAL COMPUTER;So;0;ON;;;;;N;;;;;
1F9D1;ADULT;So;0;ON;;;;;N;;;;;
";

pub const GENERAL_CATEGORY: &str = "\
# @missing: 0000..10FFFF; Cn
0000..001F    ; Cc
0020          ; Zs
0021..0023    ; Po
0041..005A    ; Lu
0061..007A    ; Ll
007F..009F    ; Cc
0300..036F    ; Mn
0378..0379    ; Cn
0915..0939    ; Lo
094D          ; Mn
1100..115F    ; Lo
1160..11FF    ; Lo
200B..200F    ; Cf
231A..231B    ; So
4E00..9FFF    ; Lo
AC00..D7A3    ; Lo
D800..DFFF    ; Cs
E000..F8FF    ; Co
FE0F          ; Mn
1F1E6..1F1FF  ; So
1F300..1F5FF  ; So
1F900..1F9FF  ; So
";

pub const BLOCKS: &str = "\
# @missing: 0000..10FFFF; No_Block
0000..007F; Basic Latin
0080..00FF; Latin-1 Supplement
0300..036F; Combining Diacritical Marks
0900..097F; Devanagari
1100..11FF; Hangul Jamo
2000..206F; General Punctuation
2300..23FF; Miscellaneous Technical
4E00..9FFF; CJK Unified Ideographs
AC00..D7AF; Hangul Syllables
FE00..FE0F; Variation Selectors
1F100..1F1FF; Enclosed Alphanumeric Supplement
1F200..1F2FF; Enclosed Ideographic Supplement
1F300..1F5FF; Miscellaneous Symbols and Pictographs
1F900..1F9FF; Supplemental Symbols and Pictographs
";

pub const AGE: &str = "\
# @missing: 0000..10FFFF; Unassigned
0000..001F    ; 1.1
0020..007E    ; 1.1
007F..009F    ; 1.1
0300..0345    ; 1.1
0346..036F    ; 3.0
0915..0939    ; 1.1
094D          ; 1.1
1100..1159    ; 1.1
115A..115E    ; 5.2
115F..11FF    ; 1.1
200B..200F    ; 1.1
231A..231B    ; 6.0
4E00..9FA5    ; 1.1
9FA6..9FFF    ; 14.0
AC00..D7A3    ; 2.0
D800..DFFF    ; 2.0
E000..F8FF    ; 1.1
FE0F          ; 3.2
1F1E6..1F1FF  ; 6.0
1F300..1F5FF  ; 6.0
1F900..1F9FF  ; 10.0
";

pub const EAST_ASIAN_WIDTH: &str = "\
# @missing: 0000..10FFFF; N
# @missing: 4E00..9FFF; W
# @missing: 1F000..1FFFD; W
0000..001F;N
0020..007E;Na
0300..036F;A
1100..115F;W
1160..11FF;N
231A..231B;W
AC00..D7A3;W
E000..F8FF;A
1F1E6..1F1FF;N
";

pub const GRAPHEME_BREAK: &str = "\
0000..0009    ; Control
000A          ; LF
000B..000C    ; Control
000D          ; CR
000E..001F    ; Control
007F..009F    ; Control
0300..036F    ; Extend
094D          ; Extend
1100..115F    ; L
1160..11A7    ; V
11A8..11FF    ; T
200B          ; Control
200C          ; Extend
200D          ; ZWJ
200E..200F    ; Control
AC00          ; LV
AC01..AC1B    ; LVT
FE0F          ; Extend
1F1E6..1F1FF  ; Regional_Indicator
1F3FB..1F3FF  ; Extend
";

pub const CORE_PROPERTIES: &str = "\
# @missing: 0000..10FFFF; InCB; None
034F          ; Default_Ignorable_Code_Point
200B..200F    ; Default_Ignorable_Code_Point
FE00..FE0F    ; Default_Ignorable_Code_Point
0041..005A    ; Alphabetic
0300..036F    ; InCB; Extend
0915..0939    ; InCB; Consonant
094D          ; InCB; Linker
200D          ; InCB; Extend
1F3FB..1F3FF  ; InCB; Extend
";

pub const PROP_LIST: &str = "\
0009..000D    ; White_Space
0020          ; White_Space
002D          ; Dash
002D          ; Hyphen
FDD0..FDEF    ; Noncharacter_Code_Point
FE00..FE0F    ; Variation_Selector
";

pub const EMOJI_DATA: &str = "\
0023          ; Emoji
002A          ; Emoji
0030..0039    ; Emoji
231A..231B    ; Emoji
1F468..1F469  ; Emoji
1F4BB         ; Emoji
1F9D1         ; Emoji
231A..231B    ; Emoji_Presentation
1F468..1F469  ; Emoji_Presentation
1F3FB..1F3FF  ; Emoji_Modifier
1F468..1F469  ; Emoji_Modifier_Base
0023          ; Emoji_Component
002A          ; Emoji_Component
0030..0039    ; Emoji_Component
200D          ; Emoji_Component
FE0F          ; Emoji_Component
1F1E6..1F1FF  ; Emoji_Component
1F3FB..1F3FF  ; Emoji_Component
00A9          ; Extended_Pictographic
231A..231B    ; Extended_Pictographic
1F249..1F3FA  ; Extended_Pictographic
1F400..1F4FF  ; Extended_Pictographic
1F900..1F9FF  ; Extended_Pictographic
";

pub const EMOJI_SEQUENCES: &str = "\
231A..231B    ; Basic_Emoji                  ; watch..hourglass done        # E0.6   [2] (\u{231A}..\u{231B})
0023 FE0F 20E3; Emoji_Keycap_Sequence        ; keycap: \\x{23}              # E0.6   [1]
1F1E9 1F1EA   ; RGI_Emoji_Flag_Sequence      ; flag: Germany                # E2.0   [1]
1F468 1F3FE   ; RGI_Emoji_Modifier_Sequence  ; man: medium-dark skin tone   # E1.0   [1]
";

pub const EMOJI_ZWJ_SEQUENCES: &str = "\
1F9D1 200D 1F4BB ; RGI_Emoji_ZWJ_Sequence    ; technologist                 # E12.1  [1]
";

pub const EMOJI_VARIATION_SEQUENCES: &str = "\
0023 FE0E  ; text style;  # (1.1) NUMBER SIGN
0023 FE0F  ; emoji style; # (1.1) NUMBER SIGN
231A FE0E  ; text style;  # (1.1) WATCH
231A FE0F  ; emoji style; # (1.1) WATCH
";

pub const SCRIPTS: &str = "\
# @missing: 0000..10FFFF; Unknown
0000..0040    ; Common
0041..005A    ; Latin
0300..036F    ; Inherited
0915..0939    ; Devanagari
094D          ; Devanagari
1100..11FF    ; Hangul
4E00..9FFF    ; Han
AC00..D7A3    ; Hangul
";

pub const INDIC_SYLLABIC_CATEGORY: &str = "\
# @missing: 0000..10FFFF; Other
0915..0939    ; Consonant
094D          ; Virama
";

pub const COMBINING_CLASS: &str = "\
# @missing: 0000..10FFFF; 0
0300..0314    ; 230
094D          ; 9
";

/// Excerpts of the files of a recent version
pub const RECENT_FILES: &[(&str, &str)] = &[
    ("UnicodeData.txt", UNICODE_DATA),
    ("DerivedGeneralCategory.txt", GENERAL_CATEGORY),
    ("Blocks.txt", BLOCKS),
    ("DerivedAge.txt", AGE),
    ("EastAsianWidth.txt", EAST_ASIAN_WIDTH),
    ("GraphemeBreakProperty.txt", GRAPHEME_BREAK),
    ("DerivedCoreProperties.txt", CORE_PROPERTIES),
    ("PropList.txt", PROP_LIST),
    ("emoji-data.txt", EMOJI_DATA),
    ("emoji-sequences.txt", EMOJI_SEQUENCES),
    ("emoji-zwj-sequences.txt", EMOJI_ZWJ_SEQUENCES),
    ("emoji-variation-sequences.txt", EMOJI_VARIATION_SEQUENCES),
    ("Scripts.txt", SCRIPTS),
    ("IndicSyllabicCategory.txt", INDIC_SYLLABIC_CATEGORY),
    ("DerivedCombiningClass.txt", COMBINING_CLASS),
];

/// Emoji 1.0 lists emoji instead of properties
pub const EMOJI_DATA_1_0: &str = "\
0023 20E3     ; emoji ; L1 ; none ; x  # V3.0 (#⃣) keycap NUMBER SIGN
231A..231B    ; emoji ; L1 ; none ; j  # V1.1 (⌚..⌛) WATCH
1F1E9 1F1EA   ; emoji ; L2 ; secondary ; x # V6.0 (🇩🇪) flag for Germany
";

/// Excerpts of the files of 8.0
pub const EMOJI_1_0_FILES: &[(&str, &str)] = &[
    ("GraphemeBreakProperty.txt", GRAPHEME_BREAK),
    ("emoji-data.txt", EMOJI_DATA_1_0),
];

/// English CLDR annotations
pub const CLDR_ANNOTATIONS: &str = r##"{
  "annotations": {
    "identity": { "language": "en" },
    "annotations": {
      "⌚": { "default": ["clock"], "tts": ["watch"] },
      "🗼": { "default": ["tower"], "tts": ["Tokyo tower"] },
      "🗽": { "default": ["liberty"], "tts": ["Statue of Liberty"] },
      "#⃣": { "default": ["keycap"], "tts": ["keycap: #"] }
    }
  }
}"##;

/// English derived CLDR annotations
pub const CLDR_DERIVED_ANNOTATIONS: &str = r#"{
  "annotationsDerived": {
    "identity": { "language": "en" },
    "annotations": {
      "🇩🇪": { "default": ["flag"], "tts": ["flag: Germany"] }
    }
  }
}"#;

// ============================================================================
// Mirrors
// ============================================================================

/// Add CLDR annotations to a fixture mirror and record them in its manifest
pub fn add_cldr(root: &Path) {
    let cldr = Cldr {
        version: Version::new(44, 1, 0),
        annotations: "https://registry.npmjs.org/cldr-annotations-modern/-/cldr-annotations-modern-44.1.0.tgz".to_string(),
        derived_annotations: "https://registry.npmjs.org/cldr-annotations-derived-modern/-/cldr-annotations-derived-modern-44.1.0.tgz".to_string(),
    };
    fs::write(cldr.path(root, "annotations"), CLDR_ANNOTATIONS).unwrap();
    fs::write(cldr.path(root, "derived-annotations"), CLDR_DERIVED_ANNOTATIONS).unwrap();

    let mut manifest = Manifest::load(root).unwrap();
    manifest.cldr = Some(cldr);
    manifest.save().unwrap();
}

/// Write placeholders and excerpts for a version into a mirror root
pub fn populate(root: &Path, version: Version, excerpts: &[(&str, &str)]) {
    let files = FileManager::new(root, V15_1);
    fs::create_dir_all(root.join(version.to_string())).unwrap();
    for filename in UCD_FILES {
        if files.url(filename, version).unwrap().is_some() {
            fs::write(files.path(filename, version), "# fixture\n").unwrap();
        }
    }
    for (filename, content) in excerpts {
        fs::write(files.path(filename, version), content).unwrap();
    }
}

/// Mirror with the given versions and a fresh manifest
pub fn mirror_with(versions: &[(Version, &[(&str, &str)])]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (version, excerpts) in versions {
        populate(dir.path(), *version, excerpts);
    }

    let mut manifest = Manifest::new(dir.path(), V15_1, None)
        .with_inventory(versions.iter().map(|(version, _)| *version));
    manifest.timestamp = Utc::now();
    manifest.save().unwrap();
    dir
}

/// Mirror with 15.1 and 8.0
pub fn fixture_mirror() -> TempDir {
    mirror_with(&[(V15_1, RECENT_FILES), (V8_0, EMOJI_1_0_FILES)])
}

/// Mirror with 15.1, one file replaced
pub fn mirror_replacing(filename: &str, content: &str) -> TempDir {
    let files: Vec<(&str, &str)> = RECENT_FILES
        .iter()
        .map(|(name, text)| if *name == filename { (*name, content) } else { (*name, *text) })
        .collect();
    mirror_with(&[(V15_1, &files)])
}

/// Configuration for a version of a fixture mirror
pub fn config(root: &Path, version: Version) -> DatabaseConfig {
    DatabaseConfig {
        version: Some(version.to_string()),
        ..DatabaseConfig::with_root(root)
    }
}

/// Unprepared database for a version of a fixture mirror, without network
pub fn database(root: &Path, version: Version) -> Database {
    Database::with_config(config(root, version)).with_transport(Arc::new(OfflineTransport))
}
