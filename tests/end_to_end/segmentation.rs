//! Grapheme clusters across versions

use crate::common::*;
use ucdb::{BreakClass, CodePoint};

fn cps(values: &[u32]) -> Vec<CodePoint> {
    values.iter().map(|v| cp(*v)).collect()
}

#[test]
fn test_regional_indicators_by_version() {
    let dir = fixture_mirror();
    let flags = cps(&[0x1F1E6, 0x1F1E7, 0x1F1E8]);

    let expected = [
        (V4_1, vec![0, 3]),
        (V9_0, vec![0, 2, 3]),
        (V15_1, vec![0, 2, 3]),
    ];
    for (version, breaks) in expected {
        let db = database(dir.path(), version);
        assert_eq!(db.grapheme_cluster_breaks(&flags).unwrap(), breaks, "{version}");
    }
}

#[test]
fn test_controls_always_break() {
    let dir = fixture_mirror();
    let db = database(dir.path(), V15_1);

    assert_eq!(db.grapheme_cluster(cp(0x0A)).unwrap(), BreakClass::Control);
    assert_eq!(db.grapheme_cluster_breaks(&cps(&[0x41, 0x0A, 0x41])).unwrap(), vec![0, 1, 2, 3]);
    assert!(db.is_grapheme_cluster(&cps(&[0x1F1E9, 0x1F1EA])).unwrap());
    assert!(!db.is_grapheme_cluster(&cps(&[0x41, 0x41])).unwrap());
}
