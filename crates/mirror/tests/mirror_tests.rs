//! Integration tests for mirror setup
//!
//! All tests run against an in-memory origin that records every request:
//! - Manifest freshness decides whether setup touches the network at all
//! - CLDR annotations are extracted from their npm archives
//! - First setup mirrors the latest version
//! - require() only downloads what is missing
//! - Transport failures propagate unmodified

use chrono::{Duration, Utc};
use flate2::write::GzEncoder;
use flate2::Compression;
use parking_lot::Mutex;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use ucdb_core::{Error, Result, Version, VersionError};
use tar::{Builder, Header};
use ucdb_mirror::cldr::{
    ANNOTATIONS_MEMBER, ANNOTATIONS_PACKAGE, DERIVED_ANNOTATIONS_MEMBER,
    DERIVED_ANNOTATIONS_PACKAGE,
};
use ucdb_mirror::{
    Annotations, FileManager, Manifest, Mirror, MirrorConfig, Transport, LATEST_README_URL,
    UCD_FILES,
};

// ============================================================================
// Helper Functions
// ============================================================================

const V9_0: Version = Version::new(9, 0, 0);
const V15_1: Version = Version::new(15, 1, 0);

#[derive(Default)]
struct FakeOrigin {
    requests: Mutex<Vec<String>>,
}

impl FakeOrigin {
    fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    fn count(&self, url: &str) -> usize {
        self.requests.lock().iter().filter(|r| r.as_str() == url).count()
    }
}

fn npm_metadata(version: &str) -> String {
    format!(
        r#"{{"dist-tags": {{"latest": "{version}"}},
            "versions": {{"{version}": {{"dist": {{"tarball": "https://registry.npmjs.org/x-{version}.tgz"}}}}}}}}"#
    )
}

const ANNOTATIONS_JSON: &str =
    r#"{"annotations": {"annotations": {"⌚": {"default": ["clock"], "tts": ["watch"]}}}}"#;

const DERIVED_JSON: &str =
    r#"{"annotationsDerived": {"annotations": {"🇩🇪": {"tts": ["flag: Germany"]}}}}"#;

/// npm package archive holding both annotation files
fn annotations_tarball() -> Vec<u8> {
    let mut builder = Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    for (path, data) in [
        (ANNOTATIONS_MEMBER, ANNOTATIONS_JSON),
        (DERIVED_ANNOTATIONS_MEMBER, DERIVED_JSON),
    ] {
        let mut header = Header::new_gnu();
        header.set_path(path).unwrap();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append(&header, data.as_bytes()).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

impl Transport for FakeOrigin {
    fn fetch(&self, url: &str, _accept: Option<&str>) -> Result<Vec<u8>> {
        self.requests.lock().push(url.to_string());
        let body = match url {
            _ if url.ends_with(".tgz") => return Ok(annotations_tarball()),
            LATEST_README_URL => {
                "# Unicode Character Database\n# This directory contains the final data files\n\
                 # for Version 15.1.0 of the Unicode Standard.\n"
                    .to_string()
            }
            ANNOTATIONS_PACKAGE | DERIVED_ANNOTATIONS_PACKAGE => npm_metadata("44.1.0"),
            _ if url.starts_with("https://www.unicode.org/Public/") => "# fixture\n".to_string(),
            _ => return Err(Error::transport(url, "404 Not Found")),
        };
        Ok(body.into_bytes())
    }
}

struct BrokenOrigin;

impl Transport for BrokenOrigin {
    fn fetch(&self, url: &str, _accept: Option<&str>) -> Result<Vec<u8>> {
        Err(Error::transport(url, "connection refused"))
    }
}

fn files_for(version: Version) -> usize {
    let files = FileManager::new("/unused", V15_1);
    UCD_FILES
        .iter()
        .filter(|f| files.url(f, version).unwrap().is_some())
        .count()
}

fn populate(root: &Path, version: Version) {
    let files = FileManager::new(root, V15_1);
    fs::create_dir_all(root.join(version.to_string())).unwrap();
    for filename in UCD_FILES {
        if files.url(filename, version).unwrap().is_some() {
            fs::write(files.path(filename, version), "# fixture\n").unwrap();
        }
    }
}

fn write_manifest(root: &Path, versions: &[Version], age: Duration) {
    let mut manifest = Manifest::new(root, V15_1, None).with_inventory(versions.iter().copied());
    manifest.timestamp = Utc::now() - age;
    manifest.save().unwrap();
}

// ============================================================================
// Freshness
// ============================================================================

mod freshness {
    use super::*;

    #[test]
    fn test_fresh_manifest_makes_no_requests() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), V15_1);
        write_manifest(dir.path(), &[V15_1], Duration::days(2));

        let origin = Arc::new(FakeOrigin::default());
        let mirror = Mirror::setup(MirrorConfig::new(dir.path()), origin.clone()).unwrap();

        assert!(origin.requests().is_empty());
        assert_eq!(mirror.latest_version(), V15_1);
        assert_eq!(mirror.retrieved_versions(), &[V15_1]);
    }

    #[test]
    fn test_stale_manifest_checks_version_once() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), V15_1);
        write_manifest(dir.path(), &[V15_1], Duration::days(8));

        let origin = Arc::new(FakeOrigin::default());
        let config = MirrorConfig::new(dir.path()).track_cldr(false);
        let mirror = Mirror::setup(config, origin.clone()).unwrap();

        assert_eq!(origin.requests(), vec![LATEST_README_URL.to_string()]);
        assert!(mirror.manifest().is_fresh(Duration::days(7)));
    }

    #[test]
    fn test_stale_manifest_with_cldr() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), V15_1);
        write_manifest(dir.path(), &[V15_1], Duration::days(30));

        let origin = Arc::new(FakeOrigin::default());
        let mirror = Mirror::setup(MirrorConfig::new(dir.path()), origin.clone()).unwrap();

        assert_eq!(origin.count(LATEST_README_URL), 1);
        // ReadMe, two registry lookups, two archives
        assert_eq!(origin.requests().len(), 5);
        let cldr = mirror.manifest().cldr.as_ref().unwrap();
        assert_eq!(cldr.version, Version::new(44, 1, 0));
        assert!(dir.path().join("annotations-44.1.0.json").is_file());
        assert!(dir.path().join("derived-annotations-44.1.0.json").is_file());

        let annotations = Annotations::load(dir.path(), cldr).unwrap();
        assert_eq!(annotations.len(), 2);
    }

    #[test]
    fn test_present_annotations_are_not_refetched() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), V15_1);
        fs::write(dir.path().join("annotations-44.1.0.json"), ANNOTATIONS_JSON).unwrap();
        fs::write(dir.path().join("derived-annotations-44.1.0.json"), DERIVED_JSON).unwrap();
        write_manifest(dir.path(), &[V15_1], Duration::days(30));

        let origin = Arc::new(FakeOrigin::default());
        Mirror::setup(MirrorConfig::new(dir.path()), origin.clone()).unwrap();

        assert_eq!(origin.requests().len(), 3);
        assert!(origin.requests().iter().all(|url| !url.ends_with(".tgz")));
    }

    #[test]
    fn test_custom_max_age() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), V15_1);
        write_manifest(dir.path(), &[V15_1], Duration::hours(2));

        let origin = Arc::new(FakeOrigin::default());
        let config = MirrorConfig::new(dir.path())
            .max_age(Duration::hours(1))
            .track_cldr(false);
        Mirror::setup(config, origin.clone()).unwrap();
        assert_eq!(origin.count(LATEST_README_URL), 1);
    }
}

// ============================================================================
// Syncing
// ============================================================================

mod syncing {
    use super::*;

    #[test]
    fn test_first_setup_mirrors_latest() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("ucd");

        let origin = Arc::new(FakeOrigin::default());
        let mirror = Mirror::setup(MirrorConfig::new(&root), origin.clone()).unwrap();

        assert_eq!(mirror.retrieved_versions(), &[V15_1]);
        assert_eq!(origin.requests().len(), 5 + files_for(V15_1));
        assert!(root.join("15.1.0").join("UnicodeData.txt").is_file());
        assert!(Manifest::path_for(&root).is_file());

        // Second run reuses the manifest
        let again = Arc::new(FakeOrigin::default());
        Mirror::setup(MirrorConfig::new(&root), again.clone()).unwrap();
        assert!(again.requests().is_empty());
    }

    #[test]
    fn test_stale_sync_completes_unlisted_versions() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), V15_1);
        fs::create_dir_all(dir.path().join("9.0.0")).unwrap();
        write_manifest(dir.path(), &[V15_1], Duration::days(8));

        let origin = Arc::new(FakeOrigin::default());
        let config = MirrorConfig::new(dir.path()).track_cldr(false);
        let mirror = Mirror::setup(config, origin.clone()).unwrap();

        assert_eq!(mirror.retrieved_versions(), &[V9_0, V15_1]);
        assert_eq!(origin.requests().len(), 1 + files_for(V9_0));
    }

    #[test]
    fn test_require_downloads_missing_only() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), V15_1);
        write_manifest(dir.path(), &[V15_1], Duration::days(1));

        let origin = Arc::new(FakeOrigin::default());
        let mut mirror = Mirror::setup(MirrorConfig::new(dir.path()), origin.clone()).unwrap();

        assert_eq!(mirror.require(V9_0).unwrap(), V9_0);
        assert_eq!(origin.requests().len(), files_for(V9_0));
        assert_eq!(files_for(V9_0), 16);
        assert!(origin
            .requests()
            .iter()
            .all(|url| !url.ends_with("emoji-test.txt")));

        // Already mirrored
        mirror.require(V9_0).unwrap();
        assert_eq!(origin.requests().len(), files_for(V9_0));

        let reloaded = Manifest::load(dir.path()).unwrap();
        assert_eq!(reloaded.versions, vec![V9_0, V15_1]);
    }

    #[test]
    fn test_require_all() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), V15_1);
        write_manifest(dir.path(), &[V15_1], Duration::days(1));

        let origin = Arc::new(FakeOrigin::default());
        let mut mirror = Mirror::setup(MirrorConfig::new(dir.path()), origin.clone()).unwrap();
        mirror.require_all().unwrap();

        let expected: Vec<Version> = Version::all_supported().collect();
        assert_eq!(mirror.retrieved_versions(), expected.as_slice());

        let before = origin.requests().len();
        mirror.require_all().unwrap();
        assert_eq!(origin.requests().len(), before);
    }
}

// ============================================================================
// Edge Case Tests
// ============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_require_rejects_bad_versions() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), V15_1);
        write_manifest(dir.path(), &[V15_1], Duration::days(1));

        let origin = Arc::new(FakeOrigin::default());
        let mut mirror = Mirror::setup(MirrorConfig::new(dir.path()), origin.clone()).unwrap();

        let err = mirror.require(Version::new(16, 0, 0)).unwrap_err();
        assert!(matches!(err, Error::Version(VersionError::Unreleased { .. })));
        assert!(mirror.require(Version::new(4, 0, 0)).unwrap_err().is_version());
        assert!(origin.requests().is_empty());
    }

    #[test]
    fn test_transport_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let err = Mirror::setup(MirrorConfig::new(dir.path()), Arc::new(BrokenOrigin)).unwrap_err();
        match err {
            Error::Transport { url, .. } => assert_eq!(url, LATEST_README_URL),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(Manifest::load(dir.path()).is_none());
    }

    #[test]
    fn test_corrupt_manifest_is_no_state() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), V15_1);
        fs::write(Manifest::path_for(dir.path()), "garbage").unwrap();

        let origin = Arc::new(FakeOrigin::default());
        let config = MirrorConfig::new(dir.path()).track_cldr(false);
        let mirror = Mirror::setup(config, origin.clone()).unwrap();

        // Previous inventory unknown, so existing files are checked but not refetched
        assert_eq!(origin.requests(), vec![LATEST_README_URL.to_string()]);
        assert_eq!(mirror.retrieved_versions(), &[V15_1]);
    }

    #[test]
    fn test_root_must_be_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("file");
        fs::write(&root, "").unwrap();

        let err = Mirror::setup(MirrorConfig::new(&root), Arc::new(FakeOrigin::default())).unwrap_err();
        assert!(matches!(err, Error::InvalidOperation(_)));
    }
}

mod live {
    use super::*;
    use ucdb_mirror::HttpTransport;

    #[test]
    #[ignore = "requires access to unicode.org"]
    fn test_latest_version_from_unicode_org() {
        let version = Mirror::retrieve_latest_version(&HttpTransport::new()).unwrap();
        assert!(version >= V15_1);
    }
}
