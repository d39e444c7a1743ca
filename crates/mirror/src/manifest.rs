//! Mirror manifest
//!
//! The manifest (`manifest.json` in the mirror root) stores:
//! - Schema ID of the mirrored file set
//! - Latest published UCD version at the time of the last sync
//! - Mirrored UCD versions
//! - CLDR annotation metadata, if tracked
//! - UTC timestamp of the last sync
//!
//! Written atomically via temp + rename. A missing or unreadable manifest
//! means "no prior state" and never fails the caller.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use ucdb_core::{Error, Result, Version, VersionError};

use crate::cldr::Cldr;
use crate::files::{write_atomic, FileManager};

/// File name of the manifest inside the mirror root
pub const MANIFEST_FILE: &str = "manifest.json";

/// Schema ID of the mirrored file set
///
/// Must change whenever the set of mirrored files changes, so that existing
/// mirrors are synced again.
pub const MANIFEST_SCHEMA: u32 = 1;

/// Persisted state of one mirror root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Schema ID
    pub schema: u32,
    /// Mirror root
    pub root: PathBuf,
    /// Latest published UCD version
    pub ucd: Version,
    /// Mirrored UCD versions, sorted
    pub versions: Vec<Version>,
    /// CLDR annotation metadata
    #[serde(default)]
    pub cldr: Option<Cldr>,
    /// Time of the last sync
    pub timestamp: DateTime<Utc>,
}

impl Manifest {
    /// Create a manifest without mirrored versions, timestamped now
    pub fn new(root: impl Into<PathBuf>, ucd: Version, cldr: Option<Cldr>) -> Self {
        Manifest {
            schema: MANIFEST_SCHEMA,
            root: root.into(),
            ucd,
            versions: Vec::new(),
            cldr,
            timestamp: Utc::now(),
        }
    }

    /// Path of the manifest for a mirror root
    pub fn path_for(root: &Path) -> PathBuf {
        root.join(MANIFEST_FILE)
    }

    /// Path of this manifest
    pub fn path(&self) -> PathBuf {
        Self::path_for(&self.root)
    }

    /// Read the manifest of a mirror root
    ///
    /// Returns `None` if there is no manifest, if it cannot be parsed, or if
    /// it fails validation.
    pub fn load(root: &Path) -> Option<Self> {
        let path = Self::path_for(root);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(target: "ucdb::mirror", path = %path.display(), error = %e, "No manifest");
                return None;
            }
        };

        let manifest: Manifest = match serde_json::from_slice(&bytes) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!(target: "ucdb::mirror", path = %path.display(), error = %e, "Ignoring corrupt manifest");
                return None;
            }
        };

        if manifest.root != root {
            warn!(
                target: "ucdb::mirror",
                path = %path.display(),
                recorded = %manifest.root.display(),
                "Ignoring manifest of another mirror root"
            );
            return None;
        }
        if let Err(e) = manifest.validate() {
            warn!(target: "ucdb::mirror", path = %path.display(), error = %e, "Ignoring invalid manifest");
            return None;
        }

        debug!(target: "ucdb::mirror", path = %path.display(), ucd = %manifest.ucd, "Read manifest");
        Some(manifest)
    }

    /// Check schema and versions
    pub fn validate(&self) -> Result<()> {
        if self.schema != MANIFEST_SCHEMA {
            return Err(Error::Serialization(format!(
                "manifest schema {} instead of {}",
                self.schema, MANIFEST_SCHEMA
            )));
        }
        self.ucd.validate_ucd()?;
        for version in &self.versions {
            self.check_version(*version)?;
        }
        Ok(())
    }

    /// Check that `version` is a supported UCD version released by the time of the last sync
    pub fn check_version(&self, version: Version) -> Result<Version> {
        let version = version.validate_ucd()?;
        if version > self.ucd {
            return Err(VersionError::Unreleased {
                version,
                latest: self.ucd,
            }
            .into());
        }
        Ok(version)
    }

    /// Check whether the last sync happened less than `max_age` ago
    pub fn is_fresh(&self, max_age: Duration) -> bool {
        Utc::now() - self.timestamp < max_age
    }

    /// Check whether `version` has been mirrored
    pub fn contains(&self, version: Version) -> bool {
        self.versions.binary_search(&version).is_ok()
    }

    /// Replace the mirrored versions and refresh the timestamp
    pub fn with_inventory<I>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = Version>,
    {
        let mut versions: Vec<Version> = versions.into_iter().collect();
        versions.sort();
        versions.dedup();
        self.versions = versions;
        self.timestamp = Utc::now();
        self
    }

    /// File manager for the mirror root
    pub fn files(&self) -> FileManager {
        FileManager::new(&self.root, self.ucd)
    }

    /// Write the manifest atomically
    pub fn save(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let bytes =
            serde_json::to_vec_pretty(self).map_err(|e| Error::Serialization(e.to_string()))?;
        write_atomic(&self.path(), &bytes)?;
        info!(
            target: "ucdb::mirror",
            path = %self.path().display(),
            ucd = %self.ucd,
            versions = self.versions.len(),
            "Wrote manifest"
        );
        Ok(())
    }
}
