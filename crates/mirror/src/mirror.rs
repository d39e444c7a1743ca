//! Mirror setup and version requirements
//!
//! [`Mirror::setup`] is the entry point. It reuses a fresh manifest without
//! touching the network. Otherwise it determines the latest UCD version from
//! the Consortium's `ReadMe.txt`, brings all mirrored versions plus the
//! latest version and the CLDR annotations up to date, and rewrites the
//! manifest.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use ucdb_core::{regex, Error, Result, Version, VersionError};

use crate::cldr::Cldr;
use crate::config::MirrorConfig;
use crate::files::FileManager;
use crate::manifest::Manifest;
use crate::transport::Transport;

/// ReadMe of the latest UCD release, which names its version
pub const LATEST_README_URL: &str = "https://www.unicode.org/Public/UCD/latest/ReadMe.txt";

/// A local mirror of UCD files
pub struct Mirror {
    config: MirrorConfig,
    manifest: Manifest,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Mirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mirror")
            .field("config", &self.config)
            .field("manifest", &self.manifest)
            .finish_non_exhaustive()
    }
}

fn check_root(root: &Path) -> Result<()> {
    if root.exists() && !root.is_dir() {
        return Err(Error::InvalidOperation(format!(
            "mirror root \"{}\" is not a directory",
            root.display()
        )));
    }
    Ok(())
}

impl Mirror {
    /// Open the mirror, syncing it if its manifest is missing or stale
    pub fn setup(config: MirrorConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        check_root(&config.root)?;

        let previous = Manifest::load(&config.root);
        if let Some(manifest) = previous.as_ref().filter(|m| m.is_fresh(config.max_age)) {
            info!(
                target: "ucdb::mirror",
                root = %config.root.display(),
                ucd = %manifest.ucd,
                "Reusing fresh manifest"
            );
            let manifest = manifest.clone();
            return Ok(Mirror {
                config,
                manifest,
                transport,
            });
        }

        let ucd = Self::retrieve_latest_version(transport.as_ref())?;
        let cldr = if config.track_cldr {
            Some(Cldr::from_registry(transport.as_ref())?)
        } else {
            previous.as_ref().and_then(|m| m.cldr.clone())
        };

        let manifest = Manifest::new(&config.root, ucd, cldr);
        let manifest = Self::sync(manifest, previous.as_ref(), transport.as_ref())?;
        manifest.save()?;

        Ok(Mirror {
            config,
            manifest,
            transport,
        })
    }

    /// Bring the files of a new manifest up to date
    fn sync(
        manifest: Manifest,
        previous: Option<&Manifest>,
        transport: &dyn Transport,
    ) -> Result<Manifest> {
        let files = manifest.files();
        let mut versions = files.scan_retrieved_versions()?;

        // Only complete existing versions if the previous manifest disagrees.
        let previous_versions = previous.map(|m| m.versions.as_slice()).unwrap_or(&[]);
        if previous_versions != versions.as_slice() {
            files.retrieve_all(transport, versions.iter().copied())?;
        }

        if !versions.contains(&manifest.ucd) {
            files.retrieve_all(transport, [manifest.ucd])?;
            versions.push(manifest.ucd);
        }

        if let Some(cldr) = &manifest.cldr {
            let previous_cldr = previous.and_then(|m| m.cldr.as_ref()).map(|c| c.version);
            if previous_cldr != Some(cldr.version) {
                info!(target: "ucdb::mirror", version = %cldr.version, "CLDR annotations changed");
            }
            cldr.retrieve_all(transport, &manifest.root)?;
        }

        Ok(manifest.with_inventory(versions))
    }

    /// Determine the latest UCD version from the Consortium's ReadMe
    pub fn retrieve_latest_version(transport: &dyn Transport) -> Result<Version> {
        info!(target: "ucdb::mirror", url = LATEST_README_URL, "Retrieving latest UCD version");
        let bytes = transport.fetch(LATEST_README_URL, None)?;
        let text = String::from_utf8_lossy(&bytes);

        let captures = regex!(r"Version (\d+[.]\d+[.]\d+) of the Unicode Standard")
            .captures(&text)
            .ok_or_else(|| VersionError::Malformed("ReadMe.txt without version".to_string()))?;
        let version = Version::parse(&captures[1])?.validate_ucd()?;

        info!(target: "ucdb::mirror", %version, "Latest UCD version");
        Ok(version)
    }

    /// Configuration the mirror was set up with
    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Mirror root
    pub fn root(&self) -> &Path {
        &self.manifest.root
    }

    /// Current manifest
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Latest published UCD version as of the last sync
    pub fn latest_version(&self) -> Version {
        self.manifest.ucd
    }

    /// Mirrored UCD versions, sorted
    pub fn retrieved_versions(&self) -> &[Version] {
        &self.manifest.versions
    }

    /// File manager of the mirror
    pub fn files(&self) -> FileManager {
        self.manifest.files()
    }

    /// Upstream URL of a file, `None` if it does not exist for the version
    pub fn url(&self, filename: &str, version: Version) -> Result<Option<String>> {
        self.files().url(filename, version)
    }

    /// Open a mirrored file, `None` if it does not exist for the version
    pub fn open(&self, filename: &str, version: Version) -> Result<Option<File>> {
        self.files().open(filename, version)
    }

    /// Make sure all files of `version` are mirrored
    pub fn require(&mut self, version: Version) -> Result<Version> {
        let version = self.manifest.check_version(version)?;
        if self.manifest.contains(version) {
            return Ok(version);
        }

        self.files().retrieve_all(self.transport.as_ref(), [version])?;
        let mut versions = self.manifest.versions.clone();
        versions.push(version);
        self.manifest = self.manifest.clone().with_inventory(versions);
        self.manifest.save()?;
        Ok(version)
    }

    /// Make sure all files of all supported versions are mirrored
    pub fn require_all(&mut self) -> Result<()> {
        let latest = self.manifest.ucd;
        let missing: Vec<Version> = Version::all_supported()
            .filter(|v| *v <= latest && !self.manifest.contains(*v))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }

        self.files().retrieve_all(self.transport.as_ref(), missing.iter().copied())?;
        let mut versions = self.manifest.versions.clone();
        versions.extend(missing);
        self.manifest = self.manifest.clone().with_inventory(versions);
        self.manifest.save()
    }
}
