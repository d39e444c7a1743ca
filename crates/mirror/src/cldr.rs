//! CLDR annotations
//!
//! CLDR publishes its annotations as npm packages. The mirror tracks the
//! latest version of the English annotations and derived annotations and
//! where their archives live. Both packages are released in lockstep.
//!
//! Only one JSON file of each archive is kept, as
//! `<root>/annotations-<version>.json` and
//! `<root>/derived-annotations-<version>.json`. [`Annotations`] reads them
//! back as a map from emoji to their text-to-speech names.

use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tar::Archive;
use tracing::{debug, info};
use ucdb_core::{CodePoint, Error, Result, Version, VersionError};

use crate::files::write_atomic;
use crate::transport::Transport;

/// npm package with the CLDR annotations
pub const ANNOTATIONS_PACKAGE: &str = "https://registry.npmjs.org/cldr-annotations-modern";

/// npm package with the derived CLDR annotations
pub const DERIVED_ANNOTATIONS_PACKAGE: &str =
    "https://registry.npmjs.org/cldr-annotations-derived-modern";

/// Archive member with the English annotations
pub const ANNOTATIONS_MEMBER: &str = "package/annotations/en/annotations.json";

/// Archive member with the English derived annotations
pub const DERIVED_ANNOTATIONS_MEMBER: &str = "package/annotationsDerived/en/annotations.json";

/// Accept header asking the registry for abbreviated metadata
pub const REGISTRY_ACCEPT: &str =
    "application/vnd.npm.install-v1+json; q=1.0, application/json; q=0.8";

#[derive(Deserialize)]
struct PackageMetadata {
    #[serde(rename = "dist-tags")]
    dist_tags: DistTags,
    versions: HashMap<String, PackageVersion>,
}

#[derive(Deserialize)]
struct DistTags {
    latest: String,
}

#[derive(Deserialize)]
struct PackageVersion {
    dist: Dist,
}

#[derive(Deserialize)]
struct Dist {
    tarball: String,
}

/// Version and archive locations of the CLDR annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Cldr {
    /// CLDR version
    pub version: Version,
    /// Archive URL of the annotations
    pub annotations: String,
    /// Archive URL of the derived annotations
    pub derived_annotations: String,
}

impl Cldr {
    /// Look up the latest version and archive URL of one npm package
    pub fn retrieve_metadata(transport: &dyn Transport, package: &str) -> Result<(Version, String)> {
        info!(target: "ucdb::mirror", package, "Retrieving CLDR metadata");
        let bytes = transport.fetch(package, Some(REGISTRY_ACCEPT))?;
        parse_metadata(package, &bytes)
    }

    /// Look up both annotation packages
    ///
    /// Fails if their latest versions differ.
    pub fn from_registry(transport: &dyn Transport) -> Result<Self> {
        let (version, annotations) = Self::retrieve_metadata(transport, ANNOTATIONS_PACKAGE)?;
        let (derived_version, derived_annotations) =
            Self::retrieve_metadata(transport, DERIVED_ANNOTATIONS_PACKAGE)?;

        if version != derived_version {
            return Err(VersionError::Inconsistent {
                component: "CLDR annotations".to_string(),
                first: version.to_string(),
                second: derived_version.to_string(),
            }
            .into());
        }

        Ok(Cldr {
            version,
            annotations,
            derived_annotations,
        })
    }

    /// File name of a local copy of a component, e.g. `annotations-44.1.0.json`
    pub fn filename(&self, stem: &str, suffix: &str) -> String {
        format!("{stem}-{}{suffix}", self.version)
    }

    /// Archive URL, archive member and file stem of both components
    pub fn components(&self) -> [(&str, &'static str, &'static str); 2] {
        [
            (self.annotations.as_str(), ANNOTATIONS_MEMBER, "annotations"),
            (
                self.derived_annotations.as_str(),
                DERIVED_ANNOTATIONS_MEMBER,
                "derived-annotations",
            ),
        ]
    }

    /// Local path of a component's annotations
    pub fn path(&self, root: &Path, stem: &str) -> PathBuf {
        root.join(self.filename(stem, ".json"))
    }

    /// Download the archive at `url` and extract `member` to `path`
    pub fn retrieve(transport: &dyn Transport, url: &str, member: &str, path: &Path) -> Result<()> {
        info!(target: "ucdb::mirror", url, path = %path.display(), "Retrieving CLDR component");
        let bytes = transport.fetch(url, None)?;
        let annotations = extract_member(url, &bytes, member)?;
        write_atomic(path, &annotations)?;
        Ok(())
    }

    /// Retrieve the annotations of both components unless already present
    ///
    /// Returns the number of downloaded archives.
    pub fn retrieve_all(&self, transport: &dyn Transport, root: &Path) -> Result<usize> {
        fs::create_dir_all(root)?;
        let mut count = 0;
        for (url, member, stem) in self.components() {
            let path = self.path(root, stem);
            if path.is_file() {
                continue;
            }
            Self::retrieve(transport, url, member, &path)?;
            count += 1;
        }
        Ok(count)
    }
}

fn archive_error(url: &str, e: io::Error) -> Error {
    Error::Serialization(format!("CLDR archive {url}: {e}"))
}

/// Extract one regular file from a gzipped tar archive
fn extract_member(url: &str, bytes: &[u8], member: &str) -> Result<Vec<u8>> {
    let mut archive = Archive::new(GzDecoder::new(bytes));

    for entry in archive.entries().map_err(|e| archive_error(url, e))? {
        let mut entry = entry.map_err(|e| archive_error(url, e))?;
        let path = entry
            .path()
            .map_err(|e| archive_error(url, e))?
            .to_string_lossy()
            .to_string();
        if path != member {
            continue;
        }

        // No symlinks or directories
        if !entry.header().entry_type().is_file() {
            return Err(Error::Serialization(format!(
                "member \"{member}\" of CLDR archive {url} is not a file"
            )));
        }
        let mut data = Vec::new();
        entry
            .read_to_end(&mut data)
            .map_err(|e| archive_error(url, e))?;
        return Ok(data);
    }

    Err(Error::Serialization(format!(
        "CLDR archive {url} has no member \"{member}\""
    )))
}

fn parse_metadata(package: &str, bytes: &[u8]) -> Result<(Version, String)> {
    let metadata: PackageMetadata = serde_json::from_slice(bytes)
        .map_err(|e| Error::Serialization(format!("npm metadata for {package}: {e}")))?;

    let latest = metadata.dist_tags.latest;
    let tarball = metadata
        .versions
        .get(&latest)
        .map(|v| v.dist.tarball.clone())
        .ok_or_else(|| {
            Error::Serialization(format!("npm metadata for {package} lacks version {latest}"))
        })?;

    let version = Version::parse(&latest)?;
    info!(target: "ucdb::mirror", package, %version, tarball, "CLDR component available");
    Ok((version, tarball))
}

// ============================================================================
// Annotations
// ============================================================================

#[derive(Deserialize)]
struct AnnotationFile {
    #[serde(alias = "annotationsDerived")]
    annotations: AnnotationSet,
}

#[derive(Deserialize)]
struct AnnotationSet {
    annotations: HashMap<String, Annotation>,
}

#[derive(Deserialize)]
struct Annotation {
    #[serde(default)]
    tts: Vec<String>,
}

/// Emoji names from the CLDR annotations, keyed by emoji text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    names: HashMap<String, String>,
}

impl Annotations {
    /// Parse one annotations file, plain or derived
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let file: AnnotationFile = serde_json::from_slice(bytes)
            .map_err(|e| Error::Serialization(format!("CLDR annotations: {e}")))?;
        let names = file
            .annotations
            .annotations
            .into_iter()
            .filter_map(|(emoji, annotation)| {
                annotation.tts.into_iter().next().map(|name| (emoji, name))
            })
            .collect();
        Ok(Annotations { names })
    }

    /// Read the annotations of both components from a mirror root
    ///
    /// A component that has not been retrieved contributes no names.
    pub fn load(root: &Path, cldr: &Cldr) -> Result<Self> {
        let mut annotations = Annotations::default();
        for (_, _, stem) in cldr.components() {
            let path = cldr.path(root, stem);
            if !path.is_file() {
                debug!(target: "ucdb::mirror", path = %path.display(), "No CLDR annotations");
                continue;
            }
            annotations.extend(Self::from_json(&fs::read(&path)?)?);
        }
        Ok(annotations)
    }

    /// Add the names of `other`, keeping existing names
    pub fn extend(&mut self, other: Annotations) {
        for (emoji, name) in other.names {
            self.names.entry(emoji).or_insert(name);
        }
    }

    /// Name of an emoji
    ///
    /// CLDR drops emoji variation selectors from its keys, so a sequence
    /// without a name of its own is retried without them.
    pub fn get(&self, codepoints: &[CodePoint]) -> Option<&str> {
        let text: String = codepoints.iter().filter_map(|cp| cp.to_char()).collect();
        if let Some(name) = self.names.get(&text) {
            return Some(name.as_str());
        }
        let stripped: String = codepoints
            .iter()
            .filter(|cp| **cp != CodePoint::EMOJI_VARIATION_SELECTOR)
            .filter_map(|cp| cp.to_char())
            .collect();
        self.names.get(&stripped).map(String::as_str)
    }

    /// Number of named emoji
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether there are no names
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
