//! File locations and retrieval
//!
//! Files are mirrored per UCD version, always as the full [`UCD_FILES`] set.
//! Upstream, the files are spread over several directories and some only
//! exist from a certain version onward. [`FileManager::url`] encodes those
//! rules and returns `None` for a file that validly does not exist for a
//! version. Callers treat such a file as empty.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use ucdb_core::{regex, Error, Result, Version, VersionError};

use crate::transport::Transport;

/// Emoji files that moved into the UCD proper with 13.0
pub const CORE_EMOJI_FILES: &[&str] = &["emoji-data.txt", "emoji-variation-sequences.txt"];

/// All emoji files
pub const EMOJI_FILES: &[&str] = &[
    "emoji-data.txt",
    "emoji-variation-sequences.txt",
    "emoji-sequences.txt",
    "emoji-test.txt",
    "emoji-zwj-sequences.txt",
];

/// All files mirrored for a UCD version
pub const UCD_FILES: &[&str] = &[
    "emoji-data.txt",
    "emoji-variation-sequences.txt",
    "emoji-sequences.txt",
    "emoji-test.txt",
    "emoji-zwj-sequences.txt",
    "Blocks.txt",
    "DerivedAge.txt",
    "DerivedCombiningClass.txt",
    "DerivedCoreProperties.txt",
    "DerivedGeneralCategory.txt",
    "EastAsianWidth.txt",
    "GraphemeBreakProperty.txt",
    "GraphemeBreakTest.txt",
    "IndicSyllabicCategory.txt",
    "PropertyValueAliases.txt",
    "PropList.txt",
    "Scripts.txt",
    "UnicodeData.txt",
];

const BASE_URL: &str = "https://www.unicode.org/Public";

/// Write `bytes` to a temporary sibling of `path`, then rename it into place
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let temp_path = path.with_extension("next");

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&temp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    if let Some(parent) = path.parent() {
        if parent.exists() {
            let dir = File::open(parent)?;
            dir.sync_all()?;
        }
    }
    Ok(())
}

fn is_loose_version(name: &str) -> bool {
    regex!(r"^[0-9]+[.][0-9]+[.][0-9]+").is_match(name)
}

fn is_strict_version(name: &str) -> bool {
    regex!(r"^[1-9][0-9]*[.](0|[1-9][0-9]*)[.](0|[1-9][0-9]*)$").is_match(name)
}

/// Locations of the files of one mirror
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileManager {
    root: PathBuf,
    latest: Version,
}

impl FileManager {
    /// Create a file manager for `root`, with `latest` the latest published UCD version
    pub fn new(root: impl Into<PathBuf>, latest: Version) -> Self {
        FileManager {
            root: root.into(),
            latest,
        }
    }

    /// Mirror root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Latest published UCD version
    pub fn latest(&self) -> Version {
        self.latest
    }

    /// Upstream URL of a file for a UCD version
    ///
    /// Fails for unknown, unsupported and unreleased versions as well as for
    /// files outside [`UCD_FILES`]. Returns `None` if the file did not exist
    /// for the version.
    pub fn url(&self, filename: &str, version: Version) -> Result<Option<String>> {
        let version = version.validate_ucd()?;
        if version > self.latest {
            return Err(VersionError::Unreleased {
                version,
                latest: self.latest,
            }
            .into());
        }

        let directory = match filename {
            "GraphemeBreakProperty.txt" | "GraphemeBreakTest.txt" => {
                format!("{version}/ucd/auxiliary")
            }
            "DerivedCombiningClass.txt" | "DerivedGeneralCategory.txt" => {
                format!("{version}/ucd/extracted")
            }
            _ if CORE_EMOJI_FILES.contains(&filename) && version >= Version::new(13, 0, 0) => {
                format!("{version}/ucd/emoji")
            }
            _ if EMOJI_FILES.contains(&filename) => {
                let emoji = version.to_emoji();
                let absent = emoji.major == 0
                    || (filename != "emoji-data.txt" && emoji <= Version::new(1, 0, 0))
                    || (filename == "emoji-test.txt" && emoji <= Version::new(3, 0, 0))
                    || (filename == "emoji-variation-sequences.txt"
                        && emoji <= Version::new(4, 0, 0));
                if absent {
                    return Ok(None);
                }
                format!("emoji/{}", emoji.short_format())
            }
            // Provisional in 6.0, normative since 7.0
            "IndicSyllabicCategory.txt" if version < Version::new(6, 0, 0) => return Ok(None),
            _ if UCD_FILES.contains(&filename) => format!("{version}/ucd"),
            _ => return Err(Error::UnsupportedFile(filename.to_string())),
        };

        Ok(Some(format!("{BASE_URL}/{directory}/{filename}")))
    }

    /// Local path of a file for a UCD version
    pub fn path(&self, filename: &str, version: Version) -> PathBuf {
        self.root.join(version.to_string()).join(filename)
    }

    /// Download `url` to `path` unless `path` already exists
    ///
    /// Returns whether a download happened.
    pub fn retrieve(&self, transport: &dyn Transport, url: &str, path: &Path) -> Result<bool> {
        if path.is_file() {
            return Ok(false);
        }

        info!(target: "ucdb::mirror", url, path = %path.display(), "Retrieving UCD file");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = transport.fetch(url, None)?;
        write_atomic(path, &bytes)?;
        Ok(true)
    }

    /// Retrieve every missing file of the given versions
    ///
    /// Returns the number of downloaded files.
    pub fn retrieve_all<I>(&self, transport: &dyn Transport, versions: I) -> Result<usize>
    where
        I: IntoIterator<Item = Version>,
    {
        let mut count = 0;
        for version in versions {
            info!(target: "ucdb::mirror", %version, "Retrieving UCD files");
            for filename in UCD_FILES {
                let Some(url) = self.url(filename, version)? else {
                    debug!(target: "ucdb::mirror", filename, %version, "File does not exist for version");
                    continue;
                };
                if self.retrieve(transport, &url, &self.path(filename, version))? {
                    count += 1;
                }
            }
        }
        Ok(count)
    }

    /// Versions with a directory in the mirror root, sorted
    ///
    /// Only checks directory names, not the files inside. Entries that look
    /// like versions but are not supported UCD versions are errors.
    pub fn scan_retrieved_versions(&self) -> Result<Vec<Version>> {
        debug!(target: "ucdb::mirror", root = %self.root.display(), "Scanning mirror for versions");
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut versions = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !is_loose_version(&name) {
                continue;
            }
            if !is_strict_version(&name) {
                return Err(VersionError::Malformed(name).into());
            }
            if !entry.file_type()?.is_dir() {
                return Err(Error::InvalidOperation(format!(
                    "entry \"{}\" in mirror \"{}\" is not a directory; please remove",
                    name,
                    self.root.display()
                )));
            }

            let version = Version::parse(&name)?.validate_ucd()?;
            if version > self.latest {
                return Err(VersionError::Unreleased {
                    version,
                    latest: self.latest,
                }
                .into());
            }
            versions.push(version);
        }

        versions.sort();
        Ok(versions)
    }

    /// Open a mirrored file
    ///
    /// Returns `None` if the file does not exist for the version. A file that
    /// should exist but has not been retrieved is an I/O error.
    pub fn open(&self, filename: &str, version: Version) -> Result<Option<File>> {
        let path = self.path(filename, version);
        if !path.is_file() && self.url(filename, version)?.is_none() {
            return Ok(None);
        }
        Ok(Some(File::open(&path)?))
    }
}
