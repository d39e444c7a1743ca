//! Database configuration via `ucdb.toml`
//!
//! A directory opened with [`Database::open`](super::Database::open) holds a
//! `ucdb.toml` next to the mirrored files. On first open, a default file is
//! created. To pin a UCD version or change the freshness window, edit the
//! file and restart.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use ucdb_core::{Error, Result, Version};
use ucdb_mirror::{default_root, MirrorConfig, DEFAULT_MAX_AGE_DAYS};

/// Config file name placed in the mirror root.
pub const CONFIG_FILE_NAME: &str = "ucdb.toml";

/// Database configuration loaded from `ucdb.toml`.
///
/// # Example
///
/// ```toml
/// # UCD version to load; the latest published version if absent
/// version = "15.1.0"
///
/// # Reuse the mirror's manifest for this many days without network access
/// max_age_days = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Mirror root; the per-user cache directory if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// UCD version; the latest published version if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Freshness window of the mirror's manifest, in days.
    #[serde(default = "default_max_age_days")]
    pub max_age_days: u32,
    /// Look up CLDR annotation metadata when syncing the mirror.
    #[serde(default = "default_track_cldr")]
    pub track_cldr: bool,
}

fn default_max_age_days() -> u32 {
    DEFAULT_MAX_AGE_DAYS
}

fn default_track_cldr() -> bool {
    true
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            root: None,
            version: None,
            max_age_days: default_max_age_days(),
            track_cldr: default_track_cldr(),
        }
    }
}

impl DatabaseConfig {
    /// Configuration for a mirror root, with default settings otherwise.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }

    /// Parse the configured version.
    ///
    /// # Errors
    ///
    /// Returns a versioning error if the string is not a known or future UCD
    /// version of at least 4.1.
    pub fn version(&self) -> Result<Option<Version>> {
        self.version
            .as_deref()
            .map(|text| Version::parse(text).and_then(Version::validate_ucd))
            .transpose()
    }

    /// Mirror configuration derived from this configuration.
    pub fn mirror_config(&self) -> MirrorConfig {
        let root = self.root.clone().unwrap_or_else(default_root);
        MirrorConfig::new(root)
            .max_age(Duration::days(i64::from(self.max_age_days)))
            .track_cldr(self.track_cldr)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# ucdb configuration
#
# UCD version to load (default: the latest published version)
# version = "15.1.0"

# Reuse the mirror's manifest for this many days before checking
# unicode.org for a newer release (default: 7)
max_age_days = 7

# Look up CLDR annotation metadata when syncing (default: true)
track_cldr = true
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it names
    /// an invalid version.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DatabaseConfig = toml::from_str(&content).map_err(|e| {
            Error::Serialization(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        // Validate the version eagerly
        config.version()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
