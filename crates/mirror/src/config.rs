//! Mirror configuration and default locations

use chrono::Duration;
use std::env;
use std::path::PathBuf;

/// Default freshness window of a manifest, in days
pub const DEFAULT_MAX_AGE_DAYS: u32 = 7;

/// Configuration of a [`Mirror`](crate::Mirror)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorConfig {
    /// Mirror root directory
    pub root: PathBuf,
    /// A manifest younger than this is reused without network access
    pub max_age: Duration,
    /// Look up CLDR annotation metadata when syncing
    pub track_cldr: bool,
}

impl MirrorConfig {
    /// Configuration with default settings for `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        MirrorConfig {
            root: root.into(),
            max_age: Duration::days(i64::from(DEFAULT_MAX_AGE_DAYS)),
            track_cldr: true,
        }
    }

    /// Set the freshness window
    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Enable or disable CLDR tracking
    pub fn track_cldr(mut self, track_cldr: bool) -> Self {
        self.track_cldr = track_cldr;
        self
    }
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self::new(default_root())
    }
}

/// Check whether we are running in continuous integration
pub fn is_ci() -> bool {
    env::var("CI").map(|v| v == "true").unwrap_or(false)
}

fn home_dir() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// The operating system's directory for application caches
pub fn app_cache_dir() -> PathBuf {
    if cfg!(windows) {
        match env::var_os("LOCALAPPDATA") {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => home_dir(),
        }
    } else if cfg!(target_os = "macos") {
        home_dir().join("Library").join("Caches")
    } else {
        match env::var("XDG_CACHE_HOME") {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
            _ => home_dir().join(".cache"),
        }
    }
}

/// Default mirror root
///
/// `./ucd` in CI, the application cache otherwise.
pub fn default_root() -> PathBuf {
    if is_ci() {
        PathBuf::from("ucd")
    } else {
        app_cache_dir().join("ucdb").join("ucd")
    }
}
