//! Local mirror of Unicode Character Database files
//!
//! The mirror keeps one directory per UCD version under a root directory,
//! plus a `manifest.json` recording the latest published UCD version, the
//! mirrored versions, CLDR annotation metadata and the time of the last sync.
//! The English CLDR annotations sit next to the manifest.
//!
//! - Transport: the network seam; `HttpTransport` talks to unicode.org
//! - FileManager: where each file lives upstream and on disk
//! - Manifest: persisted state of one mirror root
//! - Mirror: `setup`, `require` and `require_all` on top of the above

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cldr;
pub mod config;
pub mod files;
pub mod manifest;
pub mod mirror;
pub mod transport;

pub use cldr::{Annotations, Cldr};
pub use config::{app_cache_dir, default_root, is_ci, MirrorConfig, DEFAULT_MAX_AGE_DAYS};
pub use files::{FileManager, CORE_EMOJI_FILES, EMOJI_FILES, UCD_FILES};
pub use manifest::{Manifest, MANIFEST_FILE, MANIFEST_SCHEMA};
pub use mirror::{Mirror, LATEST_README_URL};
pub use transport::{HttpTransport, OfflineTransport, Transport, USER_AGENT};
