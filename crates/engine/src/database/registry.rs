//! Global database registry for shared instances
//!
//! Ensures only one prepared Database exists per mirror root and version.
//! Uses weak references to allow cleanup when all references are dropped.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Weak};
use tracing::info;
use ucdb_core::{Result, Version};
use ucdb_mirror::{HttpTransport, Transport};

use super::{Database, DatabaseConfig};

/// Mirror root and configured version; `None` stands for the latest version
type RegistryKey = (PathBuf, Option<Version>);

/// Global registry of shared databases (root and version -> weak reference)
static SHARED_DATABASES: Lazy<Mutex<HashMap<RegistryKey, Weak<Database>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

impl Database {
    /// Prepared and optimized database shared across the process.
    ///
    /// Returns the existing instance for the same mirror root and version if
    /// one is still alive.
    pub fn shared(config: DatabaseConfig) -> Result<Arc<Database>> {
        Self::shared_with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Like [`Database::shared`], retrieving files through `transport`.
    pub fn shared_with_transport(
        config: DatabaseConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Arc<Database>> {
        let key: RegistryKey = (config.mirror_config().root, config.version()?);

        // Hold the lock while preparing so that only one thread does the work
        let mut registry = SHARED_DATABASES.lock();
        if let Some(db) = registry.get(&key).and_then(Weak::upgrade) {
            info!(target: "ucdb::db", root = ?key.0, "Returning existing database instance");
            return Ok(db);
        }

        let mut db = Database::with_config(config).with_transport(transport);
        db.optimize()?;

        let db = Arc::new(db);
        registry.insert(key, Arc::downgrade(&db));
        Ok(db)
    }
}
