// Local key-value storage backed by the sled embedded database

mod profile_store;

use anyhow::{Context, Result};
use sled::Db;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub use profile_store::ProfileStore;

const SETTINGS_TREE: &str = "settings";

/// Opaque string key-value store used for the profile, onboarding flag and API key
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Returns true when a value was removed
    fn delete(&self, key: &str) -> Result<bool>;
    /// Remove several keys in one step; either all are removed or none are
    fn delete_all(&self, keys: &[&str]) -> Result<()>;
}

/// Storage on disk in a sled database
pub struct SledStore {
    db: Db,
}

impl SledStore {
    /// Get database directory path (~/.vyra/db)
    pub fn db_path() -> Result<PathBuf> {
        // Check for test environment variable first
        if let Ok(test_path) = std::env::var("VYRA_DB_PATH") {
            return Ok(PathBuf::from(test_path));
        }

        let config_dir = crate::config::Config::config_dir()?;
        Ok(config_dir.join("db"))
    }

    /// Open the database at the default location
    pub fn init() -> Result<Self> {
        Self::open(Self::db_path()?)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Initializing sled database at {:?}", path);

        let db = sled::open(path).context("Failed to open sled database")?;

        Ok(Self { db })
    }

    fn tree(&self) -> Result<sled::Tree> {
        self.db
            .open_tree(SETTINGS_TREE)
            .context("Failed to open settings tree")
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let tree = self.tree()?;

        match tree.get(key.as_bytes()).context("Failed to read value")? {
            Some(value) => {
                let value = String::from_utf8(value.to_vec())
                    .with_context(|| format!("Value for {} is not valid UTF-8", key))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let tree = self.tree()?;

        tree.insert(key.as_bytes(), value.as_bytes())
            .context("Failed to insert value")?;

        self.db.flush().context("Failed to flush database")?;

        tracing::debug!("Stored {}", key);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool> {
        let tree = self.tree()?;

        let deleted = tree
            .remove(key.as_bytes())
            .context("Failed to delete value")?
            .is_some();

        if deleted {
            self.db.flush().context("Failed to flush database")?;
            tracing::debug!("Deleted {}", key);
        }

        Ok(deleted)
    }

    fn delete_all(&self, keys: &[&str]) -> Result<()> {
        let tree = self.tree()?;

        let mut batch = sled::Batch::default();
        for key in keys {
            batch.remove(key.as_bytes());
        }

        tree.apply_batch(batch).context("Failed to delete values")?;
        self.db.flush().context("Failed to flush database")?;

        tracing::debug!("Deleted {}", keys.join(", "));
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory store lock poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.lock()?.remove(key).is_some())
    }

    fn delete_all(&self, keys: &[&str]) -> Result<()> {
        let mut values = self.lock()?;
        for key in keys {
            values.remove(*key);
        }
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        (**self).delete(key)
    }

    fn delete_all(&self, keys: &[&str]) -> Result<()> {
        (**self).delete_all(keys)
    }
}
