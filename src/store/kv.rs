use crate::error::{AppError, Result};
use crate::store::StoreKey;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

/// Key-value store over a single SQLite table.
///
/// One `set` replaces the whole value for a key in a single row upsert:
/// within one write there is no partial corruption, and across
/// uncoordinated writers the last full write wins.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Open or create the store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)
            .map_err(|e| AppError::Internal(format!("Failed to open store: {}", e)))?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| AppError::Internal(format!("Failed to open store: {}", e)))?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<()> {
        let conn = self.conn.lock();

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
        .map_err(|e| AppError::Internal(format!("Failed to initialize schema: {}", e)))?;

        Ok(())
    }

    /// Get the raw JSON string stored under a key.
    pub fn get_raw(&self, key: &StoreKey) -> Result<Option<String>> {
        let conn = self.conn.lock();
        conn.query_row(
            "SELECT value FROM kv WHERE key = ?1",
            params![key.to_string()],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| AppError::Internal(format!("Failed to read key: {}", e)))
    }

    /// Set the raw JSON string stored under a key, replacing any prior value.
    pub fn set_raw(&self, key: &StoreKey, value: &str) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key.to_string(), value],
        )
        .map_err(|e| AppError::Internal(format!("Failed to write key: {}", e)))?;
        Ok(())
    }

    /// Remove a key. Removing an absent key is not an error.
    pub fn remove(&self, key: &StoreKey) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM kv WHERE key = ?1", params![key.to_string()])
            .map_err(|e| AppError::Internal(format!("Failed to remove key: {}", e)))?;
        Ok(())
    }

    /// Remove every key (debug/reset use).
    pub fn clear(&self) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM kv", [])
            .map_err(|e| AppError::Internal(format!("Failed to clear store: {}", e)))?;
        Ok(())
    }

    /// Decode the value stored under a key.
    ///
    /// A missing key and a value that no longer parses both come back as
    /// `None`; a corrupt document is discarded rather than propagated.
    pub fn get_value<T: DeserializeOwned>(&self, key: &StoreKey) -> Result<Option<T>> {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding malformed stored value");
                Ok(None)
            }
        }
    }

    /// Decode the collection stored under a key, empty when absent or
    /// malformed.
    pub fn get_list<T: DeserializeOwned>(&self, key: &StoreKey) -> Result<Vec<T>> {
        Ok(self.get_value(key)?.unwrap_or_default())
    }

    /// Encode and store a value under a key.
    pub fn set_value<T: Serialize>(&self, key: &StoreKey, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .map_err(|e| AppError::Internal(format!("Failed to encode value: {}", e)))?;
        self.set_raw(key, &raw)
    }
}
