use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error};

use crate::database::DatabasePool;
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use super::storage::DatabaseStorage;

/// Repository trait for key-value record sets.
///
/// Each key holds a whole record set; there are no partial updates and no
/// transactions spanning keys.
#[async_trait]
pub trait RecordStoreTrait {
    /// Get all records stored under a key
    async fn load(&self, key: &str) -> Result<Vec<Value>, RepositoryError>;

    /// Replace all records stored under a key
    async fn save(&self, key: &str, records: Vec<Value>) -> Result<(), RepositoryError>;

    /// Drop every record set
    async fn clear(&self) -> Result<(), RepositoryError>;

    /// Describe the backing store, for health reporting
    fn describe(&self) -> String;
}

/// Record store backed by SQLite when a pool is configured, otherwise kept in
/// memory.
///
/// With a pool, database failures are returned to the caller. A failed read
/// must never be answered from memory, since callers write the set back.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    pool: Option<DatabasePool>,
    /// Record sets for a store without a database
    storage: InMemoryStorage,
}

impl RecordStore {
    /// Create a store that only keeps records in memory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store persisting to the given database pool
    pub fn with_pool(pool: DatabasePool) -> Self {
        Self {
            pool: Some(pool),
            storage: InMemoryStorage::new(),
        }
    }
}

#[async_trait]
impl RecordStoreTrait for RecordStore {
    async fn load(&self, key: &str) -> Result<Vec<Value>, RepositoryError> {
        match &self.pool {
            Some(pool) => DatabaseStorage::load(pool, key).await.map_err(|e| {
                error!("Failed to load record set {} from database: {}", key, e);
                e
            }),
            None => {
                debug!("Database not configured, using in-memory storage for load({})", key);
                self.storage.load(key).await
            }
        }
    }

    async fn save(&self, key: &str, records: Vec<Value>) -> Result<(), RepositoryError> {
        match &self.pool {
            Some(pool) => DatabaseStorage::save(pool, key, &records).await.map_err(|e| {
                error!("Failed to store record set {} in database: {}", key, e);
                e
            }),
            None => {
                debug!("Database not configured, using in-memory storage for save({})", key);
                self.storage.save(key, &records).await
            }
        }
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        match &self.pool {
            Some(pool) => DatabaseStorage::clear(pool).await,
            None => self.storage.clear().await,
        }
    }

    fn describe(&self) -> String {
        match &self.pool {
            Some(pool) => crate::database::get_connection_info(pool),
            None => "In-memory record store".to_string(),
        }
    }
}

/// Mock record store for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;
    use rusqlite::ffi;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// The error SQLite reports when another writer holds the database
    fn busy(operation: &str, key: &str) -> RepositoryError {
        RepositoryError::Sqlite(rusqlite::Error::SqliteFailure(
            ffi::Error::new(ffi::SQLITE_BUSY),
            Some(format!("database is locked during {} of {}", operation, key)),
        ))
    }

    /// Mock implementation of RecordStoreTrait that can be told to fail
    #[derive(Debug, Default)]
    pub struct MockRecordStore {
        record_sets: Mutex<HashMap<String, Vec<Value>>>,
        fail_saves: bool,
        fail_loads: bool,
    }

    impl MockRecordStore {
        /// Create a new empty mock store
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a mock store with a preloaded record set
        pub fn with_records(self, key: &str, records: Vec<Value>) -> Self {
            if let Ok(mut sets) = self.record_sets.lock() {
                sets.insert(key.to_string(), records);
            }
            self
        }

        /// Configure every save to fail
        pub fn with_save_failure(mut self) -> Self {
            self.fail_saves = true;
            self
        }

        /// Configure every load to fail
        pub fn with_load_failure(mut self) -> Self {
            self.fail_loads = true;
            self
        }
    }

    #[async_trait]
    impl RecordStoreTrait for MockRecordStore {
        async fn load(&self, key: &str) -> Result<Vec<Value>, RepositoryError> {
            if self.fail_loads {
                return Err(busy("load", key));
            }
            let sets = self.record_sets.lock()?;
            Ok(sets.get(key).cloned().unwrap_or_default())
        }

        async fn save(&self, key: &str, records: Vec<Value>) -> Result<(), RepositoryError> {
            if self.fail_saves {
                return Err(busy("save", key));
            }
            let mut sets = self.record_sets.lock()?;
            sets.insert(key.to_string(), records);
            Ok(())
        }

        async fn clear(&self) -> Result<(), RepositoryError> {
            let mut sets = self.record_sets.lock()?;
            sets.clear();
            Ok(())
        }

        fn describe(&self) -> String {
            "Mock record store".to_string()
        }
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;
    use super::tests::MockRecordStore;

    #[tokio::test]
    async fn test_memory_only_store() {
        let store = RecordStore::new();
        store.save("ew_roles", vec![serde_json::json!({"id": 1})]).await.unwrap();
        assert_eq!(store.load("ew_roles").await.unwrap().len(), 1);
        assert_eq!(store.describe(), "In-memory record store");

        store.clear().await.unwrap();
        assert!(store.load("ew_roles").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_database_backed_store() {
        let pool = crate::database::create_database_pool(
            &crate::database::DatabaseConfig::in_memory(),
        )
        .unwrap();
        let store = RecordStore::with_pool(pool);

        store.save("ew_claims", vec![serde_json::json!({"id": "c1"})]).await.unwrap();
        assert_eq!(store.load("ew_claims").await.unwrap().len(), 1);
        assert!(store.describe().contains("SQLite"));
    }

    #[tokio::test]
    async fn test_database_failure_is_not_answered_from_memory() {
        let config = crate::database::DatabaseConfig {
            timeout_seconds: 1,
            ..crate::database::DatabaseConfig::in_memory()
        };
        let pool = crate::database::create_database_pool(&config).unwrap();
        let store = RecordStore::with_pool(pool.clone());

        let saved = vec![
            serde_json::json!({"id": "m1"}),
            serde_json::json!({"id": "m2"}),
            serde_json::json!({"id": "m3"}),
        ];
        store.save("ew_metrics", saved.clone()).await.unwrap();

        // Hold the only connection so the store times out
        let crate::database::DatabasePool::SQLite(inner) = &pool;
        let held = inner.get().unwrap();
        assert!(matches!(
            store.load("ew_metrics").await,
            Err(RepositoryError::Pool(_))
        ));
        assert!(store.save("ew_metrics", vec![serde_json::json!({"id": "new"})]).await.is_err());
        drop(held);

        assert_eq!(store.load("ew_metrics").await.unwrap(), saved);
    }

    #[tokio::test]
    async fn test_mock_failures_look_like_storage_errors() {
        let store = MockRecordStore::new().with_save_failure();
        assert!(matches!(
            store.save("ew_roles", Vec::new()).await,
            Err(RepositoryError::Sqlite(_))
        ));

        let store = MockRecordStore::new().with_load_failure();
        let err = store.load("ew_roles").await.unwrap_err();
        assert!(err.to_string().contains("database is locked"));
    }
}
