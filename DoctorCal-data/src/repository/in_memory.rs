use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::errors::RepositoryError;

/// In-memory storage for record sets, keyed by record set name
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    record_sets: Arc<Mutex<HashMap<String, Vec<Value>>>>,
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all records stored under a key; an unknown key is an empty set
    pub async fn load(&self, key: &str) -> Result<Vec<Value>, RepositoryError> {
        let store = self.record_sets.lock()?;
        Ok(store.get(key).cloned().unwrap_or_default())
    }

    /// Replace all records stored under a key
    pub async fn save(&self, key: &str, records: &[Value]) -> Result<(), RepositoryError> {
        let mut store = self.record_sets.lock()?;
        store.insert(key.to_string(), records.to_vec());
        Ok(())
    }

    /// Drop every record set
    pub async fn clear(&self) -> Result<(), RepositoryError> {
        let mut store = self.record_sets.lock()?;
        store.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_unknown_key_is_empty() {
        let storage = InMemoryStorage::new();
        assert!(storage.load("ew_metrics").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_whole_set() {
        let storage = InMemoryStorage::new();
        storage.save("ew_roles", &[json!({"id": 1}), json!({"id": 2})]).await.unwrap();
        storage.save("ew_roles", &[json!({"id": 3})]).await.unwrap();

        let roles = storage.load("ew_roles").await.unwrap();
        assert_eq!(roles, vec![json!({"id": 3})]);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let storage = InMemoryStorage::new();
        let clone = storage.clone();
        clone.save("ew_claims", &[json!({"id": "a"})]).await.unwrap();

        assert_eq!(storage.load("ew_claims").await.unwrap().len(), 1);

        storage.clear().await.unwrap();
        assert!(clone.load("ew_claims").await.unwrap().is_empty());
    }
}
