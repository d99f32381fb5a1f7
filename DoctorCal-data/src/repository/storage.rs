use chrono::Utc;
use rusqlite::OptionalExtension;
use serde_json::Value;
use tracing::debug;

use crate::database::DatabasePool;
use super::errors::RepositoryError;

/// Database storage operations for record sets
pub struct DatabaseStorage;

impl DatabaseStorage {
    /// Load the record set stored under a key
    pub async fn load(pool: &DatabasePool, key: &str) -> Result<Vec<Value>, RepositoryError> {
        debug!("Loading record set from database: key={}", key);

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get()?;

                let payload: Option<String> = conn
                    .query_row(
                        "SELECT payload FROM record_sets WHERE key = ?1",
                        [key],
                        |row| row.get(0),
                    )
                    .optional()?;

                match payload {
                    Some(payload) => Ok(serde_json::from_str(&payload)?),
                    None => Ok(Vec::new()),
                }
            }
        }
    }

    /// Replace the record set stored under a key
    pub async fn save(pool: &DatabasePool, key: &str, records: &[Value]) -> Result<(), RepositoryError> {
        debug!("Storing record set in database: key={}, records={}", key, records.len());

        let payload = serde_json::to_string(records)?;

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get()?;

                conn.execute(
                    "INSERT INTO record_sets (key, payload, updated_at)
                     VALUES (?1, ?2, ?3)
                     ON CONFLICT(key) DO UPDATE SET payload = excluded.payload, updated_at = excluded.updated_at",
                    (key, &payload, Utc::now().to_rfc3339()),
                )?;

                Ok(())
            }
        }
    }

    /// Delete every record set
    pub async fn clear(pool: &DatabasePool) -> Result<(), RepositoryError> {
        debug!("Clearing all record sets in database");

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get()?;
                conn.execute("DELETE FROM record_sets", [])?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_database_pool, DatabaseConfig};
    use serde_json::json;

    #[tokio::test]
    async fn test_round_trip_through_sqlite() {
        let pool = create_database_pool(&DatabaseConfig::in_memory()).unwrap();

        assert!(DatabaseStorage::load(&pool, "ew_metrics").await.unwrap().is_empty());

        let records = vec![json!({"id": "m1", "date": "2024-01-01", "absenteeism_days": 10.0})];
        DatabaseStorage::save(&pool, "ew_metrics", &records).await.unwrap();
        DatabaseStorage::save(&pool, "ew_metrics", &records).await.unwrap();

        assert_eq!(DatabaseStorage::load(&pool, "ew_metrics").await.unwrap(), records);

        DatabaseStorage::clear(&pool).await.unwrap();
        assert!(DatabaseStorage::load(&pool, "ew_metrics").await.unwrap().is_empty());
    }
}
