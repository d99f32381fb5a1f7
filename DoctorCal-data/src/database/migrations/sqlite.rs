use rusqlite::Connection;
use tracing::info;

/// Run SQLite migrations
pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    info!("Running SQLite migrations");

    create_record_sets_table(conn)?;

    info!("SQLite migrations completed successfully");
    Ok(())
}

/// Create the key-value table holding one JSON array per record set
fn create_record_sets_table(conn: &Connection) -> Result<(), String> {
    info!("Creating record_sets table if not exists");

    conn.execute(
        "CREATE TABLE IF NOT EXISTS record_sets (
            key TEXT PRIMARY KEY,
            payload TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| format!("Failed to create record_sets table: {}", e))?;

    Ok(())
}
