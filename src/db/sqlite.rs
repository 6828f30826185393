use std::time::Duration;

use rusqlite::Connection;
use tracing;

use super::DatabaseError;

/// Apply connection-level settings. Foreign keys are off by default in SQLite
/// and must be enabled per connection.
pub fn configure_pragmas(conn: &Connection, statement_timeout: Duration) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;",
    )
    .map_err(|e| DatabaseError::Connection(e.to_string()))?;
    conn.busy_timeout(statement_timeout)
        .map_err(|e| DatabaseError::Connection(e.to_string()))?;
    Ok(())
}

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current_version = get_current_version(conn);

    let migrations: Vec<(i64, &str)> = vec![
        (1, include_str!("../../resources/migrations/001_initial.sql")),
    ];

    for (version, sql) in migrations {
        if version > current_version {
            tracing::info!("Running migration v{version}");
            apply_migration(conn, version, sql)?;
        }
    }

    Ok(())
}

/// Apply one migration as a single unit; a failure leaves no partial schema.
fn apply_migration(conn: &Connection, version: i64, sql: &str) -> Result<(), DatabaseError> {
    let failed = |e: rusqlite::Error| DatabaseError::MigrationFailed {
        version,
        reason: e.to_string(),
    };
    let tx = conn.unchecked_transaction().map_err(failed)?;
    tx.execute_batch(sql).map_err(failed)?;
    tx.commit().map_err(failed)
}

/// Get the current schema version (0 if no schema exists yet)
fn get_current_version(conn: &Connection) -> i64 {
    conn.query_row(
        "SELECT MAX(version) FROM schema_version",
        [],
        |row| row.get::<_, i64>(0),
    )
    .unwrap_or(0)
}

/// Count tables in the database (for verification)
pub fn count_tables(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(count)
}
