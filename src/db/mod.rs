pub mod rows;
pub mod session;
pub mod sqlite;

pub use session::*;
pub use sqlite::*;

use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Constraint violated: {0}")]
    Constraint(String),

    #[error("Query failed: {0}")]
    Query(rusqlite::Error),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },
}

impl From<rusqlite::Error> for DatabaseError {
    /// Storage-engine rejections (FK, CHECK, NOT NULL, PK) become `Constraint`;
    /// everything else is a plain statement failure.
    fn from(e: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(err, msg) = &e {
            if err.code == ErrorCode::ConstraintViolation {
                return DatabaseError::Constraint(msg.clone().unwrap_or_else(|| err.to_string()));
            }
        }
        DatabaseError::Query(e)
    }
}
