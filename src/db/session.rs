//! Session Manager: one owned SQLite connection per calling context.
//!
//! A `Session` is passed explicitly into every query and write operation;
//! there is no process-wide connection. The connection is released when the
//! session is closed or dropped, whichever comes first.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use rusqlite::types::FromSql;
use rusqlite::{Connection, Params, Row};
use tracing;

use super::sqlite::{configure_pragmas, run_migrations};
use super::DatabaseError;
use crate::config::{SessionConfig, DEFAULT_STATEMENT_TIMEOUT_MS};

/// Virtual-machine steps between deadline checks.
const PROGRESS_CHECK_OPS: i32 = 1_000;

type Deadline = Arc<Mutex<Option<Instant>>>;

pub struct Session {
    conn: Option<Connection>,
    statement_timeout: Duration,
    deadline: Deadline,
}

/// Clears the deadline it armed when the operation ends.
struct ArmedDeadline<'a> {
    deadline: Option<&'a Mutex<Option<Instant>>>,
}

impl Drop for ArmedDeadline<'_> {
    fn drop(&mut self) {
        if let Some(deadline) = self.deadline {
            if let Ok(mut at) = deadline.lock() {
                *at = None;
            }
        }
    }
}

impl Session {
    /// Open the database named by `config`, apply pragmas and pending migrations.
    pub fn open(config: &SessionConfig) -> Result<Self, DatabaseError> {
        let conn = Connection::open(&config.database_path).map_err(|e| {
            DatabaseError::Connection(format!(
                "cannot open {}: {e}",
                config.database_path.display()
            ))
        })?;
        tracing::debug!(path = %config.database_path.display(), "Session opened");
        Self::bootstrap(conn, config.statement_timeout())
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;
        Self::bootstrap(conn, Duration::from_millis(DEFAULT_STATEMENT_TIMEOUT_MS))
    }

    fn bootstrap(conn: Connection, statement_timeout: Duration) -> Result<Self, DatabaseError> {
        configure_pragmas(&conn, statement_timeout)?;
        run_migrations(&conn)?;

        // A statement still running past its operation's deadline is interrupted
        // and fails with SQLITE_INTERRUPT.
        let deadline: Deadline = Arc::new(Mutex::new(None));
        let watched = Arc::clone(&deadline);
        conn.progress_handler(
            PROGRESS_CHECK_OPS,
            Some(move || {
                watched
                    .lock()
                    .map(|guard| guard.is_some_and(|at| Instant::now() >= at))
                    .unwrap_or(false)
            }),
        );

        Ok(Self {
            conn: Some(conn),
            statement_timeout,
            deadline,
        })
    }

    /// Start the statement clock for one operation. Nested calls share the
    /// outer deadline; a zero timeout disables the clock.
    fn arm_deadline(&self) -> ArmedDeadline<'_> {
        if self.statement_timeout.is_zero() {
            return ArmedDeadline { deadline: None };
        }
        match self.deadline.lock() {
            Ok(mut at) if at.is_none() => {
                *at = Some(Instant::now() + self.statement_timeout);
                ArmedDeadline {
                    deadline: Some(&*self.deadline),
                }
            }
            _ => ArmedDeadline { deadline: None },
        }
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Borrow the live connection, or fail if the session was closed.
    pub fn connection(&self) -> Result<&Connection, DatabaseError> {
        self.conn
            .as_ref()
            .ok_or_else(|| DatabaseError::Connection("session is closed".into()))
    }

    /// Execute a single parameter-bound statement; returns the affected row count.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize, DatabaseError> {
        let conn = self.connection()?;
        let _clock = self.arm_deadline();
        Ok(conn.execute(sql, params)?)
    }

    /// Run a parameter-bound query and map every row.
    pub fn query_rows<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>, DatabaseError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.connection()?;
        let _clock = self.arm_deadline();
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, map)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Run a query that yields exactly one row and read its first column.
    pub fn query_scalar<T: FromSql, P: Params>(&self, sql: &str, params: P) -> Result<T, DatabaseError> {
        let conn = self.connection()?;
        let _clock = self.arm_deadline();
        Ok(conn.query_row(sql, params, |row| row.get(0))?)
    }

    /// Run `op` as one atomic unit.
    ///
    /// Commits when `op` returns `Ok`; otherwise rolls back and returns the
    /// original error. A failed commit is reported as the operation's error.
    pub fn transaction<T, F>(&self, name: &str, op: F) -> Result<T, DatabaseError>
    where
        F: FnOnce(&Connection) -> Result<T, DatabaseError>,
    {
        let tx = self.connection()?.unchecked_transaction()?;
        let outcome = {
            let _clock = self.arm_deadline();
            op(&tx)
        };

        match outcome {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(operation = name, error = %e, "Rolling back transaction");
                if let Err(rollback_err) = tx.rollback() {
                    tracing::warn!(operation = name, error = %rollback_err, "Rollback failed");
                }
                Err(e)
            }
        }
    }

    /// Release the connection. Calling this more than once is a no-op.
    pub fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            match conn.close() {
                Ok(()) => tracing::debug!("Session closed"),
                Err((_conn, e)) => tracing::warn!(error = %e, "Session close reported an error"),
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}

/// Open a session, run `op` against it, and release it on every exit path.
pub fn with_session<T, F>(config: &SessionConfig, op: F) -> Result<T, DatabaseError>
where
    F: FnOnce(&Session) -> Result<T, DatabaseError>,
{
    let mut session = Session::open(config)?;
    let result = op(&session);
    session.close();
    result
}
