//! Storage layer for tasktime.
//!
//! Persists task events in a single append-only `SQLite` table using
//! `rusqlite`, and implements the [`EventStore`] and [`EventFinder`] traits
//! from `tasktime-core` on top of it.
//!
//! # Thread Safety
//!
//! The [`Database`] type wraps a `rusqlite::Connection`, which is `Send` but not `Sync`.
//! A `Database` instance can be moved between threads but cannot be shared
//! across threads without external synchronization.
//!
//! Nothing serializes the read-then-append sequence performed by the task
//! operations. Two processes starting the same task at the same instant may
//! both record a start.
//!
//! # Schema
//!
//! ```sql
//! event_store (id TEXT PRIMARY KEY, type TEXT, task_name TEXT, created_at TEXT)
//! ```
//!
//! ## Timestamp Format
//!
//! Timestamps are stored as TEXT in RFC 3339 format with nanosecond precision
//! and a `Z` suffix (e.g., `2025-01-29T09:00:00.000000000Z`). Every value has
//! the same width, so:
//! - Lexicographic ordering matches chronological ordering
//! - Values read back are identical to the ones written
//! - Timezone-aware (always UTC)
//!
//! ## Ordering
//!
//! "Latest" means greatest `created_at`. Rows with equal timestamps are ordered
//! by `rowid`, so the most recently inserted one wins.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Params, Row, params};
use tasktime_core::{Event, EventFinder, EventId, EventStore, EventType, StoreError, TaskName};
use thiserror::Error;

const EVENT_COLUMNS: &str = "id, type, task_name, created_at";

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// Failed to parse an event timestamp.
    #[error("invalid timestamp for event {event_id}: {timestamp}")]
    TimestampParse {
        event_id: String,
        timestamp: String,
        #[source]
        source: chrono::ParseError,
    },
    /// A stored row does not describe a valid event.
    #[error("invalid event data for {event_id}: {message}")]
    InvalidEventData { event_id: String, message: String },
}

impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        Self::backend(err)
    }
}

/// Database connection wrapper.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Database {
    conn: Connection,
}

/// An `event_store` row before validation.
struct EventRow {
    id: String,
    kind: String,
    task_name: String,
    created_at: String,
}

impl EventRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            kind: row.get(1)?,
            task_name: row.get(2)?,
            created_at: row.get(3)?,
        })
    }

    fn into_event(self) -> Result<Event, DbError> {
        let invalid = |message: String| DbError::InvalidEventData {
            event_id: self.id.clone(),
            message,
        };
        let id = self
            .id
            .parse::<EventId>()
            .map_err(|err| invalid(err.to_string()))?;
        let kind = self
            .kind
            .parse::<EventType>()
            .map_err(|err| invalid(err.to_string()))?;
        let task_name =
            TaskName::new(self.task_name.as_str()).map_err(|err| invalid(err.to_string()))?;
        let created_at = parse_timestamp(&self.created_at, &self.id)?;
        Ok(Event {
            id,
            kind,
            task_name,
            created_at,
        })
    }
}

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The database schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        tracing::debug!(path = %path.display(), "opened event store");
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection closes.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initializes the database schema.
    ///
    /// This is idempotent - safe to call on an already-initialized database.
    fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch(
            "
            -- Append-only task event log
            -- type: 'task-started' or 'task-finished'
            -- created_at: RFC 3339 UTC, nanosecond precision
            CREATE TABLE IF NOT EXISTS event_store (
                id TEXT PRIMARY KEY,
                type TEXT NOT NULL,
                task_name TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_event_store_task_created
                ON event_store(task_name, created_at);
            CREATE INDEX IF NOT EXISTS idx_event_store_task_type_created
                ON event_store(task_name, type, created_at);
            ",
        )?;
        Ok(())
    }

    /// Appends a single event.
    ///
    /// Fails with a constraint error if an event with the same ID exists.
    pub fn insert_event(&self, event: &Event) -> Result<(), DbError> {
        self.conn.execute(
            "INSERT INTO event_store (id, type, task_name, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                event.id.to_string(),
                event.kind.as_str(),
                event.task_name.as_str(),
                format_timestamp(event.created_at),
            ],
        )?;
        tracing::debug!(
            event_id = %event.id,
            kind = %event.kind,
            task = %event.task_name,
            "stored event"
        );
        Ok(())
    }

    /// Lists all events, newest first.
    pub fn fetch_all(&self) -> Result<Vec<Event>, DbError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EVENT_COLUMNS} FROM event_store ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt.query_map([], EventRow::from_row)?;
        let mut events = Vec::new();
        for row in rows {
            events.push(row?.into_event()?);
        }
        Ok(events)
    }

    /// The latest event for a task, if any.
    pub fn find_latest(
        &self,
        task_name: &TaskName,
        kind: Option<EventType>,
    ) -> Result<Option<Event>, DbError> {
        match kind {
            None => self.find_one(
                &format!(
                    "SELECT {EVENT_COLUMNS} FROM event_store
                     WHERE task_name = ?1
                     ORDER BY created_at DESC, rowid DESC
                     LIMIT 1"
                ),
                params![task_name.as_str()],
            ),
            Some(kind) => self.find_one(
                &format!(
                    "SELECT {EVENT_COLUMNS} FROM event_store
                     WHERE task_name = ?1 AND type = ?2
                     ORDER BY created_at DESC, rowid DESC
                     LIMIT 1"
                ),
                params![task_name.as_str(), kind.as_str()],
            ),
        }
    }

    fn find_one(&self, query: &str, params: impl Params) -> Result<Option<Event>, DbError> {
        self.conn
            .query_row(query, params, EventRow::from_row)
            .optional()?
            .map(EventRow::into_event)
            .transpose()
    }
}

impl EventStore for Database {
    fn store(&self, event: &Event) -> Result<(), StoreError> {
        Ok(self.insert_event(event)?)
    }
}

impl EventFinder for Database {
    fn latest_by_name(&self, task_name: &TaskName) -> Result<Event, StoreError> {
        self.find_latest(task_name, None)?
            .ok_or(StoreError::NotFound)
    }

    fn latest_by_name_type(
        &self,
        task_name: &TaskName,
        kind: EventType,
    ) -> Result<Event, StoreError> {
        self.find_latest(task_name, Some(kind))?
            .ok_or(StoreError::NotFound)
    }
}

fn parse_timestamp(timestamp: &str, event_id: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| DbError::TimestampParse {
            event_id: event_id.to_string(),
            timestamp: timestamp.to_string(),
            source,
        })
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
