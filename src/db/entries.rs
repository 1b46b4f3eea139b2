//! Database operations for clock event records.
//!
//! Every clock-in, clock-out, pause and resume is one row of `time_entries`.
//! Rows are never updated; they are only inserted, read back for a window of
//! days and, on request, removed for a whole subject.
//!
//! ## Storage format
//!
//! - `entry_type` holds the kind text (`entrada`, `saida`, `pausa`, `retorno`)
//! - `timestamp` holds text such as `2025-03-10 09:00:00.000000-03:00`, which
//!   SQLite date functions understand, offset included
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ponto::db::entries::TimeEntries;
//! use ponto::libs::event::EventKind;
//! use ponto::libs::timestamp::EventNormalizer;
//!
//! let entries = TimeEntries::new()?;
//! let now = EventNormalizer::default().now();
//! entries.insert("alice", &EventKind::ClockIn, &now, Some("on site"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::Db;
use crate::libs::data_storage::DataStorage;
use crate::libs::event::{EventKind, RawEntry};
use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Arc;

/// SQL schema for the time_entries table.
const SCHEMA_TIME_ENTRIES: &str = "CREATE TABLE IF NOT EXISTS time_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    entry_type TEXT NOT NULL,
    timestamp TEXT NOT NULL,
    notes TEXT
)";

const INDEX_TIME_ENTRIES: &str = "CREATE INDEX IF NOT EXISTS idx_time_entries_user ON time_entries(user_id)";

const INSERT_ENTRY: &str = "INSERT INTO time_entries (user_id, entry_type, timestamp, notes) VALUES (?1, ?2, ?3, ?4)";

/// Rows of a subject newer than `now - N days`, oldest first; ties keep insertion order.
const SELECT_WINDOW: &str = "SELECT entry_type, timestamp, notes FROM time_entries
    WHERE user_id = ?1 AND julianday(timestamp) >= julianday('now', ?2)
    ORDER BY julianday(timestamp) ASC, id ASC";

const SELECT_LAST_KIND: &str = "SELECT entry_type FROM time_entries
    WHERE user_id = ?1
    ORDER BY julianday(timestamp) DESC, id DESC LIMIT 1";

const COUNT_ENTRIES: &str = "SELECT COUNT(*) FROM time_entries WHERE user_id = ?1";

const DELETE_ENTRIES: &str = "DELETE FROM time_entries WHERE user_id = ?1";

/// Format used when writing timestamps.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f%:z";

/// Store of clock event records.
///
/// The connection sits behind an `Arc<Mutex<_>>`, so clones share it and the
/// store can be used from several threads.
#[derive(Clone)]
pub struct TimeEntries {
    pub conn: Arc<Mutex<Connection>>,
}

impl TimeEntries {
    /// Opens the store in the platform data directory.
    pub fn new() -> Result<Self> {
        Self::from_db(Db::new()?)
    }

    pub fn in_storage(storage: &DataStorage) -> Result<Self> {
        Self::from_db(Db::in_storage(storage)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::from_db(Db::in_memory()?)
    }

    /// Wraps an open database, creating the schema if needed.
    pub fn from_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_TIME_ENTRIES, [])?;
        db.conn.execute(INDEX_TIME_ENTRIES, [])?;

        Ok(Self {
            conn: Arc::new(Mutex::new(db.conn)),
        })
    }

    /// Records an event at `at`.
    pub fn insert(&self, subject: &str, kind: &EventKind, at: &DateTime<FixedOffset>, note: Option<&str>) -> Result<()> {
        self.insert_raw(subject, kind.as_str(), &at.format(STORAGE_FORMAT).to_string(), note)
    }

    /// Records a row exactly as given, without validating kind or timestamp.
    pub fn insert_raw(&self, subject: &str, kind: &str, timestamp: &str, note: Option<&str>) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute(INSERT_ENTRY, params![subject, kind, timestamp, note])?;

        Ok(())
    }

    /// All rows of `subject` from the last `days` days, oldest first.
    pub fn fetch_window(&self, subject: &str, days: u32) -> Result<Vec<RawEntry>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_WINDOW)?;
        let entry_iter = stmt.query_map(params![subject, format!("-{} days", days)], |row| {
            Ok(RawEntry {
                kind: row.get(0)?,
                timestamp: row.get(1)?,
                note: row.get(2)?,
            })
        })?;

        let mut entries = vec![];
        for entry in entry_iter {
            entries.push(entry?);
        }

        Ok(entries)
    }

    /// Kind of the most recent event of `subject`, if any.
    pub fn last_kind(&self, subject: &str) -> Result<Option<EventKind>> {
        let conn = self.conn.lock();
        let kind: Option<String> = conn
            .query_row(SELECT_LAST_KIND, params![subject], |row| row.get(0))
            .optional()?;

        Ok(kind.as_deref().map(EventKind::parse))
    }

    pub fn count(&self, subject: &str) -> Result<usize> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row(COUNT_ENTRIES, params![subject], |row| row.get(0))?;

        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Removes every record of `subject`, returning how many were deleted.
    pub fn clear(&self, subject: &str) -> Result<usize> {
        let conn = self.conn.lock();
        let deleted = conn.execute(DELETE_ENTRIES, params![subject])?;

        Ok(deleted)
    }
}
