//! Database layer for the ponto application.
//!
//! A single SQLite table holds every clock event. The layer only stores and
//! hands back rows; all interpretation happens in [`crate::libs`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ponto::db::entries::TimeEntries;
//!
//! let entries = TimeEntries::new()?;
//! let rows = entries.fetch_window("alice", 7)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Core database connection.
pub mod db;

/// Clock event records: insertion, windowed retrieval and clearing.
pub mod entries;
