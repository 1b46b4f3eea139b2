//! # Ponto - clock-in/clock-out time sheet
//!
//! A command-line utility for registering work sessions and pauses, and for
//! reporting worked time per day.
//!
//! ## Features
//!
//! - **Clock Events**: Clock-in, clock-out, pause and resume per subject
//! - **Day Buckets**: Events grouped by calendar date in a fixed UTC offset
//! - **Pause Accounting**: Paused time deducted from each session
//! - **Tolerant Reports**: Orphan and unreadable records annotated, never fatal
//! - **Output**: Paginated terminal tables or JSON
//!
//! ## Usage
//!
//! ```rust
//! use ponto::libs::accumulator::DailyAccumulator;
//! use ponto::libs::day::Locale;
//! use ponto::libs::event::{IntoClockEvents, RawEntry};
//! use ponto::libs::report::assemble;
//! use ponto::libs::timestamp::EventNormalizer;
//!
//! let rows = vec![
//!     RawEntry::new("entrada", "2025-03-10 09:00:00", None),
//!     RawEntry::new("saida", "2025-03-10 17:00:00", None),
//! ];
//! let events = rows.into_clock_events("alice", &EventNormalizer::default());
//! let accumulation = DailyAccumulator::new(Locale::PtBr).accumulate(&events);
//! let report = assemble("alice", 7, &accumulation.buckets, accumulation.total);
//! assert_eq!(report.footer.total, "8h 0min");
//! ```

pub mod commands;
pub mod db;
pub mod libs;
