//! Clock events and their kinds.
//!
//! Rows come out of the store as [`RawEntry`] values carrying the stored kind
//! text and raw timestamp. [`ClockEvent::from_raw`] turns them into typed events
//! with a timestamp normalized to the target offset.

use crate::libs::timestamp::EventNormalizer;
use chrono::{DateTime, FixedOffset};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Maximum number of characters of a note shown in a report.
pub const NOTE_DISPLAY_LIMIT: usize = 1024;

/// What a clock event records.
///
/// The stored vocabulary is `entrada`, `saida`, `pausa` and `retorno`. Any
/// other text is kept verbatim in [`EventKind::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    ClockIn,
    ClockOut,
    Pause,
    Resume,
    Unknown(String),
}

impl EventKind {
    /// Maps stored kind text to a kind. Never fails.
    pub fn parse(text: &str) -> Self {
        match text {
            "entrada" => EventKind::ClockIn,
            "saida" => EventKind::ClockOut,
            "pausa" => EventKind::Pause,
            "retorno" => EventKind::Resume,
            other => EventKind::Unknown(other.to_string()),
        }
    }

    /// The text written to the store for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::ClockIn => "entrada",
            EventKind::ClockOut => "saida",
            EventKind::Pause => "pausa",
            EventKind::Resume => "retorno",
            EventKind::Unknown(text) => text,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Actions a user can register from the command line.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockAction {
    In,
    Out,
    Pause,
    Resume,
}

impl From<ClockAction> for EventKind {
    fn from(action: ClockAction) -> Self {
        match action {
            ClockAction::In => EventKind::ClockIn,
            ClockAction::Out => EventKind::ClockOut,
            ClockAction::Pause => EventKind::Pause,
            ClockAction::Resume => EventKind::Resume,
        }
    }
}

impl fmt::Display for ClockAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ClockAction::In => "Clock-in",
            ClockAction::Out => "Clock-out",
            ClockAction::Pause => "Pause",
            ClockAction::Resume => "Resume",
        };
        write!(f, "{}", name)
    }
}

/// A row as handed over by the store, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub kind: String,
    pub timestamp: String,
    pub note: Option<String>,
}

impl RawEntry {
    pub fn new(kind: &str, timestamp: &str, note: Option<&str>) -> Self {
        Self {
            kind: kind.to_string(),
            timestamp: timestamp.to_string(),
            note: note.map(str::to_string),
        }
    }
}

/// One recorded action of a subject, with its instant in the target offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockEvent {
    pub subject_id: String,
    pub kind: EventKind,
    pub timestamp: DateTime<FixedOffset>,
    pub note: Option<String>,
    /// Raw timestamp text when it could not be parsed and "now" was used instead.
    pub recovered: Option<String>,
}

impl ClockEvent {
    pub fn new(subject_id: &str, kind: EventKind, timestamp: DateTime<FixedOffset>, note: Option<&str>) -> Self {
        Self {
            subject_id: subject_id.to_string(),
            kind,
            timestamp,
            note: note.map(str::to_string),
            recovered: None,
        }
    }

    /// Builds an event from a stored row, falling back to "now" on an unreadable timestamp.
    pub fn from_raw(subject_id: &str, raw: &RawEntry, normalizer: &EventNormalizer) -> Self {
        let (timestamp, recovered) = match normalizer.parse(&raw.timestamp) {
            Ok(timestamp) => (timestamp, None),
            Err(_) => (normalizer.normalize(&raw.timestamp), Some(raw.timestamp.clone())),
        };

        Self {
            subject_id: subject_id.to_string(),
            kind: EventKind::parse(&raw.kind),
            timestamp,
            note: raw.note.clone(),
            recovered,
        }
    }

    /// The note truncated for display, or `None` when absent or blank.
    pub fn display_note(&self) -> Option<String> {
        self.note
            .as_deref()
            .filter(|note| !note.is_empty())
            .map(|note| note.chars().take(NOTE_DISPLAY_LIMIT).collect())
    }
}

/// Converts a window of stored rows into events, preserving order.
pub trait IntoClockEvents {
    fn into_clock_events(self, subject_id: &str, normalizer: &EventNormalizer) -> Vec<ClockEvent>;
}

impl IntoClockEvents for Vec<RawEntry> {
    fn into_clock_events(self, subject_id: &str, normalizer: &EventNormalizer) -> Vec<ClockEvent> {
        self.iter().map(|raw| ClockEvent::from_raw(subject_id, raw, normalizer)).collect()
    }
}
