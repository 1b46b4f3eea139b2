//! Day buckets and the lines they hold.
//!
//! A [`DayBucket`] gathers everything that happened on one calendar date in
//! the target offset. Its lines are typed ([`DayLine`]) so that callers can
//! inspect what the accumulator decided, and they render to text through
//! `Display`.

use crate::libs::formatter::{format_clock_time, format_duration};
use chrono::{DateTime, Datelike, Duration, FixedOffset, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language used for weekday abbreviations in day labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub fn weekday_abbreviation(&self, weekday: Weekday) -> &'static str {
        match self {
            Locale::PtBr => match weekday {
                Weekday::Mon => "Seg",
                Weekday::Tue => "Ter",
                Weekday::Wed => "Qua",
                Weekday::Thu => "Qui",
                Weekday::Fri => "Sex",
                Weekday::Sat => "Sáb",
                Weekday::Sun => "Dom",
            },
            Locale::En => match weekday {
                Weekday::Mon => "Mon",
                Weekday::Tue => "Tue",
                Weekday::Wed => "Wed",
                Weekday::Thu => "Thu",
                Weekday::Fri => "Fri",
                Weekday::Sat => "Sat",
                Weekday::Sun => "Sun",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Locale::PtBr => write!(f, "pt-BR"),
            Locale::En => write!(f, "en"),
        }
    }
}

/// Bucket label for an instant, e.g. `10/03/2025 (Seg)`.
///
/// The instant is expected to already be in the target offset; its local
/// calendar date is used as is.
pub fn day_label(dt: &DateTime<FixedOffset>, locale: Locale) -> String {
    format!("{} ({})", dt.format("%d/%m/%Y"), locale.weekday_abbreviation(dt.weekday()))
}

/// One line of a day bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayLine {
    ClockIn(DateTime<FixedOffset>),
    Pause(DateTime<FixedOffset>),
    /// Pause without an open session, or while already paused.
    OrphanPause(DateTime<FixedOffset>),
    /// Resume with the length of the pause it closes.
    Resume(DateTime<FixedOffset>, Duration),
    /// Resume without an open pause.
    OrphanResume(DateTime<FixedOffset>),
    ClockOut(DateTime<FixedOffset>),
    /// Clock-out without an open session.
    OrphanClockOut(DateTime<FixedOffset>),
    /// Pause time deducted from the session just closed.
    PausesDeducted(Duration),
    /// Worked time of the session just closed.
    Worked(Duration),
    /// The session just closed was credited to an earlier day.
    CreditedTo(String),
    /// Event of a kind the accumulator does not know, passed through.
    Unknown(String, DateTime<FixedOffset>),
    Note(String),
    /// Timestamp could not be read; the current time was used.
    RecoveredTimestamp(String),
    /// The last clock-in has no clock-out.
    UnclosedSession,
}

impl fmt::Display for DayLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DayLine::ClockIn(at) => write!(f, "🟢 Clock-in   {}", format_clock_time(at)),
            DayLine::Pause(at) => write!(f, "⏸️ Pause      {}", format_clock_time(at)),
            DayLine::OrphanPause(at) => {
                write!(f, "⚠️ Pause      {} (pause with no active session)", format_clock_time(at))
            }
            DayLine::Resume(at, paused) => {
                write!(f, "▶️ Resume     {}  (pause: {})", format_clock_time(at), format_duration(paused))
            }
            DayLine::OrphanResume(at) => write!(f, "⚠️ Resume     {} (orphan resume, no open pause)", format_clock_time(at)),
            DayLine::ClockOut(at) => write!(f, "🔴 Clock-out  {}", format_clock_time(at)),
            DayLine::OrphanClockOut(at) => {
                write!(f, "⚠️ Clock-out  {} (orphan clock-out, no clock-in)", format_clock_time(at))
            }
            DayLine::PausesDeducted(paused) => write!(f, "⏳ Pauses     {} (deducted)", format_duration(paused)),
            DayLine::Worked(worked) => write!(f, "🕒 Worked     {}", format_duration(worked)),
            DayLine::CreditedTo(label) => write!(f, "   └ credited to {}", label),
            DayLine::Unknown(kind, at) => write!(f, "❔ {}   {}", kind, format_clock_time(at)),
            DayLine::Note(note) => write!(f, "   └ note: {}", note),
            DayLine::RecoveredTimestamp(raw) => write!(f, "   └ unreadable timestamp '{}', current time used", raw),
            DayLine::UnclosedSession => write!(f, "⚠️ Unclosed session: the last clock-in has no clock-out."),
        }
    }
}

/// Everything recorded on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    pub label: String,
    pub lines: Vec<DayLine>,
    pub subtotal: Duration,
}

impl DayBucket {
    pub fn new(label: String) -> Self {
        Self {
            label,
            lines: vec![],
            subtotal: Duration::zero(),
        }
    }

    pub fn subtotal_seconds(&self) -> i64 {
        self.subtotal.num_seconds()
    }

    /// Rendered lines followed by the subtotal line.
    pub fn body(&self) -> String {
        let mut body: Vec<String> = self.lines.iter().map(ToString::to_string).collect();
        body.push(format!("Subtotal: {}", format_duration(&self.subtotal)));
        body.join("\n")
    }
}
