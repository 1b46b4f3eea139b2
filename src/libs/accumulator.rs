//! Day-by-day reconciliation of clock events into worked time.
//!
//! [`DailyAccumulator::accumulate`] walks a subject's events once, in the order
//! given, splitting them into [`DayBucket`]s by calendar date in the target
//! offset. Clock-ins and clock-outs are paired into sessions; pause time inside
//! a session is deducted from it.
//!
//! ## Pause accounting
//!
//! The pause state tracked while walking only drives the per-line annotations.
//! The amount deducted at clock-out is re-derived by scanning the whole event
//! list for closed pause/resume pairs inside `[clock-in, clock-out]`, which
//! also catches pairs split across a day boundary. A pause still open at
//! clock-out is closed by it.
//!
//! ## Anomalies
//!
//! Nothing here fails. Orphan pauses, resumes and clock-outs, unknown kinds,
//! unreadable timestamps and a session left open all end up as annotation
//! lines while accounting carries on.

use crate::libs::day::{day_label, DayBucket, DayLine, Locale};
use crate::libs::event::{ClockEvent, EventKind};
use chrono::{DateTime, Duration, FixedOffset};

/// Result of one accumulation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulation {
    pub buckets: Vec<DayBucket>,
    pub total: Duration,
}

impl Accumulation {
    pub fn total_seconds(&self) -> i64 {
        self.total.num_seconds()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Builds day buckets and the period total from an ordered event sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyAccumulator {
    locale: Locale,
    carry_pause_across_days: bool,
}

impl DailyAccumulator {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            carry_pause_across_days: false,
        }
    }

    /// Keeps an open pause alive when the day changes instead of dropping it.
    pub fn carry_pause_across_days(mut self, carry: bool) -> Self {
        self.carry_pause_across_days = carry;
        self
    }

    /// Accumulates events already sorted by timestamp. Events are not re-sorted.
    pub fn accumulate(&self, events: &[ClockEvent]) -> Accumulation {
        let mut state = AccumulatorState::new(self.locale, self.carry_pause_across_days);
        for event in events {
            state.feed(event, events);
        }
        state.finish()
    }
}

/// Mutable state of a single pass.
struct AccumulatorState {
    locale: Locale,
    carry_pause_across_days: bool,
    buckets: Vec<DayBucket>,
    current_label: Option<String>,
    day_lines: Vec<DayLine>,
    day_seconds: Duration,
    period_seconds: Duration,
    open_since: Option<DateTime<FixedOffset>>,
    /// Index in `buckets` of the day the open session started on.
    open_bucket: usize,
    paused_since: Option<DateTime<FixedOffset>>,
}

impl AccumulatorState {
    fn new(locale: Locale, carry_pause_across_days: bool) -> Self {
        Self {
            locale,
            carry_pause_across_days,
            buckets: vec![],
            current_label: None,
            day_lines: vec![],
            day_seconds: Duration::zero(),
            period_seconds: Duration::zero(),
            open_since: None,
            open_bucket: 0,
            paused_since: None,
        }
    }

    fn feed(&mut self, event: &ClockEvent, events: &[ClockEvent]) {
        let at = event.timestamp;
        let label = day_label(&at, self.locale);

        if self.current_label.as_deref() != Some(label.as_str()) {
            if self.current_label.is_some() {
                if !self.carry_pause_across_days {
                    self.paused_since = None;
                }
                self.flush();
            }
            self.current_label = Some(label);
        }

        match &event.kind {
            EventKind::ClockIn => {
                if let Some(previous) = self.open_since {
                    tracing::debug!(subject = %event.subject_id, %previous, "clock-in overwrites an open session");
                }
                self.open_since = Some(at);
                self.open_bucket = self.buckets.len();
                self.push_line(DayLine::ClockIn(at), event);
                self.push_note(event);
            }
            EventKind::Pause => {
                if self.open_since.is_some() && self.paused_since.is_none() {
                    self.paused_since = Some(at);
                    self.push_line(DayLine::Pause(at), event);
                    self.push_note(event);
                } else {
                    self.push_line(DayLine::OrphanPause(at), event);
                }
            }
            EventKind::Resume => match (self.open_since, self.paused_since) {
                (Some(_), Some(paused_since)) => {
                    self.push_line(DayLine::Resume(at, at - paused_since), event);
                    self.push_note(event);
                    self.paused_since = None;
                }
                _ => self.push_line(DayLine::OrphanResume(at), event),
            },
            EventKind::ClockOut => match self.open_since.take() {
                Some(open_since) => self.close_session(open_since, event, events),
                None => self.push_line(DayLine::OrphanClockOut(at), event),
            },
            EventKind::Unknown(kind) => self.push_line(DayLine::Unknown(kind.clone(), at), event),
        }
    }

    fn close_session(&mut self, open_since: DateTime<FixedOffset>, event: &ClockEvent, events: &[ClockEvent]) {
        let at = event.timestamp;
        let raw = at - open_since;

        let mut paused = paused_within(events, open_since, at);
        if let Some(paused_since) = self.paused_since.take() {
            paused = paused + (at - paused_since);
        }

        let worked = (raw - paused).max(Duration::zero());
        self.period_seconds = self.period_seconds + worked;

        self.push_line(DayLine::ClockOut(at), event);
        self.push_note(event);
        if paused > Duration::zero() {
            self.day_lines.push(DayLine::PausesDeducted(paused));
        }
        self.day_lines.push(DayLine::Worked(worked));

        // The session belongs to the day it was opened on.
        match self.buckets.get_mut(self.open_bucket) {
            Some(bucket) => {
                bucket.subtotal = bucket.subtotal + worked;
                self.day_lines.push(DayLine::CreditedTo(bucket.label.clone()));
            }
            None => self.day_seconds = self.day_seconds + worked,
        }
    }

    /// Appends the line of `event`, followed by a warning if its timestamp was recovered.
    fn push_line(&mut self, line: DayLine, event: &ClockEvent) {
        self.day_lines.push(line);
        if let Some(raw) = &event.recovered {
            self.day_lines.push(DayLine::RecoveredTimestamp(raw.clone()));
        }
    }

    fn push_note(&mut self, event: &ClockEvent) {
        if let Some(note) = event.display_note() {
            self.day_lines.push(DayLine::Note(note));
        }
    }

    /// Closes the day under construction and appends it to the buckets.
    fn flush(&mut self) {
        let Some(label) = self.current_label.take() else {
            return;
        };

        let mut bucket = DayBucket::new(label);
        bucket.lines = std::mem::take(&mut self.day_lines);
        bucket.subtotal = std::mem::replace(&mut self.day_seconds, Duration::zero());

        tracing::debug!(day = %bucket.label, subtotal = bucket.subtotal_seconds(), "day flushed");
        self.buckets.push(bucket);
    }

    fn finish(mut self) -> Accumulation {
        if self.open_since.is_some() {
            self.day_lines.push(DayLine::UnclosedSession);
        }
        self.flush();

        Accumulation {
            buckets: self.buckets,
            total: self.period_seconds,
        }
    }
}

/// Sum of closed pause/resume pairs whose instants fall within `[start, end]`.
fn paused_within(events: &[ClockEvent], start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Duration {
    let mut total = Duration::zero();
    let mut open_pause: Option<DateTime<FixedOffset>> = None;

    for event in events.iter().filter(|e| e.timestamp >= start && e.timestamp <= end) {
        match event.kind {
            EventKind::Pause => {
                if open_pause.is_none() {
                    open_pause = Some(event.timestamp);
                }
            }
            EventKind::Resume => {
                if let Some(from) = open_pause.take() {
                    total = total + (event.timestamp - from);
                }
            }
            _ => {}
        }
    }

    total
}
