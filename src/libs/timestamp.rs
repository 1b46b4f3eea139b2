//! Timestamp normalization into the target offset.
//!
//! Stored timestamps come in several shapes depending on who wrote them. The
//! normalizer accepts each of them and always answers with an instant expressed
//! in one fixed offset, so day bucketing and display do not depend on how the
//! timestamp was produced.
//!
//! ## Recognized encodings
//!
//! Tried in order:
//!
//! 1. `2025-03-10 09:00:00.123456-03:00` (space separated, with offset; the
//!    fraction is optional and the offset colon too)
//! 2. `2025-03-10T12:00:00Z` (RFC 3339)
//! 3. `2025-03-10 09:00:00.123456` or `2025-03-10 09:00:00` (no offset)
//! 4. `2025-03-10T09:00:00` (ISO, no offset)
//!
//! Strings without an offset are taken as wall-clock time in the target offset,
//! not UTC.
//!
//! ## Fallback
//!
//! [`EventNormalizer::normalize`] never fails: an unreadable string yields the
//! current instant and a `warn` event. That value is not trustworthy and the
//! caller should flag it; [`EventNormalizer::parse`] is the strict variant.

use crate::libs::error::PontoError;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

/// Offset of Brasília time, the default target offset.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = -3 * 60;

const OFFSET_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%z";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses raw timestamps into instants in a fixed target offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventNormalizer {
    offset: FixedOffset,
}

impl EventNormalizer {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Builds a normalizer from an offset east of UTC in minutes.
    ///
    /// # Errors
    ///
    /// Returns [`PontoError::InvalidOffset`] when the offset is a day or more.
    pub fn from_minutes(minutes: i32) -> Result<Self, PontoError> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
            .ok_or(PontoError::InvalidOffset(minutes))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The current instant in the target offset.
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    /// Strict parse of a raw timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`PontoError::InvalidTimestamp`] when no encoding matches.
    pub fn parse(&self, raw: &str) -> Result<DateTime<FixedOffset>, PontoError> {
        let raw = raw.trim();

        if let Ok(dt) = DateTime::parse_from_str(raw, OFFSET_FORMAT) {
            return Ok(dt.with_timezone(&self.offset));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&self.offset));
        }

        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                if let Some(dt) = self.localize(naive) {
                    return Ok(dt);
                }
            }
        }

        Err(PontoError::InvalidTimestamp(raw.to_string()))
    }

    /// Lenient parse: falls back to [`EventNormalizer::now`] when nothing matches.
    pub fn normalize(&self, raw: &str) -> DateTime<FixedOffset> {
        self.parse(raw).unwrap_or_else(|err| {
            tracing::warn!(raw = raw, error = %err, "unreadable timestamp, using current time");
            self.now()
        })
    }

    /// Interprets a wall-clock time as being in the target offset.
    fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        self.offset.from_local_datetime(&naive).single()
    }
}

impl Default for EventNormalizer {
    fn default() -> Self {
        Self::from_minutes(DEFAULT_UTC_OFFSET_MINUTES).unwrap_or_else(|_| Self::new(Utc.fix()))
    }
}
