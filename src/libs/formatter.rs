//! Time duration and clock formatting for reports.
//!
//! Every duration shown by ponto, whether a pause, a session, a day subtotal
//! or the period total, goes through [`format_duration`] so that the same
//! amount of time always reads the same way.
//!
//! ## Duration Format
//!
//! `"{hours}h {minutes}min"`:
//! - Sub-second parts are truncated first, then seconds are dropped
//! - Hours are not zero-padded and never roll over into days
//! - Negative durations are treated as zero
//!
//! ## Examples
//!
//! ```rust
//! use ponto::libs::formatter::format_duration;
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&Duration::hours(8)), "8h 0min");
//! assert_eq!(format_duration(&(Duration::hours(1) + Duration::minutes(30))), "1h 30min");
//! assert_eq!(format_duration(&Duration::hours(26)), "26h 0min");
//! ```

use chrono::{DateTime, Duration, FixedOffset};

/// Formats a duration as `"{hours}h {minutes}min"`.
///
/// # Examples
///
/// ```rust
/// use ponto::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::seconds(3599)), "0h 59min");
/// assert_eq!(format_duration(&Duration::minutes(-30)), "0h 0min");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    // num_seconds truncates toward zero
    format_whole_seconds(duration.num_seconds())
}

/// Formats a floating amount of seconds the same way as [`format_duration`].
///
/// Any finite or infinite input is accepted; NaN renders as zero.
pub fn format_seconds(seconds: f64) -> String {
    // `as` saturates on overflow and maps NaN to zero
    format_whole_seconds(seconds.trunc() as i64)
}

fn format_whole_seconds(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;

    format!("{}h {}min", hours, minutes)
}

/// Time of day used on report lines, e.g. `09:00:00`.
pub fn format_clock_time(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Full date and time used in confirmations, e.g. `10/03/2025 09:00:00`.
pub fn format_date_time(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// Renders a UTC offset as `GMT-3` or `GMT+5:30`.
pub fn format_offset(offset: &FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let hours = seconds.abs() / 3600;
    let minutes = (seconds.abs() % 3600) / 60;

    if minutes == 0 {
        format!("GMT{}{}", sign, hours)
    } else {
        format!("GMT{}{}:{:02}", sign, hours, minutes)
    }
}
