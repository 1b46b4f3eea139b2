//! Display implementation for ponto application messages.
//!
//! All user-facing text lives here, so commands only ever pick a [`Message`]
//! variant and hand it to one of the `msg_*!` macros.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CLOCK MESSAGES ===
            Message::ClockRegistered {
                action,
                subject,
                time,
                offset,
            } => format!("{} registered for {} at {} ({})", action, subject, time, offset),
            Message::ClockNote(note) => format!("Note: {}", note),
            Message::ClockHintIn => "Use `ponto clock out` when you finish.".to_string(),
            Message::ClockHintOut => "Enjoy your rest! ✨".to_string(),
            Message::ClockHintPause => "Use `ponto clock resume` to come back.".to_string(),
            Message::ClockHintResume => "Session active.".to_string(),
            Message::ClockRejected(reason) => format!("Action not registered: {}", reason),

            // === REPORT MESSAGES ===
            Message::ReportTitle(subject, days) => format!("📅 Time sheet of {} for the last {} days", subject, days),
            Message::ReportPage(page, pages) => format!("Page {}/{}", page, pages),
            Message::PeriodSummary(total) => format!("📊 Period summary: total worked {}", total),
            Message::NoRecordsFound(subject, days) => format!("No records found for {} in the last {} days.", subject, days),
            Message::TimestampsRecovered(count) => {
                format!("{} record(s) had an unreadable timestamp; the current time was used and totals may be wrong.", count)
            }

            // === CLEAR MESSAGES ===
            Message::NothingToClear(subject) => format!("{} has no records to clear.", subject),
            Message::ConfirmClear(subject, count) => format!("Delete all {} record(s) of {}?", count, subject),
            Message::RecordsCleared(subject, count) => format!("Removed {} record(s) of {}.", count, subject),
            Message::ClearIrreversible => "This action cannot be undone.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleClock => "Clock settings".to_string(),
            Message::PromptSubject => "Default subject (leave empty to always pass --subject)".to_string(),
            Message::PromptUtcOffset => "UTC offset in minutes (e.g. -180 for GMT-3)".to_string(),
            Message::PromptWindowDays => "Default report window in days".to_string(),
            Message::PromptLocale => "Weekday names".to_string(),
            Message::PromptCarryPause => "Keep a pause open across midnight?".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::DebugModeEnabled(filter) => format!("Debug mode enabled (filter: {})", filter),
        };
        write!(f, "{}", text)
    }
}
