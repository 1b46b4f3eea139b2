//! Error types shared by the ponto library.
//!
//! The reporting core never fails: malformed input degrades to annotated output.
//! The variants below cover the strict timestamp parser, configuration values
//! and the guard that decides whether a clock action may be registered.

use thiserror::Error;

/// Errors raised outside the reporting core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PontoError {
    /// None of the recognized timestamp encodings matched.
    #[error("Unrecognized timestamp: '{0}'")]
    InvalidTimestamp(String),

    /// The configured UTC offset is outside the range chrono accepts.
    #[error("Invalid UTC offset: {0} minutes")]
    InvalidOffset(i32),

    #[error("Clock-in already registered. Clock out when you finish your activities.")]
    AlreadyClockedIn,

    #[error("Clock-in required. Clock in first to start a session.")]
    ClockInRequired,

    #[error("Cannot pause: you must be in an active session (after a clock-in or a resume).")]
    CannotPause,

    #[error("Cannot resume: you must be paused to resume.")]
    CannotResume,

    /// No subject was given on the command line, in the environment or in the config.
    #[error("No subject given. Pass --subject, set PONTO_SUBJECT or run `ponto init`.")]
    SubjectRequired,
}
