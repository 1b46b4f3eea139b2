//! Rules deciding whether a clock action may be recorded.
//!
//! Only the subject's most recent event is considered. The report tolerates
//! any sequence; these checks keep new records from making it worse.

use crate::libs::error::PontoError;
use crate::libs::event::{ClockAction, EventKind};

/// Checks `next` against the kind of the subject's last recorded event.
///
/// # Errors
///
/// - [`PontoError::AlreadyClockedIn`]: clock-in right after a clock-in
/// - [`PontoError::ClockInRequired`]: clock-out with no history or after a clock-out
/// - [`PontoError::CannotPause`]: pause unless the last event is a clock-in or a resume
/// - [`PontoError::CannotResume`]: resume unless the last event is a pause
pub fn check_transition(last: Option<&EventKind>, next: ClockAction) -> Result<(), PontoError> {
    match next {
        ClockAction::In => match last {
            Some(EventKind::ClockIn) => Err(PontoError::AlreadyClockedIn),
            _ => Ok(()),
        },
        ClockAction::Out => match last {
            None | Some(EventKind::ClockOut) => Err(PontoError::ClockInRequired),
            _ => Ok(()),
        },
        ClockAction::Pause => match last {
            Some(EventKind::ClockIn) | Some(EventKind::Resume) => Ok(()),
            _ => Err(PontoError::CannotPause),
        },
        ClockAction::Resume => match last {
            Some(EventKind::Pause) => Ok(()),
            _ => Err(PontoError::CannotResume),
        },
    }
}
