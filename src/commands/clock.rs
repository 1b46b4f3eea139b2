//! Clock event registration command.
//!
//! Records a clock-in, clock-out, pause or resume for a subject at the current
//! time in the configured offset. The action is refused when it does not fit
//! the subject's last recorded event (see [`check_transition`]).

use crate::{
    db::entries::TimeEntries,
    libs::{
        config::Config,
        event::{ClockAction, EventKind},
        formatter::{format_date_time, format_offset},
        messages::Message,
        register::check_transition,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ClockArgs {
    /// Action to record
    #[arg(value_enum)]
    action: ClockAction,

    /// Free text stored with the record
    #[arg(short, long)]
    note: Option<String>,

    /// Subject to record for (defaults to PONTO_SUBJECT or the configured subject)
    #[arg(short, long)]
    subject: Option<String>,
}

pub fn cmd(clock_args: ClockArgs) -> Result<()> {
    let config = Config::read()?;
    let clock = config.clock();
    let subject = config.resolve_subject(clock_args.subject)?;
    let normalizer = clock.normalizer()?;

    let entries = TimeEntries::new()?;
    let last = entries.last_kind(&subject)?;
    if let Err(reason) = check_transition(last.as_ref(), clock_args.action) {
        msg_bail_anyhow!(Message::ClockRejected(reason.to_string()));
    }

    let now = normalizer.now();
    let note = clock_args.note.as_deref().filter(|note| !note.trim().is_empty());
    entries.insert(&subject, &EventKind::from(clock_args.action), &now, note)?;
    tracing::debug!(%subject, action = %clock_args.action, at = %now, "clock event recorded");

    msg_success!(Message::ClockRegistered {
        action: clock_args.action.to_string(),
        subject: subject.clone(),
        time: format_date_time(&now),
        offset: format_offset(&normalizer.offset()),
    });
    if let Some(note) = note {
        msg_print!(Message::ClockNote(note.to_string()));
    }
    msg_info!(match clock_args.action {
        ClockAction::In => Message::ClockHintIn,
        ClockAction::Out => Message::ClockHintOut,
        ClockAction::Pause => Message::ClockHintPause,
        ClockAction::Resume => Message::ClockHintResume,
    });

    Ok(())
}
