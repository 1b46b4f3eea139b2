//! Time sheet report command.
//!
//! Loads a subject's records for the requested window, reconciles them day by
//! day and prints the paginated report, as tables or as JSON.

use crate::{
    db::entries::TimeEntries,
    libs::{
        accumulator::DailyAccumulator,
        config::Config,
        event::IntoClockEvents,
        messages::Message,
        report::assemble,
        view::View,
    },
    msg_debug, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Number of days to include (defaults to the configured window)
    #[arg(short, long)]
    days: Option<u32>,

    /// Subject to report on (defaults to PONTO_SUBJECT or the configured subject)
    #[arg(short, long)]
    subject: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

pub fn cmd(report_args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let clock = config.clock();
    let subject = config.resolve_subject(report_args.subject)?;
    let days = report_args.days.unwrap_or(clock.window_days);
    let normalizer = clock.normalizer()?;

    let rows = TimeEntries::new()?.fetch_window(&subject, days)?;
    msg_debug!(format!("{} record(s) of {} in the last {} days", rows.len(), subject, days));

    if rows.is_empty() {
        msg_warning!(Message::NoRecordsFound(subject, days));
        return Ok(());
    }

    let events = rows.into_clock_events(&subject, &normalizer);
    let recovered = events.iter().filter(|event| event.recovered.is_some()).count();

    let accumulation = DailyAccumulator::new(clock.locale)
        .carry_pause_across_days(clock.carry_pause_across_days)
        .accumulate(&events);
    let report = assemble(&subject, days, &accumulation.buckets, accumulation.total);
    msg_debug!(format!(
        "{} day section(s) on {} page(s)",
        report.sections().count(),
        report.pages.len()
    ));

    if report_args.json {
        View::report_json(&report)?;
    } else {
        View::report(&report)?;
    }

    if recovered > 0 {
        msg_warning!(Message::TimestampsRecovered(recovered));
    }

    Ok(())
}
