//! Removal of all records of a subject.

use crate::{
    db::entries::TimeEntries,
    libs::{config::Config, messages::Message},
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Subject whose records are removed (defaults to PONTO_SUBJECT or the configured subject)
    #[arg(short, long)]
    subject: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(clear_args: ClearArgs) -> Result<()> {
    let config = Config::read()?;
    let subject = config.resolve_subject(clear_args.subject)?;
    let entries = TimeEntries::new()?;

    let count = entries.count(&subject)?;
    if count == 0 {
        msg_warning!(Message::NothingToClear(subject));
        return Ok(());
    }

    if !clear_args.yes {
        msg_warning!(Message::ClearIrreversible);
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClear(subject.clone(), count).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let deleted = entries.clear(&subject)?;
    tracing::info!(%subject, deleted, "records cleared");
    msg_success!(Message::RecordsCleared(subject, deleted));

    Ok(())
}
