//! Application configuration initialization command.
//!
//! Runs an interactive wizard for the clock settings: default subject, UTC
//! offset, report window, weekday language and pause handling across midnight.

use crate::{
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
///
/// With `--delete` the configuration file is removed and ponto falls back to
/// defaults; otherwise the wizard runs and its result is saved.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
