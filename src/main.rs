use dotenv::dotenv;
use ponto::commands::Cli;
use ponto::libs::messages::{macros::is_debug_mode, Message};
use ponto::{msg_debug, msg_error};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenv();

    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ponto=debug"));
        let description = filter.to_string();
        tracing_subscriber::fmt().with_env_filter(filter).init();
        msg_debug!(Message::DebugModeEnabled(description));
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(e);
            ExitCode::FAILURE
        }
    }
}
