pub mod clear;
pub mod clock;
pub mod init;
pub mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Record a clock-in, clock-out, pause or resume", arg_required_else_help = true)]
    Clock(clock::ClockArgs),
    #[command(about = "Show the time sheet grouped by day")]
    Report(report::ReportArgs),
    #[command(about = "Remove all records of a subject")]
    Clear(clear::ClearArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Clock(args) => clock::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Clear(args) => clear::cmd(args),
        }
    }
}
