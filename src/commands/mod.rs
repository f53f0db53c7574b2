pub mod audit;
pub mod calc;
pub mod form;
pub mod init;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Compute the duration between a departure and an arrival time", arg_required_else_help = true)]
    Calc(calc::CalcArgs),
    #[command(about = "Derive the duration field of a saved form snapshot", arg_required_else_help = true)]
    Form(form::FormArgs),
    #[command(about = "Check stored durations of a CSV timetable", arg_required_else_help = true)]
    Audit(audit::AuditArgs),
    #[command(about = "Re-derive the duration for each departure/arrival pair read from stdin")]
    Watch,
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
            Commands::Calc(args) => calc::cmd(args),
            Commands::Form(args) => form::cmd(args),
            Commands::Audit(args) => audit::cmd(args),
            Commands::Watch => watch::cmd(),
        }
    }
}
