//! Escala CLI - leave ledger and shift roster
//!
//! Usage: escala <COMMAND>
//!
//! Commands:
//!   absence      Show, add or remove single-day absences
//!   special-day  Manage holiday / optional-holiday markers
//!   lts          Sick leave: register, list periods, cancel
//!   vacation     Vacation (FE/FP): register, list periods, cancel
//!   employee     Roster operations
//!   count        Active head count for a team on a date
//!   undo         Undo the most recent mutation
//!   history      Show the action history

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{
    build_engine, cmd_absence, cmd_count, cmd_employee, cmd_history, cmd_lts, cmd_special_day,
    cmd_undo, cmd_vacation,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut engine = build_engine(cli.config, cli.data_dir, cli.yes)?;

    match cli.command {
        Commands::Absence(command) => cmd_absence(&mut engine, command),
        Commands::SpecialDay(command) => cmd_special_day(&mut engine, command),
        Commands::Lts(command) => cmd_lts(&mut engine, command),
        Commands::Vacation(command) => cmd_vacation(&mut engine, command),
        Commands::Employee(command) => cmd_employee(&mut engine, command),
        Commands::Count { team, date } => cmd_count(&engine, &team, &date),
        Commands::Undo => cmd_undo(&mut engine),
        Commands::History => cmd_history(&engine),
    }
}
