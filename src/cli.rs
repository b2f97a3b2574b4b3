//! Command-line interface definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Escala - leave ledger and shift roster for rotating teams
#[derive(Parser, Debug)]
#[command(name = "escala")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (default: ~/.config/escala/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory override
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Skip interactive prompts (auto-confirm destructive actions)
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show, add or remove single-day absences
    #[command(subcommand)]
    Absence(AbsenceCommands),

    /// Manage holiday / optional-holiday markers
    #[command(subcommand)]
    SpecialDay(SpecialDayCommands),

    /// Sick leave (LTS): register, list periods, cancel
    #[command(subcommand)]
    Lts(LtsCommands),

    /// Vacation (FE/FP): register, list periods, cancel
    #[command(subcommand)]
    Vacation(VacationCommands),

    /// Roster operations
    #[command(subcommand)]
    Employee(EmployeeCommands),

    /// Active head count for a team on a date
    Count {
        /// Team id (A-D rotate, others are Mon-Fri)
        team: String,
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Undo the most recent mutation
    Undo,

    /// Show the action history
    History,
}

#[derive(Subcommand, Debug)]
pub enum AbsenceCommands {
    /// Register an absence for one employee on one date
    Add {
        employee: String,
        /// Date (YYYY-MM-DD)
        date: String,
        /// Absence code (FE, FP, BH, L, FO, OA, AI, S, F, PF)
        code: String,
    },
    /// Remove the absence at (employee, date); no-op when absent
    Remove {
        employee: String,
        date: String,
    },
    /// Show the absence at (employee, date)
    Show {
        employee: String,
        date: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SpecialDayCommands {
    /// Mark a date as F (holiday) or PF (optional holiday)
    Add { date: String, kind: String },
    /// Unmark a date
    Remove { date: String, kind: String },
    /// Query a date
    Show { date: String },
}

#[derive(Subcommand, Debug)]
pub enum LtsCommands {
    /// Register consecutive sick-leave days from a start date
    Register {
        employee: String,
        /// First day (YYYY-MM-DD)
        start: String,
        /// Number of consecutive calendar days
        days: u32,
    },
    /// List sick-leave periods for an employee
    Periods { employee: String },
    /// Cancel sick leave from a start date onward
    Cancel { employee: String, start: String },
}

#[derive(Subcommand, Debug)]
pub enum VacationCommands {
    /// Register statutory vacation (FE) over explicit dates
    Fe {
        employee: String,
        start: String,
        end: String,
        /// Declared business days (10-15 or 25)
        business_days: u32,
    },
    /// Register premium leave (FP) over explicit dates
    Fp {
        employee: String,
        start: String,
        end: String,
        /// Period shape: 15dias or 1mes
        period: String,
    },
    /// List vacation records for an employee
    Periods { employee: String },
    /// Cancel a vacation period by employee, start date and kind
    Cancel {
        employee: String,
        start: String,
        /// FE or FP
        kind: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum EmployeeCommands {
    /// List the roster, optionally one team
    List {
        #[arg(long)]
        team: Option<String>,
    },
    /// Add an employee
    Add {
        name: String,
        team: String,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        work_schedule: Option<String>,
        #[arg(long)]
        career: Option<String>,
    },
    /// Move an employee to another team
    Move { employee: String, team: String },
    /// Delete an employee and all their records
    Delete { employee: String },
}
