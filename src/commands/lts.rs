//! Sick-leave (LTS) command handler

use anyhow::Result;

use escala::application::SickLeaveOutcome;
use escala::domain::value_objects::parse_date;

use crate::cli::LtsCommands;

use super::CliEngine;

pub fn cmd_lts(engine: &mut CliEngine, command: LtsCommands) -> Result<()> {
    match command {
        LtsCommands::Register {
            employee,
            start,
            days,
        } => {
            let start = parse_date(&start)?;
            match engine.register_sick_leave(&employee, start, days)? {
                SickLeaveOutcome::Registered { overwritten } => {
                    if overwritten > 0 {
                        println!(
                            "Registered {days} day(s) of sick leave from {start}, \
                             overwriting {overwritten} existing record(s)."
                        );
                    } else {
                        println!("Registered {days} day(s) of sick leave from {start}.");
                    }
                }
                SickLeaveOutcome::Declined => {
                    println!("Aborted; nothing was changed.");
                }
            }
        }
        LtsCommands::Periods { employee } => {
            let periods = engine.sick_leave_periods(&employee);
            if periods.is_empty() {
                println!("No sick leave registered.");
            }
            for period in periods {
                println!("{} - {} day(s)", period.start_date, period.days);
            }
        }
        LtsCommands::Cancel { employee, start } => {
            let start = parse_date(&start)?;
            let removed = engine.cancel_sick_leave(&employee, start)?;
            if removed == 0 {
                println!("Nothing cancelled.");
            } else {
                println!("Cancelled {removed} sick leave day(s) from {start} onward.");
            }
        }
    }
    Ok(())
}
