//! Absence command handler

use anyhow::Result;

use escala::domain::value_objects::{parse_date, AbsenceType};

use crate::cli::AbsenceCommands;

use super::CliEngine;

pub fn cmd_absence(engine: &mut CliEngine, command: AbsenceCommands) -> Result<()> {
    match command {
        AbsenceCommands::Add {
            employee,
            date,
            code,
        } => {
            let date = parse_date(&date)?;
            let kind: AbsenceType = code.parse().map_err(anyhow::Error::msg)?;
            engine.add_absence(&employee, date, kind)?;
            println!("Registered {} ({}) on {date}.", kind.code(), kind.label());
        }
        AbsenceCommands::Remove { employee, date } => {
            let date = parse_date(&date)?;
            engine.remove_absence(&employee, date)?;
            println!("Removed any absence on {date}.");
        }
        AbsenceCommands::Show { employee, date } => {
            let date = parse_date(&date)?;
            match engine.get_absence(&employee, date) {
                Some(record) => println!(
                    "{date}: {} ({})",
                    record.kind.code(),
                    record.kind.label()
                ),
                None => println!("{date}: no absence registered."),
            }
        }
    }
    Ok(())
}
