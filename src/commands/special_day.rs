//! Special-day command handler

use anyhow::Result;

use escala::domain::value_objects::{parse_date, SpecialDayKind};

use crate::cli::SpecialDayCommands;

use super::CliEngine;

pub fn cmd_special_day(engine: &mut CliEngine, command: SpecialDayCommands) -> Result<()> {
    match command {
        SpecialDayCommands::Add { date, kind } => {
            let date = parse_date(&date)?;
            let kind: SpecialDayKind = kind.parse().map_err(anyhow::Error::msg)?;
            engine.add_special_day(date, kind)?;
            println!("{date} marked as {}.", kind.label());
        }
        SpecialDayCommands::Remove { date, kind } => {
            let date = parse_date(&date)?;
            let kind: SpecialDayKind = kind.parse().map_err(anyhow::Error::msg)?;
            engine.remove_special_day(date, kind)?;
            println!("{date} unmarked as {}.", kind.label());
        }
        SpecialDayCommands::Show { date } => {
            let date = parse_date(&date)?;
            let markers: Vec<&str> = [SpecialDayKind::Holiday, SpecialDayKind::OptionalHoliday]
                .into_iter()
                .filter(|kind| engine.is_special_day(date, *kind))
                .map(|kind| kind.label())
                .collect();
            if markers.is_empty() {
                println!("{date}: regular day.");
            } else {
                println!("{date}: {}", markers.join(", "));
            }
        }
    }
    Ok(())
}
