//! Vacation (FE/FP) command handler

use anyhow::Result;

use escala::domain::value_objects::{parse_date, FpPeriod, VacationKind};

use crate::cli::VacationCommands;

use super::CliEngine;

pub fn cmd_vacation(engine: &mut CliEngine, command: VacationCommands) -> Result<()> {
    match command {
        VacationCommands::Fe {
            employee,
            start,
            end,
            business_days,
        } => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            engine.register_vacation_fe(&employee, start, end, business_days)?;
            println!(
                "Registered statutory vacation {start} to {end} ({business_days} business days)."
            );
        }
        VacationCommands::Fp {
            employee,
            start,
            end,
            period,
        } => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            let period: FpPeriod = period.parse().map_err(anyhow::Error::msg)?;
            engine.register_vacation_fp(&employee, start, end, period)?;
            println!("Registered premium leave {start} to {end} ({}).", period.label());
        }
        VacationCommands::Periods { employee } => {
            let records = engine.vacation_periods(&employee);
            if records.is_empty() {
                println!("No vacation registered.");
            }
            for record in records {
                let detail = match (record.business_days, record.period) {
                    (Some(business_days), _) => format!("{business_days} business days"),
                    (None, Some(period)) => period.label().to_string(),
                    (None, None) => format!("{} days", record.days),
                };
                println!(
                    "{} {} to {} ({detail})",
                    record.kind.code(),
                    record.start_date,
                    record.end_date
                );
            }
        }
        VacationCommands::Cancel {
            employee,
            start,
            kind,
        } => {
            let start = parse_date(&start)?;
            let kind: VacationKind = kind.parse().map_err(anyhow::Error::msg)?;
            let removed = engine.cancel_vacation(&employee, start, kind)?;
            if removed == 0 {
                println!("Nothing cancelled.");
            } else {
                println!("Cancelled {} ({removed} calendar days removed).", kind.label());
            }
        }
    }
    Ok(())
}
