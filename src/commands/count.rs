//! Head-count command handler

use anyhow::Result;

use escala::application::OFF_DUTY;
use escala::domain::value_objects::parse_date;

use super::CliEngine;

pub fn cmd_count(engine: &CliEngine, team: &str, date: &str) -> Result<()> {
    let date = parse_date(date)?;
    let count = engine.active_employee_count(team, date);
    if count == OFF_DUTY {
        println!("Team {team} is off duty on {date}.");
    } else {
        println!("Team {team} on {date}: {count} active employee(s).");
    }
    Ok(())
}
