//! Roster command handler

use anyhow::Result;

use crate::cli::EmployeeCommands;

use super::CliEngine;

pub fn cmd_employee(engine: &mut CliEngine, command: EmployeeCommands) -> Result<()> {
    match command {
        EmployeeCommands::List { team } => {
            let employees: Vec<_> = match team {
                Some(team) => engine.employees_by_team(&team).into_iter().cloned().collect(),
                None => engine.roster().all().to_vec(),
            };
            if employees.is_empty() {
                println!("No employees.");
            }
            for employee in employees {
                let role = employee.role.as_deref().unwrap_or("-");
                println!(
                    "{:>4}  {}  [team {}]  {role}",
                    employee.id, employee.name, employee.team
                );
            }
        }
        EmployeeCommands::Add {
            name,
            team,
            role,
            work_schedule,
            career,
        } => {
            let employee = engine.add_employee(&name, &team, role, work_schedule, career)?;
            println!("Added {} with id {}.", employee.name, employee.id);
        }
        EmployeeCommands::Move { employee, team } => {
            engine.move_employee_to_team(&employee, &team)?;
            println!("Moved employee {employee} to team {team}.");
        }
        EmployeeCommands::Delete { employee } => {
            if engine.delete_employee(&employee)? {
                println!("Deleted employee {employee} and all of their records.");
            } else {
                println!("Nothing deleted.");
            }
        }
    }
    Ok(())
}
