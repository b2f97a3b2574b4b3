//! Roster entity - the employees under management
//!
//! Employees belong to exactly one team. Rotating teams are A-D; every
//! other team works a fixed Monday-Friday schedule.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,
}

/// Owning collection of employees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_employees(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Display name for history descriptions; falls back to a generic
    /// label when the id is unknown.
    pub fn display_name(&self, id: &str) -> String {
        self.get(id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| "Funcionário".to_string())
    }

    pub fn by_team(&self, team: &str) -> Vec<&Employee> {
        self.employees.iter().filter(|e| e.team == team).collect()
    }

    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Next free numeric id. Ids are strings for wire compatibility but
    /// are assigned as increasing integers.
    pub fn next_id(&self) -> String {
        let max = self
            .employees
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    pub fn add(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Apply field updates to an employee. Returns false when the id is
    /// unknown.
    pub fn update<F>(&mut self, id: &str, apply: F) -> bool
    where
        F: FnOnce(&mut Employee),
    {
        match self.employees.iter_mut().find(|e| e.id == id) {
            Some(employee) => {
                apply(employee);
                true
            }
            None => false,
        }
    }

    /// Reassign an employee to another team. Returns the previous team.
    pub fn move_to_team(&mut self, id: &str, new_team: &str) -> Option<String> {
        let employee = self.employees.iter_mut().find(|e| e.id == id)?;
        let old_team = std::mem::replace(&mut employee.team, new_team.to_string());
        Some(old_team)
    }

    /// Remove an employee, returning the removed entry.
    pub fn remove(&mut self, id: &str) -> Option<Employee> {
        let index = self.employees.iter().position(|e| e.id == id)?;
        Some(self.employees.remove(index))
    }
}
