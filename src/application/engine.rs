//! Leave engine facade
//!
//! Owns the roster, ledger, special-day calendar, vacation book and action
//! history, and wires every operation to the injected store and
//! confirmation prompt. Each mutating operation validates, mutates the
//! in-memory state atomically, appends one history entry, and persists the
//! affected collections synchronously. A declined confirmation returns
//! before the first write, so ledger, history and store stay untouched.

use chrono::NaiveDate;
use serde_json::Value;

use crate::application::sick_leave::{self, OverlapReport, SickLeaveOutcome, SickLeavePeriod};
use crate::application::vacation::{self, VacationPlan};
use crate::domain::entities::{
    AbsenceLedger, AbsenceRecord, ActionHistory, Employee, HistoryAction, Roster,
    SpecialDayCalendar, VacationBook, VacationRecord,
};
use crate::domain::ports::{keys, ConfirmationPrompt, StateStore, StoreError};
use crate::domain::services::ShiftRotationCalculator;
use crate::domain::value_objects::{AbsenceType, FpPeriod, SpecialDayKind, VacationKind};
use crate::error::{EscalaError, EscalaResult};

/// Sentinel returned by [`LeaveEngine::active_employee_count`] when the
/// team is off duty; callers must not display it as a count.
pub const OFF_DUTY: i32 = -1;

/// Field updates for an existing employee; `None` leaves a field alone.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub team: Option<String>,
    pub role: Option<Option<String>>,
    pub work_schedule: Option<Option<String>>,
    pub career: Option<Option<String>>,
}

#[derive(Debug)]
pub struct LeaveEngine<S, C> {
    store: S,
    prompt: C,
    rotation: ShiftRotationCalculator,
    roster: Roster,
    ledger: AbsenceLedger,
    special_days: SpecialDayCalendar,
    vacations: VacationBook,
    history: ActionHistory,
}

impl<S: StateStore, C: ConfirmationPrompt> LeaveEngine<S, C> {
    /// Load every collection from the store. Missing keys start empty.
    pub fn load(store: S, prompt: C, rotation: ShiftRotationCalculator) -> EscalaResult<Self> {
        let roster = Roster::from_employees(load_collection(&store, keys::EMPLOYEES)?);
        let ledger = AbsenceLedger::from_records(load_collection(&store, keys::ABSENCES)?);
        let special_days =
            SpecialDayCalendar::from_days(load_collection(&store, keys::SPECIAL_DAYS)?);
        let vacations = VacationBook::from_records(load_collection(&store, keys::VACATION_RECORDS)?);

        Ok(Self {
            store,
            prompt,
            rotation,
            roster,
            ledger,
            special_days,
            vacations,
            history: ActionHistory::new(),
        })
    }

    // ---- read surface -------------------------------------------------

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    pub fn prompt(&self) -> &C {
        &self.prompt
    }

    pub fn get_absence(&self, employee_id: &str, date: NaiveDate) -> Option<AbsenceRecord> {
        self.ledger.get(employee_id, date)
    }

    pub fn is_special_day(&self, date: NaiveDate, kind: SpecialDayKind) -> bool {
        self.special_days.contains(date, kind)
    }

    pub fn is_special(&self, date: NaiveDate) -> bool {
        self.special_days.is_special(date)
    }

    pub fn employees_by_team(&self, team: &str) -> Vec<&Employee> {
        self.roster.by_team(team)
    }

    /// Employees of `team` on duty and present on `date`, or [`OFF_DUTY`]
    /// when the team is not scheduled that day.
    pub fn active_employee_count(&self, team: &str, date: NaiveDate) -> i32 {
        if !self.rotation.is_active(team, date) {
            return OFF_DUTY;
        }
        let members = self.roster.by_team(team);
        let absent_ids = self.ledger.absent_on(date);
        let absent = members
            .iter()
            .filter(|m| absent_ids.contains(&m.id.as_str()))
            .count();
        members.len() as i32 - absent as i32
    }

    // ---- single absences ----------------------------------------------

    /// Register one absence. Fails with `DuplicateAbsence` when the slot
    /// is taken.
    pub fn add_absence(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        kind: AbsenceType,
    ) -> EscalaResult<()> {
        self.require_employee(employee_id)?;
        self.ledger.add(employee_id, date, kind)?;
        let record = AbsenceRecord {
            employee_id: employee_id.to_string(),
            date,
            kind,
        };
        let name = self.roster.display_name(employee_id);
        self.history.push(
            HistoryAction::Add(record),
            format!("added {kind} for {name} on {date}"),
        );
        self.save_absences()
    }

    /// Remove the absence at (employee, date). Silent no-op when absent.
    pub fn remove_absence(&mut self, employee_id: &str, date: NaiveDate) -> EscalaResult<()> {
        let Some(record) = self.ledger.remove(employee_id, date) else {
            return Ok(());
        };
        let name = self.roster.display_name(employee_id);
        let kind = record.kind;
        self.history.push(
            HistoryAction::Remove(record),
            format!("removed {kind} for {name} on {date}"),
        );
        self.save_absences()
    }

    // ---- special days -------------------------------------------------

    /// Mark a date. Idempotent: repeating an existing marker changes
    /// nothing and appends no history.
    pub fn add_special_day(&mut self, date: NaiveDate, kind: SpecialDayKind) -> EscalaResult<()> {
        if !self.special_days.add(date, kind) {
            return Ok(());
        }
        self.history.push(
            HistoryAction::SpecialDay {
                date,
                kind,
                added: true,
            },
            format!("marked {} on {date}", kind.label()),
        );
        self.save_special_days()
    }

    /// Unmark a date. Idempotent.
    pub fn remove_special_day(&mut self, date: NaiveDate, kind: SpecialDayKind) -> EscalaResult<()> {
        if !self.special_days.remove(date, kind) {
            return Ok(());
        }
        self.history.push(
            HistoryAction::SpecialDay {
                date,
                kind,
                added: false,
            },
            format!("unmarked {} on {date}", kind.label()),
        );
        self.save_special_days()
    }

    // ---- sick leave (LTS) ---------------------------------------------

    /// Phase one of registration: the structured conflict report, without
    /// mutating anything.
    pub fn sick_leave_conflicts(
        &self,
        employee_id: &str,
        start: NaiveDate,
        days: u32,
    ) -> EscalaResult<Option<OverlapReport>> {
        self.require_employee(employee_id)?;
        check_day_count(days)?;
        let dates = sick_leave::span_dates(start, days);
        Ok(sick_leave::check_conflicts(&self.ledger, employee_id, &dates))
    }

    /// Phase two: commit the registration. With conflicts present and
    /// `overwrite == false` this fails with `OverlappingPeriod` and no
    /// mutation; with `overwrite == true` the conflicting records are
    /// replaced. The whole span is written as one batch with one history
    /// entry, so undo removes all of it.
    pub fn commit_sick_leave(
        &mut self,
        employee_id: &str,
        start: NaiveDate,
        days: u32,
        overwrite: bool,
    ) -> EscalaResult<usize> {
        self.require_employee(employee_id)?;
        check_day_count(days)?;
        let dates = sick_leave::span_dates(start, days);

        if let Some(report) = sick_leave::check_conflicts(&self.ledger, employee_id, &dates) {
            if !overwrite {
                return Err(EscalaError::OverlappingPeriod {
                    first: report.first,
                    last: report.last,
                    count: report.count,
                });
            }
        }

        let overwritten = self.ledger.remove_many(employee_id, &dates).len();
        self.ledger.add_many(employee_id, &dates, AbsenceType::L)?;

        let name = self.roster.display_name(employee_id);
        self.history.push(
            HistoryAction::BulkAdd {
                employee_id: employee_id.to_string(),
                dates,
            },
            format!("registered sick leave for {name} ({days} days from {start})"),
        );
        self.save_absences()?;
        Ok(overwritten)
    }

    /// Prompt-driven registration: on overlap the confirmation prompt
    /// decides; declining aborts with no mutation at all.
    pub fn register_sick_leave(
        &mut self,
        employee_id: &str,
        start: NaiveDate,
        days: u32,
    ) -> EscalaResult<SickLeaveOutcome> {
        if let Some(report) = self.sick_leave_conflicts(employee_id, start, days)? {
            let proceed = self.prompt.confirm(&format!(
                "The requested sick leave ({start}, {days} days) overlaps {} existing \
                 record(s) between {} and {}. Overwrite them?",
                report.count, report.first, report.last
            ));
            if !proceed {
                return Ok(SickLeaveOutcome::Declined);
            }
        }
        let overwritten = self.commit_sick_leave(employee_id, start, days, true)?;
        Ok(SickLeaveOutcome::Registered { overwritten })
    }

    /// Sick-leave runs for one employee, ascending.
    pub fn sick_leave_periods(&self, employee_id: &str) -> Vec<SickLeavePeriod> {
        sick_leave::periods(&self.ledger, employee_id)
    }

    /// Cancel sick leave from `start` onward (every later record, not just
    /// the selected run). Confirmation-gated; silent no-op when nothing
    /// matches. Returns the number of removed records.
    pub fn cancel_sick_leave(&mut self, employee_id: &str, start: NaiveDate) -> EscalaResult<usize> {
        let targets = sick_leave::cancellation_targets(&self.ledger, employee_id, start);
        if targets.is_empty() {
            return Ok(0);
        }
        let name = self.roster.display_name(employee_id);
        if !self.prompt.confirm(&format!(
            "Cancel {} sick leave day(s) for {name} from {start} onward?",
            targets.len()
        )) {
            return Ok(0);
        }

        let removed = self.ledger.remove_many(employee_id, &targets);
        let count = removed.len();
        self.history.push(
            HistoryAction::BulkRemove {
                employee_id: employee_id.to_string(),
                dates: targets,
                kind: AbsenceType::L,
            },
            format!("cancelled sick leave for {name} ({count} days)"),
        );
        self.save_absences()?;
        Ok(count)
    }

    // ---- vacation -----------------------------------------------------

    /// Register statutory vacation over explicit dates with a declared
    /// business-day count.
    pub fn register_vacation_fe(
        &mut self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        business_days: u32,
    ) -> EscalaResult<()> {
        self.require_employee(employee_id)?;
        let plan = vacation::plan_fe(
            &self.ledger,
            &self.vacations,
            &self.special_days,
            employee_id,
            start,
            end,
            business_days,
        )?;
        let description = format!(
            "registered statutory vacation for {} ({business_days} business days)",
            self.roster.display_name(employee_id)
        );
        self.apply_vacation_plan(plan, description)
    }

    /// Register premium leave over explicit dates.
    pub fn register_vacation_fp(
        &mut self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        period: FpPeriod,
    ) -> EscalaResult<()> {
        self.require_employee(employee_id)?;
        let plan = vacation::plan_fp(&self.ledger, employee_id, start, end, period)?;
        let description = format!(
            "registered premium leave for {} ({})",
            self.roster.display_name(employee_id),
            period.label()
        );
        self.apply_vacation_plan(plan, description)
    }

    fn apply_vacation_plan(&mut self, plan: VacationPlan, description: String) -> EscalaResult<()> {
        let VacationPlan { record, dates } = plan;
        let kind = record.kind.as_absence_type();
        self.ledger.add_many(&record.employee_id, &dates, kind)?;
        self.history.push(
            HistoryAction::BulkAdd {
                employee_id: record.employee_id.clone(),
                dates,
            },
            description,
        );
        self.vacations.push(record);
        self.save_absences()?;
        self.save_vacations()
    }

    /// All vacation records for one employee.
    pub fn vacation_periods(&self, employee_id: &str) -> Vec<VacationRecord> {
        self.vacations
            .for_employee(employee_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Cancel the vacation record matching (employee, start, kind) and
    /// every absence of that kind dated `start` or later. Silent no-op
    /// when no record matches; confirmation-gated otherwise. Returns the
    /// number of removed calendar days.
    pub fn cancel_vacation(
        &mut self,
        employee_id: &str,
        start: NaiveDate,
        kind: VacationKind,
    ) -> EscalaResult<usize> {
        if self.vacations.find(employee_id, start, kind).is_none() {
            return Ok(0);
        }
        let name = self.roster.display_name(employee_id);
        if !self.prompt.confirm(&format!(
            "Cancel {} starting {start} for {name}?",
            kind.label()
        )) {
            return Ok(0);
        }

        let targets = vacation::cancellation_targets(&self.ledger, employee_id, start, kind);
        let removed = self.ledger.remove_many(employee_id, &targets);
        self.vacations.remove(employee_id, start, kind);

        let count = removed.len();
        self.history.push(
            HistoryAction::BulkRemove {
                employee_id: employee_id.to_string(),
                dates: targets,
                kind: kind.as_absence_type(),
            },
            format!("cancelled {} for {name}", kind.label()),
        );
        self.save_absences()?;
        self.save_vacations()?;
        Ok(count)
    }

    // ---- roster -------------------------------------------------------

    /// Create an employee; the id is assigned by the roster.
    pub fn add_employee(
        &mut self,
        name: &str,
        team: &str,
        role: Option<String>,
        work_schedule: Option<String>,
        career: Option<String>,
    ) -> EscalaResult<Employee> {
        let employee = Employee {
            id: self.roster.next_id(),
            name: name.to_string(),
            team: team.to_string(),
            role,
            work_schedule,
            career,
        };
        self.roster.add(employee.clone());
        self.save_employees()?;
        Ok(employee)
    }

    /// Apply partial updates. Silent no-op for an unknown id.
    pub fn update_employee(&mut self, employee_id: &str, update: EmployeeUpdate) -> EscalaResult<bool> {
        let changed = self.roster.update(employee_id, |employee| {
            if let Some(name) = update.name {
                employee.name = name;
            }
            if let Some(team) = update.team {
                employee.team = team;
            }
            if let Some(role) = update.role {
                employee.role = role;
            }
            if let Some(work_schedule) = update.work_schedule {
                employee.work_schedule = work_schedule;
            }
            if let Some(career) = update.career {
                employee.career = career;
            }
        });
        if changed {
            self.save_employees()?;
        }
        Ok(changed)
    }

    /// Reassign an employee to another team, journalling the old team so
    /// the move can be undone.
    pub fn move_employee_to_team(&mut self, employee_id: &str, new_team: &str) -> EscalaResult<()> {
        let old_team = self
            .roster
            .move_to_team(employee_id, new_team)
            .ok_or_else(|| EscalaError::UnknownEmployee {
                id: employee_id.to_string(),
            })?;
        let name = self.roster.display_name(employee_id);
        self.history.push(
            HistoryAction::Move {
                employee_id: employee_id.to_string(),
                old_team,
                new_team: new_team.to_string(),
            },
            format!("moved {name} to team {new_team}"),
        );
        self.save_employees()
    }

    /// Delete an employee and all their absence and vacation records.
    /// Confirmation-gated; the history entry is not invertible.
    pub fn delete_employee(&mut self, employee_id: &str) -> EscalaResult<bool> {
        let Some(employee) = self.roster.get(employee_id).cloned() else {
            return Ok(false);
        };
        if !self.prompt.confirm(&format!(
            "Delete {} and all of their records? This cannot be undone.",
            employee.name
        )) {
            return Ok(false);
        }

        self.roster.remove(employee_id);
        self.ledger.remove_all_for(employee_id);
        self.vacations.remove_all_for(employee_id);
        let name = employee.name.clone();
        self.history.push(
            HistoryAction::DeleteEmployee { employee },
            format!("deleted employee {name}"),
        );
        self.save_employees()?;
        self.save_absences()?;
        self.save_vacations()?;
        Ok(true)
    }

    // ---- undo ---------------------------------------------------------

    /// Pop the most recent history entry and apply its inverse. Returns
    /// the entry's description, or `None` on an empty journal (no-op).
    pub fn undo_last(&mut self) -> EscalaResult<Option<String>> {
        let Some(entry) = self.history.pop() else {
            return Ok(None);
        };

        match entry.action {
            HistoryAction::Add(record) => {
                self.ledger.remove(&record.employee_id, record.date);
                self.save_absences()?;
            }
            HistoryAction::Remove(record) => {
                self.ledger.restore(record);
                self.save_absences()?;
            }
            HistoryAction::Move {
                employee_id,
                old_team,
                ..
            } => {
                self.roster.move_to_team(&employee_id, &old_team);
                self.save_employees()?;
            }
            HistoryAction::BulkAdd { employee_id, dates } => {
                self.ledger.remove_many(&employee_id, &dates);
                self.save_absences()?;
            }
            HistoryAction::BulkRemove {
                employee_id,
                dates,
                kind,
            } => {
                for date in dates {
                    self.ledger.restore(AbsenceRecord {
                        employee_id: employee_id.clone(),
                        date,
                        kind,
                    });
                }
                self.save_absences()?;
            }
            HistoryAction::SpecialDay { date, kind, added } => {
                if added {
                    self.special_days.remove(date, kind);
                } else {
                    self.special_days.add(date, kind);
                }
                self.save_special_days()?;
            }
            // Deleting an employee discards their records; there is
            // nothing to restore from the journal.
            HistoryAction::DeleteEmployee { .. } => {}
        }

        Ok(Some(entry.description))
    }

    // ---- persistence --------------------------------------------------

    fn require_employee(&self, employee_id: &str) -> EscalaResult<()> {
        if self.roster.contains(employee_id) {
            Ok(())
        } else {
            Err(EscalaError::UnknownEmployee {
                id: employee_id.to_string(),
            })
        }
    }

    fn save_employees(&self) -> EscalaResult<()> {
        save_collection(&self.store, keys::EMPLOYEES, self.roster.all())
    }

    fn save_absences(&self) -> EscalaResult<()> {
        save_collection(&self.store, keys::ABSENCES, &self.ledger.to_records())
    }

    fn save_special_days(&self) -> EscalaResult<()> {
        save_collection(&self.store, keys::SPECIAL_DAYS, &self.special_days.to_days())
    }

    fn save_vacations(&self) -> EscalaResult<()> {
        save_collection(&self.store, keys::VACATION_RECORDS, self.vacations.all())
    }
}

fn check_day_count(days: u32) -> EscalaResult<()> {
    if days == 0 {
        return Err(EscalaError::validation(
            "the number of days must be at least 1",
        ));
    }
    Ok(())
}

fn load_collection<T: serde::de::DeserializeOwned>(
    store: &impl StateStore,
    key: &str,
) -> EscalaResult<Vec<T>> {
    match store.load(key)? {
        Some(value) => serde_json::from_value(value)
            .map_err(|e| StoreError::corrupted(key, e).into()),
        None => Ok(Vec::new()),
    }
}

fn save_collection<T: serde::Serialize>(
    store: &impl StateStore,
    key: &str,
    items: &[T],
) -> EscalaResult<()> {
    let value: Value =
        serde_json::to_value(items).map_err(|e| StoreError::access(key, e))?;
    store.save(key, &value)?;
    Ok(())
}
