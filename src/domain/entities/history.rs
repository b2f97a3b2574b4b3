//! Action history - bounded undo journal
//!
//! Every mutating operation appends exactly one entry carrying the data
//! needed to invert it. The journal holds the 50 most recent entries;
//! pushing the 51st silently evicts the oldest, which then becomes
//! permanently unrecoverable. Undo is strictly LIFO.

use std::collections::VecDeque;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::{AbsenceRecord, Employee};
use crate::domain::value_objects::{AbsenceType, SpecialDayKind};

/// Maximum retained entries.
pub const HISTORY_CAPACITY: usize = 50;

/// Invertible delta of one mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    /// A single absence was inserted.
    Add(AbsenceRecord),
    /// A single absence was deleted.
    Remove(AbsenceRecord),
    /// An employee changed teams.
    Move {
        employee_id: String,
        old_team: String,
        new_team: String,
    },
    /// A batch of same-kind absences was inserted for one employee.
    BulkAdd {
        employee_id: String,
        dates: Vec<NaiveDate>,
    },
    /// A batch of same-kind absences was deleted for one employee.
    BulkRemove {
        employee_id: String,
        dates: Vec<NaiveDate>,
        kind: AbsenceType,
    },
    /// A special-day marker was added (`added == true`) or removed.
    SpecialDay {
        date: NaiveDate,
        kind: SpecialDayKind,
        added: bool,
    },
    /// An employee and all their records were deleted. Not invertible.
    DeleteEmployee { employee: Employee },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub action: HistoryAction,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ActionHistory {
    entries: VecDeque<HistoryEntry>,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest once past capacity.
    pub fn push(&mut self, action: HistoryAction, description: impl Into<String>) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            action,
            description: description.into(),
            timestamp: Utc::now(),
        });
    }

    /// Pop the most recent entry. None on an empty journal.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest-first, for display.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
