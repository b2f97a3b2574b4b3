//! Domain entities
//!
//! The authoritative in-memory state: roster, absence ledger, special-day
//! calendar, vacation book, and the bounded action history. All engines
//! read and write through these.

mod history;
mod ledger;
mod roster;
mod special_days;
mod vacation;

pub use history::{ActionHistory, HistoryAction, HistoryEntry, HISTORY_CAPACITY};
pub use ledger::{AbsenceLedger, AbsenceRecord};
pub use roster::{Employee, Roster};
pub use special_days::{SpecialDay, SpecialDayCalendar};
pub use vacation::{VacationBook, VacationRecord};
