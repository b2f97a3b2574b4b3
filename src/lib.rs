//! Escala - leave ledger and shift-roster engine
//!
//! Escala tracks daily attendance and leave state for employees organized
//! into rotating (4-day cycle) or fixed Monday-Friday teams, and enforces
//! the jurisdiction's leave entitlements: statutory vacation (FE, capped
//! at 25 business days per year with fixed split combinations), premium
//! leave (FP, 15 days or one month), and paid sick leave (L). Every
//! mutation is journalled in a bounded history for undo.
//!
//! The core is synchronous and in-memory; persistence and user
//! confirmation are injected through the [`domain::ports`] traits.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    EmployeeUpdate, LeaveEngine, OverlapReport, SickLeaveOutcome, SickLeavePeriod, OFF_DUTY,
};
pub use config::Config;
pub use domain::entities::{
    AbsenceLedger, AbsenceRecord, ActionHistory, Employee, HistoryAction, HistoryEntry, Roster,
    SpecialDay, SpecialDayCalendar, VacationBook, VacationRecord, HISTORY_CAPACITY,
};
pub use domain::ports::{AlwaysConfirm, ConfirmationPrompt, NeverConfirm, StateStore, StoreError};
pub use domain::services::ShiftRotationCalculator;
pub use domain::value_objects::{AbsenceType, FpPeriod, SpecialDayKind, VacationKind};
pub use error::{EscalaError, EscalaResult};
pub use infrastructure::{InteractiveConfirmation, JsonFileStore, MemoryStore};
