//! Application layer
//!
//! Use cases built on the domain entities: sick-leave tracking, vacation
//! entitlement, and the `LeaveEngine` facade that wires them to the
//! injected store and confirmation prompt.

pub mod engine;
pub mod sick_leave;
pub mod vacation;

pub use engine::{EmployeeUpdate, LeaveEngine, OFF_DUTY};
pub use sick_leave::{OverlapReport, SickLeaveOutcome, SickLeavePeriod};
pub use vacation::{VacationPlan, FE_ALLOWED_DAYS, FE_ANNUAL_CAP, FE_SPLIT_PAIRS};
