//! Value objects - immutable domain vocabulary
//!
//! Small copy types shared across entities and services.

mod absence_type;
mod date;
mod special_day;
mod vacation;

pub use absence_type::AbsenceType;
pub use date::{days_between, enumerate_days, format_date, is_weekend, parse_date};
pub use special_day::SpecialDayKind;
pub use vacation::{FpPeriod, VacationKind};
