//! Domain services
//!
//! Pure business logic with no I/O dependencies: the shift-rotation
//! calculator and business-day arithmetic over the special-day calendar.

mod business_days;
mod rotation;

pub use business_days::{business_days_between, is_business_day};
pub use rotation::{ShiftRotationCalculator, DEFAULT_ROTATION_ANCHOR};
