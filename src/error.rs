//! Error types for Escala
//!
//! Uses `thiserror` for library errors; the CLI binary wraps these in
//! `anyhow` at the edge.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::ports::StoreError;
use crate::domain::value_objects::AbsenceType;

/// Result type alias for Escala operations
pub type EscalaResult<T> = Result<T, EscalaError>;

/// Main error type for Escala operations
#[derive(Error, Debug)]
pub enum EscalaError {
    /// A leave request failed validation (wrong day count, mismatched
    /// declared vs. computed business days, invalid split combination,
    /// annual cap exceeded, premium-leave length out of range)
    #[error("{message}")]
    Validation { message: String },

    /// An absence already exists at (employee, date)
    #[error("an absence of type {existing} is already registered on {date}")]
    DuplicateAbsence {
        date: NaiveDate,
        existing: AbsenceType,
    },

    /// A bulk registration collides with existing records in its span
    #[error("requested period overlaps {count} existing record(s) between {first} and {last}")]
    OverlappingPeriod {
        first: NaiveDate,
        last: NaiveDate,
        count: usize,
    },

    /// Operation referenced an employee that is not on the roster
    #[error("no employee with id '{id}'")]
    UnknownEmployee { id: String },

    /// Malformed calendar date string
    #[error("invalid date '{input}' - expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// Persistence failure from the injected store
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EscalaError {
    /// Shorthand for a validation failure with a formatted message.
    pub fn validation(message: impl Into<String>) -> Self {
        EscalaError::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_duplicate_absence() {
        let err = EscalaError::DuplicateAbsence {
            date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            existing: AbsenceType::Fe,
        };
        assert_eq!(
            err.to_string(),
            "an absence of type FE is already registered on 2025-04-01"
        );
    }

    #[test]
    fn test_error_display_overlapping_period() {
        let err = EscalaError::OverlappingPeriod {
            first: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            last: NaiveDate::from_ymd_opt(2025, 4, 3).unwrap(),
            count: 3,
        };
        assert_eq!(
            err.to_string(),
            "requested period overlaps 3 existing record(s) between 2025-04-01 and 2025-04-03"
        );
    }

    #[test]
    fn test_error_display_invalid_date() {
        let err = EscalaError::InvalidDate {
            input: "01/04/2025".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date '01/04/2025' - expected YYYY-MM-DD"
        );
    }
}
