//! Special day kind - calendar overlay markers

use serde::{Deserialize, Serialize};

use super::AbsenceType;

/// Kind of a calendar override on a specific date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpecialDayKind {
    /// Holiday (Feriado) - removes the date from the business-day count
    #[serde(rename = "F")]
    Holiday,
    /// Optional holiday (Ponto Facultativo) - marker only, still a business day
    #[serde(rename = "PF")]
    OptionalHoliday,
}

impl SpecialDayKind {
    pub fn code(&self) -> &'static str {
        match self {
            SpecialDayKind::Holiday => "F",
            SpecialDayKind::OptionalHoliday => "PF",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpecialDayKind::Holiday => "Feriado",
            SpecialDayKind::OptionalHoliday => "Ponto Facultativo",
        }
    }

    /// The absence code rendered on calendars for this marker.
    pub fn as_absence_type(&self) -> AbsenceType {
        match self {
            SpecialDayKind::Holiday => AbsenceType::F,
            SpecialDayKind::OptionalHoliday => AbsenceType::Pf,
        }
    }
}

impl std::fmt::Display for SpecialDayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for SpecialDayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "F" => Ok(SpecialDayKind::Holiday),
            "PF" => Ok(SpecialDayKind::OptionalHoliday),
            other => Err(format!("unknown special day kind '{other}'")),
        }
    }
}
