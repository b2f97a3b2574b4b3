//! Vacation vocabulary - leave kinds and premium-leave period shapes

use serde::{Deserialize, Serialize};

use super::AbsenceType;

/// The two vacation entitlements tracked by the vacation book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VacationKind {
    /// Statutory vacation, capped at 25 business days per year
    #[serde(rename = "FE")]
    Fe,
    /// Premium leave, 15 calendar days or roughly one month
    #[serde(rename = "FP")]
    Fp,
}

impl VacationKind {
    pub fn code(&self) -> &'static str {
        match self {
            VacationKind::Fe => "FE",
            VacationKind::Fp => "FP",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VacationKind::Fe => "Férias Regulamentares",
            VacationKind::Fp => "Férias Prêmio",
        }
    }

    pub fn as_absence_type(&self) -> AbsenceType {
        match self {
            VacationKind::Fe => AbsenceType::Fe,
            VacationKind::Fp => AbsenceType::Fp,
        }
    }
}

impl std::fmt::Display for VacationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for VacationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FE" => Ok(VacationKind::Fe),
            "FP" => Ok(VacationKind::Fp),
            other => Err(format!("unknown vacation kind '{other}'")),
        }
    }
}

/// Shape of a premium-leave (FP) request
///
/// `1mes` is deliberately loose: any span between 28 and 32 calendar days
/// counts as one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FpPeriod {
    /// Exactly 15 calendar days
    #[serde(rename = "15dias")]
    FifteenDays,
    /// One month: 28 to 32 calendar days inclusive
    #[serde(rename = "1mes")]
    OneMonth,
}

impl FpPeriod {
    pub fn code(&self) -> &'static str {
        match self {
            FpPeriod::FifteenDays => "15dias",
            FpPeriod::OneMonth => "1mes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FpPeriod::FifteenDays => "15 dias corridos",
            FpPeriod::OneMonth => "1 mês corrido",
        }
    }

    /// Whether a span of `days` calendar days satisfies this shape.
    pub fn accepts(&self, days: i64) -> bool {
        match self {
            FpPeriod::FifteenDays => days == 15,
            FpPeriod::OneMonth => (28..=32).contains(&days),
        }
    }
}

impl std::fmt::Display for FpPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for FpPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "15dias" => Ok(FpPeriod::FifteenDays),
            "1mes" => Ok(FpPeriod::OneMonth),
            other => Err(format!("unknown premium-leave period '{other}'")),
        }
    }
}
