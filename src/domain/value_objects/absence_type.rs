//! Absence type value object - the ten leave/absence codes
//!
//! Codes and display names come from the jurisdiction's attendance rules.
//! The two-letter codes are the wire format used by the store and CLI.

use serde::{Deserialize, Serialize};

/// Kind of a single-day absence record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbsenceType {
    /// Statutory vacation (Férias Regulamentares)
    #[serde(rename = "FE")]
    Fe,
    /// Premium leave (Férias Prêmio)
    #[serde(rename = "FP")]
    Fp,
    /// Hour-bank compensation (Banco de Horas)
    #[serde(rename = "BH")]
    Bh,
    /// Paid sick leave (Licença para Tratamento de Saúde)
    #[serde(rename = "L")]
    L,
    /// Rotation day off (Folga 4x1)
    #[serde(rename = "FO")]
    Fo,
    /// Other leave of absence (Outros Afastamentos)
    #[serde(rename = "OA")]
    Oa,
    /// Unjustified absence (Ausência Injustificada)
    #[serde(rename = "AI")]
    Ai,
    /// Suspension (Suspensão)
    #[serde(rename = "S")]
    S,
    /// Holiday marker (Feriado)
    #[serde(rename = "F")]
    F,
    /// Optional holiday marker (Ponto Facultativo)
    #[serde(rename = "PF")]
    Pf,
}

impl AbsenceType {
    /// All codes, in display order.
    pub const ALL: [AbsenceType; 10] = [
        AbsenceType::Fe,
        AbsenceType::Fp,
        AbsenceType::Bh,
        AbsenceType::L,
        AbsenceType::Fo,
        AbsenceType::Oa,
        AbsenceType::Ai,
        AbsenceType::S,
        AbsenceType::F,
        AbsenceType::Pf,
    ];

    /// The two-letter (or one-letter) code used in records and the CLI.
    pub fn code(&self) -> &'static str {
        match self {
            AbsenceType::Fe => "FE",
            AbsenceType::Fp => "FP",
            AbsenceType::Bh => "BH",
            AbsenceType::L => "L",
            AbsenceType::Fo => "FO",
            AbsenceType::Oa => "OA",
            AbsenceType::Ai => "AI",
            AbsenceType::S => "S",
            AbsenceType::F => "F",
            AbsenceType::Pf => "PF",
        }
    }

    /// Human-readable name for reports and prompts.
    pub fn label(&self) -> &'static str {
        match self {
            AbsenceType::Fe => "Férias Regulamentares",
            AbsenceType::Fp => "Férias Prêmio",
            AbsenceType::Bh => "Banco de Horas",
            AbsenceType::L => "Licença para Tratamento de Saúde",
            AbsenceType::Fo => "Folga 4x1",
            AbsenceType::Oa => "Outros Afastamentos",
            AbsenceType::Ai => "Ausência Injustificada",
            AbsenceType::S => "Suspensão",
            AbsenceType::F => "Feriado",
            AbsenceType::Pf => "Ponto Facultativo",
        }
    }
}

impl std::fmt::Display for AbsenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for AbsenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AbsenceType::ALL
            .iter()
            .copied()
            .find(|t| t.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown absence code '{s}'"))
    }
}
