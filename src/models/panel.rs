//! Blood panel reading model
//!
//! This module contains the `BloodPanelReading` model, representing one set of
//! liver-related laboratory measurements for a patient, together with the
//! patient sex the sex-specific thresholds are resolved against. Every
//! measurement is optional; an absent field is simply excluded from
//! evaluation.

use crate::algorithm::thresholds::Indicator;
use crate::error::PanelError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient sex, used to resolve sex-specific warning thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male reference thresholds
    Male,
    /// Female reference thresholds
    Female,
}

impl Sex {
    /// Get the display name for this sex
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Sex {
    type Err = PanelError;

    /// Parse a sex value from text
    ///
    /// Accepts exactly "male" or "female" (case-insensitive, trimmed). There
    /// is deliberately no fallback default: anything else is rejected with
    /// `PanelError::UnknownSex`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(PanelError::UnknownSex(s.to_string())),
        }
    }
}

/// One liver blood-panel reading
///
/// Units follow the laboratory conventions of the source data: enzymes
/// (AST, ALT, ALP, GGT, r-GTP) in U/L, bilirubin in mg/dL, albumin and total
/// protein in g/dL, AFP in ng/mL, platelet count in ×10³/μL, PT in seconds,
/// INR dimensionless. No unit conversion is performed anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodPanelReading {
    /// Date the sample was taken
    pub taken_at: NaiveDate,
    /// Patient sex for sex-specific thresholds
    pub sex: Sex,
    /// Alpha-fetoprotein (ng/mL)
    #[serde(default)]
    pub afp: Option<f64>,
    /// Aspartate aminotransferase (U/L)
    #[serde(default)]
    pub ast: Option<f64>,
    /// Alanine aminotransferase (U/L)
    #[serde(default)]
    pub alt: Option<f64>,
    /// Alkaline phosphatase (U/L)
    #[serde(default)]
    pub alp: Option<f64>,
    /// Gamma-glutamyl transferase (U/L)
    #[serde(default)]
    pub ggt: Option<f64>,
    /// r-GTP, the alcohol-sensitive gamma-GTP assay (U/L)
    #[serde(default)]
    pub r_gtp: Option<f64>,
    /// Total bilirubin (mg/dL)
    #[serde(default)]
    pub bilirubin: Option<f64>,
    /// Serum albumin (g/dL)
    #[serde(default)]
    pub albumin: Option<f64>,
    /// Total protein (g/dL)
    #[serde(default)]
    pub total_protein: Option<f64>,
    /// Platelet count (×10³/μL)
    #[serde(default)]
    pub platelet: Option<f64>,
    /// Prothrombin time (seconds)
    #[serde(default)]
    pub pt: Option<f64>,
    /// International normalized ratio
    #[serde(default)]
    pub inr: Option<f64>,
}

impl BloodPanelReading {
    /// Create an empty reading with no measurements filled in
    #[must_use]
    pub const fn new(taken_at: NaiveDate, sex: Sex) -> Self {
        Self {
            taken_at,
            sex,
            afp: None,
            ast: None,
            alt: None,
            alp: None,
            ggt: None,
            r_gtp: None,
            bilirubin: None,
            albumin: None,
            total_protein: None,
            platelet: None,
            pt: None,
            inr: None,
        }
    }

    /// Look up the measurement for a given indicator
    #[must_use]
    pub const fn value_of(&self, indicator: Indicator) -> Option<f64> {
        match indicator {
            Indicator::Afp => self.afp,
            Indicator::Ast => self.ast,
            Indicator::Alt => self.alt,
            Indicator::Alp => self.alp,
            Indicator::Ggt => self.ggt,
            Indicator::RGtp => self.r_gtp,
            Indicator::Bilirubin => self.bilirubin,
            Indicator::Albumin => self.albumin,
            Indicator::TotalProtein => self.total_protein,
            Indicator::Platelet => self.platelet,
            Indicator::Pt => self.pt,
            Indicator::Inr => self.inr,
        }
    }

    /// Count of measurements actually present in this reading
    #[must_use]
    pub fn measurement_count(&self) -> usize {
        Indicator::all()
            .into_iter()
            .filter(|indicator| self.value_of(*indicator).is_some())
            .count()
    }
}
