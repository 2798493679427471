//! Threshold tables for liver panel indicators
//!
//! This module defines the panel indicators and the fixed reference
//! breakpoints each one is classified against. The tables are compile-time
//! constants: several indicators carry separate male/female warning
//! breakpoints, and two (albumin, platelet, total protein) run in the
//! reversed direction where a *low* value is the abnormal one.

use crate::error::PanelError;
use crate::models::panel::Sex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Liver panel indicators
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// Alpha-fetoprotein, hepatocellular-carcinoma screening marker
    Afp,
    /// Aspartate aminotransferase
    Ast,
    /// Alanine aminotransferase
    Alt,
    /// Alkaline phosphatase
    Alp,
    /// Gamma-glutamyl transferase
    Ggt,
    /// r-GTP, the alcohol-sensitive gamma-GTP assay
    RGtp,
    /// Total bilirubin
    Bilirubin,
    /// Serum albumin
    Albumin,
    /// Total protein
    TotalProtein,
    /// Platelet count
    Platelet,
    /// Prothrombin time
    Pt,
    /// International normalized ratio
    Inr,
}

impl Indicator {
    /// Get all panel indicators
    #[must_use]
    pub fn all() -> Vec<Self> {
        vec![
            Self::Afp,
            Self::Ast,
            Self::Alt,
            Self::Alp,
            Self::Ggt,
            Self::RGtp,
            Self::Bilirubin,
            Self::Albumin,
            Self::TotalProtein,
            Self::Platelet,
            Self::Pt,
            Self::Inr,
        ]
    }

    /// Get the display name for this indicator
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Afp => "AFP",
            Self::Ast => "AST",
            Self::Alt => "ALT",
            Self::Alp => "ALP",
            Self::Ggt => "GGT",
            Self::RGtp => "r-GTP",
            Self::Bilirubin => "Bilirubin",
            Self::Albumin => "Albumin",
            Self::TotalProtein => "Total Protein",
            Self::Platelet => "Platelet",
            Self::Pt => "PT",
            Self::Inr => "INR",
        }
    }

    /// Measurement unit, empty for the dimensionless INR
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Afp => "ng/mL",
            Self::Ast | Self::Alt | Self::Alp | Self::Ggt | Self::RGtp => "U/L",
            Self::Bilirubin => "mg/dL",
            Self::Albumin | Self::TotalProtein => "g/dL",
            Self::Platelet => "\u{00d7}10\u{00b3}/\u{03bc}L",
            Self::Pt => "seconds",
            Self::Inr => "",
        }
    }

    /// Threshold table for this indicator
    #[must_use]
    pub const fn thresholds(self) -> ThresholdSpec {
        match self {
            Self::Afp => ThresholdSpec {
                direction: Direction::HighIsWorse,
                warning: WarningBreakpoint::Shared(10.0),
                danger: Some(100.0),
                critical: Some(400.0),
            },
            Self::Ast => ThresholdSpec {
                direction: Direction::HighIsWorse,
                warning: WarningBreakpoint::BySex {
                    male: 40.0,
                    female: 32.0,
                },
                danger: Some(50.0),
                critical: None,
            },
            Self::Alt => ThresholdSpec {
                direction: Direction::HighIsWorse,
                warning: WarningBreakpoint::BySex {
                    male: 40.0,
                    female: 35.0,
                },
                danger: Some(50.0),
                critical: None,
            },
            Self::Alp => ThresholdSpec {
                direction: Direction::HighIsWorse,
                warning: WarningBreakpoint::BySex {
                    male: 120.0,
                    female: 104.0,
                },
                danger: Some(160.0),
                critical: None,
            },
            Self::Ggt => ThresholdSpec {
                direction: Direction::HighIsWorse,
                warning: WarningBreakpoint::BySex {
                    male: 71.0,
                    female: 42.0,
                },
                danger: Some(100.0),
                critical: None,
            },
            Self::RGtp => ThresholdSpec {
                direction: Direction::HighIsWorse,
                warning: WarningBreakpoint::BySex {
                    male: 63.0,
                    female: 35.0,
                },
                danger: Some(77.0),
                critical: None,
            },
            Self::Bilirubin => ThresholdSpec {
                direction: Direction::HighIsWorse,
                warning: WarningBreakpoint::Shared(1.2),
                danger: Some(2.5),
                critical: None,
            },
            Self::Albumin => ThresholdSpec {
                direction: Direction::LowIsWorse,
                warning: WarningBreakpoint::Shared(3.5),
                danger: Some(2.5),
                critical: Some(2.0),
            },
            Self::TotalProtein => ThresholdSpec {
                direction: Direction::LowIsWorse,
                warning: WarningBreakpoint::Shared(6.0),
                danger: None,
                critical: None,
            },
            Self::Platelet => ThresholdSpec {
                direction: Direction::LowIsWorse,
                warning: WarningBreakpoint::Shared(150.0),
                danger: None,
                critical: None,
            },
            Self::Pt => ThresholdSpec {
                direction: Direction::HighIsWorse,
                warning: WarningBreakpoint::Shared(13.0),
                danger: None,
                critical: None,
            },
            Self::Inr => ThresholdSpec {
                direction: Direction::HighIsWorse,
                warning: WarningBreakpoint::Shared(1.2),
                danger: None,
                critical: None,
            },
        }
    }

    /// Whether the warning breakpoint differs between male and female
    #[must_use]
    pub const fn is_sex_specific(self) -> bool {
        matches!(
            self.thresholds().warning,
            WarningBreakpoint::BySex { .. }
        )
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Indicator {
    type Err = PanelError;

    /// Parse an indicator from its snake_case field name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "afp" => Ok(Self::Afp),
            "ast" => Ok(Self::Ast),
            "alt" => Ok(Self::Alt),
            "alp" => Ok(Self::Alp),
            "ggt" => Ok(Self::Ggt),
            "r_gtp" => Ok(Self::RGtp),
            "bilirubin" => Ok(Self::Bilirubin),
            "albumin" => Ok(Self::Albumin),
            "total_protein" => Ok(Self::TotalProtein),
            "platelet" => Ok(Self::Platelet),
            "pt" => Ok(Self::Pt),
            "inr" => Ok(Self::Inr),
            _ => Err(PanelError::UnknownIndicator(s.to_string())),
        }
    }
}

/// Direction in which an indicator becomes abnormal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Higher values are worse (the usual case)
    HighIsWorse,
    /// Lower values are worse (albumin, platelet, total protein)
    LowIsWorse,
}

/// Warning breakpoint, either shared or split by sex
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WarningBreakpoint {
    /// Same breakpoint for both sexes
    Shared(f64),
    /// Separate male/female breakpoints
    BySex {
        /// Male breakpoint
        male: f64,
        /// Female breakpoint
        female: f64,
    },
}

impl WarningBreakpoint {
    /// Resolve the breakpoint for a given sex
    #[must_use]
    pub const fn for_sex(self, sex: Sex) -> f64 {
        match self {
            Self::Shared(value) => value,
            Self::BySex { male, female } => match sex {
                Sex::Male => male,
                Sex::Female => female,
            },
        }
    }
}

/// Threshold table for one indicator
///
/// Only the warning tier can be sex-specific; the danger and critical tiers
/// are shared wherever they are defined at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSpec {
    /// Which direction counts as abnormal
    pub direction: Direction,
    /// Warning breakpoint
    pub warning: WarningBreakpoint,
    /// Danger breakpoint, if defined
    pub danger: Option<f64>,
    /// Critical breakpoint, if defined
    pub critical: Option<f64>,
}

/// Resolve the warning threshold for an indicator and sex
#[must_use]
pub const fn warning_threshold(indicator: Indicator, sex: Sex) -> f64 {
    indicator.thresholds().warning.for_sex(sex)
}
