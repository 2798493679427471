//! Assessment models for evaluated panel readings
//!
//! This module defines the per-indicator risk levels and the aggregate
//! `PanelEvaluation` produced for a whole reading. The `None` and `Normal`
//! levels are deliberately distinct: `None` means no value was supplied,
//! `Normal` means a value was supplied and breached no threshold.

use crate::algorithm::albi::AlbiResult;
use crate::algorithm::thresholds::Indicator;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk level for one indicator, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorLevel {
    /// No value was supplied for this indicator
    None = 0,
    /// Value present, no threshold breached
    Normal = 1,
    /// Warning threshold breached
    Warning = 2,
    /// Danger threshold breached
    Danger = 3,
    /// Critical threshold breached
    Critical = 4,
}

impl IndicatorLevel {
    /// Get a descriptive name for this level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Critical => "critical",
        }
    }

    /// Whether this level represents a breached threshold
    #[must_use]
    pub const fn is_breach(self) -> bool {
        matches!(self, Self::Warning | Self::Danger | Self::Critical)
    }
}

impl fmt::Display for IndicatorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Assessment of a single indicator within a reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorAssessment {
    /// The measured value, absent when the level is `None`
    pub value: Option<f64>,
    /// Risk level assigned to the value
    pub level: IndicatorLevel,
    /// Breach message naming the threshold that was met; absent for
    /// `None` and `Normal`
    pub message: Option<String>,
}

impl IndicatorAssessment {
    /// Assessment for an indicator with no supplied value
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            value: None,
            level: IndicatorLevel::None,
            message: None,
        }
    }

    /// Assessment for a value that breached no threshold
    #[must_use]
    pub const fn normal(value: f64) -> Self {
        Self {
            value: Some(value),
            level: IndicatorLevel::Normal,
            message: None,
        }
    }

    /// Assessment for a value that met a threshold
    #[must_use]
    pub const fn breach(value: f64, level: IndicatorLevel, message: String) -> Self {
        Self {
            value: Some(value),
            level,
            message: Some(message),
        }
    }
}

/// Evaluation of a whole blood-panel reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelEvaluation {
    /// Derived ALBI result, absent when its preconditions are unmet
    pub albi: Option<AlbiResult>,
    /// Assessment for every panel indicator
    pub indicators: FxHashMap<Indicator, IndicatorAssessment>,
}

impl PanelEvaluation {
    /// Get the assessment for one indicator
    #[must_use]
    pub fn get(&self, indicator: Indicator) -> Option<&IndicatorAssessment> {
        self.indicators.get(&indicator)
    }

    /// Risk level for one indicator (`None` when it was not evaluated)
    #[must_use]
    pub fn level_of(&self, indicator: Indicator) -> IndicatorLevel {
        self.indicators
            .get(&indicator)
            .map_or(IndicatorLevel::None, |assessment| assessment.level)
    }

    /// Indicators whose level is at or above the given level
    #[must_use]
    pub fn indicators_at_or_above(&self, level: IndicatorLevel) -> Vec<Indicator> {
        let mut breached: Vec<Indicator> = self
            .indicators
            .iter()
            .filter(|(_, assessment)| assessment.level >= level)
            .map(|(indicator, _)| *indicator)
            .collect();
        breached.sort();
        breached
    }

    /// Count of indicators with a breached threshold
    #[must_use]
    pub fn breach_count(&self) -> usize {
        self.indicators
            .values()
            .filter(|assessment| assessment.level.is_breach())
            .count()
    }

    /// Most severe level present across all indicators
    #[must_use]
    pub fn worst_level(&self) -> IndicatorLevel {
        self.indicators
            .values()
            .map(|assessment| assessment.level)
            .max()
            .unwrap_or(IndicatorLevel::None)
    }
}
