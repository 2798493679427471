//! ALBI (Albumin-Bilirubin) score calculation
//!
//! The ALBI score is a validated liver-function severity index derived from
//! serum albumin and total bilirubin:
//!
//! `score = 0.66 * log10(bilirubin) - 0.085 * albumin`
//!
//! with bilirubin in mg/dL and albumin in g/dL. The score is only defined for
//! strictly positive bilirubin; when the preconditions are unmet the result
//! is *absent*, never a zero score or a fabricated grade.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score at or below which a reading is Grade 1
pub const GRADE1_CEILING: f64 = -2.60;
/// Score at or below which a reading is Grade 2 (when above the Grade 1 ceiling)
pub const GRADE2_CEILING: f64 = -1.39;

/// ALBI grade, ordered from best to worst liver function
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbiGrade {
    /// Score <= -2.60, well-preserved liver function
    Grade1 = 1,
    /// Score in (-2.60, -1.39], moderately impaired
    Grade2 = 2,
    /// Score > -1.39, poor liver function
    Grade3 = 3,
}

impl AlbiGrade {
    /// Map a score to its grade
    ///
    /// Boundaries are inclusive on the lower grade: a score of exactly -2.60
    /// is Grade 1 and exactly -1.39 is Grade 2.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score <= GRADE1_CEILING {
            Self::Grade1
        } else if score <= GRADE2_CEILING {
            Self::Grade2
        } else {
            Self::Grade3
        }
    }

    /// Risk level associated with this grade
    #[must_use]
    pub const fn risk(self) -> AlbiRisk {
        match self {
            Self::Grade1 => AlbiRisk::Safe,
            Self::Grade2 => AlbiRisk::Warning,
            Self::Grade3 => AlbiRisk::Danger,
        }
    }

    /// Get a descriptive name for this grade
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Grade1 => "Grade 1",
            Self::Grade2 => "Grade 2",
            Self::Grade3 => "Grade 3",
        }
    }
}

impl fmt::Display for AlbiGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Risk level attached to an ALBI grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbiRisk {
    /// Grade 1
    Safe,
    /// Grade 2
    Warning,
    /// Grade 3
    Danger,
}

impl AlbiRisk {
    /// Get a descriptive name for this risk level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for AlbiRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Derived ALBI result for one reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlbiResult {
    /// The raw score, typically negative
    pub score: f64,
    /// Grade mapped from the score
    pub grade: AlbiGrade,
    /// Risk level mapped from the grade
    pub risk: AlbiRisk,
}

/// Compute the ALBI score, grade, and risk level
///
/// Returns `None` when the score is not computable: either value non-finite
/// or bilirubin not strictly positive (the formula takes `log10(bilirubin)`).
/// Callers must treat an absent result as "unavailable", not as zero.
#[must_use]
pub fn compute_albi(bilirubin: f64, albumin: f64) -> Option<AlbiResult> {
    if !bilirubin.is_finite() || !albumin.is_finite() || bilirubin <= 0.0 {
        return None;
    }

    let score = 0.66 * bilirubin.log10() - 0.085 * albumin;
    let grade = AlbiGrade::from_score(score);

    Some(AlbiResult {
        score,
        grade,
        risk: grade.risk(),
    })
}
