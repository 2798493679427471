//! Whole-panel evaluation
//!
//! Ties the ALBI calculation and the per-indicator classifier together for a
//! single reading. Evaluation never fails: absent measurements report the
//! `None` level, and a reading whose ALBI preconditions are unmet still
//! classifies every other indicator normally.

use crate::algorithm::albi::compute_albi;
use crate::algorithm::classify::classify;
use crate::algorithm::thresholds::Indicator;
use crate::models::assessment::{IndicatorAssessment, PanelEvaluation};
use crate::models::panel::BloodPanelReading;
use log::debug;
use rustc_hash::FxHashMap;

/// Evaluate a whole blood-panel reading
///
/// Classifies every present measurement against its threshold table and
/// derives the ALBI result when bilirubin and albumin admit it.
#[must_use]
pub fn evaluate_panel(reading: &BloodPanelReading) -> PanelEvaluation {
    let mut indicators = FxHashMap::default();

    for indicator in Indicator::all() {
        let assessment = match reading.value_of(indicator) {
            Some(value) => classify(indicator, value, reading.sex),
            None => IndicatorAssessment::absent(),
        };
        indicators.insert(indicator, assessment);
    }

    let albi = match (reading.bilirubin, reading.albumin) {
        (Some(bilirubin), Some(albumin)) => compute_albi(bilirubin, albumin),
        _ => None,
    };

    match &albi {
        Some(result) => debug!(
            "reading taken {}: ALBI {:.4} ({})",
            reading.taken_at, result.score, result.grade
        ),
        None => debug!(
            "reading taken {}: ALBI not computable",
            reading.taken_at
        ),
    }

    PanelEvaluation { albi, indicators }
}
