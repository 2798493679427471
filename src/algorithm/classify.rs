//! Per-indicator risk classification
//!
//! Classification walks each indicator's threshold table from most severe to
//! least severe and returns the first tier the value meets. Exact equality
//! counts as meeting a tier (`>=` for normal-direction indicators, `<=` for
//! reversed ones). Values are taken at face value: 0 or negative inputs are
//! classified against the same tables, with no plausibility validation.

use crate::algorithm::thresholds::{Direction, Indicator, ThresholdSpec};
use crate::error::Result;
use crate::models::assessment::{IndicatorAssessment, IndicatorLevel};
use crate::models::panel::Sex;
use log::debug;

/// Classify one indicator value against its threshold table
///
/// Total for all finite values of every indicator. Indicators with no
/// defined danger/critical tier (PT, INR, platelet, total protein) can only
/// report `Warning` or `Normal`.
#[must_use]
pub fn classify(indicator: Indicator, value: f64, sex: Sex) -> IndicatorAssessment {
    let spec = indicator.thresholds();
    let warning = spec.warning.for_sex(sex);

    let tiers = [
        (IndicatorLevel::Critical, spec.critical),
        (IndicatorLevel::Danger, spec.danger),
        (IndicatorLevel::Warning, Some(warning)),
    ];

    for (level, threshold) in tiers {
        let Some(threshold) = threshold else {
            continue;
        };
        if meets(spec.direction, value, threshold) {
            debug!(
                "{indicator} {value} met {level} threshold {threshold} ({sex})"
            );
            return IndicatorAssessment::breach(
                value,
                level,
                breach_message(indicator, value, level, threshold, spec),
            );
        }
    }

    IndicatorAssessment::normal(value)
}

/// Text-level classification entry point
///
/// Parses the indicator field name and the sex value before classifying.
/// Either parse failure is fatal to this single classification only; callers
/// evaluating a whole reading keep going with the other indicators.
pub fn classify_named(name: &str, value: f64, sex: &str) -> Result<IndicatorAssessment> {
    let indicator: Indicator = name.parse()?;
    match sex.parse::<Sex>() {
        Ok(sex) => Ok(classify(indicator, value, sex)),
        // Sex only matters where the breakpoints are split
        Err(_) if !indicator.is_sex_specific() => Ok(classify(indicator, value, Sex::Male)),
        Err(err) => Err(err),
    }
}

/// Whether a value meets a threshold in the given direction
const fn meets(direction: Direction, value: f64, threshold: f64) -> bool {
    match direction {
        Direction::HighIsWorse => value >= threshold,
        Direction::LowIsWorse => value <= threshold,
    }
}

/// Human-readable breach message naming the level and the threshold met
fn breach_message(
    indicator: Indicator,
    value: f64,
    level: IndicatorLevel,
    threshold: f64,
    spec: ThresholdSpec,
) -> String {
    let relation = match spec.direction {
        Direction::HighIsWorse => "at or above",
        Direction::LowIsWorse => "at or below",
    };
    let unit = indicator.unit();
    if unit.is_empty() {
        format!(
            "{} {value} is {relation} the {level} threshold {threshold}",
            indicator.display_name()
        )
    } else {
        format!(
            "{} {value} {unit} is {relation} the {level} threshold {threshold} {unit}",
            indicator.display_name()
        )
    }
}
