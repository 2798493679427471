//! A Rust library for evaluating liver blood-panel readings: ALBI
//! (Albumin-Bilirubin) scoring and per-indicator risk classification with
//! sex-specific thresholds.
//!
//! Everything here is a pure function of its inputs: no I/O, no shared state,
//! safe to call concurrently without coordination.

pub mod algorithm;
pub mod error;
pub mod models;

// Re-export the most common types for easier use
// Core types
pub use error::{PanelError, Result};
pub use models::assessment::{IndicatorAssessment, IndicatorLevel, PanelEvaluation};
pub use models::panel::{BloodPanelReading, Sex};

// ALBI scoring
pub use algorithm::albi::{AlbiGrade, AlbiResult, AlbiRisk, compute_albi};

// Indicator classification
pub use algorithm::classify::{classify, classify_named};
pub use algorithm::evaluate::evaluate_panel;
pub use algorithm::thresholds::{Indicator, ThresholdSpec, warning_threshold};
