//! Domain models for liver panel evaluation
//!
//! This module contains the input reading model and the assessment types
//! produced by an evaluation.

pub mod assessment;
pub mod panel;

// Re-export commonly used types
pub use assessment::{IndicatorAssessment, IndicatorLevel, PanelEvaluation};
pub use panel::{BloodPanelReading, Sex};
