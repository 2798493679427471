//! Algorithm implementations for liver panel evaluation
//!
//! This module contains the ALBI score calculation, the fixed threshold
//! tables, the per-indicator classifier, and whole-panel evaluation.

pub mod albi;
pub mod classify;
pub mod evaluate;
pub mod thresholds;

// Re-export common types
pub use albi::{AlbiGrade, AlbiResult, AlbiRisk, compute_albi};
pub use classify::{classify, classify_named};
pub use evaluate::evaluate_panel;
pub use thresholds::{Indicator, warning_threshold};
