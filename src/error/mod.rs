//! Error handling for the liver panel evaluator.
//!
//! Errors only arise at the text boundary: the typed API cannot represent an
//! unknown sex or indicator, so classification itself is total.

/// Errors produced when parsing caller-supplied text into panel types
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// Sex value that is neither "male" nor "female"
    #[error("unknown sex {0:?}, expected \"male\" or \"female\"")]
    UnknownSex(String),

    /// Indicator name not part of the liver panel
    #[error("unknown indicator {0:?}")]
    UnknownIndicator(String),
}

/// Alias for Result with `PanelError`
pub type Result<T> = std::result::Result<T, PanelError>;
