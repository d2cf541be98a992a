//! Error types for the StudyPilot UI
//!
//! Browser calls hand back opaque `JsValue` errors; these are folded into
//! [`UiError`] at the binding layer so the rest of the crate only deals in
//! `Result<T, UiError>`.

use thiserror::Error;

/// Errors that can occur while wiring the page to the browser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// No `window` object (not running in a browser context)
    #[error("No window object available")]
    NoWindow,
    /// No `document` on the window
    #[error("No document object available")]
    NoDocument,
    /// Registering an event listener failed
    #[error("Failed to attach listener: {0}")]
    ListenerAttach(String),
    /// Removing an event listener failed
    #[error("Failed to detach listener: {0}")]
    ListenerDetach(String),
    /// Intersection observer could not be created or bound
    #[error("Intersection observer error: {0}")]
    Observer(String),
    /// Site configuration parsed but failed validation
    #[error("Invalid site configuration: {0}")]
    InvalidConfig(String),
    /// Site configuration is not valid JSON for the expected shape
    #[error("Failed to parse site configuration: {0}")]
    ConfigParse(String),
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
