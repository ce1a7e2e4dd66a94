//! Core error types for dynaform.
//!
//! [`FormError`] covers every anomaly the engine can run into while building,
//! configuring, or rendering a form. None of these reach the end user: the
//! engine logs them and recovers. The only failure an end user ever sees is a
//! [`ValidationError`], surfaced through the error popup.

use std::fmt;

use thiserror::Error;

/// A value failed the rule attached to its field.
///
/// Carries the fully formatted message (placeholder already substituted) and
/// the subject the message was formatted for.
///
/// # Examples
///
/// ```
/// use dynaform_core::error::ValidationError;
///
/// let err = ValidationError::new("The field 'Name' only accepts letters.", "Name");
/// assert_eq!(err.to_string(), "The field 'Name' only accepts letters.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The formatted failure message.
    pub message: String,
    /// The title-cased subject named in the message.
    pub subject: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`.
    pub fn new(message: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            subject: subject.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for dynaform.
#[derive(Error, Debug)]
pub enum FormError {
    // ── Configuration ────────────────────────────────────────────────

    /// The element the form should be mounted into does not exist.
    #[error("Mount target not found: no element with id \"{0}\"")]
    MissingMountTarget(String),

    /// An operation that needs the rendered tree ran before `render`.
    #[error("Form has not been rendered")]
    NotRendered,

    /// A configuration value is missing or could not be parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ── Field descriptors ────────────────────────────────────────────

    /// A field descriptor lacks its kind, identifier, or control name.
    #[error("Malformed field: {0}")]
    MalformedField(String),

    /// A choice field (select, checkbox, radio) was declared without options.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    // ── Rules ────────────────────────────────────────────────────────

    /// A rule reference does not name an entry of the rule catalog.
    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    /// A rule pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for FormError {
    fn from(err: toml::de::Error) -> Self {
        Self::Configuration(format!("Failed to parse TOML: {err}"))
    }
}

/// A convenience type alias for `Result<T, FormError>`.
pub type FormResult<T> = Result<T, FormError>;
