//! # dynaform-core
//!
//! Core types shared by the dynaform crates: the error taxonomy, logging
//! integration, and small utilities used by the form engine.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Tracing-based logging integration
//! - [`utils`] - Utility types (`MultiValueDict`, text helpers)

pub mod error;
pub mod logging;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{FormError, FormResult, ValidationError};
