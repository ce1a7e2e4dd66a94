//! # dynaform
//!
//! Declarative forms rendered into an element tree, with rule-based
//! validation and value extraction.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `dynaform` to get everything, or on the individual
//! crates for finer-grained control.

/// Error types, logging setup, and utilities.
pub use dynaform_core as core;

/// Rules, the rule catalog, field descriptors, and the form engine.
#[cfg(feature = "forms")]
pub use dynaform_forms as forms;

/// Commonly used items, importable with `use dynaform::prelude::*`.
pub mod prelude {
    pub use dynaform_core::logging::setup_logging;
    pub use dynaform_core::{FormError, FormResult, ValidationError};

    #[cfg(feature = "forms")]
    pub use dynaform_forms::{
        catalog::catalog, Choice, Document, FieldDescriptor, FieldKind, FieldSeed, FieldValue,
        FormConfig, FormEngine, FormValues, Rule, SubmitState, Submission, VirtualDocument,
    };
}

// Third-party re-exports for user convenience
pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;
