//! # dynaform-forms
//!
//! Declarative forms rendered into an element tree. Fields are described with
//! [`FieldDescriptor`]s, optionally carrying a [`Rule`] from the shared
//! [`catalog`](catalog::catalog). A [`FormEngine`] renders them into any
//! [`Document`], validates them on submission (stopping at the first failing
//! field and showing a popup), and reads the current values back.
//!
//! ## Modules
//!
//! - [`rule`] - Full-string pattern rules with message templates
//! - [`catalog`] - The shared, named rule catalog
//! - [`fields`] - Field descriptors and loosely-typed seeds
//! - [`config`] - Immutable form configuration
//! - [`dom`] - The element tree abstraction
//! - [`virtual_dom`] - An in-memory element tree
//! - [`widgets`] - Control builders, one per field kind
//! - [`validation`] - Short-circuiting rule evaluation over a value provider
//! - [`values`] - Value extraction from a rendered form
//! - [`popup`] - The validation error popup
//! - [`form`] - The form engine
//! - [`seed`] - Seed catalogs, including the built-in registration form

pub mod catalog;
pub mod config;
pub mod dom;
pub mod fields;
pub mod form;
pub mod popup;
pub mod rule;
pub mod seed;
pub mod validation;
pub mod values;
pub mod virtual_dom;
pub mod widgets;

pub use config::{FormConfig, FormConfigBuilder, SubmitAction};
pub use dom::{Document, NodeId};
pub use fields::{Choice, FieldDescriptor, FieldKind, FieldSeed};
pub use form::{FormEngine, SubmitState, Submission};
pub use rule::Rule;
pub use values::{FieldValue, FormValues};
pub use virtual_dom::VirtualDocument;
