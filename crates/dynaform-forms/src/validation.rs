//! Rule evaluation over a set of fields.
//!
//! Validation does not know about element trees. It asks a [`ValueProvider`]
//! for the current value of each field by identifier, so it can run against
//! a rendered form ([`TreeValues`]) or a plain map in tests.

use std::collections::HashMap;
use std::hash::BuildHasher;

use dynaform_core::ValidationError;

use crate::dom::{Document, NodeId};
use crate::fields::FieldDescriptor;

/// Supplies the current value of a control, looked up by field identifier.
pub trait ValueProvider {
    /// Returns the value, or `None` if no such control exists.
    fn current_value(&self, identifier: &str) -> Option<String>;
}

impl<S: BuildHasher> ValueProvider for HashMap<String, String, S> {
    fn current_value(&self, identifier: &str) -> Option<String> {
        self.get(identifier).cloned()
    }
}

/// Reads values from the controls of a rendered form.
pub struct TreeValues<'a> {
    doc: &'a dyn Document,
    form: NodeId,
}

impl<'a> TreeValues<'a> {
    /// Looks controls up among the descendants of `form`.
    pub fn new(doc: &'a dyn Document, form: NodeId) -> Self {
        Self { doc, form }
    }

    /// The control carrying `identifier`, if rendered.
    pub fn control(&self, identifier: &str) -> Option<NodeId> {
        self.doc.descendant_by_id(self.form, identifier)
    }
}

impl ValueProvider for TreeValues<'_> {
    fn current_value(&self, identifier: &str) -> Option<String> {
        self.control(identifier).and_then(|node| self.doc.value(node))
    }
}

/// The first field that failed its rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    /// Identifier of the failing field.
    pub identifier: String,
    /// Control name of the failing field.
    pub control_name: String,
    /// The rendered failure message.
    pub error: ValidationError,
}

/// Evaluates rules in field order and stops at the first failure.
///
/// Fields without a rule pass. So do fields whose value the provider cannot
/// supply, which is how unrendered controls are treated. Each rule is
/// evaluated with the field's control name as its subject.
pub fn first_failure(
    fields: &[FieldDescriptor],
    values: &dyn ValueProvider,
) -> Option<FieldFailure> {
    fields.iter().find_map(|field| {
        let rule = field.rule.as_ref()?;
        let value = values.current_value(&field.identifier)?;
        rule.evaluate(&value, &field.control_name)
            .err()
            .map(|error| FieldFailure {
                identifier: field.identifier.clone(),
                control_name: field.control_name.clone(),
                error,
            })
    })
}
