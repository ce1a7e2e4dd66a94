//! The form engine.
//!
//! [`FormEngine`] owns an ordered list of [`FieldDescriptor`]s and a frozen
//! [`FormConfig`]. It renders the fields into a [`Document`], validates them
//! when the host reports a submission, and reads their values back.
//!
//! None of the public entry points return errors. Anomalies (a malformed
//! field, a missing mount target, a submission before rendering) are logged
//! when diagnostics are enabled, and the operation is skipped.
//!
//! # Examples
//!
//! ```
//! use dynaform_forms::catalog::catalog;
//! use dynaform_forms::config::FormConfig;
//! use dynaform_forms::dom::Document;
//! use dynaform_forms::fields::FieldDescriptor;
//! use dynaform_forms::form::{FormEngine, Submission};
//! use dynaform_forms::virtual_dom::VirtualDocument;
//!
//! let mut doc = VirtualDocument::new();
//! doc.mount_point("form_container");
//!
//! let mut engine = FormEngine::new(FormConfig::builder().mount_target("form_container").build());
//! engine.add_field(
//!     FieldDescriptor::text("name", "name")
//!         .label("Name")
//!         .rule(catalog().words.multiple_words.clone()),
//! );
//! engine.render(&mut doc).unwrap();
//!
//! let input = doc.element_by_id("name").unwrap();
//! doc.set_value(input, "Jane1");
//! assert!(matches!(engine.submit(&mut doc), Submission::Rejected(_)));
//!
//! doc.set_value(input, "Jane Doe");
//! assert_eq!(engine.submit(&mut doc), Submission::Accepted);
//! ```

use dynaform_core::logging::form_span;
use dynaform_core::{FormError, FormResult};

use crate::config::FormConfig;
use crate::dom::{Document, EventKind, NodeId};
use crate::fields::{FieldDescriptor, FieldSeed};
use crate::popup;
use crate::validation::{first_failure, FieldFailure, TreeValues};
use crate::values::{collect_values, FormValues};
use crate::widgets::{build_control, id_for_label};

/// Class of the wrapper around each rendered field.
pub const FIELD_WRAPPER_CLASS: &str = "form-field";

/// Where the engine is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// No submission has been handled yet.
    #[default]
    Idle,
    /// Rules are being evaluated.
    Validating,
    /// The last submission passed and the callback ran.
    Accepted,
    /// The last submission failed on the named field.
    Rejected {
        /// Identifier of the failing field.
        identifier: String,
    },
}

/// Outcome of one call to [`FormEngine::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Every field passed; the native submission may proceed.
    Accepted,
    /// A field failed; the host must suppress the native submission.
    Rejected(FieldFailure),
    /// Nothing was rendered, so there was nothing to submit.
    Ignored,
}

/// Renders, validates, and reads back one form.
#[derive(Debug)]
pub struct FormEngine {
    config: FormConfig,
    fields: Vec<FieldDescriptor>,
    root: Option<NodeId>,
    state: SubmitState,
}

impl FormEngine {
    /// Creates an engine with no fields.
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            fields: Vec::new(),
            root: None,
            state: SubmitState::Idle,
        }
    }

    /// Registers a field. Returns `false` (and logs) if the field is malformed.
    ///
    /// Identifiers are not de-duplicated.
    pub fn add_field(&mut self, field: FieldDescriptor) -> bool {
        match field.check() {
            Ok(()) => {
                self.fields.push(field);
                true
            }
            Err(err) => {
                self.diagnose(&err);
                false
            }
        }
    }

    /// Converts and registers a seed. Returns `false` (and logs) if the
    /// conversion fails.
    pub fn add_seed(&mut self, seed: FieldSeed) -> bool {
        match FieldDescriptor::try_from(seed) {
            Ok(field) => self.add_field(field),
            Err(err) => {
                self.diagnose(&err);
                false
            }
        }
    }

    /// Renders the form into the mount target and returns the form element.
    ///
    /// Returns `None` (and logs) if the mount target does not exist; the
    /// document is left untouched in that case. Rendering again mounts a
    /// second form, which becomes the one submissions and value reads use.
    pub fn render(&mut self, doc: &mut dyn Document) -> Option<NodeId> {
        let span = form_span(self.config.form_name());
        let _guard = span.enter();
        match self.try_render(doc) {
            Ok(form) => {
                if self.root.is_some() {
                    tracing::debug!("form rendered again; the newest tree replaces the previous one");
                }
                self.root = Some(form);
                tracing::debug!(fields = self.fields.len(), "form rendered");
                Some(form)
            }
            Err(err) => {
                self.diagnose(&err);
                None
            }
        }
    }

    fn try_render(&self, doc: &mut dyn Document) -> FormResult<NodeId> {
        let mount_id = self.config.mount_target_id();
        let mount = doc
            .element_by_id(mount_id)
            .ok_or_else(|| FormError::MissingMountTarget(mount_id.to_string()))?;

        let form = doc.create_element("form");
        doc.set_attribute(form, "id", &self.config.form_element_id());
        doc.set_attribute(form, "class", self.config.style_hook());
        if !self.config.form_name().is_empty() {
            doc.set_attribute(form, "name", self.config.form_name());
        }
        doc.add_event_listener(form, EventKind::Submit);

        if let Some(title) = self.config.title_text() {
            let h2 = text_element(doc, "h2", title, self.config.title_style_hook());
            doc.append_child(form, h2);
        }
        if let Some(legend) = self.config.legend_text() {
            let p = text_element(doc, "p", legend, self.config.legend_style_hook());
            doc.append_child(form, p);
        }

        for field in self.fields.iter().filter(|f| f.visible) {
            let wrapper = doc.create_element("div");
            doc.set_attribute(wrapper, "class", FIELD_WRAPPER_CLASS);
            if let Some(text) = &field.label {
                let label = doc.create_element("label");
                doc.set_attribute(label, "for", &id_for_label(field));
                doc.set_text(label, text);
                doc.append_child(wrapper, label);
            }
            let control = build_control(doc, field);
            doc.append_child(wrapper, control);
            doc.append_child(form, wrapper);
        }

        doc.append_child(mount, form);
        Ok(form)
    }

    /// Handles a submission of the rendered form.
    ///
    /// Fields are validated in registration order. The first failure shows a
    /// popup anchored to that field's control and stops validation. When all
    /// fields pass, the configured callback runs.
    pub fn submit(&mut self, doc: &mut dyn Document) -> Submission {
        let span = form_span(self.config.form_name());
        let _guard = span.enter();
        let Some(form) = self.root else {
            self.diagnose(&FormError::NotRendered);
            return Submission::Ignored;
        };

        self.state = SubmitState::Validating;
        let failure = first_failure(&self.fields, &TreeValues::new(doc, form));

        match failure {
            None => {
                tracing::debug!("submission accepted");
                self.state = SubmitState::Accepted;
                self.config.on_valid_submit().call();
                Submission::Accepted
            }
            Some(failure) => {
                tracing::debug!(field = %failure.identifier, "submission rejected");
                if let Some(anchor) = doc.descendant_by_id(form, &failure.identifier) {
                    self.show_popup(doc, &failure.error.message, anchor);
                }
                self.state = SubmitState::Rejected {
                    identifier: failure.identifier.clone(),
                };
                Submission::Rejected(failure)
            }
        }
    }

    /// Shows an error popup above `anchor`, replacing any popup already shown.
    pub fn show_popup(&self, doc: &mut dyn Document, message: &str, anchor: NodeId) -> NodeId {
        popup::show_popup(doc, self.config.popup_style_hook(), message, anchor)
    }

    /// Current values of the rendered controls, or `None` before rendering.
    pub fn values(&self, doc: &dyn Document) -> Option<FormValues> {
        self.root.map(|form| collect_values(doc, form))
    }

    /// The state after the last submission.
    pub const fn state(&self) -> &SubmitState {
        &self.state
    }

    /// Registered fields, in order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// The configuration the engine was created with.
    pub const fn config(&self) -> &FormConfig {
        &self.config
    }

    /// The most recently rendered form element.
    pub const fn rendered_root(&self) -> Option<NodeId> {
        self.root
    }

    fn diagnose(&self, err: &FormError) {
        if self.config.diagnostics_enabled() {
            tracing::error!(form = self.config.form_name(), "{err}");
        }
    }
}

fn text_element(doc: &mut dyn Document, tag: &str, text: &str, class: Option<&str>) -> NodeId {
    let node = doc.create_element(tag);
    doc.set_text(node, text);
    if let Some(class) = class {
        doc.set_attribute(node, "class", class);
    }
    node
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::catalog::catalog;
    use crate::fields::Choice;
    use crate::virtual_dom::VirtualDocument;

    fn config() -> FormConfig {
        FormConfig::builder()
            .mount_target("form_container")
            .form_name("register_form")
            .diagnostics(true)
            .build()
    }

    fn mounted() -> VirtualDocument {
        let mut doc = VirtualDocument::new();
        doc.mount_point("form_container");
        doc
    }

    #[test]
    fn test_add_field_rejects_malformed() {
        let mut engine = FormEngine::new(config());
        assert!(!engine.add_field(FieldDescriptor::text("", "name")));
        assert!(!engine.add_field(FieldDescriptor::text("name", "")));
        assert!(engine.add_field(FieldDescriptor::text("name", "name")));
        assert!(engine.add_field(FieldDescriptor::text("name", "name")));
        assert_eq!(engine.fields().len(), 2);
    }

    #[test]
    fn test_add_seed() {
        let mut engine = FormEngine::new(config());
        let good: FieldSeed =
            serde_json::from_str(r#"{"type": "text", "id": "a", "name": "a"}"#).unwrap();
        let bad: FieldSeed = serde_json::from_str(r#"{"id": "b", "name": "b"}"#).unwrap();
        assert!(engine.add_seed(good));
        assert!(!engine.add_seed(bad));
        assert_eq!(engine.fields().len(), 1);
    }

    #[test]
    fn test_render_structure() {
        let mut doc = mounted();
        let config = FormConfig::builder()
            .mount_target("form_container")
            .form_name("register_form")
            .title("Register")
            .title_style_hook("form_title")
            .legend("All fields are required")
            .build();
        let mut engine = FormEngine::new(config);
        engine.add_field(FieldDescriptor::text("name", "name").label("Name"));
        engine.add_field(FieldDescriptor::button("submit", "submit").button_text("Send"));
        let form = engine.render(&mut doc).unwrap();

        assert_eq!(
            doc.to_html(form),
            concat!(
                r#"<form id="form_form_container" class="dynamic-form" name="register_form">"#,
                r#"<h2 class="form_title">Register</h2>"#,
                "<p>All fields are required</p>",
                r#"<div class="form-field"><label for="name">Name</label>"#,
                r#"<input type="text" value="" id="name" name="name" /></div>"#,
                r#"<div class="form-field"><button type="submit" id="submit" name="submit">Send</button></div>"#,
                "</form>"
            )
        );
        assert!(doc.has_listener(form, EventKind::Submit));
        assert_eq!(engine.rendered_root(), Some(form));
    }

    #[test]
    fn test_group_label_targets_first_option() {
        let mut doc = mounted();
        let mut engine = FormEngine::new(config());
        engine.add_field(
            FieldDescriptor::radio("size", "size", vec![Choice::new("s", "S")]).label("Size"),
        );
        let form = engine.render(&mut doc).unwrap();
        assert!(doc.to_html(form).contains(r#"<label for="size_0">Size</label>"#));
    }

    #[test]
    fn test_missing_mount_leaves_document_untouched() {
        let mut doc = VirtualDocument::new();
        let before = doc.to_html(doc.body());
        let mut engine = FormEngine::new(config());
        engine.add_field(FieldDescriptor::text("name", "name"));
        assert_eq!(engine.render(&mut doc), None);
        assert_eq!(doc.to_html(doc.body()), before);
        assert!(engine.values(&doc).is_none());
    }

    #[test]
    fn test_submit_before_render_is_ignored() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let config = config().with_submit_action(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let mut engine = FormEngine::new(config);
        let mut doc = mounted();
        assert_eq!(engine.submit(&mut doc), Submission::Ignored);
        assert_eq!(engine.state(), &SubmitState::Idle);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_submit_state_transitions() {
        let mut doc = mounted();
        let mut engine = FormEngine::new(config());
        engine.add_field(
            FieldDescriptor::text("zip", "zip").rule(catalog().numeric.numeric.clone()),
        );
        engine.render(&mut doc);
        let zip = doc.element_by_id("zip").unwrap();

        doc.set_value(zip, "abc");
        let Submission::Rejected(failure) = engine.submit(&mut doc) else {
            panic!("expected rejection");
        };
        assert_eq!(failure.error.message, "The field 'Zip' only accepts numbers.");
        assert_eq!(
            engine.state(),
            &SubmitState::Rejected {
                identifier: "zip".into()
            }
        );

        doc.set_value(zip, "08001");
        assert_eq!(engine.submit(&mut doc), Submission::Accepted);
        assert_eq!(engine.state(), &SubmitState::Accepted);
    }

    #[test]
    fn test_rerender_uses_newest_tree() {
        let mut doc = mounted();
        let mut engine = FormEngine::new(config());
        engine.add_field(FieldDescriptor::text("name", "name").default_value("x"));
        let first = engine.render(&mut doc).unwrap();
        let second = engine.render(&mut doc).unwrap();
        assert_ne!(first, second);
        assert_eq!(engine.rendered_root(), Some(second));
        let mount = doc.element_by_id("form_container").unwrap();
        assert_eq!(doc.children(mount).len(), 2);
    }

    #[test]
    fn test_engine_popup_uses_configured_class() {
        let mut doc = mounted();
        let config = FormConfig::builder()
            .mount_target("form_container")
            .popup_style_hook("my-popup")
            .build();
        let mut engine = FormEngine::new(config);
        engine.add_field(FieldDescriptor::text("name", "name"));
        engine.render(&mut doc);
        let anchor = doc.element_by_id("name").unwrap();
        let popup = engine.show_popup(&mut doc, "oops", anchor);
        assert_eq!(doc.elements_by_class("my-popup"), vec![popup]);
    }

    #[test]
    fn test_invisible_fields_are_not_rendered() {
        let mut doc = mounted();
        let mut engine = FormEngine::new(config());
        engine.add_field(FieldDescriptor::text("shown", "shown"));
        engine.add_field(FieldDescriptor::text("hidden", "hidden").visible(false));
        engine.render(&mut doc);
        assert!(doc.element_by_id("shown").is_some());
        assert!(doc.element_by_id("hidden").is_none());
        assert_eq!(engine.fields().len(), 2);
        assert_eq!(engine.config().form_element_id(), "form_form_container");
    }
}
