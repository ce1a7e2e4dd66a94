//! Control builders.
//!
//! Widgets turn a [`FieldDescriptor`] into elements of a [`Document`]. The
//! dispatch in [`build_control`] is an exhaustive match on [`FieldKind`], so
//! adding a kind without teaching the renderer about it does not compile.

use std::fmt;

use crate::dom::{Document, NodeId};
use crate::fields::{Choice, FieldDescriptor, FieldKind};

/// Text of a button whose descriptor sets none.
pub const DEFAULT_BUTTON_TEXT: &str = "Click";

/// Inline style of each labeled option in a checkbox or radio group.
const OPTION_LABEL_STYLE: &str = "display: flex; align-items: center; gap: 8px; cursor: pointer;";

/// Enumerates the built-in widgets, one per field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetType {
    /// `<input>` of a text-like type.
    TextInput,
    /// `<input type="number">`.
    NumberInput,
    /// `<textarea>`.
    Textarea,
    /// `<select>`.
    Select,
    /// A set of `<input type="checkbox">` elements.
    CheckboxGroup,
    /// A set of `<input type="radio">` elements.
    RadioGroup,
    /// `<button>`.
    Button,
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TextInput => "TextInput",
            Self::NumberInput => "NumberInput",
            Self::Textarea => "Textarea",
            Self::Select => "Select",
            Self::CheckboxGroup => "CheckboxGroup",
            Self::RadioGroup => "RadioGroup",
            Self::Button => "Button",
        };
        write!(f, "{name}")
    }
}

/// Returns the `for` target of a field's label.
///
/// Groups have no element carrying the field id, so their label targets the
/// first option (`<id>_0`).
pub fn id_for_label(field: &FieldDescriptor) -> String {
    match field.kind {
        FieldKind::Checkbox { .. } | FieldKind::Radio { .. } => format!("{}_0", field.identifier),
        _ => field.identifier.clone(),
    }
}

/// Builds the control for `field` and returns its outermost element.
pub fn build_control(doc: &mut dyn Document, field: &FieldDescriptor) -> NodeId {
    match &field.kind {
        FieldKind::Input {
            input_type,
            default,
            pattern,
        } => {
            let input = input_control(doc, field, input_type.as_str(), default.as_deref());
            if let Some(pattern) = pattern {
                doc.set_attribute(input, "pattern", pattern);
            }
            input
        }
        FieldKind::Number {
            default,
            min,
            max,
            pattern,
        } => {
            let input = input_control(doc, field, "number", default.as_deref());
            if let Some(min) = min {
                doc.set_attribute(input, "min", &min.to_string());
            }
            if let Some(max) = max {
                doc.set_attribute(input, "max", &max.to_string());
            }
            if let Some(pattern) = pattern {
                doc.set_attribute(input, "pattern", pattern);
            }
            input
        }
        FieldKind::Textarea { default } => textarea_control(doc, field, default.as_deref()),
        FieldKind::Select { options, default } => {
            select_control(doc, field, options, default.as_deref())
        }
        FieldKind::Checkbox { options, default } => {
            choice_group(doc, field, "checkbox", options, default.as_deref())
        }
        FieldKind::Radio { options, default } => {
            choice_group(doc, field, "radio", options, default.as_deref())
        }
        FieldKind::Button { text, button_type } => {
            let button = doc.create_element("button");
            doc.set_attribute(button, "type", button_type.as_str());
            doc.set_text(button, text.as_deref().unwrap_or(DEFAULT_BUTTON_TEXT));
            set_common(doc, button, field);
            button
        }
    }
}

/// Sets id, name, and class.
fn set_common(doc: &mut dyn Document, node: NodeId, field: &FieldDescriptor) {
    doc.set_attribute(node, "id", &field.identifier);
    doc.set_attribute(node, "name", &field.control_name);
    if let Some(class) = &field.style_hook {
        doc.set_attribute(node, "class", class);
    }
}

fn set_placeholder_and_required(doc: &mut dyn Document, node: NodeId, field: &FieldDescriptor) {
    if let Some(placeholder) = &field.placeholder {
        doc.set_attribute(node, "placeholder", placeholder);
    }
    if field.required {
        doc.set_attribute(node, "required", "");
    }
}

fn input_control(
    doc: &mut dyn Document,
    field: &FieldDescriptor,
    input_type: &str,
    default: Option<&str>,
) -> NodeId {
    let input = doc.create_element("input");
    doc.set_attribute(input, "type", input_type);
    doc.set_attribute(input, "value", default.unwrap_or(""));
    set_common(doc, input, field);
    set_placeholder_and_required(doc, input, field);
    input
}

fn textarea_control(doc: &mut dyn Document, field: &FieldDescriptor, default: Option<&str>) -> NodeId {
    let textarea = doc.create_element("textarea");
    set_common(doc, textarea, field);
    set_placeholder_and_required(doc, textarea, field);
    if let Some(default) = default {
        doc.set_text(textarea, default);
    }
    textarea
}

fn select_control(
    doc: &mut dyn Document,
    field: &FieldDescriptor,
    options: &[Choice],
    default: Option<&str>,
) -> NodeId {
    let select = doc.create_element("select");
    set_common(doc, select, field);
    for choice in options {
        let option = doc.create_element("option");
        doc.set_attribute(option, "value", &choice.value);
        if default == Some(choice.value.as_str()) {
            doc.set_attribute(option, "selected", "");
        }
        doc.set_text(option, &choice.text);
        doc.append_child(select, option);
    }
    select
}

/// One labeled input per option, all sharing the field's control name.
fn choice_group(
    doc: &mut dyn Document,
    field: &FieldDescriptor,
    input_type: &str,
    options: &[Choice],
    default: Option<&str>,
) -> NodeId {
    let container = doc.create_element("div");
    for (index, choice) in options.iter().enumerate() {
        let label = doc.create_element("label");
        doc.set_attribute(label, "style", OPTION_LABEL_STYLE);

        let input = doc.create_element("input");
        doc.set_attribute(input, "type", input_type);
        doc.set_attribute(input, "id", &format!("{}_{index}", field.identifier));
        doc.set_attribute(input, "name", &field.control_name);
        doc.set_attribute(input, "value", &choice.value);
        if field.required {
            doc.set_attribute(input, "required", "");
        }
        if default == Some(choice.value.as_str()) {
            doc.set_attribute(input, "checked", "");
        }
        if let Some(class) = &field.style_hook {
            doc.set_attribute(input, "class", class);
        }

        let text = doc.create_text(&choice.text);
        doc.append_child(label, input);
        doc.append_child(label, text);
        doc.append_child(container, label);
    }
    container
}
