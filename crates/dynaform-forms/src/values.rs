//! Value extraction from a rendered form.
//!
//! Values are keyed by control name, in the order the names first appear in
//! the form. Checkbox names always yield [`FieldValue::Multiple`] holding the
//! checked values in document order (possibly none). Every other control
//! yields [`FieldValue::Single`]; when several share a name the last one in
//! document order wins. Unchecked radios, disabled controls, and buttons
//! contribute nothing.

use serde::ser::{Serialize, SerializeMap, Serializer};

use dynaform_core::utils::MultiValueDict;
use dynaform_core::FormResult;

use crate::dom::{Document, NodeId};

const BUTTON_INPUT_TYPES: &[&str] = &["submit", "reset", "button", "image"];

/// The value extracted for one control name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single-valued control.
    Single(String),
    /// The checked values of a checkbox group.
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Returns the scalar value, or `None` for a group.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    /// Returns every value: one for a scalar, all checked ones for a group.
    pub fn as_list(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// Name to value mapping read from a rendered form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: Vec<(String, FieldValue)>,
}

impl FormValues {
    /// Value for a control name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Iterates over `(name, value)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the form has no named controls.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Control names in form order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Serializes the mapping as a JSON object.
    pub fn to_json(&self) -> FormResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for FormValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Reads the live values of every named control under `form`.
pub fn collect_values(doc: &dyn Document, form: NodeId) -> FormValues {
    let mut scalars: MultiValueDict<String> = MultiValueDict::new();
    let mut groups: Vec<String> = Vec::new();

    for node in doc.descendants(form) {
        let Some(tag) = doc.tag_name(node) else {
            continue;
        };
        if !matches!(tag, "input" | "select" | "textarea") {
            continue;
        }
        let Some(name) = doc.attribute(node, "name").filter(|n| !n.is_empty()) else {
            continue;
        };
        if doc.attribute(node, "disabled").is_some() {
            continue;
        }
        let name = name.to_string();
        let input_type = if tag == "input" {
            doc.attribute(node, "type").unwrap_or("text").to_ascii_lowercase()
        } else {
            String::new()
        };

        match input_type.as_str() {
            t if BUTTON_INPUT_TYPES.contains(&t) => {}
            "checkbox" => {
                if !groups.contains(&name) {
                    groups.push(name.clone());
                    if !scalars.contains_key(&name) {
                        scalars.set_list(name.clone(), Vec::new());
                    }
                }
                if doc.is_checked(node) {
                    if let Some(value) = doc.value(node) {
                        scalars.append(name, value);
                    }
                }
            }
            "radio" => {
                if doc.is_checked(node) {
                    if let Some(value) = doc.value(node) {
                        scalars.append(name, value);
                    }
                }
            }
            _ => {
                if let Some(value) = doc.value(node) {
                    scalars.append(name, value);
                }
            }
        }
    }

    let entries = scalars
        .into_iter()
        .filter_map(|(name, mut values)| {
            if groups.contains(&name) {
                return Some((name, FieldValue::Multiple(values)));
            }
            values.pop().map(|last| (name, FieldValue::Single(last)))
        })
        .collect();
    FormValues { entries }
}
