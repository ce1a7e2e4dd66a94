//! Field seed catalogs.
//!
//! A seed catalog is a list of field descriptions kept outside the code that
//! renders them. [`registration_seed`] is the built-in registration form;
//! [`load_seeds_json`] and [`load_seeds_file`] read catalogs in the
//! [`FieldSeed`] JSON shape.

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use dynaform_core::{FormError, FormResult};

use crate::catalog::catalog;
use crate::fields::{Choice, FieldDescriptor, FieldSeed, InputType};
use crate::rule::Rule;

static AGE_RULE: Lazy<Arc<Rule>> = Lazy::new(|| {
    Arc::new(
        Rule::from_regex(
            "1[01][0-9]|120|[1-9]?[0-9]",
            "The field '%value%' must be a valid age between 0 and 120.",
            "Age",
        )
        .expect("age pattern is valid"),
    )
});

static GENDER_RULE: Lazy<Arc<Rule>> = Lazy::new(|| {
    Arc::new(
        Rule::from_regex(
            "(?i)(male|female|other)",
            "The field '%value%' must be 'male', 'female', or 'other'.",
            "Gender",
        )
        .expect("gender pattern is valid"),
    )
});

/// The registration form: name, email, password, age, gender, terms, and a
/// submit button.
pub fn registration_seed() -> Vec<FieldDescriptor> {
    let textbox = |field: FieldDescriptor, label: &str, placeholder: &str| {
        field
            .label(label)
            .placeholder(placeholder)
            .style_hook("form_textbox")
            .required(true)
    };

    vec![
        textbox(FieldDescriptor::text("name", "name"), "Name", "Enter your name")
            .rule(catalog().words.multiple_words.clone()),
        textbox(
            FieldDescriptor::input(InputType::Email, "email", "email"),
            "Email",
            "Enter your email",
        )
        .rule(catalog().miscellaneous.email.clone()),
        textbox(
            FieldDescriptor::input(InputType::Password, "password", "password"),
            "Password",
            "Enter your password",
        )
        .rule(catalog().password.strong.clone()),
        textbox(FieldDescriptor::number("age", "age"), "Age", "Enter your age")
            .bounds(Some(0.0), Some(120.0))
            .rule(Arc::clone(&AGE_RULE)),
        FieldDescriptor::select(
            "gender",
            "gender",
            vec![
                Choice::new("", "Select gender"),
                Choice::new("male", "Male"),
                Choice::new("female", "Female"),
                Choice::new("other", "Other"),
            ],
        )
        .label("Gender")
        .style_hook("form_select")
        .required(true)
        .rule(Arc::clone(&GENDER_RULE)),
        FieldDescriptor::checkbox("terms", "terms", vec![Choice::new("accepted", "I accept")])
            .label("Accept the terms and conditions")
            .style_hook("form_checkbox")
            .required(true),
        FieldDescriptor::button("submit", "submit")
            .button_text("Submit")
            .style_hook("form_button"),
    ]
}

/// Parses a JSON array of seeds.
///
/// Only the JSON shape is checked here. Seeds are converted (and malformed
/// ones rejected) when they are added to an engine.
///
/// # Examples
///
/// ```
/// use dynaform_forms::seed::load_seeds_json;
///
/// let seeds = load_seeds_json(r#"[{"type": "text", "id": "city", "name": "city"}]"#).unwrap();
/// assert_eq!(seeds[0].id.as_deref(), Some("city"));
/// ```
pub fn load_seeds_json(json: &str) -> FormResult<Vec<FieldSeed>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a JSON seed file.
pub fn load_seeds_file(path: impl AsRef<Path>) -> FormResult<Vec<FieldSeed>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        FormError::Configuration(format!("Failed to read seed file {}: {e}", path.display()))
    })?;
    load_seeds_json(&content)
}
