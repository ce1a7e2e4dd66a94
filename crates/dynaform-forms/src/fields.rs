//! Field descriptors.
//!
//! A [`FieldDescriptor`] describes one form control: its [`FieldKind`], its
//! identity, its presentation, and an optional [`Rule`]. The kind is a tagged
//! union, so each variant carries only the attributes that make sense for it
//! (options for choice groups, bounds for numeric inputs, and so on).
//!
//! [`FieldSeed`] is the loosely-typed counterpart used by external seed
//! catalogs (JSON files and the like). Seeds are checked when converted into
//! descriptors; a seed missing its kind, id, or name is rejected there.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use dynaform_core::{FormError, FormResult};

use crate::catalog::catalog;
use crate::rule::{Pattern, Rule};
use crate::widgets::WidgetType;

/// One entry of a select, checkbox group, or radio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// The submitted value.
    pub value: String,
    /// The text shown to the user.
    pub text: String,
}

impl Choice {
    /// Creates a new choice.
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// The `type` of a single-line, text-like `<input>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    /// `type="text"`.
    Text,
    /// `type="email"`.
    Email,
    /// `type="password"`.
    Password,
    /// `type="tel"`.
    Tel,
    /// `type="url"`.
    Url,
    /// `type="search"`.
    Search,
    /// `type="date"`.
    Date,
    /// `type="time"`.
    Time,
    /// `type="datetime-local"`.
    DatetimeLocal,
    /// `type="color"`.
    Color,
    /// `type="hidden"`.
    Hidden,
}

impl InputType {
    /// Returns the HTML `type` attribute value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
            Self::Date => "date",
            Self::Time => "time",
            Self::DatetimeLocal => "datetime-local",
            Self::Color => "color",
            Self::Hidden => "hidden",
        }
    }

    /// Parses an HTML `type` attribute value.
    pub fn parse(s: &str) -> Option<Self> {
        let t = match s {
            "text" => Self::Text,
            "email" => Self::Email,
            "password" => Self::Password,
            "tel" => Self::Tel,
            "url" => Self::Url,
            "search" => Self::Search,
            "date" => Self::Date,
            "time" => Self::Time,
            "datetime-local" => Self::DatetimeLocal,
            "color" => Self::Color,
            "hidden" => Self::Hidden,
            _ => return None,
        };
        Some(t)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The native trigger type of an action button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    /// Submits the form.
    #[default]
    Submit,
    /// Resets the form.
    Reset,
    /// Does nothing natively.
    Button,
}

impl ButtonType {
    /// Returns the HTML `type` attribute value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Button => "button",
        }
    }

    /// Parses an HTML `type` attribute value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "submit" => Some(Self::Submit),
            "reset" => Some(Self::Reset),
            "button" => Some(Self::Button),
            _ => None,
        }
    }
}

/// The kind of a field together with its kind-specific attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// A single-line text-like input.
    Input {
        /// The input type.
        input_type: InputType,
        /// Initial value.
        default: Option<String>,
        /// A raw HTML `pattern` attribute (native validation, unrelated to rules).
        pattern: Option<String>,
    },
    /// A numeric input.
    Number {
        /// Initial value.
        default: Option<String>,
        /// Lower bound.
        min: Option<f64>,
        /// Upper bound.
        max: Option<f64>,
        /// A raw HTML `pattern` attribute.
        pattern: Option<String>,
    },
    /// A multi-line text input.
    Textarea {
        /// Initial value.
        default: Option<String>,
    },
    /// A single-select drop-down.
    Select {
        /// Options in display order.
        options: Vec<Choice>,
        /// Value of the initially selected option.
        default: Option<String>,
    },
    /// A group of checkboxes sharing one control name.
    Checkbox {
        /// One checkbox per option.
        options: Vec<Choice>,
        /// Value of the initially checked option.
        default: Option<String>,
    },
    /// A group of radio buttons sharing one control name.
    Radio {
        /// One radio button per option.
        options: Vec<Choice>,
        /// Value of the initially checked option.
        default: Option<String>,
    },
    /// An action button.
    Button {
        /// Button text; "Click" when unset.
        text: Option<String>,
        /// Native trigger type.
        button_type: ButtonType,
    },
}

impl FieldKind {
    /// Returns the widget used to render this kind.
    pub const fn widget_type(&self) -> WidgetType {
        match self {
            Self::Input { .. } => WidgetType::TextInput,
            Self::Number { .. } => WidgetType::NumberInput,
            Self::Textarea { .. } => WidgetType::Textarea,
            Self::Select { .. } => WidgetType::Select,
            Self::Checkbox { .. } => WidgetType::CheckboxGroup,
            Self::Radio { .. } => WidgetType::RadioGroup,
            Self::Button { .. } => WidgetType::Button,
        }
    }

    /// Returns the options of a choice kind, or `None` for other kinds.
    pub fn options(&self) -> Option<&[Choice]> {
        match self {
            Self::Select { options, .. }
            | Self::Checkbox { options, .. }
            | Self::Radio { options, .. } => Some(options),
            _ => None,
        }
    }

    /// Returns the initial value, if the kind has one.
    pub fn default_value(&self) -> Option<&str> {
        match self {
            Self::Input { default, .. }
            | Self::Number { default, .. }
            | Self::Textarea { default }
            | Self::Select { default, .. }
            | Self::Checkbox { default, .. }
            | Self::Radio { default, .. } => default.as_deref(),
            Self::Button { .. } => None,
        }
    }
}

/// Complete description of one form control.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// The kind and its attributes.
    pub kind: FieldKind,
    /// Element id, unique within one form.
    pub identifier: String,
    /// Control name; the key under which the value is extracted.
    pub control_name: String,
    /// Label text. No label is rendered when unset.
    pub label: Option<String>,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Whether the control carries the `required` flag.
    pub required: bool,
    /// Invisible fields are not rendered at all.
    pub visible: bool,
    /// Class applied to the control.
    pub style_hook: Option<String>,
    /// Validation rule, shared with the catalog or built for this field.
    pub rule: Option<Arc<Rule>>,
}

impl FieldDescriptor {
    /// Creates a visible, optional field with no label or rule.
    pub fn new(
        kind: FieldKind,
        identifier: impl Into<String>,
        control_name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
            control_name: control_name.into(),
            label: None,
            placeholder: None,
            required: false,
            visible: true,
            style_hook: None,
            rule: None,
        }
    }

    /// Creates a text-like input of the given type.
    pub fn input(
        input_type: InputType,
        identifier: impl Into<String>,
        control_name: impl Into<String>,
    ) -> Self {
        Self::new(
            FieldKind::Input {
                input_type,
                default: None,
                pattern: None,
            },
            identifier,
            control_name,
        )
    }

    /// Creates a `type="text"` input.
    pub fn text(identifier: impl Into<String>, control_name: impl Into<String>) -> Self {
        Self::input(InputType::Text, identifier, control_name)
    }

    /// Creates a numeric input.
    pub fn number(identifier: impl Into<String>, control_name: impl Into<String>) -> Self {
        Self::new(
            FieldKind::Number {
                default: None,
                min: None,
                max: None,
                pattern: None,
            },
            identifier,
            control_name,
        )
    }

    /// Creates a textarea.
    pub fn textarea(identifier: impl Into<String>, control_name: impl Into<String>) -> Self {
        Self::new(FieldKind::Textarea { default: None }, identifier, control_name)
    }

    /// Creates a select with the given options.
    pub fn select(
        identifier: impl Into<String>,
        control_name: impl Into<String>,
        options: Vec<Choice>,
    ) -> Self {
        Self::new(
            FieldKind::Select {
                options,
                default: None,
            },
            identifier,
            control_name,
        )
    }

    /// Creates a checkbox group with the given options.
    pub fn checkbox(
        identifier: impl Into<String>,
        control_name: impl Into<String>,
        options: Vec<Choice>,
    ) -> Self {
        Self::new(
            FieldKind::Checkbox {
                options,
                default: None,
            },
            identifier,
            control_name,
        )
    }

    /// Creates a radio group with the given options.
    pub fn radio(
        identifier: impl Into<String>,
        control_name: impl Into<String>,
        options: Vec<Choice>,
    ) -> Self {
        Self::new(
            FieldKind::Radio {
                options,
                default: None,
            },
            identifier,
            control_name,
        )
    }

    /// Creates a submit button.
    pub fn button(identifier: impl Into<String>, control_name: impl Into<String>) -> Self {
        Self::new(
            FieldKind::Button {
                text: None,
                button_type: ButtonType::Submit,
            },
            identifier,
            control_name,
        )
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets whether the field is required.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets whether the field is rendered.
    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets the class applied to the control.
    #[must_use]
    pub fn style_hook(mut self, style_hook: impl Into<String>) -> Self {
        self.style_hook = Some(style_hook.into());
        self
    }

    /// Attaches a validation rule.
    #[must_use]
    pub fn rule(mut self, rule: Arc<Rule>) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Sets the initial value. Ignored for buttons.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        match &mut self.kind {
            FieldKind::Input { default, .. }
            | FieldKind::Number { default, .. }
            | FieldKind::Textarea { default }
            | FieldKind::Select { default, .. }
            | FieldKind::Checkbox { default, .. }
            | FieldKind::Radio { default, .. } => *default = Some(value.into()),
            FieldKind::Button { .. } => {}
        }
        self
    }

    /// Sets numeric bounds. Ignored for non-numeric kinds.
    #[must_use]
    pub fn bounds(mut self, lower: Option<f64>, upper: Option<f64>) -> Self {
        if let FieldKind::Number { min, max, .. } = &mut self.kind {
            *min = lower;
            *max = upper;
        }
        self
    }

    /// Sets the raw HTML `pattern` attribute. Ignored for kinds without one.
    #[must_use]
    pub fn html_pattern(mut self, source: impl Into<String>) -> Self {
        if let FieldKind::Input { pattern, .. } | FieldKind::Number { pattern, .. } = &mut self.kind
        {
            *pattern = Some(source.into());
        }
        self
    }

    /// Sets the button text. Ignored for non-button kinds.
    #[must_use]
    pub fn button_text(mut self, value: impl Into<String>) -> Self {
        if let FieldKind::Button { text, .. } = &mut self.kind {
            *text = Some(value.into());
        }
        self
    }

    /// Sets the button trigger type. Ignored for non-button kinds.
    #[must_use]
    pub fn button_type(mut self, value: ButtonType) -> Self {
        if let FieldKind::Button { button_type, .. } = &mut self.kind {
            *button_type = value;
        }
        self
    }

    /// Checks the attributes every descriptor must carry.
    pub fn check(&self) -> FormResult<()> {
        if self.identifier.is_empty() {
            return Err(FormError::MalformedField(format!(
                "field named \"{}\" has no identifier",
                self.control_name
            )));
        }
        if self.control_name.is_empty() {
            return Err(FormError::MalformedField(format!(
                "field \"{}\" has no control name",
                self.identifier
            )));
        }
        Ok(())
    }
}

/// A rule reference inside a seed: a catalog path or an inline rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSeed {
    /// A `category.name` catalog path, e.g. `"words.multipleWords"`.
    Catalog(String),
    /// A rule defined in place.
    Inline {
        /// Regular expression matched against the whole value.
        pattern: String,
        /// Message template containing `%value%`.
        message: String,
        /// Subject label.
        #[serde(default)]
        subject: String,
    },
}

impl RuleSeed {
    /// Resolves the reference into a shareable rule.
    pub fn resolve(&self) -> FormResult<Arc<Rule>> {
        match self {
            Self::Catalog(path) => catalog()
                .lookup(path)
                .cloned()
                .ok_or_else(|| FormError::UnknownRule(path.clone())),
            Self::Inline {
                pattern,
                message,
                subject,
            } => Ok(Arc::new(Rule::new(
                Some(Pattern::new(pattern)?),
                message.clone(),
                subject.clone(),
            ))),
        }
    }
}

/// A loosely-typed field record, as found in external seed catalogs.
///
/// # Examples
///
/// ```
/// use dynaform_forms::fields::{FieldDescriptor, FieldSeed};
///
/// let seed: FieldSeed = serde_json::from_str(
///     r#"{"type": "text", "id": "name", "name": "name", "rule": "words.multipleWords"}"#,
/// )
/// .unwrap();
/// let field = FieldDescriptor::try_from(seed).unwrap();
/// assert!(field.rule.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldSeed {
    /// Kind name (`text`, `number`, `textarea`, `select`, `checkbox`, `radio`, `submit`, ...).
    #[serde(alias = "type")]
    pub kind: Option<String>,
    /// Element id.
    pub id: Option<String>,
    /// Control name.
    pub name: Option<String>,
    /// Label text.
    pub label: Option<String>,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Required flag.
    pub required: bool,
    /// Initial value.
    pub default: Option<String>,
    /// Numeric lower bound.
    pub min: Option<f64>,
    /// Numeric upper bound.
    pub max: Option<f64>,
    /// Raw HTML `pattern` attribute.
    #[serde(alias = "regExp")]
    pub pattern: Option<String>,
    /// Choices for select, checkbox, and radio kinds.
    pub options: Option<Vec<Choice>>,
    /// Visibility; visible when absent.
    pub visible: Option<bool>,
    /// Control class.
    #[serde(alias = "className")]
    pub style_hook: Option<String>,
    /// Button text.
    pub text: Option<String>,
    /// Button trigger type.
    pub button_type: Option<String>,
    /// Validation rule.
    #[serde(alias = "validator")]
    pub rule: Option<RuleSeed>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl TryFrom<FieldSeed> for FieldDescriptor {
    type Error = FormError;

    fn try_from(seed: FieldSeed) -> FormResult<Self> {
        let kind_name = non_empty(seed.kind)
            .ok_or_else(|| FormError::MalformedField("seed has no kind".into()))?;
        let identifier = non_empty(seed.id).ok_or_else(|| {
            FormError::MalformedField(format!("{kind_name} seed has no id"))
        })?;
        let control_name = non_empty(seed.name).ok_or_else(|| {
            FormError::MalformedField(format!("seed \"{identifier}\" has no name"))
        })?;

        let options = |options: Option<Vec<Choice>>| {
            options.ok_or_else(|| {
                FormError::InvalidOptions(format!("{kind_name} field \"{identifier}\" has no options"))
            })
        };
        let default = seed.default;

        let kind = match kind_name.as_str() {
            "number" => FieldKind::Number {
                default,
                min: seed.min,
                max: seed.max,
                pattern: seed.pattern,
            },
            "textarea" => FieldKind::Textarea { default },
            "select" => FieldKind::Select {
                options: options(seed.options)?,
                default,
            },
            "checkbox" => FieldKind::Checkbox {
                options: options(seed.options)?,
                default,
            },
            "radio" => FieldKind::Radio {
                options: options(seed.options)?,
                default,
            },
            "submit" | "reset" | "button" => {
                let button_type = match seed.button_type.as_deref() {
                    Some(raw) => ButtonType::parse(raw).ok_or_else(|| {
                        FormError::MalformedField(format!(
                            "button \"{identifier}\" has unknown button type \"{raw}\""
                        ))
                    })?,
                    None if kind_name == "reset" => ButtonType::Reset,
                    None => ButtonType::Submit,
                };
                FieldKind::Button {
                    text: seed.text,
                    button_type,
                }
            }
            other => FieldKind::Input {
                input_type: InputType::parse(other).ok_or_else(|| {
                    FormError::MalformedField(format!(
                        "field \"{identifier}\" has unknown kind \"{other}\""
                    ))
                })?,
                default,
                pattern: seed.pattern,
            },
        };

        let rule = seed.rule.as_ref().map(RuleSeed::resolve).transpose()?;

        Ok(Self {
            kind,
            identifier,
            control_name,
            label: non_empty(seed.label),
            placeholder: non_empty(seed.placeholder),
            required: seed.required,
            visible: seed.visible.unwrap_or(true),
            style_hook: non_empty(seed.style_hook),
            rule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(json: &str) -> FieldSeed {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_new_defaults() {
        let f = FieldDescriptor::text("name", "name");
        assert!(f.visible);
        assert!(!f.required);
        assert!(f.label.is_none());
        assert!(f.rule.is_none());
        assert_eq!(f.kind.widget_type(), WidgetType::TextInput);
    }

    #[test]
    fn test_builder_chain() {
        let f = FieldDescriptor::number("age", "age")
            .label("Age")
            .placeholder("Enter your age")
            .required(true)
            .style_hook("form_textbox")
            .bounds(Some(0.0), Some(120.0))
            .default_value("30");
        assert_eq!(f.label.as_deref(), Some("Age"));
        assert!(f.required);
        assert_eq!(
            f.kind,
            FieldKind::Number {
                default: Some("30".into()),
                min: Some(0.0),
                max: Some(120.0),
                pattern: None,
            }
        );
    }

    #[test]
    fn test_kind_specific_setters_ignore_other_kinds() {
        let f = FieldDescriptor::textarea("bio", "bio")
            .bounds(Some(1.0), None)
            .html_pattern("x")
            .button_text("Go");
        assert_eq!(f.kind, FieldKind::Textarea { default: None });
    }

    #[test]
    fn test_button_setters() {
        let f = FieldDescriptor::button("go", "go")
            .button_text("Send")
            .button_type(ButtonType::Button);
        assert_eq!(
            f.kind,
            FieldKind::Button {
                text: Some("Send".into()),
                button_type: ButtonType::Button,
            }
        );
        assert_eq!(f.kind.default_value(), None);
    }

    #[test]
    fn test_check_rejects_empty_identity() {
        assert!(FieldDescriptor::text("", "name").check().is_err());
        assert!(FieldDescriptor::text("name", "").check().is_err());
        assert!(FieldDescriptor::text("name", "name").check().is_ok());
    }

    #[test]
    fn test_choice_options_accessor() {
        let f = FieldDescriptor::radio("r", "r", vec![Choice::new("a", "A")]);
        assert_eq!(f.kind.options().map(<[Choice]>::len), Some(1));
        assert!(FieldDescriptor::text("t", "t").kind.options().is_none());
    }

    #[test]
    fn test_input_type_round_trip_names() {
        for t in [InputType::Email, InputType::DatetimeLocal, InputType::Hidden] {
            assert_eq!(InputType::parse(t.as_str()), Some(t));
        }
        assert_eq!(InputType::parse("number"), None);
    }

    #[test]
    fn test_seed_missing_identity_is_malformed() {
        for json in [
            r#"{"id": "a", "name": "a"}"#,
            r#"{"type": "text", "name": "a"}"#,
            r#"{"type": "text", "id": "a"}"#,
            r#"{"type": "", "id": "a", "name": "a"}"#,
        ] {
            let err = FieldDescriptor::try_from(seed(json)).unwrap_err();
            assert!(matches!(err, FormError::MalformedField(_)), "{json}");
        }
    }

    #[test]
    fn test_seed_unknown_kind_is_malformed() {
        let err = FieldDescriptor::try_from(seed(r#"{"type": "slider", "id": "a", "name": "a"}"#))
            .unwrap_err();
        assert!(err.to_string().contains("slider"));
    }

    #[test]
    fn test_seed_choice_without_options() {
        let err = FieldDescriptor::try_from(seed(r#"{"type": "select", "id": "g", "name": "g"}"#))
            .unwrap_err();
        assert!(matches!(err, FormError::InvalidOptions(_)));
    }

    #[test]
    fn test_seed_js_style_keys() {
        let f = FieldDescriptor::try_from(seed(
            r#"{
                "type": "email", "id": "Email", "name": "email", "label": "Email",
                "className": "form_textbox", "required": true,
                "validator": "miscellaneous.email"
            }"#,
        ))
        .unwrap();
        assert_eq!(f.style_hook.as_deref(), Some("form_textbox"));
        assert!(f.required);
        assert!(f.visible);
        assert!(matches!(
            f.kind,
            FieldKind::Input {
                input_type: InputType::Email,
                ..
            }
        ));
        assert!(Arc::ptr_eq(
            f.rule.as_ref().unwrap(),
            &catalog().miscellaneous.email
        ));
    }

    #[test]
    fn test_seed_inline_rule() {
        let f = FieldDescriptor::try_from(seed(
            r#"{
                "type": "number", "id": "age", "name": "age", "min": 0, "max": 120,
                "rule": {"pattern": "[0-9]{1,3}", "message": "'%value%' bad", "subject": "Age"}
            }"#,
        ))
        .unwrap();
        let rule = f.rule.unwrap();
        assert!(rule.evaluate("42", "age").is_ok());
        assert_eq!(rule.evaluate("4242", "age").unwrap_err().message, "'Age' bad");
    }

    #[test]
    fn test_seed_unknown_rule() {
        let err = FieldDescriptor::try_from(seed(
            r#"{"type": "text", "id": "a", "name": "a", "rule": "words.nope"}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, FormError::UnknownRule(_)));
    }

    #[test]
    fn test_seed_buttons() {
        let f = FieldDescriptor::try_from(seed(
            r#"{"type": "submit", "id": "s", "name": "s", "text": "Submit"}"#,
        ))
        .unwrap();
        assert_eq!(
            f.kind,
            FieldKind::Button {
                text: Some("Submit".into()),
                button_type: ButtonType::Submit,
            }
        );

        let f = FieldDescriptor::try_from(seed(r#"{"type": "reset", "id": "r", "name": "r"}"#))
            .unwrap();
        assert!(matches!(
            f.kind,
            FieldKind::Button {
                button_type: ButtonType::Reset,
                ..
            }
        ));

        let err = FieldDescriptor::try_from(seed(
            r#"{"type": "button", "id": "b", "name": "b", "buttonType": "explode"}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, FormError::MalformedField(_)));
    }

    #[test]
    fn test_seed_visible_false_and_empty_label() {
        let f = FieldDescriptor::try_from(seed(
            r#"{"type": "text", "id": "a", "name": "a", "label": "", "visible": false}"#,
        ))
        .unwrap();
        assert!(!f.visible);
        assert!(f.label.is_none());
    }
}
