//! Form configuration.
//!
//! [`FormConfig`] holds the rendering and behavioral options of one form:
//! where it mounts, how it is styled, its title and legend, whether
//! diagnostics are logged, and what happens after a valid submission.
//!
//! A `FormConfig` cannot be changed once built. Build one with
//! [`FormConfig::builder`] or load one from TOML/JSON; the engine takes it by
//! value, so what it renders with is always the configuration it was given.
//!
//! ## Loading
//!
//! ```
//! use dynaform_forms::config::FormConfig;
//!
//! let config = FormConfig::from_toml_str(r#"
//!     mount_target_id = "form_container"
//!     form_name = "register_form"
//!     title_text = "Register"
//! "#).unwrap();
//!
//! assert_eq!(config.mount_target_id(), "form_container");
//! assert_eq!(config.popup_style_hook(), "dynamic-form-popup");
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use dynaform_core::{FormError, FormResult};

/// The default class of the form element.
pub const DEFAULT_FORM_STYLE_HOOK: &str = "dynamic-form";

/// The default class of the error popup.
pub const DEFAULT_POPUP_STYLE_HOOK: &str = "dynamic-form-popup";

/// The callback run after every field passed validation.
///
/// Errors (panics) raised by the callback are not caught by the engine.
#[derive(Clone)]
pub struct SubmitAction(Arc<dyn Fn() + Send + Sync>);

impl SubmitAction {
    /// Wraps a closure.
    pub fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(action))
    }

    /// Runs the callback.
    pub fn call(&self) {
        (self.0)();
    }
}

impl Default for SubmitAction {
    fn default() -> Self {
        Self::new(|| {})
    }
}

impl fmt::Debug for SubmitAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubmitAction(..)")
    }
}

/// Rendering and behavioral options of one form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    mount_target_id: String,
    form_name: String,
    style_hook: String,
    popup_style_hook: String,
    diagnostics_enabled: bool,
    title_text: Option<String>,
    title_style_hook: Option<String>,
    legend_text: Option<String>,
    legend_style_hook: Option<String>,
    #[serde(skip)]
    on_valid_submit: SubmitAction,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            mount_target_id: String::new(),
            form_name: String::new(),
            style_hook: DEFAULT_FORM_STYLE_HOOK.to_string(),
            popup_style_hook: DEFAULT_POPUP_STYLE_HOOK.to_string(),
            diagnostics_enabled: false,
            title_text: None,
            title_style_hook: None,
            legend_text: None,
            legend_style_hook: None,
            on_valid_submit: SubmitAction::default(),
        }
    }
}

fn set(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl FormConfig {
    /// Starts building a configuration from the defaults.
    pub fn builder() -> FormConfigBuilder {
        FormConfigBuilder {
            config: Self::default(),
        }
    }

    /// Loads a configuration from a TOML string. Missing keys keep their
    /// defaults, and so do empty class hooks.
    pub fn from_toml_str(toml_str: &str) -> FormResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        Ok(config.with_default_hooks())
    }

    /// Loads a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> FormResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            FormError::Configuration(format!(
                "Failed to read TOML file '{}': {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads a configuration from a JSON string. Missing keys keep their
    /// defaults, and so do empty class hooks.
    pub fn from_json_str(json_str: &str) -> FormResult<Self> {
        serde_json::from_str::<Self>(json_str)
            .map(Self::with_default_hooks)
            .map_err(|e| {
                FormError::Configuration(format!(
                    "Failed to deserialize configuration from JSON: {e}"
                ))
            })
    }

    fn with_default_hooks(mut self) -> Self {
        if self.style_hook.is_empty() {
            self.style_hook = DEFAULT_FORM_STYLE_HOOK.to_string();
        }
        if self.popup_style_hook.is_empty() {
            self.popup_style_hook = DEFAULT_POPUP_STYLE_HOOK.to_string();
        }
        self
    }

    /// Returns this configuration with `action` as its submit callback.
    #[must_use]
    pub fn with_submit_action(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_valid_submit = SubmitAction::new(action);
        self
    }

    /// The id of the element the form is mounted into.
    pub fn mount_target_id(&self) -> &str {
        &self.mount_target_id
    }

    /// The form's `name`; empty when unset.
    pub fn form_name(&self) -> &str {
        &self.form_name
    }

    /// The class of the form element.
    pub fn style_hook(&self) -> &str {
        &self.style_hook
    }

    /// The class of the error popup.
    pub fn popup_style_hook(&self) -> &str {
        &self.popup_style_hook
    }

    /// Whether anomalies are logged.
    pub const fn diagnostics_enabled(&self) -> bool {
        self.diagnostics_enabled
    }

    /// Title text; `None` when unset or empty.
    pub fn title_text(&self) -> Option<&str> {
        set(self.title_text.as_ref())
    }

    /// Title class.
    pub fn title_style_hook(&self) -> Option<&str> {
        set(self.title_style_hook.as_ref())
    }

    /// Legend text; `None` when unset or empty.
    pub fn legend_text(&self) -> Option<&str> {
        set(self.legend_text.as_ref())
    }

    /// Legend class.
    pub fn legend_style_hook(&self) -> Option<&str> {
        set(self.legend_style_hook.as_ref())
    }

    /// The submit callback.
    pub const fn on_valid_submit(&self) -> &SubmitAction {
        &self.on_valid_submit
    }

    /// The id given to the rendered form element.
    pub fn form_element_id(&self) -> String {
        format!("form_{}", self.mount_target_id)
    }
}

/// Builder for [`FormConfig`].
///
/// # Examples
///
/// ```
/// use dynaform_forms::config::FormConfig;
///
/// let config = FormConfig::builder()
///     .mount_target("form_container")
///     .title("Register")
///     .diagnostics(true)
///     .on_valid_submit(|| println!("Success!"))
///     .build();
///
/// assert_eq!(config.title_text(), Some("Register"));
/// assert!(config.diagnostics_enabled());
/// ```
#[derive(Debug, Clone)]
pub struct FormConfigBuilder {
    config: FormConfig,
}

impl FormConfigBuilder {
    /// Sets the id of the mount target.
    #[must_use]
    pub fn mount_target(mut self, id: impl Into<String>) -> Self {
        self.config.mount_target_id = id.into();
        self
    }

    /// Sets the form name.
    #[must_use]
    pub fn form_name(mut self, name: impl Into<String>) -> Self {
        self.config.form_name = name.into();
        self
    }

    /// Sets the class of the form element. An empty value keeps the default.
    #[must_use]
    pub fn style_hook(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.config.style_hook = class;
        }
        self
    }

    /// Sets the class of the error popup. An empty value keeps the default.
    #[must_use]
    pub fn popup_style_hook(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.config.popup_style_hook = class;
        }
        self
    }

    /// Enables or disables diagnostic logging.
    #[must_use]
    pub const fn diagnostics(mut self, enabled: bool) -> Self {
        self.config.diagnostics_enabled = enabled;
        self
    }

    /// Sets the title text.
    #[must_use]
    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.config.title_text = Some(text.into());
        self
    }

    /// Sets the title class.
    #[must_use]
    pub fn title_style_hook(mut self, class: impl Into<String>) -> Self {
        self.config.title_style_hook = Some(class.into());
        self
    }

    /// Sets the legend text.
    #[must_use]
    pub fn legend(mut self, text: impl Into<String>) -> Self {
        self.config.legend_text = Some(text.into());
        self
    }

    /// Sets the legend class.
    #[must_use]
    pub fn legend_style_hook(mut self, class: impl Into<String>) -> Self {
        self.config.legend_style_hook = Some(class.into());
        self
    }

    /// Sets the submit callback.
    #[must_use]
    pub fn on_valid_submit(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.config.on_valid_submit = SubmitAction::new(action);
        self
    }

    /// Finishes the configuration.
    pub fn build(self) -> FormConfig {
        self.config
    }
}
