//! Pattern-based validation rules.
//!
//! A [`Rule`] pairs a [`Pattern`] with a failure message template. Rules are
//! immutable once built and carry no interior state, so a single instance can
//! be shared by any number of fields and forms through an `Arc`.

use std::fmt;

use regex::Regex;

use dynaform_core::utils::text::capfirst;
use dynaform_core::{FormResult, ValidationError};

/// The placeholder replaced by the subject name in a message template.
pub const SUBJECT_PLACEHOLDER: &str = "%value%";

/// A full-string text predicate.
///
/// A pattern is a conjunction of regular expressions: a value matches only if
/// every expression matches the *whole* value. Each source is compiled as
/// `^(?:source)$`, so callers never have to anchor their expressions, and
/// requirements that would otherwise need look-ahead ("contains an
/// upper-case letter and a digit") are written as separate clauses.
#[derive(Clone)]
pub struct Pattern {
    sources: Vec<String>,
    compiled: Vec<Regex>,
}

impl Pattern {
    /// Compiles a single-expression pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynaform_forms::rule::Pattern;
    ///
    /// let p = Pattern::new(r"[0-9]+").unwrap();
    /// assert!(p.is_full_match("123"));
    /// assert!(!p.is_full_match("12a"));
    /// ```
    pub fn new(source: &str) -> FormResult<Self> {
        Self::all([source])
    }

    /// Compiles a pattern that matches only when every source matches.
    pub fn all<I, S>(sources: I) -> FormResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pattern = Self {
            sources: Vec::new(),
            compiled: Vec::new(),
        };
        for source in sources {
            let source = source.as_ref();
            pattern.compiled.push(Regex::new(&format!("^(?:{source})$"))?);
            pattern.sources.push(source.to_string());
        }
        Ok(pattern)
    }

    /// Returns `true` if every clause matches the entire value.
    pub fn is_full_match(&self, value: &str) -> bool {
        self.compiled.iter().all(|re| re.is_match(value))
    }

    /// Returns the uncompiled clause sources, in order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.sources).finish()
    }
}

/// An immutable validation rule.
///
/// # Examples
///
/// ```
/// use dynaform_forms::rule::{Pattern, Rule};
///
/// let rule = Rule::new(
///     Some(Pattern::new("[a-zA-Z]+").unwrap()),
///     "The field '%value%' only accepts letters.",
///     "Word",
/// );
/// assert!(rule.evaluate("hello", "nickname").is_ok());
///
/// let err = rule.evaluate("h3llo", "nickname").unwrap_err();
/// assert_eq!(err.message, "The field 'Nickname' only accepts letters.");
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Option<Pattern>,
    message_template: String,
    subject_label: String,
}

impl Rule {
    /// Creates a rule. A rule without a pattern accepts every value.
    pub fn new(
        pattern: Option<Pattern>,
        message_template: impl Into<String>,
        subject_label: impl Into<String>,
    ) -> Self {
        Self {
            pattern,
            message_template: message_template.into(),
            subject_label: subject_label.into(),
        }
    }

    /// Compiles `source` and builds a rule from it in one step.
    pub fn from_regex(
        source: &str,
        message_template: impl Into<String>,
        subject_label: impl Into<String>,
    ) -> FormResult<Self> {
        Ok(Self::new(
            Some(Pattern::new(source)?),
            message_template,
            subject_label,
        ))
    }

    /// Checks `value` against the pattern.
    ///
    /// On failure the message template is returned with its placeholder
    /// replaced by `subject`, first character upper-cased.
    pub fn evaluate(&self, value: &str, subject: &str) -> Result<(), ValidationError> {
        let Some(pattern) = &self.pattern else {
            return Ok(());
        };
        if pattern.is_full_match(value) {
            return Ok(());
        }
        let subject = capfirst(subject);
        let message = self.message_template.replacen(SUBJECT_PLACEHOLDER, &subject, 1);
        Err(ValidationError::new(message, subject))
    }

    /// Returns the pattern, if any.
    pub const fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// Returns the message template, placeholder included.
    pub fn message_template(&self) -> &str {
        &self.message_template
    }

    /// Returns the subject label the rule was defined for.
    pub fn subject_label(&self) -> &str {
        &self.subject_label
    }
}
