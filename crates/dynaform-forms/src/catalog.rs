//! The built-in rule catalog.
//!
//! A process-wide, read-only table of ready-made [`Rule`]s grouped by
//! category. Entries are addressed either through the typed fields of
//! [`RuleCatalog`] or by a `category.name` path such as
//! `"words.multipleWords"`, which is how descriptor seeds refer to them.
//!
//! The pattern and message of every entry are part of the public contract.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::rule::{Pattern, Rule};

/// Numeric rules.
#[derive(Debug)]
pub struct NumericRules {
    /// Digits only.
    pub numeric: Arc<Rule>,
    /// Digits and whitespace.
    pub numeric_with_spaces: Arc<Rule>,
    /// An optional country code followed by digit groups, optionally parenthesized
    /// and separated by hyphens or spaces.
    pub phone: Arc<Rule>,
}

/// Word and free-text rules.
#[derive(Debug)]
pub struct WordRules {
    /// One word of ASCII letters.
    pub single_word: Arc<Rule>,
    /// ASCII letters and whitespace.
    pub multiple_words: Arc<Rule>,
    /// Letters, digits, whitespace and common punctuation.
    pub sentence: Arc<Rule>,
    /// Same character set as `sentence`, line breaks included.
    pub paragraph: Arc<Rule>,
}

/// Password strength rules.
#[derive(Debug)]
pub struct PasswordRules {
    /// At least 8 letters or digits, with an upper-case letter and a digit.
    pub medium: Arc<Rule>,
    /// At least 10 characters with a lower-case letter, an upper-case letter,
    /// a digit and one of `@$!%*?&`.
    pub strong: Arc<Rule>,
}

/// Rules that fit no other category.
#[derive(Debug)]
pub struct MiscellaneousRules {
    /// `local@domain.tld` shape with no whitespace.
    pub email: Arc<Rule>,
}

/// The complete catalog.
#[derive(Debug)]
pub struct RuleCatalog {
    /// Numeric rules.
    pub numeric: NumericRules,
    /// Word rules.
    pub words: WordRules,
    /// Password rules.
    pub password: PasswordRules,
    /// Miscellaneous rules.
    pub miscellaneous: MiscellaneousRules,
}

fn entry(sources: &[&str], message: &str, subject: &str) -> Arc<Rule> {
    let pattern = Pattern::all(sources).expect("catalog patterns are valid");
    Arc::new(Rule::new(Some(pattern), message, subject))
}

static CATALOG: Lazy<RuleCatalog> = Lazy::new(|| RuleCatalog {
    numeric: NumericRules {
        numeric: entry(
            &["[0-9]+"],
            "The field '%value%' only accepts numbers.",
            "Numeric Field",
        ),
        numeric_with_spaces: entry(
            &[r"[0-9\s]+"],
            "The field '%value%' only accepts numbers and spaces.",
            "Numeric Field",
        ),
        phone: entry(
            &[r"(\+?[0-9]{1,3}[-\s]?)?(\(?[0-9]+\)?[-\s]?)+"],
            "The field '%value%' only accepts valid phone numbers.",
            "Phone Number",
        ),
    },
    words: WordRules {
        single_word: entry(
            &["[a-zA-Z]+"],
            "The field '%value%' only accepts letters.",
            "Word",
        ),
        multiple_words: entry(
            &[r"[a-zA-Z\s]+"],
            "The field '%value%' only accepts letters and spaces.",
            "Words",
        ),
        sentence: entry(
            &[r"[A-Za-z0-9.,!?¿¡:;'\s-]+"],
            "The field '%value%' contains invalid characters.",
            "Sentence",
        ),
        paragraph: entry(
            &[r"[A-Za-z0-9.,!?¿¡:;'\s\n-]+"],
            "The field '%value%' contains invalid characters.",
            "Paragraph",
        ),
    },
    password: PasswordRules {
        medium: entry(
            &["[a-zA-Z0-9]{8,}", ".*[A-Z].*", ".*[0-9].*"],
            "The field '%value%' must be at least 8 characters long, including an uppercase letter and a number.",
            "Password",
        ),
        strong: entry(
            &[".{10,}", ".*[a-z].*", ".*[A-Z].*", ".*[0-9].*", ".*[@$!%*?&].*"],
            "The field '%value%' must be at least 10 characters long, including a lowercase letter, an uppercase letter, a number, and a special character.",
            "Password",
        ),
    },
    miscellaneous: MiscellaneousRules {
        email: entry(
            &[r"[^\s@]+@[^\s@]+\.[^\s@]+"],
            "The field '%value%' must be a valid email.",
            "Email",
        ),
    },
});

/// Returns the process-wide rule catalog.
///
/// # Examples
///
/// ```
/// use dynaform_forms::catalog::catalog;
///
/// let email = &catalog().miscellaneous.email;
/// assert!(email.evaluate("jane@example.com", "email").is_ok());
/// ```
pub fn catalog() -> &'static RuleCatalog {
    &CATALOG
}

impl RuleCatalog {
    /// Looks up an entry by category and name, e.g. `("words", "multipleWords")`.
    pub fn get(&self, category: &str, name: &str) -> Option<&Arc<Rule>> {
        let rule = match (category, name) {
            ("numeric", "numeric") => &self.numeric.numeric,
            ("numeric", "numericWithSpaces") => &self.numeric.numeric_with_spaces,
            ("numeric", "phone") => &self.numeric.phone,
            ("words", "singleWord") => &self.words.single_word,
            ("words", "multipleWords") => &self.words.multiple_words,
            ("words", "sentence") => &self.words.sentence,
            ("words", "paragraph") => &self.words.paragraph,
            ("password", "medium") => &self.password.medium,
            ("password", "strong") => &self.password.strong,
            ("miscellaneous", "email") => &self.miscellaneous.email,
            _ => return None,
        };
        Some(rule)
    }

    /// Looks up an entry by its dotted path, e.g. `"password.strong"`.
    pub fn lookup(&self, path: &str) -> Option<&Arc<Rule>> {
        let (category, name) = path.split_once('.')?;
        self.get(category, name)
    }

    /// Returns every `category.name` path in the catalog.
    pub fn paths(&self) -> Vec<&'static str> {
        vec![
            "numeric.numeric",
            "numeric.numericWithSpaces",
            "numeric.phone",
            "words.singleWord",
            "words.multipleWords",
            "words.sentence",
            "words.paragraph",
            "password.medium",
            "password.strong",
            "miscellaneous.email",
        ]
    }
}
