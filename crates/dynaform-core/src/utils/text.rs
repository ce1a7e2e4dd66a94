//! String utility functions.

/// Capitalizes the first character of a string, leaving the rest unchanged.
///
/// # Examples
///
/// ```
/// use dynaform_core::utils::text::capfirst;
///
/// assert_eq!(capfirst("name"), "Name");
/// assert_eq!(capfirst(""), "");
/// assert_eq!(capfirst("eMAIL"), "EMAIL");
/// ```
pub fn capfirst(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |c| {
        let mut result = c.to_uppercase().to_string();
        result.extend(chars);
        result
    })
}

/// Escapes the characters that are significant in HTML text and attribute values.
///
/// # Examples
///
/// ```
/// use dynaform_core::utils::text::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capfirst_only_touches_first_char() {
        assert_eq!(capfirst("multiple words"), "Multiple words");
        assert_eq!(capfirst("x"), "X");
    }

    #[test]
    fn test_capfirst_unicode() {
        assert_eq!(capfirst("éclair"), "Éclair");
    }

    #[test]
    fn test_escape_html_quotes() {
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }
}
