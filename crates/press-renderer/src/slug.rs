//! Heading slugs and HTML escaping.

/// Convert heading text to a URL-safe anchor id.
///
/// Lowercases the text, drops everything that is not an ASCII word
/// character, whitespace, or hyphen, collapses whitespace and hyphen runs to
/// a single hyphen, and strips one leading and one trailing hyphen. Word
/// characters are the same ASCII set the callout type token uses, so
/// accented letters are dropped rather than transliterated. Pure function;
/// identical input always yields identical output.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_hyphen = false;

    for c in text.to_lowercase().chars() {
        let mapped = if c.is_whitespace() { '-' } else { c };
        if mapped == '-' {
            if !last_was_hyphen {
                out.push('-');
                last_was_hyphen = true;
            }
        } else if mapped.is_ascii_alphanumeric() || mapped == '_' {
            out.push(mapped);
            last_was_hyphen = false;
        }
        // Everything else is dropped without breaking a hyphen run.
    }

    // Runs were already collapsed, so one strip per end is enough.
    let out = out.strip_prefix('-').unwrap_or(&out);
    let out = out.strip_suffix('-').unwrap_or(out);
    out.to_owned()
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
