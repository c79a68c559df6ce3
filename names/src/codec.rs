//! Escape-aware tokenizing and joining
//!
//! This module converts between one escaped, delimited string and the
//! ordered sequence of components it encodes.
//!
//! The rules are:
//! - An escape character followed by any character is copied verbatim
//!   (both characters) into the current component
//! - An unescaped delimiter closes the current component
//! - An escape character at the very end of the input is a literal
//! - The empty string holds zero components; any other string holds one
//!   more component than it has unescaped delimiters
//!
//! [`join`] never escapes. Components taken from [`tokenize`] already
//! carry their escape pairs; use [`escape`] to prepare raw text.

use crate::ESCAPE_CHARACTER;

/// Splits `raw` into its components
///
/// # Examples
///
/// ```
/// use names::codec::tokenize;
///
/// assert_eq!(tokenize("a.b.c", '.'), vec!["a", "b", "c"]);
/// assert_eq!(tokenize(r"a\.b.c", '.'), vec![r"a\.b", "c"]);
/// assert!(tokenize("", '.').is_empty());
/// ```
pub fn tokenize(raw: &str, delimiter: char) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    let mut components = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            current.push(c);
            // A trailing escape has nothing to protect
            if let Some(escaped) = chars.next() {
                current.push(escaped);
            }
        } else if c == delimiter {
            components.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    components.push(current);

    components
}

/// Counts the components of `raw` without building them
///
/// Always equal to `tokenize(raw, delimiter).len()`.
pub fn count(raw: &str, delimiter: char) -> usize {
    if raw.is_empty() {
        return 0;
    }

    let mut count = 1;
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            chars.next();
        } else if c == delimiter {
            count += 1;
        }
    }
    count
}

/// Joins components with `delimiter`
///
/// Components are inserted as-is; nothing is escaped.
pub fn join<S: AsRef<str>>(components: &[S], delimiter: char) -> String {
    let mut raw = String::new();
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            raw.push(delimiter);
        }
        raw.push_str(component.as_ref());
    }
    raw
}

/// Escapes every delimiter and escape character in `component`
///
/// A non-empty result tokenizes back into exactly one component.
pub fn escape(component: &str, delimiter: char) -> String {
    let mut escaped = String::with_capacity(component.len());
    for c in component.chars() {
        if c == ESCAPE_CHARACTER || c == delimiter {
            escaped.push(ESCAPE_CHARACTER);
        }
        escaped.push(c);
    }
    escaped
}

/// Removes escape pairs from a single component, keeping the escaped character
pub fn unescape(component: &str) -> String {
    let mut raw = String::with_capacity(component.len());
    let mut chars = component.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            match chars.next() {
                Some(escaped) => raw.push(escaped),
                None => raw.push(c),
            }
        } else {
            raw.push(c);
        }
    }
    raw
}
