//! Identifier quoting for DOT output.
//!
//! DOT accepts a bare identifier only when it is drawn from a narrow character
//! class; everything else must be written as a double-quoted string with embedded
//! quotes escaped. This module implements the classification and the quoted form.

use crate::{Error, Result};

/// Returns `true` if `raw` can be emitted as a bare DOT identifier.
///
/// The DOT grammar admits a bare identifier made of ASCII letters, ASCII digits,
/// underscores, and the `\200`-`\377` octal byte range (U+0080 through U+00FF).
/// The test runs per Unicode scalar value: a combining mark above U+00FF
/// disqualifies a string even when the rendered glyph would look like a single
/// in-range character.
///
/// The leading-digit restriction of the full grammar is not enforced here, and
/// an empty string is never a regular identifier.
///
/// # Examples
///
/// ```rust
/// use dotemit::is_regular_id;
///
/// assert!(is_regular_id("node_42"));
/// assert!(is_regular_id("caf\u{e9}"));
/// assert!(!is_regular_id("my node"));
/// assert!(!is_regular_id(""));
/// ```
#[must_use]
pub fn is_regular_id(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(is_id_char)
}

/// Quotes an identifier for use in a DOT statement, if needed.
///
/// Regular identifiers are returned unchanged. Anything else comes back as a
/// double-quoted DOT string with every embedded `"` escaped as `\"`, ready to be
/// pasted into a statement verbatim.
///
/// Only the bare and quoted-string identifier forms are produced; the numeral
/// and HTML (`<...>`) forms of the DOT grammar are out of scope.
///
/// # Arguments
///
/// * `raw` - The identifier to classify and quote
///
/// # Returns
///
/// The identifier in a form valid at any identifier position of a DOT file.
///
/// # Errors
///
/// Returns [`crate::Error::EmptyIdentifier`] if `raw` is empty; DOT has no
/// empty-identifier production.
///
/// # Examples
///
/// ```rust
/// use dotemit::quote_id;
///
/// assert_eq!(quote_id("node_42")?, "node_42");
/// assert_eq!(quote_id("my node")?, "\"my node\"");
/// assert_eq!(quote_id("a \"b\" c")?, "\"a \\\"b\\\" c\"");
/// # Ok::<(), dotemit::Error>(())
/// ```
pub fn quote_id(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(Error::EmptyIdentifier);
    }

    if is_regular_id(raw) {
        Ok(raw.to_string())
    } else {
        Ok(format!("\"{}\"", escape_quotes(raw)))
    }
}

/// Escapes embedded double quotes for the inside of a quoted DOT string.
pub(crate) fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || ('\u{0080}'..='\u{00FF}').contains(&c)
}
