//! Attribute-list serialization for DOT statements.
//!
//! Node and edge statements carry an optional bracketed attribute list of the
//! form `[key=value, key="value"]`. This module decides per entry whether the
//! value needs quoting and serializes the whole map, leaving the brackets out
//! entirely when there is nothing to emit.

use std::collections::BTreeMap;

use crate::identifier::{escape_quotes, is_regular_id};

/// Mapping of attribute names to raw attribute values for a single statement.
///
/// Backed by a [`BTreeMap`] so iteration order is the sorted key order: the same
/// map always serializes to the same attribute list. DOT itself does not care
/// about attribute order.
pub type AttributeMap = BTreeMap<String, String>;

/// Attribute keys whose values are emitted quoted regardless of content.
const QUOTED_KEYS: &[&str] = &["label"];

/// Serializes `attrs` into DOT attribute-list form, without brackets.
///
/// Each entry is rendered as `key=value`, entries joined by `", "` with no
/// trailing separator. A value is quoted when its key is in the always-quote
/// set (currently just `label`) or when the value is not a regular bare
/// identifier; the quoted form escapes embedded `"` as `\"`. An empty map
/// serializes to the empty string.
///
/// # Arguments
///
/// * `attrs` - The attribute map to serialize
///
/// # Examples
///
/// ```rust
/// use dotemit::{format_attributes, AttributeMap};
///
/// let mut attrs = AttributeMap::new();
/// attrs.insert("color".to_string(), "red".to_string());
/// attrs.insert("label".to_string(), "hello world".to_string());
///
/// assert_eq!(format_attributes(&attrs), "color=red, label=\"hello world\"");
/// ```
#[must_use]
pub fn format_attributes(attrs: &AttributeMap) -> String {
    let entries: Vec<String> = attrs
        .iter()
        .map(|(key, value)| {
            if QUOTED_KEYS.contains(&key.as_str()) || !is_regular_id(value) {
                format!("{key}=\"{}\"", escape_quotes(value))
            } else {
                format!("{key}={value}")
            }
        })
        .collect();

    entries.join(", ")
}

/// Serializes `attrs` into a bracketed DOT attribute list.
///
/// Returns the empty string when `attrs` is absent or empty; the brackets are
/// omitted entirely, never emitted as `[]`.
///
/// # Arguments
///
/// * `attrs` - The attribute map to serialize, if any
#[must_use]
pub fn format_attribute_bracket(attrs: Option<&AttributeMap>) -> String {
    match attrs {
        Some(map) if !map.is_empty() => format!("[{}]", format_attributes(map)),
        _ => String::new(),
    }
}
