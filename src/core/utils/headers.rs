//! Headers module
//!
//! This module provides constants for HTTP headers and conversions between a
//! header map and the `Name: Value` lines handed to the transport.

use std::collections::HashMap;

pub(crate) const CONTENT_TYPE: &str = "Content-Type";
pub(crate) const APPLICATION_FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Serialize every header into a `Name: Value` line.
pub fn to_header_lines(headers: &HashMap<String, String>) -> Vec<String> {
    headers
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect()
}

/// Split a `Name: Value` line at the first colon.
///
/// Both parts are trimmed. `None` when there is no colon or the name is empty.
pub fn parse_header_line(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();

    (!name.is_empty()).then(|| (name, value.trim()))
}

/// Case-insensitive lookup of a header name among `Name: Value` lines.
pub(crate) fn contains_header(lines: &[String], name: &str) -> bool {
    lines
        .iter()
        .filter_map(|line| parse_header_line(line))
        .any(|(line_name, _)| line_name.eq_ignore_ascii_case(name))
}
