//! Percent and form encoding.

use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// https://datatracker.ietf.org/doc/html/rfc3986#section-2.3
///
/// Everything except unreserved characters gets encoded, so a space becomes
/// `%20` rather than `+`.
const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// `percent_encoding` crate recommends you to create your own set for encoding.
/// To be consistent in the whole codebase - we created a function that can be used
/// for encoding related stuff.
pub fn url_encode(data: &[u8]) -> String {
    percent_encode(data, FORM_SET).to_string()
}

/// Encode `field=value` pairs joined with `&`, keeping the pairs order.
pub fn form_encode<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .map(|(field, value)| {
            format!(
                "{}={}",
                url_encode(field.as_ref().as_bytes()),
                url_encode(value.as_ref().as_bytes())
            )
        })
        .collect::<Vec<String>>()
        .join("&")
}
