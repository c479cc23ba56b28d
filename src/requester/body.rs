//! POST body.

use std::collections::{BTreeMap, HashMap};

use crate::core::utils::encoding::form_encode;

/// Body of a POST request.
///
/// A [`Form`] is form-encoded (`field=value` pairs joined with `&`) before
/// sending, a [`Text`] body is sent verbatim.
///
/// # Examples
/// ```
/// use http_requester::requester::RequestBody;
///
/// let form = RequestBody::from([("a", "1"), ("b", "two words")]);
/// assert_eq!(form.encode(), b"a=1&b=two%20words".to_vec());
///
/// let raw = RequestBody::from("raw-body-string");
/// assert_eq!(raw.encode(), b"raw-body-string".to_vec());
/// ```
///
/// [`Form`]: RequestBody::Form
/// [`Text`]: RequestBody::Text
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    /// Pre-encoded body.
    Text(String),

    /// Field name to field value pairs, in sending order.
    Form(Vec<(String, String)>),
}

impl RequestBody {
    /// Bytes put on the wire.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            RequestBody::Text(text) => text.as_bytes().to_vec(),
            RequestBody::Form(pairs) => form_encode(pairs).into_bytes(),
        }
    }
}

impl From<String> for RequestBody {
    fn from(value: String) -> Self {
        RequestBody::Text(value)
    }
}

impl From<&str> for RequestBody {
    fn from(value: &str) -> Self {
        RequestBody::Text(value.to_string())
    }
}

impl<K, V> From<Vec<(K, V)>> for RequestBody
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        RequestBody::Form(
            pairs
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for RequestBody
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Vec::from(pairs).into()
    }
}

impl<K, V> From<BTreeMap<K, V>> for RequestBody
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect::<Vec<_>>().into()
    }
}

impl<K, V> From<HashMap<K, V>> for RequestBody
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(map: HashMap<K, V>) -> Self {
        map.into_iter().collect::<Vec<_>>().into()
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn send_text_verbatim() {
        let body = RequestBody::from("a=b&c d%");

        assert_eq!(body.encode(), b"a=b&c d%".to_vec());
    }

    #[test]
    fn form_encode_mapping() {
        let body = RequestBody::from(vec![("a", "1"), ("b", "two words")]);

        assert_eq!(String::from_utf8(body.encode()).unwrap(), "a=1&b=two%20words");
    }

    #[test]
    fn order_btree_map_fields_by_name() {
        let body = RequestBody::from(BTreeMap::from([("z", "last"), ("a", "first")]));

        assert_eq!(body.encode(), b"a=first&z=last".to_vec());
    }

    #[test]
    fn keep_every_hash_map_field() {
        let body = RequestBody::from(HashMap::from([("a", "1"), ("b", "2")]));
        let encoded = String::from_utf8(body.encode()).unwrap();

        let mut pairs = encoded.split('&').collect::<Vec<_>>();
        pairs.sort_unstable();

        assert_eq!(pairs, vec!["a=1", "b=2"]);
    }

    #[test]
    fn encode_empty_form_as_empty_body() {
        let body = RequestBody::Form(Vec::new());

        assert!(body.encode().is_empty());
    }
}
