// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! URL query-string encoding and decoding.
//!
//! Serialization writes keys and values verbatim; callers percent-encode beforehand if
//! they need to. Parsing percent-decodes values only.

use std::fmt;

use percent_encoding::percent_decode_str;

/// A scalar value accepted by [`object_to_query_string`].
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl QueryValue {
    fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Ordered string map with unique keys, as produced by [`query_string_to_object`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Serialize pairs as `?k1=v1&k2=v2`, skipping empty-string values.
///
/// Returns an empty string when no pair survives.
pub fn object_to_query_string<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<QueryValue>,
{
    let joined = pairs
        .into_iter()
        .map(|(key, value)| (key, value.into()))
        .filter(|(_, value)| !value.is_empty_text())
        .map(|(key, value)| format!("{}={}", key.as_ref(), value))
        .collect::<Vec<_>>()
        .join("&");

    if joined.is_empty() {
        String::new()
    } else {
        format!("?{joined}")
    }
}

/// Parse a query string (with or without leading `?`) into ordered params.
///
/// Segments without `=`, with an empty key, or whose value is empty or the literal
/// `undefined` are dropped. Values are percent-decoded; a value with malformed escapes
/// is kept as written. A repeated key keeps its first position and its last value.
pub fn query_string_to_object(input: &str) -> QueryParams {
    let trimmed = input.strip_prefix('?').unwrap_or(input);
    let mut params = QueryParams::new();

    for segment in trimmed.split('&') {
        let Some((key, raw)) = segment.split_once('=') else {
            continue;
        };
        if key.is_empty() || raw.is_empty() || raw == "undefined" {
            continue;
        }
        let value = decode_component(raw).unwrap_or_else(|| {
            tracing::debug!(key, raw, "keeping malformed query value undecoded");
            raw.to_string()
        });
        params.insert(key, value);
    }

    params
}

/// Strict percent-decoding: `None` on a dangling `%`, bad hex digits, or invalid UTF-8.
fn decode_component(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3)?;
            if !escape.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_serializes_to_empty_string() {
        let pairs: Vec<(&str, &str)> = Vec::new();
        assert_eq!(object_to_query_string(pairs), "");
    }

    #[test]
    fn empty_values_are_omitted() {
        let pairs = vec![("a", QueryValue::from("")), ("b", QueryValue::from(2))];
        assert_eq!(object_to_query_string(pairs), "?b=2");
    }

    #[test]
    fn all_empty_values_yield_empty_string() {
        assert_eq!(object_to_query_string([("a", ""), ("b", "")]), "");
    }

    #[test]
    fn values_are_written_without_encoding() {
        let query = object_to_query_string([("q", "a b&c"), ("page", "3")]);
        assert_eq!(query, "?q=a b&c&page=3");
    }

    #[test]
    fn numbers_render_like_plain_scalars() {
        let pairs = vec![
            ("int", QueryValue::from(0)),
            ("neg", QueryValue::from(-7i64)),
            ("whole", QueryValue::from(2.0)),
            ("frac", QueryValue::from(2.5)),
        ];
        assert_eq!(object_to_query_string(pairs), "?int=0&neg=-7&whole=2&frac=2.5");
    }

    #[test]
    fn parse_drops_empty_values() {
        let params = query_string_to_object("?a=1&b=");
        assert_eq!(params, QueryParams::from_iter([("a", "1")]));
    }

    #[test]
    fn parse_accepts_input_without_question_mark() {
        let params = query_string_to_object("x=10&y=20");
        assert_eq!(params.get("x"), Some("10"));
        assert_eq!(params.get("y"), Some("20"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn parse_drops_missing_and_undefined_values() {
        let params = query_string_to_object("?flag&gone=undefined&keep=yes&&=orphan");
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("keep", "yes")]);
    }

    #[test]
    fn parse_decodes_values_but_not_plus() {
        let params = query_string_to_object("?name=J%C3%BCrgen%20M&raw=a+b");
        assert_eq!(params.get("name"), Some("Jürgen M"));
        assert_eq!(params.get("raw"), Some("a+b"));
    }

    #[test]
    fn malformed_encoding_keeps_raw_value() {
        let params = query_string_to_object("?bad=100%&hex=%zz&utf=%FF&ok=%41");
        assert_eq!(params.get("bad"), Some("100%"));
        assert_eq!(params.get("hex"), Some("%zz"));
        assert_eq!(params.get("utf"), Some("%FF"));
        assert_eq!(params.get("ok"), Some("A"));
    }

    #[test]
    fn value_may_contain_equals_sign() {
        let params = query_string_to_object("?token=abc==");
        assert_eq!(params.get("token"), Some("abc=="));
    }

    #[test]
    fn repeated_key_keeps_position_and_last_value() {
        let params = query_string_to_object("?a=1&b=2&a=3");
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn round_trip_preserves_non_empty_scalars_as_strings() {
        let pairs = vec![
            ("name", QueryValue::from("frontkit")),
            ("empty", QueryValue::from("")),
            ("count", QueryValue::from(42)),
            ("ratio", QueryValue::from(0.5)),
        ];
        let params = query_string_to_object(&object_to_query_string(pairs));
        assert_eq!(
            params.into_iter().collect::<Vec<_>>(),
            vec![
                ("name".to_string(), "frontkit".to_string()),
                ("count".to_string(), "42".to_string()),
                ("ratio".to_string(), "0.5".to_string()),
            ]
        );
    }
}
