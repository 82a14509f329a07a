use indexmap::IndexMap;
use serde::Serialize;

/// A response parameter value: one string or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    List(Vec<String>),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value.as_str()),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::List(values) => Some(values.as_slice()),
        }
    }

    /// The transport form of the value; list entries are joined with `", "`.
    pub fn to_header_value(&self) -> String {
        match self {
            Self::Single(value) => value.clone(),
            Self::List(values) => values.join(", "),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

/// Response directives keyed by lowercase header name, in emission order.
///
/// An empty mapping means the request was rejected and no CORS headers should be sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResponseParameters {
    entries: IndexMap<&'static str, ParamValue>,
}

impl ResponseParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: &'static str, value: impl Into<ParamValue>) {
        self.entries.insert(key, value.into());
    }

    pub(crate) fn extend(&mut self, other: ResponseParameters) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// One `(name, value)` pair per directive, ready to be written as response headers.
    pub fn header_pairs(&self) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|(key, value)| (key, value.to_header_value()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ResponseParameters {
    type Item = (&'a &'static str, &'a ParamValue);
    type IntoIter = indexmap::map::Iter<'a, &'static str, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
