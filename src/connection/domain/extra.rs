//! Free-form extra options attached to a connection profile.

use super::ConnectionDomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Values accepted as "on" by [`is_truthy`].
const TRUTHY_VALUES: [&str; 5] = ["true", "t", "y", "yes", "1"];

/// Free-form key/value options stored alongside a connection profile.
///
/// Values keep their JSON shape so nested templates survive a round trip,
/// but scalar values are normally read through [`ExtraOptions::get_str`],
/// which renders booleans and numbers as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraOptions(Map<String, Value>);

impl ExtraOptions {
    /// Creates an empty option map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON document.
    ///
    /// Blank input yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionDomainError::InvalidExtra`] when the document is
    /// not valid JSON or is not an object.
    pub fn from_json_str(document: &str) -> Result<Self, ConnectionDomainError> {
        if document.trim().is_empty() {
            return Ok(Self::new());
        }
        let parsed: Value = serde_json::from_str(document)
            .map_err(|err| ConnectionDomainError::InvalidExtra(err.to_string()))?;
        Self::try_from(parsed)
    }

    /// Adds or replaces an option, returning the updated map.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces an option.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the raw JSON value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value stored under `key` rendered as a string.
    ///
    /// Strings are returned as-is; booleans and numbers use their JSON
    /// spelling; arrays and objects are serialized. `null` reads as absent.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(text) => Some(Cow::Borrowed(text.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    /// Reads a flag that is on unless explicitly set to `"false"`.
    ///
    /// See [`flag_enabled`].
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        flag_enabled(self.get_str(key).as_deref())
    }

    /// Reads a flag that is off unless set to a truthy spelling.
    ///
    /// See [`is_truthy`].
    #[must_use]
    pub fn truthy(&self, key: &str) -> bool {
        is_truthy(self.get_str(key).as_deref())
    }

    /// Returns a copy without the listed keys.
    #[must_use]
    pub fn without(&self, keys: &[&str]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(key, _)| !keys.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    /// Returns `true` when no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over option keys and raw values.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the options, returning the underlying JSON object.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl TryFrom<Value> for ExtraOptions {
    type Error = ConnectionDomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(ConnectionDomainError::InvalidExtra(format!(
                "expected an object, found {other}"
            ))),
        }
    }
}

impl From<Map<String, Value>> for ExtraOptions {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ExtraOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Interprets an optional flag value that defaults to on.
///
/// Only the literal `"false"` (any case) switches the flag off; every other
/// value, including an absent one, leaves it on.
#[must_use]
pub fn flag_enabled(value: Option<&str>) -> bool {
    !value.is_some_and(|text| text.eq_ignore_ascii_case("false"))
}

/// Interprets an optional flag value that defaults to off.
///
/// `true`, `t`, `y`, `yes`, and `1` (any case) switch the flag on.
#[must_use]
pub fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|text| {
        TRUTHY_VALUES
            .iter()
            .any(|candidate| text.eq_ignore_ascii_case(candidate))
    })
}
