//! Input parameter sets and typed extraction
//!
//! A [`ParameterSet`] is the raw, possibly partial input for one component.
//! Components read it through a [`ParameterReader`], which type-checks each
//! recognized key and rejects anything left unread.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::value::{SERVICE_DEFAULT, Setting};

/// A single input value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Boolean(bool),
    Integer(i64),
    String(String),
}

impl ParameterValue {
    /// Human-readable type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParameterValue::Boolean(_) => "boolean",
            ParameterValue::Integer(_) => "integer",
            ParameterValue::String(_) => "string",
        }
    }

    fn is_service_default(&self) -> bool {
        matches!(self, ParameterValue::String(s) if s == SERVICE_DEFAULT)
    }

    /// Convert a TOML value, rejecting types no component accepts.
    pub fn from_toml(component: &str, key: &str, value: &toml::Value) -> Result<Self> {
        match value {
            toml::Value::String(s) => Ok(ParameterValue::String(s.clone())),
            toml::Value::Integer(i) => Ok(ParameterValue::Integer(*i)),
            toml::Value::Boolean(b) => Ok(ParameterValue::Boolean(*b)),
            other => Err(Error::invalid_parameter(
                component,
                key,
                format!("unsupported value type '{}'", other.type_str()),
            )),
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Boolean(b) => write!(f, "{b}"),
            ParameterValue::Integer(i) => write!(f, "{i}"),
            ParameterValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Boolean(value)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Integer(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        ParameterValue::Integer(i64::from(value))
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::String(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::String(value)
    }
}

/// An integer knob that remembers how it was written.
///
/// `'11'` stays a string and `11` stays an integer when rendered, so the
/// declaration carries the caller's value verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    value: i64,
    raw: Option<String>,
}

impl Integer {
    /// An integer written as a bare number.
    pub fn new(value: i64) -> Self {
        Self { value, raw: None }
    }

    /// An integer written as a quoted string, e.g. `'10'`.
    pub fn quoted(value: i64) -> Self {
        Self {
            value,
            raw: Some(value.to_string()),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    fn parse(raw: &str) -> Option<Self> {
        raw.parse::<i64>().ok().map(|value| Self {
            value,
            raw: Some(raw.to_string()),
        })
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => f.write_str(raw),
            None => write!(f, "{}", self.value),
        }
    }
}

impl Serialize for Integer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match &self.raw {
            Some(raw) => serializer.serialize_str(raw),
            None => serializer.serialize_i64(self.value),
        }
    }
}

/// Raw input parameters for one component, keyed by option name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<String, ParameterValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParameterValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.values.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlay `other` on top of this set; keys in `other` win.
    pub fn merge(&mut self, other: &ParameterSet) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Build a parameter set from a TOML table.
    pub fn from_table(component: &str, table: &toml::Table) -> Result<Self> {
        let mut values = BTreeMap::new();
        for (key, value) in table {
            values.insert(key.clone(), ParameterValue::from_toml(component, key, value)?);
        }
        Ok(Self { values })
    }
}

/// Type-checked, consumption-tracking view over a [`ParameterSet`].
pub struct ParameterReader<'a> {
    component: &'a str,
    params: &'a ParameterSet,
    consumed: BTreeSet<String>,
}

impl<'a> ParameterReader<'a> {
    pub fn new(component: &'a str, params: &'a ParameterSet) -> Self {
        Self {
            component,
            params,
            consumed: BTreeSet::new(),
        }
    }

    fn take(&mut self, key: &str) -> Option<&'a ParameterValue> {
        self.consumed.insert(key.to_string());
        self.params
            .get(key)
            .filter(|value| !value.is_service_default())
    }

    fn mismatch(&self, key: &str, expected: &str, found: &ParameterValue) -> Error {
        Error::invalid_parameter(
            self.component,
            key,
            format!("expected {expected}, found {} '{found}'", found.type_name()),
        )
    }

    /// Read a string knob.
    pub fn string(&mut self, key: &str) -> Result<Setting<String>> {
        match self.take(key) {
            None => Ok(Setting::ServiceDefault),
            Some(ParameterValue::String(s)) => Ok(Setting::Explicit(s.clone())),
            Some(other) => Err(self.mismatch(key, "a string", other)),
        }
    }

    /// Read an integer knob, accepting integers or numeric strings.
    pub fn integer(&mut self, key: &str) -> Result<Setting<Integer>> {
        match self.take(key) {
            None => Ok(Setting::ServiceDefault),
            Some(ParameterValue::Integer(i)) => Ok(Setting::Explicit(Integer::new(*i))),
            Some(value @ ParameterValue::String(s)) => Integer::parse(s)
                .map(Setting::Explicit)
                .ok_or_else(|| self.mismatch(key, "an integer", value)),
            Some(other) => Err(self.mismatch(key, "an integer", other)),
        }
    }

    /// Read a boolean knob.
    pub fn boolean(&mut self, key: &str) -> Result<Setting<bool>> {
        match self.take(key) {
            None => Ok(Setting::ServiceDefault),
            Some(ParameterValue::Boolean(b)) => Ok(Setting::Explicit(*b)),
            Some(other) => Err(self.mismatch(key, "a boolean", other)),
        }
    }

    /// Fail on the first key that no read consumed.
    pub fn finish(self) -> Result<()> {
        if let Some(unknown) = self.params.keys().find(|k| !self.consumed.contains(*k)) {
            tracing::debug!(component = self.component, key = unknown, "Rejecting unknown parameter");
            return Err(Error::invalid_parameter(
                self.component,
                unknown,
                "unrecognized parameter",
            ));
        }
        Ok(())
    }
}
