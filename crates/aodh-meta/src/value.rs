//! Explicit-or-default setting values
//!
//! Every optional knob resolves to either an explicit value or the
//! "use service default" marker. The marker is a variant, not a string, and
//! is only spelled out as [`SERVICE_DEFAULT`] when a declaration is rendered.

use std::fmt;

use serde::{Serialize, Serializer};

/// Literal used by the downstream engine for "let the service decide".
pub const SERVICE_DEFAULT: &str = "<SERVICE DEFAULT>";

/// A setting that is either set explicitly or left to the service default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Setting<T> {
    /// Value supplied by the caller (or a hard-coded module default).
    Explicit(T),
    /// Defer to the service's own built-in default.
    ServiceDefault,
}

impl<T> Default for Setting<T> {
    fn default() -> Self {
        Setting::ServiceDefault
    }
}

impl<T> Setting<T> {
    pub fn is_service_default(&self) -> bool {
        matches!(self, Setting::ServiceDefault)
    }

    /// Borrow the explicit value, if any.
    pub fn explicit(&self) -> Option<&T> {
        match self {
            Setting::Explicit(value) => Some(value),
            Setting::ServiceDefault => None,
        }
    }

    /// Replace the marker with a module-level default.
    pub fn or_explicit(self, fallback: T) -> Setting<T> {
        match self {
            Setting::ServiceDefault => Setting::Explicit(fallback),
            explicit => explicit,
        }
    }

    /// Collapse to a concrete value, using `fallback` for the marker.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Setting::Explicit(value) => value,
            Setting::ServiceDefault => fallback,
        }
    }
}

impl<T> From<T> for Setting<T> {
    fn from(value: T) -> Self {
        Setting::Explicit(value)
    }
}

impl<T: fmt::Display> fmt::Display for Setting<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::Explicit(value) => value.fmt(f),
            Setting::ServiceDefault => f.write_str(SERVICE_DEFAULT),
        }
    }
}

impl<T: Serialize> Serialize for Setting<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Setting::Explicit(value) => value.serialize(serializer),
            Setting::ServiceDefault => serializer.serialize_str(SERVICE_DEFAULT),
        }
    }
}
