//! Range and format checks for resolved parameters

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::params::Integer;
use crate::value::Setting;

static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<scheme>[a-z][a-z0-9]*(\+[a-z0-9]+)?)://").expect("scheme regex is valid")
});

/// Registry of database connection schemes the service accepts
pub struct ConnectionSchemes {
    known: HashSet<&'static str>,
}

impl ConnectionSchemes {
    pub fn with_builtins() -> Self {
        let known = [
            "sqlite",
            "mysql",
            "mysql+pymysql",
            "postgresql",
            "postgresql+psycopg2",
            "mongodb",
        ]
        .into_iter()
        .collect();
        Self { known }
    }

    pub fn is_known(&self, scheme: &str) -> bool {
        self.known.contains(scheme)
    }

    pub fn list_known(&self) -> Vec<&'static str> {
        let mut known: Vec<_> = self.known.iter().copied().collect();
        known.sort_unstable();
        known
    }

    /// Check that an explicit connection URL uses a known scheme.
    pub fn check(&self, component: &str, key: &str, connection: &Setting<String>) -> Result<()> {
        let Some(url) = connection.explicit() else {
            return Ok(());
        };
        let scheme = SCHEME_RE
            .captures(url)
            .and_then(|caps| caps.name("scheme"))
            .map(|m| m.as_str());
        match scheme {
            Some(scheme) if self.is_known(scheme) => Ok(()),
            Some(scheme) => Err(Error::invalid_parameter(
                component,
                key,
                format!(
                    "unsupported connection scheme '{scheme}' (expected one of: {})",
                    self.list_known().join(", ")
                ),
            )),
            None => Err(Error::invalid_parameter(
                component,
                key,
                format!("'{url}' is not a connection URL"),
            )),
        }
    }
}

impl Default for ConnectionSchemes {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Require an explicit integer to be at least `min`.
pub fn ensure_at_least(
    component: &str,
    key: &str,
    setting: &Setting<Integer>,
    min: i64,
) -> Result<()> {
    match setting.explicit() {
        Some(value) if value.value() < min => Err(Error::invalid_parameter(
            component,
            key,
            format!("must be at least {min}, got {value}"),
        )),
        _ => Ok(()),
    }
}

/// Require an explicit integer to fall within `min..=max`.
pub fn ensure_within(
    component: &str,
    key: &str,
    setting: &Setting<Integer>,
    min: i64,
    max: i64,
) -> Result<()> {
    match setting.explicit() {
        Some(value) if !(min..=max).contains(&value.value()) => Err(Error::invalid_parameter(
            component,
            key,
            format!("must be between {min} and {max}, got {value}"),
        )),
        _ => Ok(()),
    }
}
