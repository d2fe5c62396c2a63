//! Manifest parsing for parameter files
//!
//! A manifest is one TOML file with up to three tables:
//!
//! ```toml
//! [facts]
//! osfamily = "Debian"
//! fqdn = "some.host.tld"
//! os_workers = 8
//!
//! [db]
//! database_max_retries = "11"
//!
//! [wsgi]
//! ssl = false
//! ```
//!
//! Multiple manifests merge into one before they become a [`ConfigRequest`].

use aodh_meta::{ParameterSet, PlatformFacts};
use serde::{Deserialize, Serialize};

use crate::resolver::ConfigRequest;
use crate::{Error, Result, db, wsgi};

/// Parsed contents of one manifest file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Platform facts for the target host
    #[serde(default)]
    pub facts: toml::Table,

    /// `aodh::db` parameters; present (even empty) to declare the component
    #[serde(default)]
    pub db: Option<toml::Table>,

    /// `aodh::wsgi::apache` parameters
    #[serde(default)]
    pub wsgi: Option<toml::Table>,
}

impl Manifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use aodh_core::config::Manifest;
    ///
    /// let manifest = Manifest::parse(r#"
    /// [facts]
    /// osfamily = "RedHat"
    /// fqdn = "some.host.tld"
    ///
    /// [db]
    /// "#).unwrap();
    ///
    /// assert!(manifest.db.is_some());
    /// assert!(manifest.wsgi.is_none());
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Create an empty manifest
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge another manifest into this one
    ///
    /// Keys in `other` override keys in `self` table by table; a component
    /// declared in either manifest stays declared.
    pub fn merge(&mut self, other: &Manifest) {
        merge_table(&mut self.facts, &other.facts);
        if let Some(other_db) = &other.db {
            merge_table(self.db.get_or_insert_with(toml::Table::new), other_db);
        }
        if let Some(other_wsgi) = &other.wsgi {
            merge_table(self.wsgi.get_or_insert_with(toml::Table::new), other_wsgi);
        }
    }

    /// Convert into a typed request, validating facts and value types.
    pub fn to_request(&self) -> Result<ConfigRequest> {
        if self.facts.is_empty() {
            return Err(Error::MissingFacts);
        }
        let facts = PlatformFacts::from_table(&self.facts)?;
        let mut request = ConfigRequest::new(facts);
        if let Some(table) = &self.db {
            request = request.with_db(ParameterSet::from_table(db::COMPONENT, table)?);
        }
        if let Some(table) = &self.wsgi {
            request = request.with_wsgi(ParameterSet::from_table(wsgi::COMPONENT, table)?);
        }
        Ok(request)
    }
}

fn merge_table(base: &mut toml::Table, other: &toml::Table) {
    for (key, value) in other {
        base.insert(key.clone(), value.clone());
    }
}
