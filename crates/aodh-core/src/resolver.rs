//! Whole-pass resolution and emission
//!
//! [`resolve`] turns a [`ConfigRequest`] into a [`ResolvedConfig`]; [`emit`]
//! turns that into a [`Catalog`]. Both are pure. Any failure aborts the pass
//! before a catalog is produced.

use std::fmt;
use std::str::FromStr;

use aodh_meta::{ParameterSet, PlatformFacts};

use crate::Result;
use crate::catalog::Catalog;
use crate::db::{self, ResolvedDbConfig};
use crate::wsgi::{self, ResolvedWsgiConfig};

/// A configurable component of the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Database connection (`aodh::db`).
    Db,
    /// Apache/WSGI virtual host (`aodh::wsgi::apache`).
    Wsgi,
}

impl FromStr for Component {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "db" | "database" => Ok(Component::Db),
            "wsgi" | "apache" => Ok(Component::Wsgi),
            other => Err(format!("unknown component '{other}' (db, wsgi)")),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Db => write!(f, "db"),
            Component::Wsgi => write!(f, "wsgi"),
        }
    }
}

/// Input for one configuration pass.
///
/// A component is declared when its parameter set is present, even if empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigRequest {
    pub facts: PlatformFacts,
    pub db: Option<ParameterSet>,
    pub wsgi: Option<ParameterSet>,
}

impl ConfigRequest {
    /// A request declaring no components.
    pub fn new(facts: PlatformFacts) -> Self {
        Self {
            facts,
            db: None,
            wsgi: None,
        }
    }

    /// A request declaring every component with default parameters.
    pub fn all_defaults(facts: PlatformFacts) -> Self {
        Self::new(facts)
            .with_db(ParameterSet::new())
            .with_wsgi(ParameterSet::new())
    }

    pub fn with_db(mut self, params: ParameterSet) -> Self {
        self.db = Some(params);
        self
    }

    pub fn with_wsgi(mut self, params: ParameterSet) -> Self {
        self.wsgi = Some(params);
        self
    }

    /// Drop every component except `component`.
    pub fn only(mut self, component: Component) -> Self {
        match component {
            Component::Db => self.wsgi = None,
            Component::Wsgi => self.db = None,
        }
        self
    }
}

/// Effective settings for every declared component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub db: Option<ResolvedDbConfig>,
    pub wsgi: Option<ResolvedWsgiConfig>,
}

/// Resolve every declared component.
pub fn resolve(request: &ConfigRequest) -> Result<ResolvedConfig> {
    request.facts.validate()?;
    let db = request.db.as_ref().map(db::resolve).transpose()?;
    let wsgi = request
        .wsgi
        .as_ref()
        .map(|params| wsgi::resolve(params, &request.facts))
        .transpose()?;
    Ok(ResolvedConfig { db, wsgi })
}

/// Emit declarations for every resolved component, database first.
pub fn emit(config: &ResolvedConfig) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    if let Some(db_config) = &config.db {
        catalog.extend(db::emit(db_config));
    }
    if let Some(wsgi_config) = &config.wsgi {
        catalog.extend(wsgi::emit(wsgi_config)?);
    }
    tracing::debug!(
        classes = catalog.classes().len(),
        resources = catalog.resources().len(),
        "Emitted catalog"
    );
    Ok(catalog)
}

/// Resolve and emit in one step.
pub fn render(request: &ConfigRequest) -> Result<Catalog> {
    emit(&resolve(request)?)
}
