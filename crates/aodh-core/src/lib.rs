//! Parameter resolution and resource emission for the aodh configuration module
//!
//! This crate maps a parameter set plus platform facts onto the resource
//! declarations consumed by an external configuration engine:
//!
//! - **Database**: `aodh::db` parameters become the `oslo::db` resource `aodh_config`
//! - **WSGI front end**: `aodh::wsgi::apache` parameters become the
//!   `openstacklib::wsgi::apache` resource `aodh_wsgi` plus its Apache classes
//! - **Manifests**: layered TOML files carrying facts and parameters
//!
//! # Architecture
//!
//! ```text
//!   ConfigRequest --resolve--> ResolvedConfig --emit--> Catalog
//!        ^
//!   ManifestLoader (optional)
//! ```
//!
//! # Example
//!
//! ```
//! use aodh_core::{ConfigRequest, render};
//! use aodh_meta::{ParameterSet, PlatformFacts};
//!
//! let facts = PlatformFacts::new("Debian", "some.host.tld", 8);
//! let request = ConfigRequest::new(facts)
//!     .with_db(ParameterSet::new().with("database_max_retries", "11"));
//! let catalog = render(&request).unwrap();
//!
//! let db = catalog.oslo_db("aodh_config").unwrap();
//! assert_eq!(db.max_retries.to_string(), "11");
//! ```

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod resolver;
pub mod wsgi;

pub use catalog::{Catalog, OsloDb, OutputFormat, Resource, WsgiApache};
pub use config::{Manifest, ManifestLoader};
pub use db::ResolvedDbConfig;
pub use error::{Error, Result};
pub use resolver::{Component, ConfigRequest, ResolvedConfig, emit, render, resolve};
pub use wsgi::ResolvedWsgiConfig;
