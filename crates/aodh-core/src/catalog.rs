//! Resource declarations produced by the emitter
//!
//! A [`Catalog`] is the ordered set of class references and resources handed
//! to the external configuration engine. Ordering is insertion order, so
//! identical input always serializes identically.

use std::fmt;
use std::str::FromStr;

use aodh_meta::{Integer, Setting};
use serde::Serialize;

use crate::Result;

/// Class the deps anchor for every aodh resource.
pub const DEPS_CLASS: &str = "aodh::deps";
/// Class providing the platform parameter table.
pub const PARAMS_CLASS: &str = "aodh::params";
pub const APACHE_CLASS: &str = "apache";
pub const APACHE_WSGI_CLASS: &str = "apache::mod::wsgi";
pub const APACHE_SSL_CLASS: &str = "apache::mod::ssl";

/// Title of the database-connection resource.
pub const DB_RESOURCE_TITLE: &str = "aodh_config";
/// Title of the WSGI virtual-host resource.
pub const WSGI_RESOURCE_TITLE: &str = "aodh_wsgi";

/// Attributes of the `oslo::db` database-connection resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OsloDb {
    pub db_max_retries: Setting<Integer>,
    pub connection: Setting<String>,
    #[serde(skip_serializing_if = "Setting::is_service_default")]
    pub slave_connection: Setting<String>,
    pub idle_timeout: Setting<Integer>,
    pub min_pool_size: Setting<Integer>,
    pub max_pool_size: Setting<Integer>,
    pub max_retries: Setting<Integer>,
    pub retry_interval: Setting<Integer>,
    pub max_overflow: Setting<Integer>,
    pub pool_timeout: Setting<Integer>,
}

/// Attributes of the `openstacklib::wsgi::apache` virtual-host resource.
///
/// Marker-valued attributes are left out so the define applies its own
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WsgiApache {
    #[serde(skip_serializing_if = "Setting::is_service_default")]
    pub bind_host: Setting<String>,
    pub bind_port: Integer,
    pub group: String,
    pub path: String,
    pub priority: Integer,
    pub servername: String,
    pub ssl: bool,
    #[serde(skip_serializing_if = "Setting::is_service_default")]
    pub ssl_ca: Setting<String>,
    #[serde(skip_serializing_if = "Setting::is_service_default")]
    pub ssl_cert: Setting<String>,
    #[serde(skip_serializing_if = "Setting::is_service_default")]
    pub ssl_certs_dir: Setting<String>,
    #[serde(skip_serializing_if = "Setting::is_service_default")]
    pub ssl_chain: Setting<String>,
    #[serde(skip_serializing_if = "Setting::is_service_default")]
    pub ssl_crl: Setting<String>,
    #[serde(skip_serializing_if = "Setting::is_service_default")]
    pub ssl_crl_path: Setting<String>,
    #[serde(skip_serializing_if = "Setting::is_service_default")]
    pub ssl_key: Setting<String>,
    pub threads: u32,
    pub user: String,
    pub workers: Integer,
    #[serde(skip_serializing_if = "Setting::is_service_default")]
    pub access_log_file: Setting<String>,
    #[serde(skip_serializing_if = "Setting::is_service_default")]
    pub access_log_format: Setting<String>,
    #[serde(skip_serializing_if = "Setting::is_service_default")]
    pub error_log_file: Setting<String>,
    pub wsgi_daemon_process: String,
    #[serde(skip_serializing_if = "Setting::is_service_default")]
    pub wsgi_process_display_name: Setting<String>,
    pub wsgi_process_group: String,
    pub wsgi_script_dir: String,
    pub wsgi_script_file: String,
    pub wsgi_script_source: String,
}

/// A single resource declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Resource {
    #[serde(rename = "oslo::db")]
    OsloDb {
        title: String,
        #[serde(flatten)]
        attributes: OsloDb,
    },
    #[serde(rename = "openstacklib::wsgi::apache")]
    WsgiApache {
        title: String,
        #[serde(flatten)]
        attributes: WsgiApache,
    },
}

impl Resource {
    /// Resource type name as the engine knows it.
    pub fn kind(&self) -> &'static str {
        match self {
            Resource::OsloDb { .. } => "oslo::db",
            Resource::WsgiApache { .. } => "openstacklib::wsgi::apache",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Resource::OsloDb { title, .. } | Resource::WsgiApache { title, .. } => title,
        }
    }
}

/// Ordered declaration set for one configuration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    classes: Vec<String>,
    resources: Vec<Resource>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a class; repeated declarations are ignored.
    pub fn add_class(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.classes.contains(&name) {
            self.classes.push(name);
        }
    }

    pub fn add_resource(&mut self, resource: Resource) {
        tracing::debug!(kind = resource.kind(), title = resource.title(), "Declared resource");
        self.resources.push(resource);
    }

    /// Append another catalog's declarations after this one's.
    pub fn extend(&mut self, other: Catalog) {
        for class in other.classes {
            self.add_class(class);
        }
        self.resources.extend(other.resources);
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Attributes of the `oslo::db` resource with the given title.
    pub fn oslo_db(&self, title: &str) -> Option<&OsloDb> {
        self.resources.iter().find_map(|r| match r {
            Resource::OsloDb { title: t, attributes } if t == title => Some(attributes),
            _ => None,
        })
    }

    /// Attributes of the `openstacklib::wsgi::apache` resource with the given title.
    pub fn wsgi_apache(&self, title: &str) -> Option<&WsgiApache> {
        self.resources.iter().find_map(|r| match r {
            Resource::WsgiApache { title: t, attributes } if t == title => Some(attributes),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.resources.is_empty()
    }

    /// Serialize in the requested output format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let rendered = match format {
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
            OutputFormat::Toml => toml::to_string_pretty(self)?,
            OutputFormat::Yaml => serde_yaml::to_string(self)?,
        };
        Ok(rendered)
    }
}

/// Serialization format for rendered catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "toml" => Ok(OutputFormat::Toml),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!("unknown output format '{other}' (json, toml, yaml)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Toml => write!(f, "toml"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_class_deduplicates() {
        let mut catalog = Catalog::new();
        catalog.add_class(DEPS_CLASS);
        catalog.add_class(APACHE_CLASS);
        catalog.add_class(DEPS_CLASS);
        assert_eq!(catalog.classes(), &[DEPS_CLASS, APACHE_CLASS]);
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut a = Catalog::new();
        a.add_class(DEPS_CLASS);
        let mut b = Catalog::new();
        b.add_class(PARAMS_CLASS);
        b.add_class(DEPS_CLASS);
        a.extend(b);
        assert_eq!(a.classes(), &[DEPS_CLASS, PARAMS_CLASS]);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_kind_matches_serialized_type_tag() {
        let facts = aodh_meta::PlatformFacts::new("Debian", "some.host.tld", 8);
        let catalog = crate::render(&crate::ConfigRequest::all_defaults(facts)).unwrap();
        let json = serde_json::to_value(&catalog).unwrap();

        let kinds: Vec<&str> = catalog.resources().iter().map(Resource::kind).collect();
        assert_eq!(kinds, ["oslo::db", "openstacklib::wsgi::apache"]);
        let values = json["resources"].as_array().unwrap();
        for (resource, value) in catalog.resources().iter().zip(values) {
            assert_eq!(value["type"], resource.kind());
            assert_eq!(value["title"], resource.title());
        }
    }

    #[test]
    fn test_empty_catalog() {
        assert!(Catalog::new().is_empty());
    }
}
