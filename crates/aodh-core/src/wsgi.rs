//! Apache/mod_wsgi front end (`aodh::wsgi::apache`)
//!
//! Resolves virtual-host parameters against the platform facts and projects
//! them onto the `openstacklib::wsgi::apache` resource titled `aodh_wsgi`,
//! along with the Apache classes the virtual host needs.

use aodh_meta::{
    Error as MetaError, Integer, OsFamily, ParameterReader, ParameterSet, PlatformFacts, Setting,
    ensure_at_least, ensure_within,
};

use crate::Result;
use crate::catalog::{
    APACHE_CLASS, APACHE_SSL_CLASS, APACHE_WSGI_CLASS, Catalog, PARAMS_CLASS, Resource,
    WSGI_RESOURCE_TITLE, WsgiApache,
};

/// Component name used in diagnostics.
pub const COMPONENT: &str = "aodh::wsgi::apache";

pub const DEFAULT_PORT: i64 = 8042;
pub const DEFAULT_PATH: &str = "/";
pub const DEFAULT_WORKERS: i64 = 1;
pub const DEFAULT_PRIORITY: i64 = 10;

/// System account the WSGI daemon runs as.
pub const SERVICE_USER: &str = "aodh";
pub const SERVICE_GROUP: &str = "aodh";
/// Name of the WSGI daemon process and its process group.
pub const WSGI_PROCESS: &str = "aodh";
/// Entry script file name, without the `.wsgi` suffix.
pub const WSGI_SCRIPT_FILE: &str = "app";

/// Effective virtual-host settings after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWsgiConfig {
    pub servername: String,
    pub bind_host: Setting<String>,
    pub port: Integer,
    pub path: String,
    pub priority: Integer,
    pub ssl: bool,
    pub ssl_cert: Setting<String>,
    pub ssl_key: Setting<String>,
    pub ssl_chain: Setting<String>,
    pub ssl_ca: Setting<String>,
    pub ssl_crl_path: Setting<String>,
    pub ssl_crl: Setting<String>,
    pub ssl_certs_dir: Setting<String>,
    pub workers: Integer,
    /// Taken from the `os_workers` fact.
    pub threads: u32,
    pub user: String,
    pub group: String,
    pub wsgi_daemon_process: String,
    pub wsgi_process_group: String,
    pub wsgi_process_display_name: Setting<String>,
    pub access_log_file: Setting<String>,
    pub access_log_format: Setting<String>,
    pub error_log_file: Setting<String>,
    /// Platform family as reported; mapped to script paths on emit.
    pub osfamily: String,
}

/// Resolve virtual-host parameters against the platform facts.
pub fn resolve(params: &ParameterSet, facts: &PlatformFacts) -> Result<ResolvedWsgiConfig> {
    let mut reader = ParameterReader::new(COMPONENT, params);

    let servername = reader.string("servername")?.unwrap_or(facts.fqdn.clone());
    let bind_host = reader.string("bind_host")?;
    let port = reader.integer("port")?;
    let path = reader.string("path")?.unwrap_or(DEFAULT_PATH.to_string());
    let priority = reader.integer("priority")?;
    let ssl = reader.boolean("ssl")?.unwrap_or(true);
    let workers = reader.integer("workers")?;

    ensure_within(COMPONENT, "port", &port, 1, 65535)?;
    ensure_at_least(COMPONENT, "workers", &workers, 1)?;
    ensure_at_least(COMPONENT, "priority", &priority, 0)?;
    if servername.trim().is_empty() {
        return Err(
            MetaError::invalid_parameter(COMPONENT, "servername", "must not be empty").into(),
        );
    }
    if !path.starts_with('/') {
        return Err(MetaError::invalid_parameter(
            COMPONENT,
            "path",
            format!("'{path}' must start with '/'"),
        )
        .into());
    }

    let config = ResolvedWsgiConfig {
        servername,
        bind_host,
        port: port.unwrap_or(Integer::new(DEFAULT_PORT)),
        path,
        priority: priority.unwrap_or(Integer::quoted(DEFAULT_PRIORITY)),
        ssl,
        ssl_cert: reader.string("ssl_cert")?,
        ssl_key: reader.string("ssl_key")?,
        ssl_chain: reader.string("ssl_chain")?,
        ssl_ca: reader.string("ssl_ca")?,
        ssl_crl_path: reader.string("ssl_crl_path")?,
        ssl_crl: reader.string("ssl_crl")?,
        ssl_certs_dir: reader.string("ssl_certs_dir")?,
        workers: workers.unwrap_or(Integer::new(DEFAULT_WORKERS)),
        threads: facts.os_workers,
        user: SERVICE_USER.to_string(),
        group: SERVICE_GROUP.to_string(),
        wsgi_daemon_process: WSGI_PROCESS.to_string(),
        wsgi_process_group: WSGI_PROCESS.to_string(),
        wsgi_process_display_name: reader.string("wsgi_process_display_name")?,
        access_log_file: reader.string("access_log_file")?,
        access_log_format: reader.string("access_log_format")?,
        error_log_file: reader.string("error_log_file")?,
        osfamily: facts.osfamily.clone(),
    };
    reader.finish()?;

    tracing::debug!(
        servername = %config.servername,
        port = %config.port,
        ssl = config.ssl,
        osfamily = %config.osfamily,
        "Resolved WSGI virtual host"
    );
    Ok(config)
}

/// Project resolved settings onto the virtual-host resource.
///
/// Fails with `UnsupportedPlatform` when the family has no path table entry.
pub fn emit(config: &ResolvedWsgiConfig) -> Result<Catalog> {
    let family: OsFamily = config.osfamily.parse()?;
    let platform = family.params();

    let mut catalog = Catalog::new();
    catalog.add_class(PARAMS_CLASS);
    catalog.add_class(APACHE_CLASS);
    catalog.add_class(APACHE_WSGI_CLASS);
    if config.ssl {
        catalog.add_class(APACHE_SSL_CLASS);
    } else {
        tracing::debug!("SSL disabled, not declaring {APACHE_SSL_CLASS}");
    }

    catalog.add_resource(Resource::WsgiApache {
        title: WSGI_RESOURCE_TITLE.to_string(),
        attributes: WsgiApache {
            bind_host: config.bind_host.clone(),
            bind_port: config.port.clone(),
            group: config.group.clone(),
            path: config.path.clone(),
            priority: config.priority.clone(),
            servername: config.servername.clone(),
            ssl: config.ssl,
            ssl_ca: config.ssl_ca.clone(),
            ssl_cert: config.ssl_cert.clone(),
            ssl_certs_dir: config.ssl_certs_dir.clone(),
            ssl_chain: config.ssl_chain.clone(),
            ssl_crl: config.ssl_crl.clone(),
            ssl_crl_path: config.ssl_crl_path.clone(),
            ssl_key: config.ssl_key.clone(),
            threads: config.threads,
            user: config.user.clone(),
            workers: config.workers.clone(),
            access_log_file: config.access_log_file.clone(),
            access_log_format: config.access_log_format.clone(),
            error_log_file: config.error_log_file.clone(),
            wsgi_daemon_process: config.wsgi_daemon_process.clone(),
            wsgi_process_display_name: config.wsgi_process_display_name.clone(),
            wsgi_process_group: config.wsgi_process_group.clone(),
            wsgi_script_dir: platform.wsgi_script_path.to_string(),
            wsgi_script_file: WSGI_SCRIPT_FILE.to_string(),
            wsgi_script_source: platform.wsgi_script_source.to_string(),
        },
    });
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn facts(family: &str) -> PlatformFacts {
        PlatformFacts::new(family, "some.host.tld", 8)
    }

    #[test]
    fn test_defaults_come_from_facts() {
        let config = resolve(&ParameterSet::new(), &facts("Debian")).unwrap();
        assert_eq!(config.servername, "some.host.tld");
        assert_eq!(config.threads, 8);
        assert_eq!(config.port, Integer::new(8042));
        assert!(config.ssl);
        assert!(config.bind_host.is_service_default());
    }

    #[test]
    fn test_threads_is_not_a_parameter() {
        let params = ParameterSet::new().with("threads", 4);
        let err = resolve(&params, &facts("Debian")).unwrap_err();
        assert!(err.to_string().contains("unrecognized parameter"), "got: {err}");
    }

    #[test]
    fn test_port_out_of_range() {
        let params = ParameterSet::new().with("port", 70000);
        assert!(resolve(&params, &facts("RedHat")).is_err());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let params = ParameterSet::new().with("workers", 0);
        assert!(resolve(&params, &facts("RedHat")).is_err());
    }

    #[test]
    fn test_relative_path_rejected() {
        let params = ParameterSet::new().with("path", "alarms");
        assert!(resolve(&params, &facts("RedHat")).is_err());
    }

    #[test]
    fn test_resolve_accepts_unknown_family_but_emit_rejects_it() {
        let config = resolve(&ParameterSet::new(), &facts("Solaris")).unwrap();
        let err = emit(&config).unwrap_err();
        assert_eq!(
            err.as_meta(),
            Some(&MetaError::UnsupportedPlatform {
                family: "Solaris".to_string()
            })
        );
    }

    #[test]
    fn test_ssl_disabled_drops_ssl_module() {
        let params = ParameterSet::new().with("ssl", false);
        let config = resolve(&params, &facts("Debian")).unwrap();
        let catalog = emit(&config).unwrap();
        assert!(!catalog.contains_class(APACHE_SSL_CLASS));
        assert!(catalog.contains_class(APACHE_WSGI_CLASS));
        assert!(!catalog.wsgi_apache(WSGI_RESOURCE_TITLE).unwrap().ssl);
    }
}
