//! Database connection settings (`aodh::db`)
//!
//! Resolves the `database_*` parameters into a [`ResolvedDbConfig`] and
//! projects it onto the `oslo::db` resource titled `aodh_config`.

use aodh_meta::{
    ConnectionSchemes, Error as MetaError, Integer, ParameterReader, ParameterSet, Setting,
    ensure_at_least,
};

use crate::Result;
use crate::catalog::{Catalog, DB_RESOURCE_TITLE, DEPS_CLASS, OsloDb, Resource};

/// Component name used in diagnostics.
pub const COMPONENT: &str = "aodh::db";

/// Connection used when `database_connection` is not given.
pub const DEFAULT_CONNECTION: &str = "sqlite:////var/lib/aodh/aodh.sqlite";

/// Effective database settings after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDbConfig {
    pub connection: Setting<String>,
    pub slave_connection: Setting<String>,
    pub min_pool_size: Setting<Integer>,
    pub max_pool_size: Setting<Integer>,
    pub max_retries: Setting<Integer>,
    pub retry_interval: Setting<Integer>,
    pub idle_timeout: Setting<Integer>,
    pub max_overflow: Setting<Integer>,
    pub pool_timeout: Setting<Integer>,
    /// Retries while connecting at service startup; `-1` retries forever.
    pub db_max_retries: Setting<Integer>,
}

impl Default for ResolvedDbConfig {
    fn default() -> Self {
        Self {
            connection: Setting::Explicit(DEFAULT_CONNECTION.to_string()),
            slave_connection: Setting::ServiceDefault,
            min_pool_size: Setting::ServiceDefault,
            max_pool_size: Setting::ServiceDefault,
            max_retries: Setting::ServiceDefault,
            retry_interval: Setting::ServiceDefault,
            idle_timeout: Setting::ServiceDefault,
            max_overflow: Setting::ServiceDefault,
            pool_timeout: Setting::ServiceDefault,
            db_max_retries: Setting::ServiceDefault,
        }
    }
}

/// Resolve database parameters.
///
/// Unknown keys, wrong types and out-of-range values are rejected.
pub fn resolve(params: &ParameterSet) -> Result<ResolvedDbConfig> {
    let mut reader = ParameterReader::new(COMPONENT, params);

    let config = ResolvedDbConfig {
        connection: reader
            .string("database_connection")?
            .or_explicit(DEFAULT_CONNECTION.to_string()),
        slave_connection: reader.string("slave_connection")?,
        min_pool_size: reader.integer("database_min_pool_size")?,
        max_pool_size: reader.integer("database_max_pool_size")?,
        max_retries: reader.integer("database_max_retries")?,
        retry_interval: reader.integer("database_retry_interval")?,
        idle_timeout: reader.integer("database_idle_timeout")?,
        max_overflow: reader.integer("database_max_overflow")?,
        pool_timeout: reader.integer("database_pool_timeout")?,
        db_max_retries: reader.integer("database_db_max_retries")?,
    };
    reader.finish()?;

    validate(&config)?;
    tracing::debug!(
        connection = %config.connection,
        explicit = params.len(),
        "Resolved database settings"
    );
    Ok(config)
}

fn validate(config: &ResolvedDbConfig) -> Result<()> {
    let schemes = ConnectionSchemes::with_builtins();
    schemes.check(COMPONENT, "database_connection", &config.connection)?;
    schemes.check(COMPONENT, "slave_connection", &config.slave_connection)?;

    ensure_at_least(COMPONENT, "database_max_retries", &config.max_retries, -1)?;
    ensure_at_least(COMPONENT, "database_db_max_retries", &config.db_max_retries, -1)?;
    for (key, setting) in [
        ("database_min_pool_size", &config.min_pool_size),
        ("database_max_pool_size", &config.max_pool_size),
        ("database_retry_interval", &config.retry_interval),
        ("database_idle_timeout", &config.idle_timeout),
        ("database_max_overflow", &config.max_overflow),
        ("database_pool_timeout", &config.pool_timeout),
    ] {
        ensure_at_least(COMPONENT, key, setting, 0)?;
    }

    match (config.min_pool_size.explicit(), config.max_pool_size.explicit()) {
        (Some(min), Some(max)) if min.value() > max.value() => Err(MetaError::invalid_parameter(
            COMPONENT,
            "database_min_pool_size",
            format!("{min} exceeds database_max_pool_size {max}"),
        )
        .into()),
        _ => Ok(()),
    }
}

/// Project resolved settings onto the `oslo::db` resource.
pub fn emit(config: &ResolvedDbConfig) -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add_class(DEPS_CLASS);
    catalog.add_resource(Resource::OsloDb {
        title: DB_RESOURCE_TITLE.to_string(),
        attributes: OsloDb {
            db_max_retries: config.db_max_retries.clone(),
            connection: config.connection.clone(),
            slave_connection: config.slave_connection.clone(),
            idle_timeout: config.idle_timeout.clone(),
            min_pool_size: config.min_pool_size.clone(),
            max_pool_size: config.max_pool_size.clone(),
            max_retries: config.max_retries.clone(),
            retry_interval: config.retry_interval.clone(),
            max_overflow: config.max_overflow.clone(),
            pool_timeout: config.pool_timeout.clone(),
        },
    });
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_params_resolve_to_defaults() {
        let config = resolve(&ParameterSet::new()).unwrap();
        assert_eq!(config, ResolvedDbConfig::default());
    }

    #[test]
    fn test_marker_connection_falls_back_to_sqlite() {
        let params = ParameterSet::new().with("database_connection", "<SERVICE DEFAULT>");
        let config = resolve(&params).unwrap();
        assert_eq!(
            config.connection,
            Setting::Explicit(DEFAULT_CONNECTION.to_string())
        );
    }

    #[test]
    fn test_min_pool_above_max_is_rejected() {
        let params = ParameterSet::new()
            .with("database_min_pool_size", "12")
            .with("database_max_pool_size", "11");
        let err = resolve(&params).unwrap_err();
        assert!(err.to_string().contains("exceeds"), "got: {err}");
    }

    #[test]
    fn test_db_max_retries_allows_forever() {
        let params = ParameterSet::new().with("database_db_max_retries", "-1");
        let config = resolve(&params).unwrap();
        assert_eq!(config.db_max_retries.to_string(), "-1");
    }

    #[test]
    fn test_negative_pool_timeout_is_rejected() {
        let params = ParameterSet::new().with("database_pool_timeout", -5);
        assert!(resolve(&params).is_err());
    }

    #[test]
    fn test_emit_declares_deps() {
        let catalog = emit(&ResolvedDbConfig::default());
        assert!(catalog.contains_class(DEPS_CLASS));
        assert!(catalog.oslo_db(DB_RESOURCE_TITLE).is_some());
    }
}
