//! Platform facts and the per-family path table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Operating-system family used to pick platform-specific paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OsFamily {
    /// Debian and Ubuntu.
    Debian,
    /// RHEL, CentOS and Fedora.
    RedHat,
}

impl OsFamily {
    /// Every family with an entry in the path table.
    pub const ALL: [OsFamily; 2] = [OsFamily::Debian, OsFamily::RedHat];

    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Debian => "Debian",
            OsFamily::RedHat => "RedHat",
        }
    }

    /// Static path and service names for this family.
    pub fn params(&self) -> &'static PlatformParams {
        match self {
            OsFamily::Debian => &DEBIAN_PARAMS,
            OsFamily::RedHat => &REDHAT_PARAMS,
        }
    }
}

impl FromStr for OsFamily {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debian" => Ok(OsFamily::Debian),
            "redhat" => Ok(OsFamily::RedHat),
            _ => Err(Error::UnsupportedPlatform {
                family: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform-dependent names and paths for the Apache/WSGI front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformParams {
    pub httpd_service_name: &'static str,
    pub httpd_ports_file: &'static str,
    /// Directory holding the WSGI entry script.
    pub wsgi_script_path: &'static str,
    /// Packaged WSGI application the entry script is copied from.
    pub wsgi_script_source: &'static str,
}

const DEBIAN_PARAMS: PlatformParams = PlatformParams {
    httpd_service_name: "apache2",
    httpd_ports_file: "/etc/apache2/ports.conf",
    wsgi_script_path: "/usr/lib/cgi-bin/aodh",
    wsgi_script_source: "/usr/share/aodh/app.wsgi",
};

const REDHAT_PARAMS: PlatformParams = PlatformParams {
    httpd_service_name: "httpd",
    httpd_ports_file: "/etc/httpd/conf/ports.conf",
    wsgi_script_path: "/var/www/cgi-bin/aodh",
    wsgi_script_source: "/usr/lib/python2.7/site-packages/aodh/api/app.wsgi",
};

fn default_os_workers() -> u32 {
    2
}

/// Read-only facts about the target host.
///
/// `osfamily` is kept as reported so an unknown family only fails where a
/// platform path is actually needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFacts {
    pub osfamily: String,
    #[serde(default)]
    pub operatingsystem: Option<String>,
    #[serde(default)]
    pub operatingsystemrelease: Option<String>,
    pub fqdn: String,
    #[serde(default = "default_os_workers")]
    pub os_workers: u32,
}

impl PlatformFacts {
    pub fn new(osfamily: impl Into<String>, fqdn: impl Into<String>, os_workers: u32) -> Self {
        Self {
            osfamily: osfamily.into(),
            operatingsystem: None,
            operatingsystemrelease: None,
            fqdn: fqdn.into(),
            os_workers,
        }
    }

    /// Set the operating system name and release.
    pub fn with_os(mut self, name: impl Into<String>, release: impl Into<String>) -> Self {
        self.operatingsystem = Some(name.into());
        self.operatingsystemrelease = Some(release.into());
        self
    }

    /// Parse facts from a TOML table such as a manifest's `[facts]`.
    pub fn from_table(table: &toml::Table) -> Result<Self> {
        let facts: PlatformFacts = toml::Value::Table(table.clone())
            .try_into()
            .map_err(|e: toml::de::Error| Error::InvalidFacts {
                message: e.message().to_string(),
            })?;
        facts.validate()?;
        Ok(facts)
    }

    /// Check the facts a configuration pass depends on.
    ///
    /// `fqdn` must be non-empty and `os_workers` at least 1. The family is
    /// not checked here.
    pub fn validate(&self) -> Result<()> {
        if self.fqdn.trim().is_empty() {
            return Err(Error::InvalidFacts {
                message: "fqdn must not be empty".to_string(),
            });
        }
        if self.os_workers == 0 {
            return Err(Error::InvalidFacts {
                message: "os_workers must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Map the reported family onto the path table.
    pub fn family(&self) -> Result<OsFamily> {
        self.osfamily.parse()
    }
}
