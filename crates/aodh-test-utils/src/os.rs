//! Supported operating systems and their facts.
//!
//! Every behavioural test runs once per entry in [`supported_os`], with facts
//! built by [`SupportedOs::facts`] and overridden where the test needs to.

use aodh_meta::{OsFamily, PlatformFacts};

/// FQDN fact used unless a test overrides it.
pub const DEFAULT_FQDN: &str = "some.host.tld";
/// `os_workers` fact used unless a test overrides it.
pub const DEFAULT_OS_WORKERS: u32 = 8;

/// One supported operating system release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedOs {
    /// Identifier in `name-release-arch` form, e.g. `debian-8-x86_64`.
    pub name: &'static str,
    pub family: OsFamily,
    pub operatingsystem: &'static str,
    pub release: &'static str,
}

impl SupportedOs {
    /// Facts for this OS with the default fqdn and worker count.
    pub fn facts(&self) -> PlatformFacts {
        PlatformFacts::new(self.family.as_str(), DEFAULT_FQDN, DEFAULT_OS_WORKERS)
            .with_os(self.operatingsystem, self.release)
    }

    /// Facts with the given fqdn and worker count.
    pub fn facts_with(&self, fqdn: &str, os_workers: u32) -> PlatformFacts {
        let mut facts = self.facts();
        facts.fqdn = fqdn.to_string();
        facts.os_workers = os_workers;
        facts
    }

    /// Facts rendered as a manifest `[facts]` table body.
    pub fn facts_toml(&self) -> String {
        let facts = self.facts();
        let mut table = toml::Table::new();
        table.insert("osfamily".into(), facts.osfamily.into());
        table.insert("fqdn".into(), facts.fqdn.into());
        table.insert("os_workers".into(), i64::from(facts.os_workers).into());
        table.insert("operatingsystem".into(), self.operatingsystem.into());
        table.insert("operatingsystemrelease".into(), self.release.into());
        toml::to_string(&table).unwrap_or_else(|e| panic!("facts_toml: {e}"))
    }

    /// Platform paths the module is expected to produce for this OS.
    pub fn expected_paths(&self) -> ExpectedPaths {
        ExpectedPaths::for_family(self.family)
    }
}

/// Every operating system the module supports.
pub fn supported_os() -> &'static [SupportedOs] {
    const SUPPORTED: &[SupportedOs] = &[
        SupportedOs {
            name: "debian-8-x86_64",
            family: OsFamily::Debian,
            operatingsystem: "Debian",
            release: "8",
        },
        SupportedOs {
            name: "ubuntu-16.04-x86_64",
            family: OsFamily::Debian,
            operatingsystem: "Ubuntu",
            release: "16.04",
        },
        SupportedOs {
            name: "centos-7-x86_64",
            family: OsFamily::RedHat,
            operatingsystem: "CentOS",
            release: "7",
        },
        SupportedOs {
            name: "redhat-7-x86_64",
            family: OsFamily::RedHat,
            operatingsystem: "RedHat",
            release: "7",
        },
        SupportedOs {
            name: "fedora-25-x86_64",
            family: OsFamily::RedHat,
            operatingsystem: "Fedora",
            release: "25",
        },
    ];
    SUPPORTED
}

/// Look up a supported OS by name.
///
/// # Panics
/// Panics if `name` is not in [`supported_os`].
pub fn os(name: &str) -> SupportedOs {
    supported_os()
        .iter()
        .copied()
        .find(|os| os.name == name)
        .unwrap_or_else(|| panic!("os: '{name}' is not a supported OS"))
}

/// Literal platform paths, written out independently of the path table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedPaths {
    pub httpd_service_name: &'static str,
    pub httpd_ports_file: &'static str,
    pub wsgi_script_path: &'static str,
    pub wsgi_script_source: &'static str,
}

impl ExpectedPaths {
    pub fn for_family(family: OsFamily) -> Self {
        match family {
            OsFamily::Debian => Self {
                httpd_service_name: "apache2",
                httpd_ports_file: "/etc/apache2/ports.conf",
                wsgi_script_path: "/usr/lib/cgi-bin/aodh",
                wsgi_script_source: "/usr/share/aodh/app.wsgi",
            },
            OsFamily::RedHat => Self {
                httpd_service_name: "httpd",
                httpd_ports_file: "/etc/httpd/conf/ports.conf",
                wsgi_script_path: "/var/www/cgi-bin/aodh",
                wsgi_script_source: "/usr/lib/python2.7/site-packages/aodh/api/app.wsgi",
            },
        }
    }
}
