//! Defaults command: declarations for an empty parameter set

use aodh_core::{Component, ConfigRequest, OutputFormat, render};
use aodh_meta::PlatformFacts;

use super::emit_output;
use crate::error::Result;

/// Render the default catalog for the given facts.
pub fn render_defaults(
    family: &str,
    fqdn: &str,
    os_workers: u32,
    format: OutputFormat,
    component: Option<Component>,
) -> Result<String> {
    // Unknown families are rejected even when only the db component is rendered
    family.parse::<aodh_meta::OsFamily>()?;

    let facts = PlatformFacts::new(family, fqdn, os_workers);
    let mut request = ConfigRequest::all_defaults(facts);
    if let Some(component) = component {
        request = request.only(component);
    }
    let catalog = render(&request)?;
    Ok(catalog.render(format)?)
}

/// Run the defaults command
pub fn run_defaults(
    family: &str,
    fqdn: &str,
    os_workers: u32,
    format: OutputFormat,
    component: Option<Component>,
) -> Result<()> {
    let text = render_defaults(family, fqdn, os_workers, format, component)?;
    emit_output(&text, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_debian() {
        let text = render_defaults("Debian", "some.host.tld", 8, OutputFormat::Json, None).unwrap();
        assert!(text.contains("/usr/lib/cgi-bin/aodh"));
        assert!(text.contains("apache::mod::ssl"));
    }

    #[test]
    fn test_defaults_reject_unknown_family() {
        let err = render_defaults("Arch", "h", 2, OutputFormat::Json, None).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported platform family: Arch");
    }
}
