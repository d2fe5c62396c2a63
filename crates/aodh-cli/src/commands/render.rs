//! Render command: manifests in, declarations out

use std::path::{Path, PathBuf};

use aodh_core::{Component, ManifestLoader, OutputFormat, render};

use super::emit_output;
use crate::error::Result;

/// Load, resolve and render the given manifests.
pub fn render_manifests(
    manifests: &[PathBuf],
    format: OutputFormat,
    component: Option<Component>,
    local_overrides: bool,
) -> Result<String> {
    let loader = ManifestLoader::new(manifests.iter().cloned()).with_local_overrides(local_overrides);
    tracing::debug!(layers = ?loader.layer_paths(), "Resolved manifest layers");

    let manifest = loader.load()?;
    let mut request = manifest.to_request()?;
    if let Some(component) = component {
        request = request.only(component);
    }

    let catalog = render(&request)?;
    Ok(catalog.render(format)?)
}

/// Run the render command
pub fn run_render(
    manifests: &[PathBuf],
    format: OutputFormat,
    component: Option<Component>,
    local_overrides: bool,
    output: Option<&Path>,
) -> Result<()> {
    let text = render_manifests(manifests, format, component, local_overrides)?;
    emit_output(&text, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aodh_test_utils::{ManifestDir, supported_os};

    #[test]
    fn test_render_manifest_to_json() {
        let dir = ManifestDir::new();
        let site = dir.write_manifest("site.toml", &supported_os()[0], Some(""), Some(""));

        let text = render_manifests(&[site], OutputFormat::Json, None, true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["resources"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_render_filters_component() {
        let dir = ManifestDir::new();
        let site = dir.write_manifest("site.toml", &supported_os()[2], Some(""), Some(""));

        let text =
            render_manifests(&[site], OutputFormat::Json, Some(Component::Wsgi), true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["resources"][0]["type"], "openstacklib::wsgi::apache");
        assert_eq!(json["resources"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_run_render_writes_output_file() {
        let dir = ManifestDir::new();
        let site = dir.write_manifest("site.toml", &supported_os()[0], Some(""), None);
        let out = dir.path("catalog.json");

        run_render(&[site], OutputFormat::Json, None, true, Some(out.as_path())).unwrap();
        dir.assert_file_contains("catalog.json", "aodh_config");
    }
}
