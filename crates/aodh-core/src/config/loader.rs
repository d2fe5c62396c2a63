//! Layered manifest loading
//!
//! The `ManifestLoader` reads manifests in the order given, with later files
//! overriding earlier ones. Each file `name.toml` may be followed by a
//! sibling `name.local.toml` holding host-local overrides.

use std::fs;
use std::path::{Path, PathBuf};

use super::manifest::Manifest;
use crate::{Error, Result};

/// Loads and merges manifest layers
pub struct ManifestLoader {
    /// Manifest files in override order
    layers: Vec<PathBuf>,

    /// Whether `*.local.toml` siblings are picked up
    local_overrides: bool,
}

impl ManifestLoader {
    /// Create a loader for the given manifest files
    ///
    /// Local overrides are enabled by default.
    pub fn new<I, P>(layers: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            layers: layers.into_iter().map(Into::into).collect(),
            local_overrides: true,
        }
    }

    /// Enable or disable `*.local.toml` sibling lookup.
    pub fn with_local_overrides(mut self, enabled: bool) -> Self {
        self.local_overrides = enabled;
        self
    }

    /// Path of the local override sibling for `path`
    ///
    /// `site.toml` maps to `site.local.toml`.
    pub fn local_path(path: &Path) -> PathBuf {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        path.with_file_name(format!("{stem}.local.toml"))
    }

    /// Every file that will be read, in merge order
    pub fn layer_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        for layer in &self.layers {
            paths.push(layer.clone());
            if self.local_overrides {
                let local = Self::local_path(layer);
                if local.is_file() {
                    paths.push(local);
                } else {
                    tracing::debug!(?local, "No local override found, skipping");
                }
            }
        }
        paths
    }

    /// Load every layer and merge them
    ///
    /// A named layer that does not exist is an error; a missing local
    /// override is skipped.
    pub fn load(&self) -> Result<Manifest> {
        let mut manifest = Manifest::empty();
        for path in self.layer_paths() {
            if !path.is_file() {
                return Err(Error::ManifestNotFound { path });
            }
            tracing::debug!(?path, "Loading manifest layer");
            let content = fs::read_to_string(&path)?;
            let layer = Manifest::parse(&content)?;
            manifest.merge(&layer);
        }
        Ok(manifest)
    }
}
