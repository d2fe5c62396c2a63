//! [`ManifestDir`] builder for manifest-on-disk test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::os::SupportedOs;

/// A temporary directory holding manifest files.
///
/// # Example
///
/// ```rust,no_run
/// use aodh_test_utils::{ManifestDir, supported_os};
///
/// let dir = ManifestDir::new();
/// let site = dir.write_manifest("site.toml", &supported_os()[0], Some("database_max_retries = \"11\""), None);
/// dir.assert_file_contains("site.toml", "[db]");
/// ```
pub struct ManifestDir {
    temp_dir: TempDir,
}

impl Default for ManifestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write raw content to `name` and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("ManifestDir::write: {}: {e}", path.display()));
        path
    }

    /// Write a manifest with facts for `os` and optional component bodies.
    ///
    /// `Some("")` declares a component with default parameters; `None` leaves
    /// it out.
    pub fn write_manifest(
        &self,
        name: &str,
        os: &SupportedOs,
        db: Option<&str>,
        wsgi: Option<&str>,
    ) -> PathBuf {
        let mut content = format!("[facts]\n{}", os.facts_toml());
        if let Some(body) = db {
            content.push_str(&format!("\n[db]\n{body}\n"));
        }
        if let Some(body) = wsgi {
            content.push_str(&format!("\n[wsgi]\n{body}\n"));
        }
        self.write(name, &content)
    }

    /// Assert that the file at `name` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, name: &str, content: &str) {
        let full_path = self.path(name);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
