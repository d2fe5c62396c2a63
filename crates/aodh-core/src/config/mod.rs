//! Manifest files and layered loading
//!
//! Parameters and facts can be supplied in TOML manifests instead of being
//! built in code. Manifests are merged in the order given (later files win):
//!
//! 1. **Named manifests** - every path passed to the loader, in order
//! 2. **Local overrides** - `name.local.toml` next to each `name.toml`
//!
//! # Example
//!
//! ```ignore
//! use aodh_core::config::ManifestLoader;
//!
//! let manifest = ManifestLoader::new(["site.toml", "host.toml"]).load()?;
//! let request = manifest.to_request()?;
//! let catalog = aodh_core::render(&request)?;
//! ```

mod loader;
mod manifest;

pub use loader::ManifestLoader;
pub use manifest::Manifest;
