//! Shared test utilities for the aodh configuration workspace.
//!
//! This crate provides standardised fixtures so every crate's tests run
//! against the same set of supported operating systems. It is a
//! dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`os`]: supported operating systems, their facts and expected paths
//! - [`manifest`]: [`ManifestDir`] builder for manifest files on disk

pub mod manifest;
pub mod os;

pub use manifest::ManifestDir;
pub use os::{DEFAULT_FQDN, DEFAULT_OS_WORKERS, ExpectedPaths, SupportedOs, supported_os};
