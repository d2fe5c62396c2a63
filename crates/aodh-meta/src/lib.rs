//! Parameter, platform and value model for the aodh configuration module.
//!
//! This crate holds the building blocks shared by the resolver and emitter:
//! explicit-or-default [`Setting`]s, raw [`ParameterSet`]s with typed
//! extraction, [`PlatformFacts`] and the per-family [`PlatformParams`] table.

pub mod error;
pub mod params;
pub mod platform;
pub mod validation;
pub mod value;

pub use error::{Error, Result};
pub use params::{Integer, ParameterReader, ParameterSet, ParameterValue};
pub use platform::{OsFamily, PlatformFacts, PlatformParams};
pub use validation::{ConnectionSchemes, ensure_at_least, ensure_within};
pub use value::{SERVICE_DEFAULT, Setting};
