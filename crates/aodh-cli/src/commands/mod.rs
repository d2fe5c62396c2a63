//! Command implementations

mod defaults;
mod platforms;
mod render;

pub use defaults::{render_defaults, run_defaults};
pub use platforms::{platforms_json, run_platforms};
pub use render::{render_manifests, run_render};

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Print `text` to stdout, or write it to `output` when given.
fn emit_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            tracing::debug!(?path, bytes = text.len(), "Wrote rendered catalog");
        }
        None => {
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}
