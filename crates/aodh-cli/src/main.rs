//! aodh-config CLI
//!
//! Renders the database and WSGI resource declarations of the aodh
//! configuration module from layered TOML manifests.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} aodh configuration renderer", "aodh-config".green().bold());
            println!();
            println!("Run {} for available commands.", "aodh-config --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Render {
            manifests,
            format,
            component,
            no_local,
            output,
        } => commands::run_render(&manifests, format, component, !no_local, output.as_deref()),
        Commands::Defaults {
            family,
            fqdn,
            os_workers,
            format,
            component,
        } => commands::run_defaults(&family, &fqdn, os_workers, format, component),
        Commands::Platforms { json } => commands::run_platforms(json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aodh_test_utils::{ManifestDir, supported_os};

    #[test]
    fn test_execute_render_command() {
        let dir = ManifestDir::new();
        let site = dir.write_manifest("site.toml", &supported_os()[0], Some(""), Some(""));
        let out = dir.path("out.json");

        let result = execute_command(Commands::Render {
            manifests: vec![site],
            format: aodh_core::OutputFormat::Json,
            component: None,
            no_local: false,
            output: Some(out),
        });
        assert!(result.is_ok());
        dir.assert_file_contains("out.json", "aodh_wsgi");
    }

    #[test]
    fn test_execute_platforms_command() {
        assert!(execute_command(Commands::Platforms { json: true }).is_ok());
    }

    #[test]
    fn test_execute_render_missing_manifest() {
        let dir = ManifestDir::new();
        let result = execute_command(Commands::Render {
            manifests: vec![dir.path("absent.toml")],
            format: aodh_core::OutputFormat::Json,
            component: None,
            no_local: false,
            output: None,
        });
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Manifest not found"), "got: {err}");
    }
}
