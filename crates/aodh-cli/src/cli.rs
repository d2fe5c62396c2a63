//! CLI argument parsing using clap derive

use std::path::PathBuf;

use aodh_core::{Component, OutputFormat};
use clap::{Parser, Subcommand};

/// aodh-config - Render aodh database and WSGI resource declarations
#[derive(Parser, Debug)]
#[command(name = "aodh-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve manifests and print the resulting declarations
    ///
    /// Manifests are merged in the order given; a `name.local.toml` next to
    /// each `name.toml` is applied right after it.
    ///
    /// Examples:
    ///   aodh-config render -m site.toml
    ///   aodh-config render -m site.toml -m host.toml --format toml
    ///   aodh-config render -m site.toml --component wsgi
    Render {
        /// Manifest files, lowest precedence first
        #[arg(short, long = "manifest", required = true)]
        manifests: Vec<PathBuf>,

        /// Output format (json, toml, yaml)
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Only render one component (db, wsgi)
        #[arg(short, long)]
        component: Option<Component>,

        /// Ignore `*.local.toml` override files
        #[arg(long)]
        no_local: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the declarations produced by default parameters
    Defaults {
        /// Platform family (Debian, RedHat)
        #[arg(long, env = "AODH_OSFAMILY")]
        family: String,

        /// Fully-qualified domain name fact
        #[arg(long, default_value = "localhost")]
        fqdn: String,

        /// Worker count fact, used as WSGI thread count
        #[arg(long, default_value_t = 2)]
        os_workers: u32,

        /// Output format (json, toml, yaml)
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Only render one component (db, wsgi)
        #[arg(short, long)]
        component: Option<Component>,
    },

    /// List supported platform families and their paths
    Platforms {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
