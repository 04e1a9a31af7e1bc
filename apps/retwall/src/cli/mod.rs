//! # Retwall CLI Module
//!
//! This module implements the CLI interface for Retwall.
//!
//! ## Available Commands
//!
//! - `check` - Evaluate a wall from defaults, a wall file and overrides
//! - `defaults` - Print the default wall file
//! - `fields` - List editable fields with aliases and defaults
//! - `server` - Start the HTTP server

mod commands;

use clap::{Parser, Subcommand};
use retwall_core::WallError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Retwall - Retaining wall stability checker
///
/// Rankine active thrust with sliding, overturning and bearing checks.
/// SI units: m, kN, degrees.
#[derive(Parser, Debug)]
#[command(name = "retwall")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a wall
    Check {
        /// Wall file (TOML); defaults are used for anything it omits
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Override a field, e.g. `--set height=3.5` or `--set altura=3.5`
        #[arg(short, long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// Refuse to evaluate when the input violates a domain constraint
        #[arg(long)]
        strict: bool,

        /// Also print intermediate forces and moments
        #[arg(short, long)]
        detailed: bool,
    },

    /// Print the default wall file
    Defaults,

    /// List editable fields
    Fields,

    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Refuse walls with domain warnings on every request
        #[arg(long)]
        strict: bool,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), WallError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Check {
            file,
            set,
            strict,
            detailed,
        }) => cmd_check(file.as_deref(), &set, strict, detailed, json_mode),
        Some(Commands::Defaults) => cmd_defaults(),
        Some(Commands::Fields) => cmd_fields(json_mode),
        Some(Commands::Server { host, port, strict }) => cmd_server(&host, port, strict).await,
        None => {
            // No subcommand - check the default wall
            cmd_check(None, &[], false, false, json_mode)
        }
    }
}
