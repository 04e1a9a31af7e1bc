//! # Retwall - Retaining Wall Stability Checker
//!
//! The main binary around the `retwall-core` calculator.
//!
//! This application provides:
//! - CLI interface for evaluating walls
//! - HTTP JSON API for form front-ends
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │             apps/retwall (THE BINARY)           │
//! │                                                 │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────┐  │
//! │  │    CLI      │  │  HTTP API   │  │  TOML   │  │
//! │  │   (clap)    │  │   (axum)    │  │  files  │  │
//! │  └──────┬──────┘  └──────┬──────┘  └────┬────┘  │
//! │         └────────────────┼──────────────┘       │
//! │                   WallDraft::build()            │
//! │                          ▼                      │
//! │                 ┌────────────────┐              │
//! │                 │  retwall-core  │              │
//! │                 │  (THE LOGIC)   │              │
//! │                 └────────────────┘              │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Evaluate the default wall
//! retwall check
//!
//! # Evaluate a wall file with overrides
//! retwall check -f wall.toml --set height=3.5 --set mu=0.55 --detailed
//!
//! # Start the HTTP server
//! retwall server --host 0.0.0.0 --port 8080
//! ```

use clap::Parser;
use retwall::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // RETWALL_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("RETWALL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "retwall=debug,tower_http=debug"
    } else {
        "retwall=info,tower_http=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // Logs go to stderr; stdout carries reports and JSON output.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // `defaults` output is meant to be redirected into a wall file
    let pipeable = matches!(cli.command, Some(cli::Commands::Defaults));
    if !cli.quiet && !cli.json_mode && !pipeable {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  ┌┬┐  retwall v{}
  │││  Rankine stability check: sliding, overturning, bearing
  ┴┴┴  SI units (m, kN, degrees)
"#,
        env!("CARGO_PKG_VERSION")
    );
}
