//! # `itldims`
//!
//! `itldims` queries the inventory dump served by a local etcd API at
//! `http://localhost:8181/servers/` and searches it.
//!
//! ## Usage
//!
//! **Connectivity check:**
//! ```sh
//! itldims
//! ```
//!
//! **Search for entries mentioning both `west` and `servers`:**
//! ```sh
//! itldims get west
//! ```
//!
//! **Search with two explicit terms, as JSON:**
//! ```sh
//! itldims get west active --output-format json
//! ```

use clap::Parser as _;
use itldims::cli::Cli;
use itldims::error::InventoryError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbose flag
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // stdout carries only command output
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match itldims::run(&cli) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<InventoryError>()
                    .map_or(1, InventoryError::exit_code),
            );
        }
    }
}
