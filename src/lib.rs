//! `itldims` - A CLI tool for searching the key/value dump served by a local etcd API
//!
//! The tool issues one blocking GET, splits the `Key: ... Value: ...` text it
//! receives into entries, and prints the entries in which both search terms
//! appear as whole words.

pub mod cli;
pub mod client;
pub mod error;
pub mod operations;

use anyhow::Result;
use cli::{Cli, execute};
use client::ReqwestClient;
use operations::ENDPOINT;
use std::io;

/// Main entry point for the itldims library
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the command fails.
#[inline]
pub fn run(args: &Cli) -> Result<()> {
    let client = ReqwestClient::new()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(args, &client, ENDPOINT, &mut out)
}
