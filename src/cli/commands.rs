//! CLI command implementations

use crate::cli::{Cli, Commands, GetArgs};
use crate::client::HttpClient;
use crate::operations::{
    OutputFormat, ProbeOutcome, fetch_body, filter_entries, parse_entries, probe, write_entries,
};
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};

/// Printed by the root command when the API answers 200
pub const CONNECTED_MESSAGE: &str =
    "Successfully connected with API. Interaction with etcd can be done.";

/// Dispatch the parsed command line against `url`
///
/// # Errors
///
/// Returns an error if the selected command fails; see `execute_probe` and `execute_get`.
#[inline]
pub fn execute(cli: &Cli, client: &dyn HttpClient, url: &str, out: &mut dyn Write) -> Result<()> {
    match cli.command.as_ref() {
        None => execute_probe(client, url, out),
        Some(Commands::Get(args)) => execute_get(args, client, url, out),
    }
}

/// Execute the root command: a connectivity check
///
/// # Errors
///
/// Returns an error if:
/// - The API cannot be reached
/// - Writing the confirmation fails
#[inline]
pub fn execute_probe(client: &dyn HttpClient, url: &str, out: &mut dyn Write) -> Result<()> {
    match probe(client, url)? {
        ProbeOutcome::Connected => {
            writeln!(out, "{CONNECTED_MESSAGE}")?;
        }
        ProbeOutcome::UnexpectedStatus(status) => {
            info!("Reached {url} but got status {status}; not confirming connection");
        }
    }
    Ok(())
}

/// Execute the `get` command: fetch, parse, filter and print matches
///
/// # Errors
///
/// Returns an error if:
/// - The output format is unknown (checked before any request)
/// - The dump cannot be fetched
/// - Writing the matches fails
#[inline]
pub fn execute_get(
    args: &GetArgs,
    client: &dyn HttpClient,
    url: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let format = args.output_format.parse::<OutputFormat>()?;
    let terms = args.search_terms();

    if !args.all.is_empty() {
        debug!("--all={} is accepted but does not change filtering", args.all);
    }

    let body = fetch_body(client, url)?;
    let entries = parse_entries(&body);
    debug!("Parsed {} entries", entries.len());

    let matches = filter_entries(&entries, &terms)?;
    write_entries(out, &matches, format)
}
