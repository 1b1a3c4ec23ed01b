//! Fetching the raw key/value dump from the etcd API

use crate::client::HttpClient;
use crate::error::InventoryError;
use anyhow::Result;
use std::io::Read as _;
use tracing::{debug, warn};

/// The one endpoint the tool talks to
pub const ENDPOINT: &str = "http://localhost:8181/servers/";

/// Result of a connectivity probe that reached the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered 200 OK
    Connected,
    /// The server answered, but not with 200
    UnexpectedStatus(u16),
}

/// Fetch the full response body of a GET to `url`
///
/// # Errors
///
/// Returns an error if:
/// - The request cannot be completed (`InventoryError::Connection`)
/// - The response status is not 200 (`InventoryError::HttpStatus`)
/// - The body cannot be read in full (`InventoryError::Read`)
#[inline]
pub fn fetch_body(client: &dyn HttpClient, url: &str) -> Result<String> {
    let mut response = client.get(url)?;

    if !response.is_ok() {
        return Err(InventoryError::http_status(response.status).into());
    }

    let mut bytes = Vec::new();
    response
        .body
        .read_to_end(&mut bytes)
        .map_err(|err| InventoryError::read(format!("failed to read response body: {err}")))?;

    // Invalid UTF-8 is data, not a read failure
    let body = String::from_utf8_lossy(&bytes).into_owned();

    debug!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}

/// Check that the API answers at `url`
///
/// Only a failed connection is an error; a non-200 answer still proves the
/// server is reachable and is reported as `ProbeOutcome::UnexpectedStatus`.
///
/// # Errors
///
/// Returns an error if:
/// - The request cannot be completed (`InventoryError::Connection`)
#[inline]
pub fn probe(client: &dyn HttpClient, url: &str) -> Result<ProbeOutcome> {
    let response = client.get(url)?;

    if response.is_ok() {
        Ok(ProbeOutcome::Connected)
    } else {
        warn!("API at {url} answered with status {}", response.status);
        Ok(ProbeOutcome::UnexpectedStatus(response.status))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::client::MockClient;

    #[test]
    fn fetch_returns_body_on_200() {
        let client = MockClient::new()
            .with_response(ENDPOINT, 200, b"Key: a Value: b")
            .unwrap();

        assert_eq!(fetch_body(&client, ENDPOINT).unwrap(), "Key: a Value: b");
    }

    #[test]
    fn fetch_keeps_body_with_invalid_utf8() {
        let client = MockClient::new()
            .with_response(ENDPOINT, 200, b"Key: a \xff Value: b")
            .unwrap();

        assert_eq!(fetch_body(&client, ENDPOINT).unwrap(), "Key: a \u{fffd} Value: b");
    }

    #[test]
    fn fetch_rejects_non_200() {
        let client = MockClient::new().with_response(ENDPOINT, 404, b"nope").unwrap();
        let err = fetch_body(&client, ENDPOINT).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<InventoryError>(),
            Some(InventoryError::HttpStatus { status: 404 })
        ));
    }

    #[test]
    fn probe_tolerates_non_200() {
        let client = MockClient::new().with_response(ENDPOINT, 500, b"").unwrap();

        assert_eq!(
            probe(&client, ENDPOINT).unwrap(),
            ProbeOutcome::UnexpectedStatus(500)
        );
    }
}
