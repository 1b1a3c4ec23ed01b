//! Mock HTTP implementation for testing

use super::{HttpClient, HttpResponse};
use crate::error::InventoryError;
use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::sync::{Arc, RwLock};

/// In-memory implementation of `HttpClient` for testing
///
/// `MockClient` serves canned responses keyed by URL and records every
/// request it receives. URLs without a registered response behave like a
/// refused connection.
///
/// # Example
/// ```
/// use itldims::client::{HttpClient, mock::MockClient};
///
/// let client = MockClient::new()
///     .with_response("http://localhost:8181/servers/", 200, b"Key: a Value: b").unwrap();
///
/// let response = client.get("http://localhost:8181/servers/").unwrap();
/// assert!(response.is_ok());
/// assert_eq!(client.requests().unwrap().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockClient {
    state: Arc<RwLock<MockClientState>>,
}

#[derive(Default)]
struct MockClientState {
    routes: HashMap<String, MockRoute>,
    requests: Vec<String>,
}

#[derive(Clone)]
enum MockRoute {
    Respond { status: u16, body: Vec<u8> },
    Refuse,
    BrokenBody { status: u16 },
}

/// Body reader that fails on the first read, like a connection dropped mid-body
struct BrokenBody;

impl Read for BrokenBody {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "connection closed before message completed",
        ))
    }
}

impl MockClient {
    /// Create a new `MockClient` with no registered responses
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for a URL (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The internal state lock is poisoned
    #[inline]
    pub fn with_response(self, url: &str, status: u16, body: &[u8]) -> io::Result<Self> {
        self.with_route(
            url,
            MockRoute::Respond {
                status,
                body: body.to_vec(),
            },
        )
    }

    /// Make requests to a URL fail as if the connection was refused (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The internal state lock is poisoned
    #[inline]
    pub fn with_refused(self, url: &str) -> io::Result<Self> {
        self.with_route(url, MockRoute::Refuse)
    }

    /// Answer a URL with a status whose body fails to read (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The internal state lock is poisoned
    #[inline]
    pub fn with_broken_body(self, url: &str, status: u16) -> io::Result<Self> {
        self.with_route(url, MockRoute::BrokenBody { status })
    }

    fn with_route(self, url: &str, route: MockRoute) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.routes.insert(url.to_owned(), route);
        drop(state);
        Ok(self)
    }

    /// URLs requested so far, in order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The internal state lock is poisoned
    #[inline]
    pub fn requests(&self) -> io::Result<Vec<String>> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(state.requests.clone())
    }
}

impl HttpClient for MockClient {
    fn get(&self, url: &str) -> Result<HttpResponse, InventoryError> {
        let route = {
            let mut state = self
                .state
                .write()
                .map_err(|e| InventoryError::connection(e.to_string()))?;
            state.requests.push(url.to_owned());
            state.routes.get(url).cloned()
        };

        match route {
            Some(MockRoute::Respond { status, body }) => {
                Ok(HttpResponse::new(status, Box::new(Cursor::new(body))))
            }
            Some(MockRoute::BrokenBody { status }) => {
                Ok(HttpResponse::new(status, Box::new(BrokenBody)))
            }
            Some(MockRoute::Refuse) | None => Err(InventoryError::connection(format!(
                "failed to connect to the etcd API: connection refused ({url})"
            ))),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn unknown_url_is_refused_and_recorded() {
        let client = MockClient::new();
        let err = client.get("http://nowhere/").unwrap_err();

        assert!(matches!(err, InventoryError::Connection { .. }));
        assert_eq!(client.requests().unwrap(), vec!["http://nowhere/".to_owned()]);
    }

    #[test]
    fn broken_body_fails_on_read() {
        let client = MockClient::new().with_broken_body("http://x/", 200).unwrap();
        let mut response = client.get("http://x/").unwrap();

        let mut text = String::new();
        assert!(response.body.read_to_string(&mut text).is_err());
    }

    #[test]
    fn clones_share_request_log() {
        let client = MockClient::new().with_response("http://x/", 200, b"").unwrap();
        let other = client.clone();
        other.get("http://x/").unwrap();

        assert_eq!(client.requests().unwrap().len(), 1);
    }
}
