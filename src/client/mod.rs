//! HTTP abstraction for talking to the inventory API
//!
//! This module provides a unified trait for the one external interaction the
//! tool performs, a blocking GET, allowing for easy testing with mock
//! implementations.

use crate::error::InventoryError;
use std::fmt;
use std::io::Read;

pub mod mock;
pub mod real;

pub use mock::MockClient;
pub use real::ReqwestClient;

/// Response to a GET request whose body has not been read yet
///
/// Keeping the body as a reader lets callers look at the status first and
/// only then pay for (and possibly fail on) reading the payload.
pub struct HttpResponse {
    pub status: u16,
    pub body: Box<dyn Read>,
}

impl HttpResponse {
    /// Create a response from a status code and a body reader
    #[inline]
    pub fn new(status: u16, body: Box<dyn Read>) -> Self {
        Self { status, body }
    }

    /// Whether the status is exactly 200 OK
    #[must_use]
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("body", &"<reader>")
            .finish()
    }
}

/// Unified trait for HTTP operations
///
/// # Implementations
/// - `ReqwestClient`: Production implementation using `reqwest::blocking`
/// - `MockClient`: Test implementation serving canned responses from memory
pub trait HttpClient: Send + Sync {
    /// Issue a GET request and return the status with an unread body
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Connection` if the request cannot be completed
    /// (unreachable host, refused connection).
    fn get(&self, url: &str) -> Result<HttpResponse, InventoryError>;
}
