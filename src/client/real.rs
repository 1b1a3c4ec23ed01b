//! Real HTTP implementation using `reqwest::blocking`

use super::{HttpClient, HttpResponse};
use crate::error::InventoryError;
use std::fmt;
use tracing::debug;

/// Production implementation of `HttpClient`
///
/// Wraps a blocking `reqwest` client. No retries are attempted; any send
/// failure is reported as a connection error.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Create a new `ReqwestClient`
    ///
    /// System proxies are ignored since the API always lives on this host.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying HTTP client cannot be initialised (TLS backend failure)
    #[inline]
    pub fn new() -> Result<Self, InventoryError> {
        let client = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .map_err(|err| InventoryError::connection(format!("failed to build HTTP client: {err}")))?;
        Ok(Self { client })
    }
}

impl fmt::Debug for ReqwestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestClient")
            .field("client", &"<reqwest::blocking::Client>")
            .finish()
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<HttpResponse, InventoryError> {
        debug!("GET {url}");
        let response = self.client.get(url).send().map_err(|err| {
            InventoryError::connection(format!("failed to connect to the etcd API: {err}"))
        })?;

        let status = response.status().as_u16();
        debug!("GET {url} -> {status}");

        Ok(HttpResponse::new(status, Box::new(response)))
    }
}
