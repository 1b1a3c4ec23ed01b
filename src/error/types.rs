//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for itldims operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InventoryError {
    /// Connection Error - the API could not be reached
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// HTTP Status Error - the API answered with something other than 200
    #[error("HTTP status error: failed to fetch data from the etcd API. Status code: {status}")]
    HttpStatus { status: u16 },

    /// Read Error - the response body could not be read in full
    #[error("Read error: {message}")]
    Read { message: String },

    /// Usage Error - invalid arguments detected before any request is made
    #[error("Usage error: {message}")]
    Usage { message: String },
}

impl InventoryError {
    /// Get the appropriate exit code for this error type
    ///
    /// Usage errors share clap's exit code so every argument problem looks the same to callers.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Usage { .. } => 2,
            Self::Connection { .. } => 3,
            Self::HttpStatus { .. } => 4,
            Self::Read { .. } => 5,
        }
    }

    /// Create a connection error
    #[inline]
    pub fn connection<S: Into<String>>(message: S) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    #[inline]
    #[must_use]
    pub const fn http_status(status: u16) -> Self {
        Self::HttpStatus { status }
    }

    /// Create a read error
    #[inline]
    pub fn read<S: Into<String>>(message: S) -> Self {
        Self::Read {
            message: message.into(),
        }
    }

    /// Create a usage error
    #[inline]
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_and_nonzero() {
        let codes = [
            InventoryError::usage("x").exit_code(),
            InventoryError::connection("x").exit_code(),
            InventoryError::http_status(500).exit_code(),
            InventoryError::read("x").exit_code(),
        ];
        for (i, code) in codes.iter().enumerate() {
            assert_ne!(*code, 0);
            assert!(!codes[i + 1..].contains(code));
        }
    }

    #[test]
    fn http_status_message_names_the_code() {
        let err = InventoryError::http_status(503);
        assert!(err.to_string().contains("Status code: 503"));
    }
}
