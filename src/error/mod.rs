//! Error handling module
//!
//! Defines the error kinds raised while querying the inventory API, with exit codes

pub mod types;

pub use types::*;
