//! Command-line interface module
//!
//! Handles argument parsing and dispatch of the root and `get` commands

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
