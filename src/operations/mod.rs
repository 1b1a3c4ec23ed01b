//! Operations module
//!
//! The fetch -> parse -> filter -> print pipeline behind each command

pub mod fetch;
pub mod filter;
pub mod parse;
pub mod render;

pub use fetch::*;
pub use filter::*;
pub use parse::*;
pub use render::*;
