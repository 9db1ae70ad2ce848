//! CLI command implementations.

pub mod check;
pub mod common;
pub mod layout;
pub mod parse;
pub mod version;
