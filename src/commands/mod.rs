//! Command implementations for mvnfetch CLI

pub mod apply;
pub mod completions;
pub mod get;
pub mod helpers;
pub mod resolve;
pub mod version;
pub mod versions;
