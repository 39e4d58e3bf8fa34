//! Shared plumbing for the command-line clients: TOML configuration and
//! logging setup.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod logging;

pub use config::{ClientConfig, ConfigError};
