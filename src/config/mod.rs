//! # `config` module
//!
//! The config module is used on startup to configure otterprobe.
//! Includes parsing of the TOML config, CLI args, and the logging macros.

pub mod cli_args;
pub mod error;
pub mod system;
pub mod types;
