//! Configuration management for Loglens.
//!
//! This crate handles loading the `loglens.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config, find_and_load_config_from, load_config};
pub use schema::{CacheConfig, CommitsConfig, Config, GitlabConfig};
