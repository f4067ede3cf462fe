//! Configuration parsing, environment overrides and validation.

pub mod env;
pub mod parser;
pub mod types;
pub mod validate;

use std::path::Path;

pub use parser::load_config;
pub use types::*;

use crate::common::ConfigError;

/// Load the config file, apply environment overrides, then validate.
///
/// A missing file is not an error: the bot can be configured entirely
/// through environment variables.
pub fn load_and_validate(path: &str) -> Result<Config, ConfigError> {
    let config = if Path::new(path).exists() {
        load_config(path)?
    } else {
        Config::default()
    };
    let config = env::apply_env_overrides(config);
    validate::validate_config(&config)?;
    Ok(config)
}
