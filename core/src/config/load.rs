use std::path::Path;

use super::types::SiftConfig;
use crate::error::ConfigError;

pub fn load_from_str(s: &str) -> Result<SiftConfig, ConfigError> {
    Ok(toml::from_str::<SiftConfig>(s)?)
}

/// Read a TOML config file. Missing sections fall back to their defaults.
pub fn load_from_path(path: &Path) -> Result<SiftConfig, ConfigError> {
    let s = std::fs::read_to_string(path)?;
    load_from_str(&s)
}
