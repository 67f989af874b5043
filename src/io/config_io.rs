use std::fs;
use std::path::Path;

use crate::model::config::Config;

/// Name of the optional config file, looked up in the working directory.
pub const CONFIG_FILE: &str = ".lineup.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {0}: {1}")]
    Read(String, std::io::Error),
    #[error("could not parse {0}: {1}")]
    Parse(String, toml::de::Error),
}

/// Read `.lineup.toml` from `dir`. A missing file yields the defaults; a
/// present but unparsable file is an error the caller reports (and may then
/// choose to continue with defaults).
pub fn read_config(dir: &Path) -> Result<Config, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let text =
        fs::read_to_string(&path).map_err(|e| ConfigError::Read(CONFIG_FILE.to_string(), e))?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse(CONFIG_FILE.to_string(), e))
}
