use serde::{Deserialize, Serialize};

/// Configuration from `.lineup.toml` (every field optional)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot file to load/save (overridden by `--file` on the CLI)
    #[serde(default)]
    pub file: Option<String>,
    /// Ask before quitting the TUI with unsaved changes
    #[serde(default = "default_true")]
    pub confirm_exit: bool,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: None,
            confirm_exit: true,
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}
