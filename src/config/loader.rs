//! File loading for ji configuration.

use anyhow::{Context, Result};
use std::fs;

use super::types::Config;

/// Template written on first run. All entries are commented out so the
/// built-in defaults stay in charge until the user opts in.
const DEFAULT_CONFIG: &str = r#"# ji configuration
#
# Path to the kanji dictionary (supports ~ and $VAR expansion):
# dictionary = "~/.local/share/ji/kanji_all.xml"
#
# Default output template, overridden by --format:
# format = "{kanji} {english}"
#
# Default output separator, overridden by --separator:
# separator = "\n"
"#;

impl Config {
    /// Loads the config from `~/.config/ji/config.toml`.
    ///
    /// If no config file exists, writes a fully commented template there and
    /// returns the defaults. A missing file is never an error; an unreadable
    /// or unparseable one is.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write default config to {:?}", path))?;
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {:?}", path))?;
        Ok(config)
    }
}
