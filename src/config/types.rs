//! Struct definitions and serde defaults for ji configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for ji, deserialized from `config.toml`.
///
/// Every field is optional so ji runs with built-in defaults when no
/// config file exists. CLI flags override config values, which override
/// the defaults in [`crate::constants`].
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path to the dictionary XML file. Supports `~` and `$VAR` expansion.
    #[serde(default)]
    pub dictionary: Option<String>,
    /// Default output template, same syntax as `--format`.
    #[serde(default)]
    pub format: Option<String>,
    /// Default output separator, same syntax as `--separator`.
    #[serde(default)]
    pub separator: Option<String>,
}
