//! Configuration types and path resolution for ji.
//!
//! Ji stores its settings as TOML at the platform's XDG config path
//! (e.g. `~/.config/ji/config.toml` on Linux) and expects the dictionary
//! under the XDG data directory (`~/.local/share/ji/`) unless configured
//! otherwise.

mod loader;
mod paths;
mod types;

pub use paths::expand_path;
pub use types::Config;

use anyhow::Result;
use std::path::PathBuf;

impl Config {
    /// Resolve the dictionary path with precedence: CLI flag > config file >
    /// built-in default. `~` and `$VAR` expansion is applied here, once,
    /// so the store receives a concrete path.
    pub fn resolve_dictionary(&self, flag: Option<&str>) -> Result<PathBuf> {
        if let Some(path) = flag {
            return Ok(expand_path(path));
        }
        if let Some(ref path) = self.dictionary {
            return Ok(expand_path(path));
        }
        Self::default_dictionary_path()
    }
}
