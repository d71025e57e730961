//! XDG path resolution and user-path expansion for ji.

use anyhow::Result;
use std::path::PathBuf;

use super::types::Config;

impl Config {
    /// Returns the platform-specific configuration directory for ji.
    ///
    /// Returns `~/.config/ji/` on Linux (`XDG_CONFIG_HOME/ji`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform's config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join(crate::constants::APP_NAME);
        Ok(dir)
    }

    /// Returns the platform-specific data directory for ji.
    ///
    /// Returns `~/.local/share/ji/` on Linux (`XDG_DATA_HOME/ji`).
    /// The dictionary file lives here by default.
    pub fn data_dir() -> Result<PathBuf> {
        let dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
            .join(crate::constants::APP_NAME);
        Ok(dir)
    }

    /// Returns the full path to the ji configuration file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(crate::constants::CONFIG_FILENAME))
    }

    /// Returns the default dictionary path (`~/.local/share/ji/kanji_all.xml`).
    pub fn default_dictionary_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join(crate::constants::DICTIONARY_FILENAME))
    }
}

/// Expand a leading `~` and any `$VAR`/`${VAR}` references in a user path.
///
/// Unset variables expand to the empty string. Applied once at startup, so
/// the dictionary store only ever sees a concrete path.
pub fn expand_path(path: &str) -> PathBuf {
    let mut expanded = expand_vars(path);

    if expanded == "~" || expanded.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            expanded = format!("{}{}", home.display(), &expanded[1..]);
        }
    }

    PathBuf::from(expanded)
}

/// Replace `$VAR` and `${VAR}` with the environment variable's value.
fn expand_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(start) = rest.find('$') {
        result.push_str(&rest[..start]);
        let tail = &rest[start + 1..];

        let (name, consumed) = if let Some(stripped) = tail.strip_prefix('{') {
            match stripped.find('}') {
                Some(end) => (&stripped[..end], end + 3),
                None => {
                    // Unterminated ${, keep the rest literally.
                    result.push('$');
                    result.push_str(tail);
                    return result;
                }
            }
        } else {
            let end = tail
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(tail.len());
            (&tail[..end], end + 1)
        };

        if name.is_empty() {
            result.push('$');
            rest = tail;
            continue;
        }

        result.push_str(&std::env::var(name).unwrap_or_default());
        rest = &rest[start + consumed..];
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_path("/usr/share/ji"), PathBuf::from("/usr/share/ji"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_path("~/x.xml"), home.join("x.xml"));
        assert_eq!(expand_path("~"), home);
    }

    #[test]
    fn env_vars_expand_in_both_syntaxes() {
        std::env::set_var("JI_TEST_DIR", "/data");
        assert_eq!(
            expand_path("$JI_TEST_DIR/kanji.xml"),
            PathBuf::from("/data/kanji.xml")
        );
        assert_eq!(
            expand_path("${JI_TEST_DIR}/kanji.xml"),
            PathBuf::from("/data/kanji.xml")
        );
    }

    #[test]
    fn unset_var_expands_to_empty() {
        std::env::remove_var("JI_TEST_UNSET");
        assert_eq!(expand_path("/a$JI_TEST_UNSET/b"), PathBuf::from("/a/b"));
    }

    #[test]
    fn lone_dollar_is_literal() {
        assert_eq!(expand_path("/a$/b"), PathBuf::from("/a$/b"));
    }
}
