//! User configuration loaded from the platform config directory.

use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use directories::ProjectDirs;
use serde::Deserialize;

/// Greeting shown when no configuration overrides it.
const DEFAULT_MESSAGE: &str = "Welcome to my universe.";

/// User-tunable settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text revealed by the typewriter overlay.
    pub message: String,
    /// Seed for the animation's random source; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            seed: None,
        }
    }
}

impl Config {
    /// Load `byeol.toml` from the platform config directory.
    ///
    /// A missing file falls back to the defaults; a malformed file is a
    /// real error.
    pub fn load() -> color_eyre::Result<Self> {
        let Some(dirs) = ProjectDirs::from("", "", "byeol") else {
            return Ok(Self::default());
        };
        Self::load_from(&dirs.config_dir().join("byeol.toml"))
    }

    fn load_from(path: &Path) -> color_eyre::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&raw).wrap_err_with(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parses() {
        let config: Config = toml::from_str(
            r#"
            message = "Hello, night sky."
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.message, "Hello, night sky.");
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: Config = toml::from_str("seed = 7").unwrap();
        assert_eq!(config.message, DEFAULT_MESSAGE);
        assert_eq!(config.seed, Some(7));

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.message, DEFAULT_MESSAGE);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/byeol.toml")).unwrap();
        assert_eq!(config.message, DEFAULT_MESSAGE);
    }
}
