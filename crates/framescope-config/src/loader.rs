//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let mut config: Config = toml::from_str(&expanded)?;
        if let Some(dir) = config.logging.directory.take() {
            config.logging.directory = Some(PathBuf::from(Self::expand_path(&dir.to_string_lossy())));
        }
        Ok(config)
    }

    /// Load the file at `path` if given, else the default location if it
    /// exists, else built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load(&default),
                _ => Ok(Config::default()),
            },
        }
    }

    /// `~/.framescope/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".framescope").join("config.toml"))
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();

        for cap in ENV_VAR.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.framescope/logs`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}
