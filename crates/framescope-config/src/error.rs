//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid value for {field}: {message}")]
    Invalid { field: String, message: String },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ConfigError::NotFound("config.toml".to_string());
        assert!(err.to_string().contains("config.toml"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_error() {
        let err = ConfigError::Invalid {
            field: "logging.level".to_string(),
            message: "unknown level 'loud'".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("logging.level"));
        assert!(display.contains("loud"));
    }

    #[test]
    fn test_env_var_not_set_error() {
        let err = ConfigError::EnvVarNotSet("FRAME_BASE_URL".to_string());
        assert!(err.to_string().contains("FRAME_BASE_URL"));
        assert!(err.to_string().contains("not set"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ConfigError::from(io_err);
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_toml_error_from() {
        let toml_err = toml::from_str::<toml::Value>("a = [").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert!(err.to_string().contains("TOML"));
    }
}
