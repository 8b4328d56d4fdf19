//! Configuration validation.

use url::Url;

use crate::error::ConfigError;
use crate::schema::Config;

/// Log levels accepted as a bare `logging.level`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// The warnings, or the first error as a [`ConfigError::Invalid`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::Invalid {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_extract(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_extract(config: &Config, result: &mut ValidationResult) {
        let Some(ref base_url) = config.extract.base_url else {
            return;
        };

        match Url::parse(base_url) {
            Ok(url) if !matches!(url.scheme(), "http" | "https") => {
                result.add_warning(ValidationWarning::new(
                    "extract.base_url",
                    format!("base_url uses non-http scheme '{}'", url.scheme()),
                ));
            }
            Ok(_) => {}
            Err(e) => {
                result.add_error(ValidationError::new(
                    "extract.base_url",
                    format!("Invalid URL '{}': {}", base_url, e),
                ));
            }
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.to_ascii_lowercase();
        // Directive strings like "framescope=debug,warn" are left to EnvFilter.
        if level.contains('=') || level.contains(',') {
            return;
        }
        if !LOG_LEVELS.contains(&level.as_str()) {
            result.add_error(ValidationError::new(
                "logging.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    config.logging.level, LOG_LEVELS
                ),
            ));
        }
    }
}
