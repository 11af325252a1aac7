//! Runtime configuration.
//!
//! Configuration comes from explicit values passed in by the binary, with
//! optional environment overrides:
//!
//! - `MARKSHEET_STATIC_DIR` - directory the frontend is served from (default: `public`)
//! - `MARKSHEET_ENABLE_CORS` - enable CORS headers (default: true)
//! - `MARKSHEET_ENABLE_OPENAPI` - expose the OpenAPI document (default: true)
//! - `MARKSHEET_REQUEST_TIMEOUT_SECS` - request timeout in seconds (default: 30)

use std::{env, path::PathBuf};

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment variable '{key}': {message}")]
    InvalidEnvVar { key: String, message: String },
}

/// HTTP runtime configuration
#[derive(Debug, Clone)]
pub struct HttpRuntimeConfig {
    /// Directory the static frontend is served from.
    pub static_dir: PathBuf,
    /// Enable CORS for cross-origin requests.
    pub enable_cors: bool,
    /// Expose the OpenAPI document endpoint.
    pub enable_openapi: bool,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for HttpRuntimeConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("public"),
            enable_cors: true,
            enable_openapi: true,
            request_timeout_secs: 30,
        }
    }
}

impl HttpRuntimeConfig {
    /// Load configuration from environment variables, keeping defaults for
    /// anything unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = get_env_string("MARKSHEET_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(cors) = get_env_bool("MARKSHEET_ENABLE_CORS")? {
            config.enable_cors = cors;
        }
        if let Some(openapi) = get_env_bool("MARKSHEET_ENABLE_OPENAPI")? {
            config.enable_openapi = openapi;
        }
        if let Some(timeout) = get_env_u64("MARKSHEET_REQUEST_TIMEOUT_SECS")? {
            config.request_timeout_secs = timeout;
        }

        Ok(config)
    }

    /// Set the static frontend directory.
    #[must_use]
    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Enable or disable CORS headers.
    #[must_use]
    pub fn enable_cors(mut self, enable: bool) -> Self {
        self.enable_cors = enable;
        self
    }

    /// Enable or disable the OpenAPI document endpoint.
    #[must_use]
    pub fn enable_openapi(mut self, enable: bool) -> Self {
        self.enable_openapi = enable;
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}

fn get_env_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

fn get_env_bool(key: &str) -> Result<Option<bool>, ConfigError> {
    match get_env_string(key) {
        None => Ok(None),
        Some(value) => match value.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidEnvVar {
                key: key.to_string(),
                message: format!("expected boolean, got '{value}'"),
            }),
        },
    }
}

fn get_env_u64(key: &str) -> Result<Option<u64>, ConfigError> {
    match get_env_string(key) {
        None => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|e| ConfigError::InvalidEnvVar {
            key: key.to_string(),
            message: format!("expected integer: {e}"),
        }),
    }
}
