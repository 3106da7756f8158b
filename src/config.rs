//! Configuration resolution for studyhall
//!
//! Credentials and listener settings are read from the process environment
//! once at startup and collected into a [`ServiceConfig`] that is passed
//! into the outbound API clients. A missing credential aborts startup with
//! a diagnostic naming the variable and where to obtain a key.

use std::path::PathBuf;
use thiserror::Error;

/// Default listen port (override with STUDYHALL_PORT)
pub const DEFAULT_PORT: u16 = 5000;

/// Default frontend asset directory (override with STUDYHALL_STATIC_DIR)
pub const DEFAULT_STATIC_DIR: &str = "static";

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";
const YOUTUBE_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} environment variable not set.\n{help}")]
    MissingCredential { var: &'static str, help: &'static str },

    #[error("Invalid {var} value {value:?}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Process configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Gemini (generative-language API) credential
    pub google_api_key: String,
    /// YouTube Data API credential
    pub youtube_api_key: String,
    /// HTTP listen port
    pub port: u16,
    /// Directory holding the frontend entry document and assets
    pub static_dir: PathBuf,
    /// Completion endpoint (tests point this at a stub)
    pub gemini_endpoint: String,
    /// Video search endpoint (tests point this at a stub)
    pub youtube_search_endpoint: String,
}

impl ServiceConfig {
    /// Resolve configuration from environment variables.
    ///
    /// Both API credentials are required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let google_api_key = require_credential(
            "GOOGLE_API_KEY",
            "Please set it in the environment before starting studyhall.\n\
             You can get one from https://makersuite.google.com/app/apikey",
        )?;

        let youtube_api_key = require_credential(
            "YOUTUBE_API_KEY",
            "Please set it in the environment before starting studyhall.\n\
             You can get one from console.cloud.google.com, APIs & Services -> Credentials.\n\
             Also, ensure YouTube Data API v3 is enabled in your GCP project.",
        )?;

        let port = match std::env::var("STUDYHALL_PORT") {
            Ok(value) => value.parse().map_err(|e| ConfigError::InvalidValue {
                var: "STUDYHALL_PORT",
                value,
                reason: format!("{e}"),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let static_dir = std::env::var("STUDYHALL_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            google_api_key,
            youtube_api_key,
            port,
            static_dir,
            gemini_endpoint: GEMINI_ENDPOINT.to_string(),
            youtube_search_endpoint: YOUTUBE_SEARCH_ENDPOINT.to_string(),
        })
    }
}

fn require_credential(var: &'static str, help: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(key) if is_valid_key(&key) => Ok(key),
        _ => Err(ConfigError::MissingCredential { var, help }),
    }
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_key() {
        assert!(is_valid_key("AIzaSyExample"));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("   "));
    }

    #[test]
    fn test_missing_credential_names_variable() {
        let err = ConfigError::MissingCredential {
            var: "GOOGLE_API_KEY",
            help: "help text",
        };
        let message = err.to_string();
        assert!(message.contains("GOOGLE_API_KEY"));
        assert!(message.contains("help text"));
    }
}
