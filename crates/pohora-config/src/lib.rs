//! Runtime settings for the Pohora.LK services.
//!
//! Settings are read from environment variables with defaults that match the
//! checked-in `models/` layout. Call [`Settings::from_env`] once at startup
//! (after `dotenvy::dotenv()`); handlers receive the struct through server
//! state.

use std::env;
use std::path::PathBuf;

/// Base URL of Groq's OpenAI-compatible API.
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Default chat model served through Groq.
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.3-70b-versatile";

/// Settings loading and validation errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

/// Runtime configuration shared by both service binaries.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Interface the intelligence server binds to.
    pub host: String,
    /// Port the intelligence server binds to.
    pub port: u16,
    /// Chat model identifier passed to the completions API.
    pub chat_model: String,
    /// API base URL for the chat model provider.
    pub chat_api_base: Option<String>,
    /// API key for the chat model provider.
    pub chat_api_key: Option<String>,
    /// Whether the agent logs each loop iteration.
    pub agent_verbose: bool,
    /// Crop recommendation model artifact.
    pub crop_model: PathBuf,
    /// Crop label encoder artifact.
    pub crop_encoder: PathBuf,
    /// Fertilizer recommendation model artifact.
    pub fertilizer_model: PathBuf,
    /// Fertilizer label encoder artifact.
    pub fertilizer_encoder: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            chat_model: DEFAULT_CHAT_MODEL.into(),
            chat_api_base: Some(GROQ_API_BASE.into()),
            chat_api_key: None,
            agent_verbose: true,
            crop_model: "models/random_forest.json".into(),
            crop_encoder: "models/encoder.json".into(),
            fertilizer_model: "models/fertilizer_forest.json".into(),
            fertilizer_encoder: "models/fertilizer_encoder.json".into(),
        }
    }
}

impl Settings {
    /// Loads settings from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Ok(host) = env::var("POHORA_HOST") {
            settings.host = host;
        }
        if let Ok(port) = env::var("POHORA_PORT") {
            settings.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "POHORA_PORT".into(),
                value: port.clone(),
            })?;
        }
        if let Ok(model) = env::var("POHORA_CHAT_MODEL") {
            settings.chat_model = model;
        }
        if let Ok(base) = env::var("POHORA_CHAT_API_BASE") {
            settings.chat_api_base = Some(base);
        }
        if let Ok(key) = env::var("GROQ_API_KEY") {
            settings.chat_api_key = Some(key);
        }
        if let Ok(verbose) = env::var("POHORA_AGENT_VERBOSITY") {
            settings.agent_verbose = parse_bool("POHORA_AGENT_VERBOSITY", &verbose)?;
        }
        if let Ok(path) = env::var("POHORA_CROP_MODEL") {
            settings.crop_model = path.into();
        }
        if let Ok(path) = env::var("POHORA_CROP_ENCODER") {
            settings.crop_encoder = path.into();
        }
        if let Ok(path) = env::var("POHORA_FERTILIZER_MODEL") {
            settings.fertilizer_model = path.into();
        }
        if let Ok(path) = env::var("POHORA_FERTILIZER_ENCODER") {
            settings.fertilizer_encoder = path.into();
        }

        Ok(settings)
    }

    /// Bind address in `host:port` form.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_model_layout() {
        let settings = Settings::default();
        assert_eq!(settings.port, 8000);
        assert_eq!(settings.crop_model, PathBuf::from("models/random_forest.json"));
        assert_eq!(settings.crop_encoder, PathBuf::from("models/encoder.json"));
        assert!(settings.agent_verbose);
    }

    #[test]
    fn parse_bool_accepts_common_forms() {
        assert!(parse_bool("K", "true").unwrap());
        assert!(parse_bool("K", "1").unwrap());
        assert!(!parse_bool("K", "off").unwrap());
        assert!(parse_bool("K", "maybe").is_err());
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let settings = Settings { host: "127.0.0.1".into(), port: 9000, ..Default::default() };
        assert_eq!(settings.bind_addr(), "127.0.0.1:9000");
    }
}
