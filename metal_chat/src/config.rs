//! Chat assistant configuration.
//!
//! The only credential is the generative-language API key, read from
//! `GEMINI_API_KEY`. Everything else has a default and may be overridden
//! from the environment, a JSON file, or CLI flags.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ChatError, ChatResult};

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_ENV: &str = "SOFMETALL_CHAT_MODEL";
pub const ENDPOINT_ENV: &str = "SOFMETALL_CHAT_ENDPOINT";

/// Chat transport configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// API key; `None` makes every request fall back without network I/O
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Reply length cap
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    800
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ChatConfig {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Overlay values from an environment lookup. Blank values are ignored.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        if let Some(key) = get(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(model) = get(MODEL_ENV) {
            self.model = model;
        }
        if let Some(endpoint) = get(ENDPOINT_ENV) {
            self.endpoint = endpoint;
        }
        self
    }

    /// Load from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> ChatResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ChatError::config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| ChatError::config(format!("{}: {}", path.display(), e)))
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// True when a non-blank key is present
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// `generateContent` URL for the configured model
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

fn mask(key: &str) -> String {
    let visible: String = key.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
    format!("****{}", visible)
}

impl std::fmt::Display for ChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sofmetall Chat Configuration")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(
            f,
            "API key:     {}",
            self.api_key.as_deref().map(mask).unwrap_or_else(|| "(not set)".to_string())
        )?;
        writeln!(f, "Model:       {}", self.model)?;
        writeln!(f, "Endpoint:    {}", self.endpoint)?;
        writeln!(f, "Temperature: {}", self.temperature)?;
        writeln!(f, "Max tokens:  {}", self.max_output_tokens)?;
        writeln!(f, "Timeout:     {}s", self.timeout_secs)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_output_tokens, 800);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_env_overlay() {
        let env: HashMap<&str, &str> = HashMap::from([
            (API_KEY_ENV, "secret-key-1234"),
            (MODEL_ENV, "  gemini-test  "),
            (ENDPOINT_ENV, ""),
        ]);
        let config = ChatConfig::default().with_env(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.api_key.as_deref(), Some("secret-key-1234"));
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.endpoint, default_endpoint());
    }

    #[test]
    fn test_blank_key_is_not_a_key() {
        let config = ChatConfig::default().with_api_key("   ");
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_generate_url() {
        let mut config = ChatConfig::default();
        config.endpoint = "http://localhost:8080/v1/".to_string();
        assert_eq!(
            config.generate_url(),
            "http://localhost:8080/v1/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ChatConfig = serde_json::from_str(r#"{"model": "gemini-pro"}"#).unwrap();
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = ChatConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_display_masks_key() {
        let config = ChatConfig::default().with_api_key("abcdefgh1234");
        let text = config.to_string();
        assert!(text.contains("****1234"));
        assert!(!text.contains("abcdefgh"));
    }
}
