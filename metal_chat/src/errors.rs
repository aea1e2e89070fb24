//! # Chat Errors
//!
//! Failures of the chat transport. None of these reach the storefront user
//! directly: [`crate::service::ChatService`] turns each into a localized
//! fallback reply.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for chat operations
pub type ChatResult<T> = Result<T, ChatError>;

#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ChatError {
    /// No API credential configured
    #[error("API key not configured")]
    MissingApiKey,

    /// The service answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Request never completed (DNS, TLS, timeout, ...)
    #[error("Network error: {reason}")]
    Network { reason: String },

    /// Response body was not what we expected
    #[error("Failed to decode response: {reason}")]
    Decode { reason: String },

    /// The model answered with no text
    #[error("Empty reply from model")]
    EmptyReply,

    /// Configuration could not be loaded
    #[error("Config error: {reason}")]
    Config { reason: String },
}

impl ChatError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        ChatError::Http {
            status,
            message: message.into(),
        }
    }

    pub fn network(reason: impl Into<String>) -> Self {
        ChatError::Network {
            reason: reason.into(),
        }
    }

    pub fn decode(reason: impl Into<String>) -> Self {
        ChatError::Decode {
            reason: reason.into(),
        }
    }

    pub fn config(reason: impl Into<String>) -> Self {
        ChatError::Config {
            reason: reason.into(),
        }
    }

    /// Quota exhausted or too many requests
    pub fn is_rate_limited(&self) -> bool {
        match self {
            ChatError::Http { status, message } => {
                *status == 429 || message.to_lowercase().contains("quota")
            }
            ChatError::Network { reason } => reason.contains("429") || reason.to_lowercase().contains("quota"),
            _ => false,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ChatError::MissingApiKey => "MISSING_API_KEY",
            ChatError::Http { .. } => "HTTP_ERROR",
            ChatError::Network { .. } => "NETWORK_ERROR",
            ChatError::Decode { .. } => "DECODE_ERROR",
            ChatError::EmptyReply => "EMPTY_REPLY",
            ChatError::Config { .. } => "CONFIG_ERROR",
        }
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ChatError::http(status.as_u16(), err.to_string())
        } else if err.is_decode() {
            ChatError::decode(err.to_string())
        } else {
            ChatError::network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_detection() {
        assert!(ChatError::http(429, "Too Many Requests").is_rate_limited());
        assert!(ChatError::http(403, "Quota exceeded for project").is_rate_limited());
        assert!(!ChatError::http(500, "Internal").is_rate_limited());
        assert!(!ChatError::MissingApiKey.is_rate_limited());
        assert!(!ChatError::EmptyReply.is_rate_limited());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ChatError::MissingApiKey.error_code(), "MISSING_API_KEY");
        assert_eq!(ChatError::network("timeout").error_code(), "NETWORK_ERROR");
    }

    #[test]
    fn test_serialization() {
        let err = ChatError::http(429, "slow down");
        let json = serde_json::to_string(&err).unwrap();
        let back: ChatError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
