//! Transport seam between the chat service and the language-model backend.
//!
//! A transport takes a complete conversation and returns the model's reply
//! text. It knows nothing about languages, fallbacks or the shop; that is
//! the service's job.

use std::future::Future;

use metal_core::Language;
use serde::{Deserialize, Serialize};

use crate::errors::ChatResult;

/// Speaker of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One message of a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// A full request: every turn the model should see, oldest first, ending
/// with the new user message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub language: Language,
    pub turns: Vec<ChatTurn>,
}

/// Sends a conversation to a language model and returns its reply.
pub trait ChatTransport {
    fn generate(&self, request: &ChatRequest) -> impl Future<Output = ChatResult<String>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_serialization() {
        let turn = ChatTurn::model("Salom!");
        let json = serde_json::to_string(&turn).unwrap();
        assert_eq!(json, r#"{"role":"model","text":"Salom!"}"#);
    }
}
