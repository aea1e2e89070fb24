//! Gemini `generateContent` client.
//!
//! One HTTPS POST per message: the whole conversation goes up, the first
//! candidate's text comes back.

use serde::{Deserialize, Serialize};

use crate::config::ChatConfig;
use crate::errors::{ChatError, ChatResult};
use crate::transport::{ChatRequest, ChatRole, ChatTransport};

/// Current crate version, sent in the user agent
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

fn role_name(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Model => "model",
    }
}

fn build_body<'a>(config: &ChatConfig, request: &'a ChatRequest) -> GenerateRequest<'a> {
    GenerateRequest {
        contents: request
            .turns
            .iter()
            .map(|turn| Content {
                role: role_name(turn.role),
                parts: vec![Part { text: &turn.text }],
            })
            .collect(),
        generation_config: GenerationConfig {
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        },
    }
}

/// Concatenated text of the first candidate
fn extract_reply(response: GenerateResponse) -> ChatResult<String> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(ChatError::EmptyReply)
    } else {
        Ok(text)
    }
}

/// Build an error from a non-success response body
fn error_from_body(status: u16, body: &str) -> ChatError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if envelope.error.status.is_empty() => ChatError::http(status, envelope.error.message),
        Ok(envelope) => ChatError::http(
            status,
            format!("{} ({})", envelope.error.message, envelope.error.status),
        ),
        Err(_) => ChatError::http(status, body.trim().to_string()),
    }
}

/// HTTP client for the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: ChatConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: ChatConfig) -> ChatResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("Sofmetall/{}", CURRENT_VERSION))
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChatError::config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }
}

impl ChatTransport for GeminiClient {
    async fn generate(&self, request: &ChatRequest) -> ChatResult<String> {
        let api_key = match self.config.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key,
            _ => return Err(ChatError::MissingApiKey),
        };

        let url = self.config.generate_url();
        tracing::debug!(model = %self.config.model, turns = request.turns.len(), "sending chat request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&build_body(&self.config, request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_body(status.as_u16(), &body));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ChatError::decode(e.to_string()))?;
        extract_reply(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ChatTurn;
    use metal_core::Language;

    fn request() -> ChatRequest {
        ChatRequest {
            language: Language::Uz,
            turns: vec![
                ChatTurn::user("instructions"),
                ChatTurn::model("ok"),
                ChatTurn::user("12mm armatura qancha?"),
            ],
        }
    }

    #[test]
    fn test_body_shape() {
        let config = ChatConfig::default();
        let req = request();
        let body = serde_json::to_value(build_body(&config, &req)).unwrap();

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["parts"][0]["text"], "12mm armatura qancha?");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 800);
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_extract_reply_joins_parts() {
        let json = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Salom"},{"text":" do'stim!"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_reply(parsed).unwrap(), "Salom do'stim!");
    }

    #[test]
    fn test_extract_reply_empty() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(extract_reply(parsed).unwrap_err(), ChatError::EmptyReply);

        let parsed: GenerateResponse = serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(extract_reply(parsed).unwrap_err(), ChatError::EmptyReply);
    }

    #[test]
    fn test_error_from_body() {
        let body = r#"{"error":{"code":429,"message":"Resource has been exhausted (e.g. check quota).","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = error_from_body(429, body);
        assert!(err.is_rate_limited());
        assert!(err.to_string().contains("RESOURCE_EXHAUSTED"));

        let err = error_from_body(502, "Bad Gateway\n");
        assert_eq!(err, ChatError::http(502, "Bad Gateway"));
    }

    #[tokio::test]
    async fn test_missing_key_skips_network() {
        let client = GeminiClient::new(ChatConfig::default()).unwrap();
        let err = client.generate(&request()).await.unwrap_err();
        assert_eq!(err, ChatError::MissingApiKey);
    }
}
