//! # metal_chat - Sofmetall Chat Assistant
//!
//! Sends the storefront's chat messages to a generative-language model and
//! always hands back something to show: the model's answer, or a localized
//! fallback when the key is missing, the quota is exhausted, or the request
//! fails.
//!
//! ```rust,no_run
//! use metal_chat::{ChatConfig, ChatService, GeminiClient};
//! use metal_core::Language;
//!
//! # async fn demo() -> metal_chat::ChatResult<()> {
//! let client = GeminiClient::new(ChatConfig::from_env())?;
//! let service = ChatService::new(client);
//! let reply = service.send_chat_message("12mm armatura narxi?", Language::Uz, &[]).await;
//! println!("{}", reply);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod gemini;
pub mod greeting;
pub mod prompt;
pub mod service;
pub mod transport;

pub use config::ChatConfig;
pub use errors::{ChatError, ChatResult};
pub use gemini::GeminiClient;
pub use greeting::{greeting, greeting_now, quick_actions, QuickAction};
pub use service::ChatService;
pub use transport::{ChatRole, ChatTransport, ChatTurn};
