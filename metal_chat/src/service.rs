//! Storefront-facing chat service.
//!
//! [`ChatService::send_chat_message`] never fails: whatever goes wrong in
//! the transport, the user gets a reply in their language.

use metal_core::i18n::{Language, Localized};

use crate::errors::ChatError;
use crate::prompt::{acknowledgement, system_instruction};
use crate::transport::{ChatRequest, ChatTransport, ChatTurn};

const MISSING_KEY_REPLY: Localized = Localized::new(
    "API kalit topilmadi. Iltimos administrator bilan bog'laning.",
    "API ключ не найден. Пожалуйста, свяжитесь с администратором.",
);

const RATE_LIMIT_REPLY: Localized = Localized::new(
    "⏳ Hozir juda ko'p so'rov bor. Iltimos 1 daqiqadan keyin qayta urinib ko'ring!",
    "⏳ Сейчас много запросов. Пожалуйста, попробуйте через 1 минуту!",
);

const EMPTY_REPLY: Localized = Localized::new(
    "Kechirasiz, javob bera olmadim.",
    "Извините, не могу ответить.",
);

const GENERIC_REPLY: Localized = Localized::new(
    "Voy, nimadur xato ketdi 😅 Iltimos keyinroq urinib ko'ring yoki bizga qo'ng'iroq qiling: +998 90 123 45 67",
    "Ой, что-то пошло не так 😅 Попробуйте позже или позвоните нам: +998 90 123 45 67",
);

/// Localized reply shown in place of a failed model answer
pub fn fallback_reply(error: &ChatError, language: Language) -> &'static str {
    let text = match error {
        ChatError::MissingApiKey => &MISSING_KEY_REPLY,
        ChatError::EmptyReply => &EMPTY_REPLY,
        e if e.is_rate_limited() => &RATE_LIMIT_REPLY,
        _ => &GENERIC_REPLY,
    };
    text.get(language)
}

/// Chat assistant over any transport
#[derive(Debug, Clone)]
pub struct ChatService<T> {
    transport: T,
}

impl<T: ChatTransport> ChatService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full conversation for one message: instruction, acknowledgement,
    /// prior history, then the new user turn.
    pub fn build_request(&self, text: &str, language: Language, history: &[ChatTurn]) -> ChatRequest {
        let mut turns = Vec::with_capacity(history.len() + 3);
        turns.push(ChatTurn::user(system_instruction(language)));
        turns.push(ChatTurn::model(acknowledgement(language)));
        turns.extend_from_slice(history);
        turns.push(ChatTurn::user(text));
        ChatRequest { language, turns }
    }

    /// Ask the assistant. Transport failures come back as fallback text.
    pub async fn send_chat_message(&self, text: &str, language: Language, history: &[ChatTurn]) -> String {
        let request = self.build_request(text, language, history);
        match self.transport.generate(&request).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(code = err.error_code(), error = %err, "chat request failed");
                fallback_reply(&err, language).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChatResult;
    use crate::transport::ChatRole;
    use std::sync::Mutex;

    /// Replays a canned outcome and records what it was sent
    struct FakeTransport {
        outcome: ChatResult<String>,
        seen: Mutex<Vec<ChatRequest>>,
    }

    impl FakeTransport {
        fn new(outcome: ChatResult<String>) -> Self {
            Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl ChatTransport for FakeTransport {
        async fn generate(&self, request: &ChatRequest) -> ChatResult<String> {
            self.seen.lock().unwrap().push(request.clone());
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn test_reply_passes_through() {
        let service = ChatService::new(FakeTransport::new(Ok("12mm armatura 8 500 so'm/m".into())));
        let reply = service.send_chat_message("narxi?", Language::Uz, &[]).await;
        assert_eq!(reply, "12mm armatura 8 500 so'm/m");
    }

    #[tokio::test]
    async fn test_request_layout() {
        let service = ChatService::new(FakeTransport::new(Ok("ok".into())));
        let history = vec![ChatTurn::user("Salom"), ChatTurn::model("Salom! Qanday yordam?")];
        service.send_chat_message("Truba bormi?", Language::Ru, &history).await;

        let seen = service.transport().seen.lock().unwrap();
        let turns = &seen[0].turns;
        assert_eq!(turns.len(), 5);
        assert_eq!(turns[0].role, ChatRole::User);
        assert!(turns[0].text.contains("Sofmetall"));
        assert_eq!(turns[1], ChatTurn::model(acknowledgement(Language::Ru)));
        assert_eq!(turns[2], history[0]);
        assert_eq!(turns[4], ChatTurn::user("Truba bormi?"));
        assert_eq!(seen[0].language, Language::Ru);
    }

    #[tokio::test]
    async fn test_missing_key_fallback() {
        let service = ChatService::new(FakeTransport::new(Err(ChatError::MissingApiKey)));
        let reply = service.send_chat_message("hi", Language::Ru, &[]).await;
        assert_eq!(reply, MISSING_KEY_REPLY.ru);
    }

    #[tokio::test]
    async fn test_rate_limit_fallback() {
        let service = ChatService::new(FakeTransport::new(Err(ChatError::http(429, "Too Many Requests"))));
        let reply = service.send_chat_message("hi", Language::Uz, &[]).await;
        assert!(reply.starts_with("⏳"));
    }

    #[tokio::test]
    async fn test_empty_reply_fallback() {
        let service = ChatService::new(FakeTransport::new(Err(ChatError::EmptyReply)));
        let reply = service.send_chat_message("hi", Language::Uz, &[]).await;
        assert_eq!(reply, "Kechirasiz, javob bera olmadim.");
    }

    #[test]
    fn test_generic_fallback_has_phone() {
        for err in [ChatError::network("connection reset"), ChatError::http(500, "Internal"), ChatError::decode("eof")] {
            assert!(fallback_reply(&err, Language::Ru).contains("+998 90 123 45 67"));
        }
    }

    #[test]
    fn test_quota_message_is_rate_limit() {
        let err = ChatError::http(403, "Quota exceeded");
        assert_eq!(fallback_reply(&err, Language::Ru), RATE_LIMIT_REPLY.ru);
    }
}
