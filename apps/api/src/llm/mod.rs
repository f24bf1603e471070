/// LLM Client Adapter — the single point of entry for all chat-completion
/// calls in the API.
///
/// ARCHITECTURAL RULE: no other module may call the OpenAI API directly.
///
/// Model: gpt-4o-mini (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all LLM calls in this service.
pub const MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Error)]
pub enum LlmError {
    /// No credential available. Checked eagerly, before any network call or
    /// store write, and surfaced distinctly from mid-call provider failures.
    #[error("LLM credential not configured: set OPENAI_API_KEY")]
    Configuration,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider error (status {status}): {message}")]
    Provider { status: u16, message: String },

    #[error("provider returned no completion text")]
    EmptyCompletion,
}

/// One prior turn of a conversation, reconstructed from the store.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

/// Chat-completion seam. Handlers hold this as `Arc<dyn ChatClient>` so tests
/// can substitute a stub.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Fails with `LlmError::Configuration` when no credential is present.
    /// Callers invoke this before performing any side effects.
    fn ensure_configured(&self) -> Result<(), LlmError>;

    /// Sends `system` + `history` + `user_text` and returns the generated
    /// text. `session_id` scopes the conversation for the provider; prior
    /// turns are always supplied explicitly in `history` rather than relying
    /// on provider-side memory. No retry at this layer.
    async fn complete(
        &self,
        system: &str,
        user_text: &str,
        session_id: &str,
        history: &[ChatTurn],
    ) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    user: &'a str,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// OpenAI-backed `ChatClient`. No request timeout is set here; the provider
/// default applies, and retry policy is a caller decision (this system
/// performs none).
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    fn ensure_configured(&self) -> Result<(), LlmError> {
        if self.api_key.as_deref().map(str::is_empty).unwrap_or(true) {
            return Err(LlmError::Configuration);
        }
        Ok(())
    }

    async fn complete(
        &self,
        system: &str,
        user_text: &str,
        session_id: &str,
        history: &[ChatTurn],
    ) -> Result<String, LlmError> {
        self.ensure_configured()?;
        let api_key = self.api_key.as_deref().unwrap_or_default();

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message {
            role: "system",
            content: system,
        });
        for turn in history {
            messages.push(Message {
                role: &turn.role,
                content: &turn.content,
            });
        }
        messages.push(Message {
            role: "user",
            content: user_text,
        });

        let request_body = CompletionRequest {
            model: MODEL,
            messages,
            user: session_id,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponse =
            response.json().await.map_err(LlmError::Http)?;
        let text = extract_text(completion)?;

        debug!("LLM call succeeded (session: {session_id}, {} chars)", text.len());
        Ok(text)
    }
}

fn extract_text(completion: CompletionResponse) -> Result<String, LlmError> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|t| !t.is_empty())
        .ok_or(LlmError::EmptyCompletion)
}

#[cfg(test)]
pub mod testing {
    //! Stub `ChatClient` for service tests: records every call and returns a
    //! canned reply, or a `Configuration` error when unconfigured.

    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone)]
    pub struct RecordedCall {
        pub system: String,
        pub user_text: String,
        pub session_id: String,
        pub history_len: usize,
    }

    pub struct StubChat {
        reply: Option<String>,
        pub calls: Mutex<Vec<RecordedCall>>,
    }

    impl StubChat {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn unconfigured() -> Self {
            Self {
                reply: None,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatClient for StubChat {
        fn ensure_configured(&self) -> Result<(), LlmError> {
            if self.reply.is_none() {
                return Err(LlmError::Configuration);
            }
            Ok(())
        }

        async fn complete(
            &self,
            system: &str,
            user_text: &str,
            session_id: &str,
            history: &[ChatTurn],
        ) -> Result<String, LlmError> {
            self.ensure_configured()?;
            self.calls.lock().unwrap().push(RecordedCall {
                system: system.to_string(),
                user_text: user_text.to_string(),
                session_id: session_id.to_string(),
                history_len: history.len(),
            });
            Ok(self.reply.clone().unwrap())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_client_fails_eagerly() {
        let client = OpenAiClient::new(None);
        assert!(matches!(client.ensure_configured(), Err(LlmError::Configuration)));

        let empty = OpenAiClient::new(Some(String::new()));
        assert!(matches!(empty.ensure_configured(), Err(LlmError::Configuration)));
    }

    #[test]
    fn test_configured_client_passes_check() {
        let client = OpenAiClient::new(Some("sk-test".to_string()));
        assert!(client.ensure_configured().is_ok());
    }

    #[test]
    fn test_extract_text_from_first_choice() {
        let completion: CompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"content": "Achieves Results, APS6"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(completion).unwrap(), "Achieves Results, APS6");
    }

    #[test]
    fn test_extract_text_empty_choices() {
        let completion: CompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(extract_text(completion), Err(LlmError::EmptyCompletion)));
    }
}
