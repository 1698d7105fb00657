//! MistralBrain implementation using the Mistral chat-completions API.

use brain_core::{async_trait, hash_prompt, Brain, BrainError, InboundMessage, OutboundMessage};
use reqwest::Client;
use tracing::{debug, error, info, warn};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::MistralBrainConfig;

/// Reply when the backend returned no choices at all.
pub const NO_CHOICES_REPLY: &str = "⚠️ I couldn't process that. Please try again.";

/// Reply when the first choice carried no usable text.
pub const EMPTY_CONTENT_REPLY: &str = "⚠️ I couldn't generate a response.";

/// Reply when the backend could not be reached or answered with an error.
pub const BACKEND_ERROR_REPLY: &str =
    "⚠️ I'm having trouble right now. Please try again in a moment.";

/// A brain that asks Mistral for a short transit-assistant reply.
///
/// Each message is sent on its own: a system instruction followed by the
/// user's text, with no conversation history. Backend failures never escape
/// [`Brain::process`]; they are logged and turned into an apology reply.
pub struct MistralBrain {
    client: Client,
    config: MistralBrainConfig,
    system_prompt_hash: String,
}

impl MistralBrain {
    /// Create a new MistralBrain with the given configuration.
    ///
    /// Fails when no API key is configured.
    pub fn new(config: MistralBrainConfig) -> Result<Self, BrainError> {
        if config.api_key.trim().is_empty() {
            return Err(BrainError::Configuration(
                "MISTRAL_API_KEY is missing".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                BrainError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let system_prompt_hash = hash_prompt(&config.system_prompt);
        info!("MistralBrain system prompt fingerprint: {}", system_prompt_hash);
        info!(
            model = %config.model,
            timeout_secs = config.timeout.as_secs(),
            "MistralBrain initialized"
        );

        Ok(Self {
            client,
            config,
            system_prompt_hash,
        })
    }

    /// Create a MistralBrain from environment variables.
    ///
    /// See [`MistralBrainConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, BrainError> {
        let config = MistralBrainConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &MistralBrainConfig {
        &self.config
    }

    /// Get the system prompt fingerprint.
    pub fn system_prompt_hash(&self) -> &str {
        &self.system_prompt_hash
    }

    /// Generate a reply for `user_text`.
    ///
    /// Returns the trimmed reply, or one of the apology replies when the
    /// backend answered without usable content. Transport and API failures
    /// are returned as errors.
    pub async fn generate(&self, user_text: &str) -> Result<String, BrainError> {
        let messages = vec![
            ChatMessage::system(self.config.system_prompt.clone()),
            ChatMessage::user(user_text),
        ];

        let completion = self.chat_completion(messages).await?;
        Ok(reply_from_completion(&completion))
    }

    /// Make a chat completion request to the Mistral API.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletionResponse, BrainError> {
        let url = self.config.completions_url();

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Sending request to Mistral API: {:?}", request);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BrainError::Timeout
                } else {
                    BrainError::Network(format!("Failed to send request: {}", e))
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&error_text)
                .ok()
                .and_then(ApiError::into_message)
                .unwrap_or(error_text);

            return Err(BrainError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                BrainError::Timeout
            } else {
                BrainError::InvalidResponse(format!("Failed to parse response: {}", e))
            }
        })?;

        debug!(
            id = %completion.id,
            model = %completion.model,
            choices = completion.choices.len(),
            "Received response from Mistral API"
        );

        if let Some(ref usage) = completion.usage {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(completion)
    }
}

/// Pick the reply text out of a completion.
fn reply_from_completion(completion: &ChatCompletionResponse) -> String {
    let Some(choice) = completion.choices.first() else {
        warn!("[NLP] Empty response from Mistral");
        return NO_CHOICES_REPLY.to_string();
    };

    debug!(
        index = choice.index,
        role = %choice.message.role,
        finish_reason = ?choice.finish_reason,
        "Using first choice"
    );

    match choice.message.content.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => {
            warn!("[NLP] Empty message content");
            EMPTY_CONTENT_REPLY.to_string()
        }
    }
}

#[async_trait]
impl Brain for MistralBrain {
    async fn process(&self, message: InboundMessage) -> Result<OutboundMessage, BrainError> {
        debug!(
            "Generating reply for {}: {}",
            message.sender_or_unknown(),
            message.text
        );

        let reply = match self.generate(&message.text).await {
            Ok(reply) => reply,
            Err(err) => {
                error!(
                    error = %err,
                    sender = message.sender_or_unknown(),
                    model = %self.config.model,
                    "[NLP] Mistral error"
                );
                BACKEND_ERROR_REPLY.to_string()
            }
        };

        Ok(OutboundMessage::reply_to(&message, reply))
    }

    fn name(&self) -> &str {
        "MistralBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion(body: &str) -> ChatCompletionResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_new_requires_api_key() {
        let config = MistralBrainConfig::builder().api_key("  ").build();
        match MistralBrain::new(config) {
            Err(BrainError::Configuration(msg)) => assert!(msg.contains("MISTRAL_API_KEY")),
            Err(other) => panic!("Expected Configuration error, got {other:?}"),
            Ok(_) => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_brain_name_and_fingerprint() {
        let config = MistralBrainConfig::builder().api_key("test-key").build();
        let brain = MistralBrain::new(config).unwrap();

        assert_eq!(brain.name(), "MistralBrain");
        assert_eq!(
            brain.system_prompt_hash(),
            hash_prompt(&brain.config().system_prompt)
        );
    }

    #[test]
    fn test_reply_trimmed() {
        let body = r#"{"choices":[{"index":0,
            "message":{"role":"assistant","content":"  Take 500D.\n"}}]}"#;
        let reply = reply_from_completion(&completion(body));
        assert_eq!(reply, "Take 500D.");
    }

    #[test]
    fn test_reply_no_choices() {
        let reply = reply_from_completion(&completion(r#"{"choices":[]}"#));
        assert_eq!(reply, NO_CHOICES_REPLY);
    }

    #[test]
    fn test_reply_null_or_blank_content() {
        let null = reply_from_completion(&completion(
            r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#,
        ));
        let blank = reply_from_completion(&completion(
            r#"{"choices":[{"message":{"role":"assistant","content":"   "}}]}"#,
        ));

        assert_eq!(null, EMPTY_CONTENT_REPLY);
        assert_eq!(blank, EMPTY_CONTENT_REPLY);
    }

    #[test]
    fn test_apology_replies_are_distinct() {
        assert_ne!(NO_CHOICES_REPLY, EMPTY_CONTENT_REPLY);
        assert_ne!(EMPTY_CONTENT_REPLY, BACKEND_ERROR_REPLY);
    }
}
