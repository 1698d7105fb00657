//! Configuration for MistralBrain.

use brain_core::BrainError;
use std::env;
use std::path::Path;
use std::time::Duration;

/// Default system prompt file name.
pub const DEFAULT_PROMPT_FILE: &str = "SYSTEM_PROMPT.md";

/// Default Mistral API base URL.
pub const DEFAULT_API_URL: &str = "https://api.mistral.ai";

/// Default model name.
pub const DEFAULT_MODEL: &str = "open-mistral-7b";

/// Built-in system prompt used when neither env var nor prompt file supplies one.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a BMTC bus assistant for Bangalore.\n\
Be short, clear and helpful.\n\
Help with bus routes, timings and fares.\n\
If unsure, suggest practical guidance.\n\
Keep replies WhatsApp-friendly.";

const DEFAULT_MAX_TOKENS: u32 = 200;
const DEFAULT_TEMPERATURE: f32 = 0.4;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for MistralBrain.
#[derive(Debug, Clone)]
pub struct MistralBrainConfig {
    /// Mistral API base URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// System instruction sent ahead of every user message.
    pub system_prompt: String,

    /// Maximum tokens for response.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0 - 1.0). Kept low so replies stay consistent.
    pub temperature: Option<f32>,

    /// Per-request timeout for the HTTP call.
    pub timeout: Duration,
}

impl Default for MistralBrainConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            temperature: Some(DEFAULT_TEMPERATURE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl MistralBrainConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `MISTRAL_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `MISTRAL_API_URL` - API URL (default: https://api.mistral.ai)
    /// - `MISTRAL_MODEL` - Model name (default: open-mistral-7b)
    /// - `MISTRAL_SYSTEM_PROMPT` - System prompt (overrides prompt file)
    /// - `MISTRAL_PROMPT_FILE` - Path to system prompt file (default: SYSTEM_PROMPT.md)
    /// - `MISTRAL_MAX_TOKENS` - Max tokens (default: 200)
    /// - `MISTRAL_TEMPERATURE` - Temperature (default: 0.4)
    /// - `MISTRAL_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    ///
    /// System prompt priority:
    /// 1. `MISTRAL_SYSTEM_PROMPT` env var (if set)
    /// 2. Contents of prompt file (if exists and non-empty)
    /// 3. [`DEFAULT_SYSTEM_PROMPT`]
    pub fn from_env() -> Result<Self, BrainError> {
        let api_key = env::var("MISTRAL_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| BrainError::Configuration("MISTRAL_API_KEY is missing".to_string()))?;

        let api_url = env::var("MISTRAL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("MISTRAL_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let system_prompt = match env::var("MISTRAL_SYSTEM_PROMPT") {
            Ok(prompt) => prompt,
            Err(_) => {
                let prompt_file = env::var("MISTRAL_PROMPT_FILE")
                    .unwrap_or_else(|_| DEFAULT_PROMPT_FILE.to_string());
                load_prompt_file(&prompt_file).unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string())
            }
        };

        let max_tokens = env::var("MISTRAL_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(Some(DEFAULT_MAX_TOKENS));

        let temperature = env::var("MISTRAL_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(Some(DEFAULT_TEMPERATURE));

        let timeout = env::var("MISTRAL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            api_url,
            api_key,
            model,
            system_prompt,
            max_tokens,
            temperature,
            timeout,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> MistralBrainConfigBuilder {
        MistralBrainConfigBuilder::default()
    }

    /// Full URL of the chat-completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_url.trim_end_matches('/'))
    }
}

/// Builder for MistralBrainConfig.
#[derive(Debug, Default)]
pub struct MistralBrainConfigBuilder {
    config: MistralBrainConfig,
}

impl MistralBrainConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the system prompt.
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = prompt.into();
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> MistralBrainConfig {
        self.config
    }

    /// Load system prompt from a file.
    ///
    /// If the file exists and is non-empty, replaces the system prompt.
    pub fn load_prompt_file(mut self, path: impl AsRef<Path>) -> Self {
        if let Some(prompt) = load_prompt_file(path) {
            self.config.system_prompt = prompt;
        }
        self
    }
}

/// Load a prompt file, returning None if not found or empty.
fn load_prompt_file(path: impl AsRef<Path>) -> Option<String> {
    let content = std::fs::read_to_string(path.as_ref()).ok()?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MistralBrainConfig::default();

        assert_eq!(config.api_url, "https://api.mistral.ai");
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "open-mistral-7b");
        assert!(config.system_prompt.starts_with("You are a BMTC bus assistant"));
        assert_eq!(config.max_tokens, Some(200));
        assert_eq!(config.temperature, Some(0.4));
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_all_options() {
        let config = MistralBrainConfig::builder()
            .api_key("my-key")
            .api_url("http://127.0.0.1:9999/")
            .model("mistral-small-latest")
            .system_prompt("You are terse")
            .max_tokens(64)
            .temperature(0.1)
            .timeout(Duration::from_secs(3))
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.model, "mistral-small-latest");
        assert_eq!(config.system_prompt, "You are terse");
        assert_eq!(config.max_tokens, Some(64));
        assert_eq!(config.temperature, Some(0.1));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(
            config.completions_url(),
            "http://127.0.0.1:9999/v1/chat/completions"
        );
    }

    #[test]
    fn test_builder_missing_prompt_file_keeps_prompt() {
        let config = MistralBrainConfig::builder()
            .load_prompt_file("/definitely/not/here/SYSTEM_PROMPT.md")
            .build();

        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_mistral_vars() {
            std::env::remove_var("MISTRAL_API_KEY");
            std::env::remove_var("MISTRAL_API_URL");
            std::env::remove_var("MISTRAL_MODEL");
            std::env::remove_var("MISTRAL_SYSTEM_PROMPT");
            std::env::remove_var("MISTRAL_PROMPT_FILE");
            std::env::remove_var("MISTRAL_MAX_TOKENS");
            std::env::remove_var("MISTRAL_TEMPERATURE");
            std::env::remove_var("MISTRAL_TIMEOUT_SECS");
        }

        // Scenario 1: Missing API key should error
        clear_all_mistral_vars();
        match MistralBrainConfig::from_env() {
            Err(BrainError::Configuration(msg)) => assert!(msg.contains("MISTRAL_API_KEY")),
            other => panic!("Expected Configuration error, got {other:?}"),
        }

        // Scenario 2: Blank API key is treated as missing
        std::env::set_var("MISTRAL_API_KEY", "   ");
        assert!(MistralBrainConfig::from_env().is_err());

        // Scenario 3: Only API key set, defaults used
        clear_all_mistral_vars();
        std::env::set_var("MISTRAL_API_KEY", "test-env-key");
        std::env::set_var("MISTRAL_PROMPT_FILE", "/definitely/not/here.md");

        let config = MistralBrainConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.api_url, "https://api.mistral.ai");
        assert_eq!(config.model, "open-mistral-7b");
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(config.max_tokens, Some(200));
        assert_eq!(config.temperature, Some(0.4));
        assert_eq!(config.timeout, Duration::from_secs(10));

        // Scenario 4: All vars set
        clear_all_mistral_vars();
        std::env::set_var("MISTRAL_API_KEY", "full-test-key");
        std::env::set_var("MISTRAL_API_URL", "https://test.api.com");
        std::env::set_var("MISTRAL_MODEL", "mistral-large-latest");
        std::env::set_var("MISTRAL_SYSTEM_PROMPT", "Test prompt");
        std::env::set_var("MISTRAL_MAX_TOKENS", "512");
        std::env::set_var("MISTRAL_TEMPERATURE", "0.2");
        std::env::set_var("MISTRAL_TIMEOUT_SECS", "4");

        let config = MistralBrainConfig::from_env().unwrap();
        assert_eq!(config.api_key, "full-test-key");
        assert_eq!(config.api_url, "https://test.api.com");
        assert_eq!(config.model, "mistral-large-latest");
        assert_eq!(config.system_prompt, "Test prompt");
        assert_eq!(config.max_tokens, Some(512));
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.timeout, Duration::from_secs(4));

        // Scenario 5: Unparseable numbers fall back to defaults
        clear_all_mistral_vars();
        std::env::set_var("MISTRAL_API_KEY", "test-key");
        std::env::set_var("MISTRAL_PROMPT_FILE", "/definitely/not/here.md");
        std::env::set_var("MISTRAL_MAX_TOKENS", "lots");
        std::env::set_var("MISTRAL_TEMPERATURE", "warm");

        let config = MistralBrainConfig::from_env().unwrap();
        assert_eq!(config.max_tokens, Some(200));
        assert_eq!(config.temperature, Some(0.4));

        clear_all_mistral_vars();
    }
}
