// src/infrastructure/openai.rs
use std::env;

use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::application::TextGenerator;
use crate::domain::DomainError;

pub const API_KEY_ENV: &str = "CARDFORGE_OPENAI_API_KEY";
const FALLBACK_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenAI-backed text generator.
///
/// The call is the only suspension point in the whole pipeline, so the
/// generator owns its runtime and blocks on the single request; everything
/// around it stays synchronous.
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    runtime: Runtime,
}

impl OpenAiGenerator {
    /// Build a generator from the environment. Fails before any network
    /// activity when no API key is configured.
    pub fn from_env(model: impl Into<String>) -> Result<Self, DomainError> {
        let api_key =
            resolve_api_key().ok_or(DomainError::MissingCredential(API_KEY_ENV))?;

        let config = OpenAIConfig::new().with_api_key(api_key);
        let runtime = Runtime::new()
            .map_err(|e| DomainError::ExternalCallFailure(e.to_string()))?;

        Ok(Self {
            client: Client::with_config(config),
            model: model.into(),
            runtime,
        })
    }
}

fn resolve_api_key() -> Option<String> {
    [API_KEY_ENV, FALLBACK_KEY_ENV]
        .iter()
        .find_map(|var| match env::var(var) {
            Ok(value) if !value.trim().is_empty() => Some(value),
            _ => None,
        })
}

impl TextGenerator for OpenAiGenerator {
    fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let message: ChatCompletionRequestMessage =
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| DomainError::ExternalCallFailure(e.to_string()))?
                .into();

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(vec![message])
            .build()
            .map_err(|e| DomainError::ExternalCallFailure(e.to_string()))?;

        debug!(model = %self.model, "sending completion request");
        let response = self
            .runtime
            .block_on(self.client.chat().create(request))
            .map_err(|e| DomainError::ExternalCallFailure(e.to_string()))?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(str::trim)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(DomainError::ExternalCallFailure(
                "model returned an empty response".to_string(),
            ));
        }

        Ok(content.to_string())
    }
}
