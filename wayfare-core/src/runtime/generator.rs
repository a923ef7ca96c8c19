//! Prompt-in, text-out generation capability.

use super::executor::RuntimeExecutor;
use crate::error::GenerationError;
use crate::types::{Message, ResponseFormat, TextParams};
use async_trait::async_trait;
use std::sync::Arc;

/// A black-box text generation capability.
///
/// Implementations may fail or take arbitrarily long; they make no promise
/// about determinism or the shape of the returned text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for a single user prompt
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt).await
    }
}

/// Model client bound to one executor and one model id.
///
/// Construct it once per process and share it; it holds no per-request state.
#[derive(Debug, Clone)]
pub struct ModelClient {
    executor: Arc<RuntimeExecutor>,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    json_mode: bool,
}

impl ModelClient {
    /// Create a client for `model` on top of a shared executor
    pub fn new(executor: Arc<RuntimeExecutor>, model: impl Into<String>) -> Self {
        Self {
            executor,
            model: model.into(),
            temperature: None,
            max_tokens: None,
            json_mode: false,
        }
    }

    /// Set sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Ask the provider for its JSON object response mode
    pub fn with_json_mode(mut self, json_mode: bool) -> Self {
        self.json_mode = json_mode;
        self
    }

    /// Model id used for every request
    pub fn model(&self) -> &str {
        &self.model
    }

    fn params(&self, prompt: &str) -> TextParams {
        let mut params = TextParams::new(vec![Message::user(prompt)]);
        params.temperature = self.temperature;
        params.max_tokens = self.max_tokens;
        if self.json_mode {
            params = params.with_response_format(ResponseFormat::JsonObject);
        }
        params
    }
}

#[async_trait]
impl TextGenerator for ModelClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let result = self
            .executor
            .generate_text(self.model.clone(), self.params(prompt))
            .await?;

        tracing::debug!(
            model = %result.model,
            finish_reason = ?result.finish_reason,
            total_tokens = result.usage.total_tokens,
            "generation finished"
        );

        Ok(result.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_carry_client_settings() {
        #[derive(Debug)]
        struct Never;

        #[async_trait]
        impl crate::provider::Provider for Never {
            fn info(&self) -> Arc<crate::types::ProviderInfo> {
                Arc::new(crate::types::ProviderInfo {
                    id: "never".to_string(),
                    name: "Never".to_string(),
                })
            }

            async fn chat_completion(
                &self,
                _req: crate::types::ChatCompletionRequest,
            ) -> Result<crate::types::ChatCompletionResponse, GenerationError> {
                Err(GenerationError::provider("unreachable in this test"))
            }
        }

        let client = ModelClient::new(Arc::new(RuntimeExecutor::builder(Never).finish()), "m")
            .with_temperature(0.3)
            .with_max_tokens(512)
            .with_json_mode(true);

        let params = client.params("plan my trip");
        assert_eq!(params.messages.len(), 1);
        assert_eq!(params.messages[0].text(), "plan my trip");
        assert_eq!(params.temperature, Some(0.3));
        assert_eq!(params.max_tokens, Some(512));
        assert_eq!(params.response_format, Some(ResponseFormat::JsonObject));
        assert_eq!(client.model(), "m");
    }
}
