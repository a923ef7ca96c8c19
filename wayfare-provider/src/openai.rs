//! OpenAI-compatible provider built on the async-openai crate.
//!
//! Gemini, DeepSeek and OpenAI all speak the chat completions protocol, so a
//! single provider covers them; only the endpoint and provider id differ.

use async_openai::config::OpenAIConfig;
use async_openai::error::OpenAIError;
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
    CreateChatCompletionResponse, ResponseFormat as OpenAIResponseFormat,
};
use async_openai::Client;
use async_trait::async_trait;
use std::sync::Arc;
use wayfare_core::error::GenerationError;
use wayfare_core::provider::Provider;
use wayfare_core::types::*;

/// Provider for any OpenAI-compatible chat completions endpoint
#[derive(Clone)]
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    info: Arc<ProviderInfo>,
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("info", &self.info)
            .finish()
    }
}

impl OpenAiProvider {
    /// Create a new OpenAI provider with default configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);

        Self {
            client: Client::with_config(config),
            info: Arc::new(ProviderInfo {
                id: "openai".to_string(),
                name: "OpenAI".to_string(),
            }),
        }
    }

    /// Create a builder for more configuration options
    pub fn builder() -> OpenAiBuilder {
        OpenAiBuilder::default()
    }

    fn convert_message(msg: &Message) -> Result<ChatCompletionRequestMessage, GenerationError> {
        let content = msg.text();

        match msg.role {
            Role::System => {
                let msg = ChatCompletionRequestSystemMessageArgs::default()
                    .content(content)
                    .build()
                    .map_err(|e| {
                        GenerationError::provider(format!("Failed to build system message: {}", e))
                    })?;
                Ok(ChatCompletionRequestMessage::System(msg))
            }
            Role::User => {
                let msg = ChatCompletionRequestUserMessageArgs::default()
                    .content(content)
                    .build()
                    .map_err(|e| {
                        GenerationError::provider(format!("Failed to build user message: {}", e))
                    })?;
                Ok(ChatCompletionRequestMessage::User(msg))
            }
            Role::Assistant => {
                let msg = ChatCompletionRequestAssistantMessageArgs::default()
                    .content(content)
                    .build()
                    .map_err(|e| {
                        GenerationError::provider(format!(
                            "Failed to build assistant message: {}",
                            e
                        ))
                    })?;
                Ok(ChatCompletionRequestMessage::Assistant(msg))
            }
        }
    }

    fn convert_response_format(format: &ResponseFormat) -> OpenAIResponseFormat {
        match format {
            ResponseFormat::Text => OpenAIResponseFormat::Text,
            ResponseFormat::JsonObject => OpenAIResponseFormat::JsonObject,
        }
    }

    fn build_request(
        &self,
        req: &ChatCompletionRequest,
    ) -> Result<CreateChatCompletionRequest, GenerationError> {
        let messages: Result<Vec<_>, _> = req.messages.iter().map(Self::convert_message).collect();

        let mut builder = CreateChatCompletionRequestArgs::default();
        builder.model(&req.model).messages(messages?);

        if let Some(max_tokens) = req.max_tokens {
            builder.max_tokens(max_tokens);
        }
        if let Some(temperature) = req.temperature {
            builder.temperature(temperature);
        }
        if let Some(response_format) = &req.response_format {
            builder.response_format(Self::convert_response_format(response_format));
        }

        builder
            .build()
            .map_err(|e| GenerationError::provider(format!("Failed to build request: {}", e)))
    }

    fn convert_response(&self, response: CreateChatCompletionResponse) -> ChatCompletionResponse {
        let choices = response
            .choices
            .into_iter()
            .map(|choice| {
                let message = Message {
                    role: Role::Assistant,
                    content: vec![ContentPart::Text {
                        text: choice.message.content.unwrap_or_default(),
                    }],
                    name: None,
                };

                let finish_reason = choice
                    .finish_reason
                    .map_or(FinishReason::Stop, |r| match r {
                        async_openai::types::FinishReason::Stop => FinishReason::Stop,
                        async_openai::types::FinishReason::Length => FinishReason::Length,
                        async_openai::types::FinishReason::ContentFilter => {
                            FinishReason::ContentFilter
                        }
                        other => FinishReason::Other(format!("{:?}", other).to_lowercase()),
                    });

                Choice {
                    index: choice.index,
                    message,
                    finish_reason,
                }
            })
            .collect();

        let usage = response.usage.map_or_else(Usage::default, |u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        ChatCompletionResponse {
            id: response.id,
            model: response.model,
            choices,
            usage,
            created: Some(response.created as u64),
        }
    }
}

/// Map client failures onto the generation error taxonomy
fn convert_error(err: OpenAIError) -> GenerationError {
    match err {
        OpenAIError::Reqwest(e) if e.is_timeout() => GenerationError::timeout(e.to_string()),
        OpenAIError::Reqwest(e) => GenerationError::network(e.to_string()),
        OpenAIError::ApiError(api) => {
            let message = format!("API error: {}", api.message);
            match api.r#type.as_deref() {
                Some("authentication_error") => GenerationError::authentication(message),
                Some("insufficient_quota") | Some("rate_limit_exceeded") | Some("requests") => {
                    GenerationError::rate_limit(message)
                }
                Some("invalid_request_error") => GenerationError::invalid_request(message),
                _ => GenerationError::provider(message),
            }
        }
        OpenAIError::InvalidArgument(msg) => GenerationError::invalid_request(msg),
        other => GenerationError::provider(format!("OpenAI API error: {}", other)),
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn info(&self) -> Arc<ProviderInfo> {
        self.info.clone()
    }

    async fn chat_completion(
        &self,
        req: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GenerationError> {
        let openai_req = self.build_request(&req)?;
        tracing::trace!(provider = %self.info.id, model = %req.model, "sending chat completion");

        let response = self
            .client
            .chat()
            .create(openai_req)
            .await
            .map_err(convert_error)?;

        Ok(self.convert_response(response))
    }
}

/// Builder for an OpenAI-compatible provider
#[derive(Default)]
pub struct OpenAiBuilder {
    api_key: Option<String>,
    api_base: Option<String>,
}

impl OpenAiBuilder {
    /// Set API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set API base URL (for OpenAI-compatible APIs like Gemini or DeepSeek)
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Build the provider
    pub fn build(self) -> Result<OpenAiProvider, GenerationError> {
        self.build_with_id("openai", "OpenAI")
    }

    /// Build a provider with a custom provider ID and name
    pub fn build_with_id(
        self,
        provider_id: impl Into<String>,
        provider_name: impl Into<String>,
    ) -> Result<OpenAiProvider, GenerationError> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::configuration("API key is required"))?;

        let mut config = OpenAIConfig::new().with_api_key(api_key);

        if let Some(api_base) = self.api_base {
            config = config.with_api_base(api_base);
        }

        Ok(OpenAiProvider {
            client: Client::with_config(config),
            info: Arc::new(ProviderInfo {
                id: provider_id.into(),
                name: provider_name.into(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let err = OpenAiProvider::builder().build().unwrap_err();
        assert!(matches!(err, GenerationError::Configuration(_)));

        let err = OpenAiProvider::builder().api_key("  ").build().unwrap_err();
        assert!(matches!(err, GenerationError::Configuration(_)));
    }

    #[test]
    fn test_build_with_id_sets_info() {
        let provider = OpenAiProvider::builder()
            .api_key("sk-test")
            .api_base("http://localhost:9999/v1")
            .build_with_id("local", "Local")
            .unwrap();

        assert_eq!(provider.info().id, "local");
        assert_eq!(provider.info().name, "Local");
    }

    #[test]
    fn test_build_request_maps_settings() {
        let provider = OpenAiProvider::new("sk-test");
        let req = ChatCompletionRequest::new("gpt-4o-mini", vec![Message::user("hello")])
            .with_temperature(0.2)
            .with_max_tokens(256)
            .with_response_format(ResponseFormat::JsonObject);

        let built = provider.build_request(&req).unwrap();
        assert_eq!(built.model, "gpt-4o-mini");
        assert_eq!(built.messages.len(), 1);
        assert_eq!(built.temperature, Some(0.2));
        assert!(matches!(
            built.response_format,
            Some(OpenAIResponseFormat::JsonObject)
        ));
    }
}
