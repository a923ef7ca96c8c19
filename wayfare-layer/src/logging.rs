//! Structured logging of chat completion calls.

use async_trait::async_trait;
use std::time::Instant;
use wayfare_core::error::GenerationError;
use wayfare_core::layer::{Layer, LayeredProvider};
use wayfare_core::provider::Provider;
use wayfare_core::types::*;

/// Logs every chat completion with provider, model and timing fields.
///
/// Requests and successful responses are logged at `debug`, failures at
/// `error`. Prompt and answer text are never logged here; the raw answer is
/// the business of `RawResponsePlugin`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLayer;

impl LoggingLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<P: Provider> Layer<P> for LoggingLayer {
    type LayeredProvider = LoggingProvider<P>;

    fn layer(&self, inner: P) -> Self::LayeredProvider {
        LoggingProvider { inner }
    }
}

/// Provider wrapped with logging
#[derive(Debug)]
pub struct LoggingProvider<P> {
    inner: P,
}

#[async_trait]
impl<P: Provider> LayeredProvider for LoggingProvider<P> {
    type Inner = P;

    fn inner(&self) -> &Self::Inner {
        &self.inner
    }

    async fn layered_chat_completion(
        &self,
        req: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GenerationError> {
        let info = self.inner.info();
        let model = req.model.clone();
        let prompt_chars: usize = req.messages.iter().map(|m| m.text().len()).sum();

        tracing::debug!(
            provider = %info.id,
            model = %model,
            messages = req.messages.len(),
            prompt_chars,
            json_mode = matches!(req.response_format, Some(ResponseFormat::JsonObject)),
            "chat completion started"
        );

        let start = Instant::now();
        let result = self.inner.chat_completion(req).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => tracing::debug!(
                provider = %info.id,
                model = %model,
                response_id = %response.id,
                choices = response.choices.len(),
                total_tokens = response.usage.total_tokens,
                elapsed_ms,
                "chat completion finished"
            ),
            Err(err) => tracing::error!(
                provider = %info.id,
                model = %model,
                error = %err,
                elapsed_ms,
                "chat completion failed"
            ),
        }

        result
    }
}

wayfare_core::impl_layered_provider!(LoggingProvider<P>);
