//! Client-side deadline for provider calls.

use async_trait::async_trait;
use std::time::Duration;
use wayfare_core::error::GenerationError;
use wayfare_core::layer::{Layer, LayeredProvider};
use wayfare_core::provider::Provider;
use wayfare_core::types::*;

/// Layer that fails a chat completion once `duration` has elapsed.
#[derive(Debug, Clone)]
pub struct TimeoutLayer {
    duration: Duration,
}

impl TimeoutLayer {
    /// Create a timeout layer with the given deadline
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for TimeoutLayer {
    fn default() -> Self {
        Self::new(Duration::from_secs(120))
    }
}

impl<P: Provider> Layer<P> for TimeoutLayer {
    type LayeredProvider = TimeoutProvider<P>;

    fn layer(&self, inner: P) -> Self::LayeredProvider {
        TimeoutProvider {
            inner,
            duration: self.duration,
        }
    }
}

/// Provider wrapped with a deadline
#[derive(Debug)]
pub struct TimeoutProvider<P> {
    inner: P,
    duration: Duration,
}

#[async_trait]
impl<P: Provider> LayeredProvider for TimeoutProvider<P> {
    type Inner = P;

    fn inner(&self) -> &Self::Inner {
        &self.inner
    }

    async fn layered_chat_completion(
        &self,
        req: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GenerationError> {
        match tokio::time::timeout(self.duration, self.inner.chat_completion(req)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(timeout = ?self.duration, "chat_completion timed out");
                Err(GenerationError::timeout(format!(
                    "no response from {} within {:?}",
                    self.inner.info().name,
                    self.duration
                )))
            }
        }
    }
}

wayfare_core::impl_layered_provider!(TimeoutProvider<P>);
