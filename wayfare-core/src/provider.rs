//! Provider trait for chat completion services.

use crate::error::GenerationError;
use crate::types::*;
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

/// Core provider trait for model services.
///
/// Providers only implement a single non-streaming chat completion call.
/// Prompt assembly and text extraction live in the runtime, so every
/// provider behaves the same from the travel pipeline's point of view.
#[async_trait]
pub trait Provider: Send + Sync + Debug + 'static {
    /// Get provider information
    fn info(&self) -> Arc<ProviderInfo>;

    /// Chat completion (non-streaming)
    async fn chat_completion(
        &self,
        req: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GenerationError>;
}
