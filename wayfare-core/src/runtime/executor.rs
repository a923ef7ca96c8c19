//! RuntimeExecutor implementation.
//!
//! The executor turns high-level text generation calls into provider chat
//! completion requests, running plugin hooks around each call.

use crate::error::GenerationError;
use crate::layer::Layer;
use crate::plugin::{Plugin, PluginEngine};
use crate::provider::Provider;
use crate::types::*;
use std::sync::Arc;

/// Type-erased provider that can be shared across threads
type BoxedProvider = Arc<dyn Provider>;

/// Builder for composing a provider with layers and plugins.
///
/// Layers wrap the provider (static dispatch while building); plugins are
/// stored and executed by the runtime.
///
/// # Example
///
/// ```ignore
/// let executor = RuntimeExecutor::builder(provider)
///     .layer(LoggingLayer::new())
///     .layer(TimeoutLayer::new(Duration::from_secs(60)))
///     .plugin(Arc::new(RawResponsePlugin::new()))
///     .finish();
/// ```
pub struct RuntimeExecutorBuilder<P> {
    provider: P,
    plugins: Vec<Arc<dyn Plugin>>,
}

impl<P: Provider> RuntimeExecutorBuilder<P> {
    /// Create a new builder with a provider
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            plugins: Vec::new(),
        }
    }

    /// Add a layer to wrap the provider
    ///
    /// Each call creates a new concrete type by wrapping the previous provider.
    pub fn layer<L>(self, layer: L) -> RuntimeExecutorBuilder<L::LayeredProvider>
    where
        L: Layer<P>,
    {
        RuntimeExecutorBuilder {
            provider: layer.layer(self.provider),
            plugins: self.plugins,
        }
    }

    /// Add a plugin to the runtime
    pub fn plugin(mut self, plugin: Arc<dyn Plugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Finish building and create a RuntimeExecutor
    pub fn finish(self) -> RuntimeExecutor {
        RuntimeExecutor {
            provider: Arc::new(self.provider),
            plugin_engine: PluginEngine::new(self.plugins),
        }
    }
}

/// Runtime executor with plugin support.
///
/// Entry point for model requests; the travel pipeline reaches it through
/// [`ModelClient`](super::ModelClient).
pub struct RuntimeExecutor {
    provider: BoxedProvider,
    plugin_engine: PluginEngine,
}

impl std::fmt::Debug for RuntimeExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeExecutor")
            .field("provider", &self.provider.info().id)
            .field("plugins", &self.plugin_engine.plugins().len())
            .finish()
    }
}

impl RuntimeExecutor {
    /// Create a new builder
    pub fn builder<P: Provider>(provider: P) -> RuntimeExecutorBuilder<P> {
        RuntimeExecutorBuilder::new(provider)
    }

    /// Get provider information
    pub fn info(&self) -> Arc<ProviderInfo> {
        self.provider.info()
    }

    /// Generate text using chat completion
    ///
    /// Text parts of the first choice are joined. A response without any
    /// choice yields empty content rather than an error; callers decide what
    /// an empty answer means.
    pub async fn generate_text(
        &self,
        model: impl Into<String>,
        params: TextParams,
    ) -> Result<TextResult, GenerationError> {
        let model = model.into();
        let ctx = RequestContext::new(self.provider.info().id.clone(), model.clone());

        let params = self.plugin_engine.transform_params(params, &ctx).await?;
        self.plugin_engine.on_request_start(&ctx).await?;

        let chat_req = ChatCompletionRequest::from_params(model.clone(), params);

        match self.provider.chat_completion(chat_req).await {
            Ok(response) => {
                let mut result = match response.choices.first() {
                    Some(choice) => TextResult {
                        content: choice.message.text(),
                        finish_reason: choice.finish_reason.clone(),
                        usage: response.usage,
                        model: response.model,
                    },
                    None => {
                        tracing::warn!(
                            request_id = %ctx.request_id,
                            "provider returned no choices"
                        );
                        TextResult {
                            content: String::new(),
                            finish_reason: FinishReason::Other("no_choices".to_string()),
                            usage: response.usage,
                            model: response.model,
                        }
                    }
                };

                result = self.plugin_engine.transform_result(result, &ctx).await?;
                self.plugin_engine.on_request_end(&ctx, &result).await?;

                Ok(result)
            }
            Err(err) => {
                let _ = self.plugin_engine.on_error(&err, &ctx).await;
                Err(err)
            }
        }
    }
}
