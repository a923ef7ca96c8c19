//! Plugin system for runtime-level extensibility.

use crate::error::GenerationError;
use crate::types::*;
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

/// Plugin execution phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginPhase {
    /// Execute before normal plugins
    Pre,
    /// Execute in normal order
    Normal,
    /// Execute after normal plugins
    Post,
}

/// Plugin trait for runtime-level hooks.
///
/// Unlike layers, which wrap providers, plugins hook into the runtime
/// execution flow and see the text-level request and result.
#[async_trait]
pub trait Plugin: Send + Sync + Debug + 'static {
    /// Plugin name
    fn name(&self) -> &str;

    /// Plugin execution phase
    fn enforce(&self) -> PluginPhase {
        PluginPhase::Normal
    }

    // ==================== Sequential Hooks ====================
    // Each plugin transforms the output of the previous one.

    /// Transform request parameters before they reach the provider
    async fn transform_params(
        &self,
        params: TextParams,
        _ctx: &RequestContext,
    ) -> Result<TextParams, GenerationError> {
        Ok(params)
    }

    /// Transform the result received from the provider
    async fn transform_result(
        &self,
        result: TextResult,
        _ctx: &RequestContext,
    ) -> Result<TextResult, GenerationError> {
        Ok(result)
    }

    // ==================== Parallel Hooks ====================
    // Side-effect hooks, executed concurrently.

    /// Hook called when a request starts
    async fn on_request_start(&self, _ctx: &RequestContext) -> Result<(), GenerationError> {
        Ok(())
    }

    /// Hook called when a request ends successfully
    async fn on_request_end(
        &self,
        _ctx: &RequestContext,
        _result: &TextResult,
    ) -> Result<(), GenerationError> {
        Ok(())
    }

    /// Hook called when an error occurs
    async fn on_error(
        &self,
        _error: &GenerationError,
        _ctx: &RequestContext,
    ) -> Result<(), GenerationError> {
        Ok(())
    }
}

/// Plugin execution engine.
///
/// Manages plugin ordering and hook dispatch.
#[derive(Debug, Clone)]
pub struct PluginEngine {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginEngine {
    /// Create a new plugin engine
    pub fn new(mut plugins: Vec<Arc<dyn Plugin>>) -> Self {
        // Stable sort keeps registration order within a phase
        plugins.sort_by_key(|p| match p.enforce() {
            PluginPhase::Pre => 0,
            PluginPhase::Normal => 1,
            PluginPhase::Post => 2,
        });

        Self { plugins }
    }

    /// Get all plugins
    pub fn plugins(&self) -> &[Arc<dyn Plugin>] {
        &self.plugins
    }

    // ==================== Sequential Hook Execution ====================

    /// Run sequential transform_params hooks
    pub async fn transform_params(
        &self,
        mut params: TextParams,
        ctx: &RequestContext,
    ) -> Result<TextParams, GenerationError> {
        for plugin in &self.plugins {
            params = plugin.transform_params(params, ctx).await?;
        }
        Ok(params)
    }

    /// Run sequential transform_result hooks
    pub async fn transform_result(
        &self,
        mut result: TextResult,
        ctx: &RequestContext,
    ) -> Result<TextResult, GenerationError> {
        for plugin in &self.plugins {
            result = plugin.transform_result(result, ctx).await?;
        }
        Ok(result)
    }

    // ==================== Parallel Hook Execution ====================

    /// Run parallel on_request_start hooks
    pub async fn on_request_start(&self, ctx: &RequestContext) -> Result<(), GenerationError> {
        use futures::future::try_join_all;

        let futures = self
            .plugins
            .iter()
            .map(|p| p.on_request_start(ctx))
            .collect::<Vec<_>>();

        try_join_all(futures).await?;
        Ok(())
    }

    /// Run parallel on_request_end hooks
    pub async fn on_request_end(
        &self,
        ctx: &RequestContext,
        result: &TextResult,
    ) -> Result<(), GenerationError> {
        use futures::future::try_join_all;

        let futures = self
            .plugins
            .iter()
            .map(|p| p.on_request_end(ctx, result))
            .collect::<Vec<_>>();

        try_join_all(futures).await?;
        Ok(())
    }

    /// Run parallel on_error hooks
    pub async fn on_error(
        &self,
        error: &GenerationError,
        ctx: &RequestContext,
    ) -> Result<(), GenerationError> {
        use futures::future::try_join_all;

        let futures = self
            .plugins
            .iter()
            .map(|p| p.on_error(error, ctx))
            .collect::<Vec<_>>();

        try_join_all(futures).await?;
        Ok(())
    }
}

impl Default for PluginEngine {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Tagged {
        name: &'static str,
        phase: PluginPhase,
    }

    #[async_trait]
    impl Plugin for Tagged {
        fn name(&self) -> &str {
            self.name
        }

        fn enforce(&self) -> PluginPhase {
            self.phase
        }

        async fn transform_result(
            &self,
            mut result: TextResult,
            _ctx: &RequestContext,
        ) -> Result<TextResult, GenerationError> {
            result.content.push_str(self.name);
            Ok(result)
        }
    }

    #[tokio::test]
    async fn test_plugins_run_in_phase_order() {
        let engine = PluginEngine::new(vec![
            Arc::new(Tagged { name: "c", phase: PluginPhase::Post }),
            Arc::new(Tagged { name: "b", phase: PluginPhase::Normal }),
            Arc::new(Tagged { name: "a", phase: PluginPhase::Pre }),
        ]);
        let ctx = RequestContext::new("test", "test-model");
        let result = TextResult {
            content: String::new(),
            finish_reason: FinishReason::Stop,
            usage: Usage::default(),
            model: "test-model".to_string(),
        };

        let result = engine.transform_result(result, &ctx).await.unwrap();
        assert_eq!(result.content, "abc");
    }
}
