//! Diagnostic echo of raw model output.

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use std::sync::Arc;
use wayfare_core::error::GenerationError;
use wayfare_core::plugin::{Plugin, PluginPhase};
use wayfare_core::types::*;

/// Records the raw text of the latest model answer and logs it at debug level.
///
/// The travel pipeline only sees the parsed result; this plugin lets the
/// presentation layer show what the model actually said when parsing fails.
#[derive(Debug, Default)]
pub struct RawResponsePlugin {
    latest: ArcSwapOption<String>,
}

impl RawResponsePlugin {
    /// Create a new plugin with nothing recorded yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of the most recent successful generation
    pub fn latest(&self) -> Option<Arc<String>> {
        self.latest.load_full()
    }

    /// Forget the recorded text
    pub fn clear(&self) {
        self.latest.store(None);
    }
}

#[async_trait]
impl Plugin for RawResponsePlugin {
    fn name(&self) -> &str {
        "raw_response"
    }

    // See the text before any other plugin rewrites it.
    fn enforce(&self) -> PluginPhase {
        PluginPhase::Pre
    }

    async fn transform_result(
        &self,
        result: TextResult,
        ctx: &RequestContext,
    ) -> Result<TextResult, GenerationError> {
        tracing::debug!(
            request_id = %ctx.request_id,
            model = %ctx.model,
            raw = %result.content,
            "raw model response"
        );
        self.latest.store(Some(Arc::new(result.content.clone())));
        Ok(result)
    }

    async fn on_error(
        &self,
        error: &GenerationError,
        ctx: &RequestContext,
    ) -> Result<(), GenerationError> {
        tracing::debug!(request_id = %ctx.request_id, error = %error, "no raw response recorded");
        self.clear();
        Ok(())
    }
}
