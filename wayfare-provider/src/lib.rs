//! # Wayfare Providers
//!
//! Model provider implementations for Wayfare.

pub mod openai;

// Re-exports
pub use openai::{OpenAiBuilder, OpenAiProvider};

use wayfare_core::error::GenerationError;

/// OpenAI-compatible endpoint of the Gemini API
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// DeepSeek API endpoint
pub const DEEPSEEK_API_BASE: &str = "https://api.deepseek.com/v1";

/// Model used for travel lookups when none is configured
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";

/// Create a Gemini provider through Google's OpenAI-compatible endpoint.
///
/// # Example
///
/// ```ignore
/// use wayfare_provider::gemini;
///
/// let provider = gemini("your-api-key")?;
/// ```
pub fn gemini(api_key: impl Into<String>) -> Result<OpenAiProvider, GenerationError> {
    OpenAiProvider::builder()
        .api_key(api_key)
        .api_base(GEMINI_API_BASE)
        .build_with_id("gemini", "Gemini")
}

/// Create a DeepSeek provider (OpenAI-compatible)
pub fn deepseek(api_key: impl Into<String>) -> Result<OpenAiProvider, GenerationError> {
    OpenAiProvider::builder()
        .api_key(api_key)
        .api_base(DEEPSEEK_API_BASE)
        .build_with_id("deepseek", "DeepSeek")
}

/// Create an OpenAI provider
pub fn openai(api_key: impl Into<String>) -> Result<OpenAiProvider, GenerationError> {
    OpenAiProvider::builder().api_key(api_key).build()
}
