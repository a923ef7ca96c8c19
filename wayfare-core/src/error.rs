//! Error types for Wayfare.
//!
//! Two levels of failure exist:
//! - [`GenerationError`]: the text-generation call itself failed (transport,
//!   provider, layer or plugin level).
//! - [`LookupError`]: a travel lookup failed, either because generation failed
//!   or because the model output could not be turned into travel options.

/// Errors raised while asking a model provider to generate text.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Provider-specific errors
    #[error("Provider error: {0}")]
    Provider(String),

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(String),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Rate limit errors
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// Invalid request errors
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Timeout errors
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GenerationError {
    /// Create a provider error
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create an authentication error
    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a rate limit error
    pub fn rate_limit(msg: impl Into<String>) -> Self {
        Self::RateLimit(msg.into())
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

/// Message shown when no JSON object span can be located in the model output.
pub const EXTRACTION_ERROR_MESSAGE: &str =
    "Invalid JSON format received from AI. Check response structure.";

/// Message shown when the located span is not valid travel-options JSON.
pub const PARSE_ERROR_MESSAGE: &str = "Failed to parse JSON. Check AI response.";

/// Message shown when a trip request is missing its endpoints.
pub const MISSING_ENDPOINTS_MESSAGE: &str = "Please enter both source and destination.";

/// Errors produced by a single travel lookup.
///
/// The `Display` output of each variant is the user-facing message carried by
/// [`LookupResult::Failed`](crate::travel::LookupResult::Failed).
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The trip parameters were rejected before any model call
    #[error("{0}")]
    InvalidTrip(String),

    /// The generation call failed; the message is the underlying description
    #[error("{0}")]
    Transport(#[from] GenerationError),

    /// No `{ ... }` span was found in the raw output
    #[error("{}", EXTRACTION_ERROR_MESSAGE)]
    Extraction,

    /// A span was found but it is not valid travel-options JSON
    #[error("{}", PARSE_ERROR_MESSAGE)]
    Parse(#[source] serde_json::Error),
}

impl LookupError {
    /// Create an invalid trip error
    pub fn invalid_trip(msg: impl Into<String>) -> Self {
        Self::InvalidTrip(msg.into())
    }
}
