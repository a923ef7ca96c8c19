//! # Wayfare
//!
//! AI-powered travel options lookup.
//!
//! Wayfare asks a language model for flights, trains, buses and cabs between
//! two places on a given day, pulls the JSON object out of whatever the model
//! answered, and summarises the cheapest choice.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use wayfare::prelude::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = wayfare::provider::gemini("your-api-key")?;
//! let executor = Arc::new(
//!     RuntimeExecutor::builder(provider)
//!         .layer(LoggingLayer::new())
//!         .finish(),
//! );
//!
//! let client = ModelClient::new(executor, "gemini-1.5-pro");
//! let fetcher = OptionsFetcher::new(Arc::new(client));
//!
//! let request = TripRequest::parse("Delhi", "Mumbai", "2026-11-02")?;
//! match fetcher.fetch(&request).await {
//!     LookupResult::Found(options) => println!("{}", summarize(&options)),
//!     LookupResult::Failed { error } => eprintln!("{}", error),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `openai`: OpenAI-compatible provider (Gemini, DeepSeek, OpenAI)
//! - `layers`: built-in layers (logging, timeout)
//! - `plugins`: built-in plugins (raw response echo)
//! - `cli`: the `wayfare` command line tool
//! - `full`: everything

// Re-export core types and traits
pub use wayfare_core::*;

// Re-export providers under `provider` module
#[cfg(feature = "wayfare-provider")]
pub mod provider {
    //! Model provider implementations.
    pub use wayfare_provider::*;
}

// Re-export layers under `layer` module
#[cfg(feature = "wayfare-layer")]
pub mod layer {
    //! Built-in provider layers.
    pub use wayfare_layer::*;
}

// Re-export plugins under `plugin` module
#[cfg(feature = "wayfare-plugin")]
pub mod plugin {
    //! Built-in runtime plugins.
    pub use wayfare_plugin::*;
}

/// Prelude module for convenient imports
pub mod prelude {
    //! The most commonly used types and functions.
    //!
    //! ```
    //! use wayfare::prelude::*;
    //! ```

    pub use crate::travel::{render_intro, render_options, summarize, Category, Recommendation};
    pub use crate::{
        GenerationError, Layer, LookupError, LookupResult, Message, ModelClient, OptionsFetcher,
        Plugin, Provider, RuntimeExecutor, TextGenerator, TextParams, TravelOptions, TripRequest,
    };

    #[cfg(feature = "wayfare-provider")]
    pub use crate::provider::*;

    #[cfg(feature = "wayfare-layer")]
    pub use crate::layer::*;

    #[cfg(feature = "wayfare-plugin")]
    pub use crate::plugin::*;
}
