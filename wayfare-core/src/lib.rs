//! # Wayfare Core
//!
//! Core abstractions, runtime and travel lookup pipeline for Wayfare.
//!
//! The crate is split in two halves:
//! - a small model runtime (`Provider`, `Layer`, `Plugin`, `RuntimeExecutor`)
//!   exposing a `prompt -> text` capability through [`TextGenerator`]
//! - the travel pipeline in [`travel`], which prompts that capability,
//!   extracts the JSON embedded in its answer and summarises the result

pub mod error;
pub mod layer;
pub mod plugin;
pub mod provider;
pub mod runtime;
pub mod travel;
pub mod types;

// Re-exports
pub use error::{GenerationError, LookupError};
pub use layer::{Layer, LayeredProvider};
pub use plugin::{Plugin, PluginEngine, PluginPhase};
pub use provider::Provider;
pub use runtime::{ModelClient, RuntimeExecutor, TextGenerator};
pub use travel::{LookupResult, OptionsFetcher, TravelOptions, TripRequest};
pub use types::*;
