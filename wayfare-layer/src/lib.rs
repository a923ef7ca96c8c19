//! # Wayfare Layers
//!
//! Built-in provider layers.
//!
//! - `LoggingLayer`: structured `tracing` events for each provider call
//! - `TimeoutLayer`: fails a provider call that exceeds a deadline
//!
//! ## Usage
//!
//! ```ignore
//! use std::time::Duration;
//! use wayfare_core::RuntimeExecutor;
//! use wayfare_layer::{LoggingLayer, TimeoutLayer};
//!
//! let executor = RuntimeExecutor::builder(provider)
//!     .layer(TimeoutLayer::new(Duration::from_secs(60)))
//!     .layer(LoggingLayer::new())
//!     .finish();
//! ```

pub mod logging;
pub mod timeout;

// Re-exports
pub use logging::LoggingLayer;
pub use timeout::TimeoutLayer;
