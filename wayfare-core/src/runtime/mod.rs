//! Runtime layer for Wayfare.
//!
//! Sits between the travel pipeline (which only needs `prompt -> text`) and
//! the provider interface (chat completion):
//! - converting text requests into chat completion requests
//! - executing plugins in the request lifecycle
//! - holding the layered provider

pub mod executor;
pub mod generator;

pub use executor::{RuntimeExecutor, RuntimeExecutorBuilder};
pub use generator::{ModelClient, TextGenerator};
