//! # Wayfare Plugins
//!
//! Built-in runtime plugins.

pub mod raw_response;

// Re-exports
pub use raw_response::RawResponsePlugin;
