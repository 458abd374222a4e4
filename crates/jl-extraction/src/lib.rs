//! Remote structured command extraction.
//!
//! The deterministic grammar resolves the common phrasings locally; queries
//! that score command-like but miss every rule are handed to a hosted model
//! for one-shot structured extraction. The extractor returns a fully typed
//! [`jl_protocol::Command`] or nothing — never free text.

pub mod client;

use async_trait::async_trait;
use jl_protocol::Command;

pub use client::{GroqConfig, GroqExtractor};

/// An engine that turns free text into a structured command.
///
/// Credentials travel with the call, not the client: the pipeline decides
/// per request whether a key is available at all.
#[async_trait]
pub trait CommandExtractor: Send + Sync {
    /// Extract a command from natural-language text.
    /// Returns `None` when the engine cannot produce a valid command.
    async fn extract(&self, query: &str, api_key: &str) -> Option<Command>;

    /// Name of this extraction engine (for logging/audit).
    fn name(&self) -> &str;
}
