//! Shared application state for the Axum server.

use std::sync::Arc;

use jl_extraction::{GroqConfig, GroqExtractor};
use jl_intent::{Classifier, ClassifyContext};

use crate::config::ApiConfig;

/// Shared application state, cloned into each Axum handler.
#[derive(Clone)]
pub struct AppState {
    /// The intent-resolution pipeline.
    pub classifier: Arc<Classifier>,
    /// Extraction-tier credentials; absent keeps the pipeline deterministic.
    pub credentials: Option<String>,
    /// Server-wide default location hint.
    pub default_location: Option<String>,
}

impl AppState {
    /// Deterministic-only state (tests and offline development).
    pub fn new() -> Self {
        Self {
            classifier: Arc::new(Classifier::new()),
            credentials: None,
            default_location: None,
        }
    }

    /// Build state from config; a Groq key enables the extraction tier.
    pub fn from_config(config: &ApiConfig) -> Self {
        let classifier = if config.groq_api_key.is_some() {
            Classifier::with_extractor(Arc::new(GroqExtractor::new(GroqConfig::from_env())))
        } else {
            tracing::warn!("GROQ_API_KEY not set; remote extraction tier disabled");
            Classifier::new()
        };
        Self {
            classifier: Arc::new(classifier),
            credentials: config.groq_api_key.clone(),
            default_location: config.default_location.clone(),
        }
    }

    /// Per-request context, with the request's hint taking precedence over
    /// the server default.
    pub fn context(&self, location_hint: Option<String>) -> ClassifyContext {
        ClassifyContext {
            credentials: self.credentials.clone(),
            location_hint: location_hint.or_else(|| self.default_location.clone()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
