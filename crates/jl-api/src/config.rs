//! API server configuration.

/// Top-level API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Groq API key; absent disables the remote extraction tier.
    pub groq_api_key: Option<String>,
    /// Default "City, ST" used when a request carries no location hint.
    pub default_location: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl ApiConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Self {
        let port = std::env::var("JOULE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        Self {
            host: std::env::var("JOULE_HOST").unwrap_or_else(|_| default_host()),
            port,
            groq_api_key: std::env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty()),
            default_location: std::env::var("JOULE_LOCATION").ok(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            groq_api_key: None,
            default_location: None,
        }
    }
}
