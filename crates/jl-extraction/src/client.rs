//! Groq chat-completions client for structured command extraction.
//!
//! Speaks the OpenAI-compatible `/v1/chat/completions` API. The model is
//! asked for ONLY a JSON object; everything it returns is re-validated here —
//! schema via serde, numeric payloads via the shared bounds — so a
//! hallucinated action or out-of-band setpoint never reaches the device.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use jl_protocol::{Command, bounds};

use crate::CommandExtractor;

/// System prompt enumerating the full command schema. The action tags and
/// field names must match the `Command` serde representation exactly.
const SYSTEM_PROMPT: &str = r#"You are a command parser for a smart thermostat assistant. Parse the user's natural-language request into a structured thermostat command.

Available commands (JSON shapes):

{"action": "set_winter_temperature", "degrees": 68.0} — heating-season setpoint
{"action": "set_summer_temperature", "degrees": 74.0} — cooling-season setpoint
{"action": "set_temperature", "degrees": 72.0} — current setpoint (40-100 F)
{"action": "increase_temperature", "delta": 2.0} — relative bump up (1-15 F)
{"action": "decrease_temperature", "delta": 2.0} — relative bump down (1-15 F)
{"action": "set_mode", "mode": "off"|"heat"|"cool"|"auto"|"emergency_heat"}
{"action": "set_fan", "fan": "auto"|"on"|"circulate"}
{"action": "set_hold", "degrees": 70.0} — degrees may be null to hold current
{"action": "resume_schedule"}
{"action": "query_schedule", "day": "monday"|...|"sunday"|null}
{"action": "set_threshold", "kind": "balance_point"|"aux_lockout"|"compressor_lockout"|"differential", "degrees": 30.0, "reason": null}
{"action": "set_humidity_target", "percent": 45.0, "reason": null} — 20-70 percent
{"action": "navigate", "screen": "home"|"schedule"|"settings"|"energy"|"history"}
{"action": "show_score"}
{"action": "show_status"}
{"action": "show_diagnostics"}
{"action": "show_help"}
{"action": "check_short_cycling"}
{"action": "check_aux_heat"}
{"action": "check_filter"}
{"action": "run_defrost"}

Respond with ONLY a JSON object (no markdown, no explanation):
{"command": {<one of the shapes above>}, "confidence": <0.0-1.0>}

If the request is not a thermostat command, respond with:
{"command": null, "confidence": 0.0}

Be generous in interpretation — homeowners use casual language. Map their intent to the closest command."#;

/// Minimum confidence threshold — below this we treat as "no match".
const MIN_CONFIDENCE: f64 = 0.3;

/// Configuration for the Groq extraction endpoint.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API base URL (up to but not including `/v1/...`).
    pub base_url: String,
    /// Model to use for extraction.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl GroqConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let base_url = std::env::var("GROQ_BASE_URL")
            .unwrap_or_else(|_| "https://api.groq.com/openai".into());
        let model =
            std::env::var("GROQ_MODEL").unwrap_or_else(|_| "llama-3.1-8b-instant".into());
        let timeout_secs: u64 = std::env::var("GROQ_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        Self {
            base_url,
            model,
            timeout_secs,
        }
    }
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai".into(),
            model: "llama-3.1-8b-instant".into(),
            timeout_secs: 5,
        }
    }
}

/// Chat-completions request body.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat-completions response (only fields we need).
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Raw model output before validation.
#[derive(Deserialize)]
struct RawExtraction {
    command: Option<serde_json::Value>,
    #[serde(default)]
    confidence: f64,
}

/// Client for the Groq extraction endpoint.
pub struct GroqExtractor {
    client: reqwest::Client,
    config: GroqConfig,
}

impl GroqExtractor {
    pub fn new(config: GroqConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build reqwest client");
        Self { client, config }
    }
}

#[async_trait]
impl CommandExtractor for GroqExtractor {
    /// Extract a command from natural-language text.
    ///
    /// Returns `None` if the endpoint is unreachable, returns garbage, the
    /// action is unknown, a payload is out of band, or confidence is below
    /// threshold.
    async fn extract(&self, query: &str, api_key: &str) -> Option<Command> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);

        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: query,
                },
            ],
            temperature: 0.0,
        };

        let response = match self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, "groq request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "groq returned non-200");
            return None;
        }

        let chat_resp: ChatResponse = match response.json().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse groq response body");
                return None;
            }
        };

        let content = chat_resp.choices.into_iter().next()?.message.content;
        let json_str = extract_json(&content);

        let raw: RawExtraction = match serde_json::from_str(json_str) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, content = %content, "groq returned invalid JSON");
                return None;
            }
        };

        let command_value = raw.command?;

        if raw.confidence < MIN_CONFIDENCE {
            tracing::debug!(confidence = raw.confidence, "groq confidence below threshold");
            return None;
        }

        // Schema validation: an unknown action or malformed payload fails the
        // typed parse.
        let command: Command = match serde_json::from_value(command_value) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(error = %e, "groq returned unknown or malformed command");
                return None;
            }
        };

        if !command_in_bounds(&command) {
            tracing::warn!(action = command.action(), "groq command payload out of band");
            return None;
        }

        Some(command)
    }

    fn name(&self) -> &str {
        "groq"
    }
}

/// Re-check numeric payloads against the shared bands. The model saw the
/// limits in its prompt, but prompt text is not a validator.
fn command_in_bounds(command: &Command) -> bool {
    match command {
        Command::SetWinterTemperature { degrees }
        | Command::SetSummerTemperature { degrees }
        | Command::SetTemperature { degrees } => bounds::setpoint_accepted(*degrees),
        Command::SetHold { degrees } => degrees.is_none_or(bounds::setpoint_accepted),
        Command::IncreaseTemperature { delta } | Command::DecreaseTemperature { delta } => {
            bounds::DELTA_RANGE.contains(delta)
        }
        Command::SetThreshold { degrees, .. } => bounds::threshold_accepted(*degrees),
        Command::SetHumidityTarget { percent, .. } => bounds::humidity_accepted(*percent),
        _ => true,
    }
}

/// Extract JSON from model output that may be wrapped in markdown code blocks.
fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_fence = &trimmed[start + 7..];
        if let Some(end) = after_fence.find("```") {
            return after_fence[..end].trim();
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        if let Some(end) = after_fence.find("```") {
            return after_fence[..end].trim();
        }
    }

    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use jl_protocol::HvacMode;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Helper: build a chat-completions response body around model content.
    fn groq_response(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{
                "message": { "role": "assistant", "content": content }
            }]
        })
    }

    fn extractor_for(server: &MockServer) -> GroqExtractor {
        GroqExtractor::new(GroqConfig {
            base_url: server.uri(),
            model: "llama-3.1-8b-instant".into(),
            timeout_secs: 2,
        })
    }

    #[tokio::test]
    async fn extracts_set_temperature() {
        let server = MockServer::start().await;
        let body = groq_response(
            r#"{"command": {"action": "set_temperature", "degrees": 72.0}, "confidence": 0.95}"#,
        );
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let result = extractor_for(&server)
            .extract("i'd like it to be a comfortable seventy two", "test-key")
            .await;
        assert_eq!(result, Some(Command::SetTemperature { degrees: 72.0 }));
    }

    #[tokio::test]
    async fn strips_markdown_fences() {
        let server = MockServer::start().await;
        let body = groq_response(
            "```json\n{\"command\": {\"action\": \"set_mode\", \"mode\": \"heat\"}, \"confidence\": 0.9}\n```",
        );
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let result = extractor_for(&server).extract("warm the place up", "k").await;
        assert_eq!(result, Some(Command::SetMode { mode: HvacMode::Heat }));
    }

    #[tokio::test]
    async fn null_command_is_no_match() {
        let server = MockServer::start().await;
        let body = groq_response(r#"{"command": null, "confidence": 0.0}"#);
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let result = extractor_for(&server).extract("bake me a pizza", "k").await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn low_confidence_rejected() {
        let server = MockServer::start().await;
        let body = groq_response(
            r#"{"command": {"action": "run_defrost"}, "confidence": 0.1}"#,
        );
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let result = extractor_for(&server).extract("maybe defrost something", "k").await;
        assert!(result.is_none(), "confidence below 0.3 should be rejected");
    }

    #[tokio::test]
    async fn unknown_action_rejected() {
        let server = MockServer::start().await;
        let body = groq_response(
            r#"{"command": {"action": "launch_missiles"}, "confidence": 0.99}"#,
        );
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let result = extractor_for(&server).extract("do something", "k").await;
        assert!(result.is_none(), "unknown actions should be rejected");
    }

    #[tokio::test]
    async fn out_of_band_setpoint_rejected() {
        let server = MockServer::start().await;
        let body = groq_response(
            r#"{"command": {"action": "set_temperature", "degrees": 150.0}, "confidence": 0.9}"#,
        );
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let result = extractor_for(&server).extract("set it to 150", "k").await;
        assert!(result.is_none(), "out-of-band degrees should be rejected");
    }

    #[tokio::test]
    async fn timeout_returns_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(10)))
            .mount(&server)
            .await;

        // Client timeout is 2s, mock delays 10s.
        let result = extractor_for(&server).extract("set temp somewhere nice", "k").await;
        assert!(result.is_none(), "timeout should return None");
    }

    #[tokio::test]
    async fn invalid_json_returns_none() {
        let server = MockServer::start().await;
        let body = groq_response("i am not json");
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let result = extractor_for(&server).extract("set temp to 70", "k").await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn non_200_returns_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let result = extractor_for(&server).extract("set temp to 70", "k").await;
        assert!(result.is_none());
    }

    #[test]
    fn config_defaults() {
        let config = GroqConfig::default();
        assert_eq!(config.base_url, "https://api.groq.com/openai");
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn negative_lockout_is_in_bounds() {
        use jl_protocol::ThresholdKind;
        assert!(command_in_bounds(&Command::SetThreshold {
            kind: ThresholdKind::AuxLockout,
            degrees: -5.0,
            reason: None,
        }));
    }
}
