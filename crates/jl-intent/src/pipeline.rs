//! Tier orchestration — one entry point, one `Classification` out.
//!
//! Tiers run cheapest-first: normalize, FAQ, offline knowledge, the
//! deterministic grammar, then (only for command-like residue with
//! credentials) remote extraction. Small talk lands in the personality
//! catalog; everything else leaves as a question carrying whatever entities
//! the extractors found.

use std::sync::Arc;

use jl_extraction::CommandExtractor;
use jl_protocol::{Classification, Question};

use crate::escalate::{COMMAND_LIKELIHOOD_THRESHOLD, command_likelihood};
use crate::extract::{extract_entities, extract_location};
use crate::faq::FaqMatcher;
use crate::fun::FunCatalog;
use crate::grammar::match_command;
use crate::knowledge::match_knowledge;
use crate::normalize::normalize;

/// Per-request context supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct ClassifyContext {
    /// API key for the remote extraction tier; absent means the tier is
    /// skipped entirely.
    pub credentials: Option<String>,
    /// "City, ST" fallback used when the query itself names no location.
    pub location_hint: Option<String>,
}

/// The intent-resolution pipeline.
pub struct Classifier {
    faq: FaqMatcher,
    fun: FunCatalog,
    extractor: Option<Arc<dyn CommandExtractor>>,
}

impl Classifier {
    /// Deterministic tiers only; no remote extraction.
    pub fn new() -> Self {
        Self {
            faq: FaqMatcher::new(),
            fun: FunCatalog::new(),
            extractor: None,
        }
    }

    pub fn with_extractor(extractor: Arc<dyn CommandExtractor>) -> Self {
        Self {
            faq: FaqMatcher::new(),
            fun: FunCatalog::new(),
            extractor: Some(extractor),
        }
    }

    /// Resolve raw user input to exactly one classification.
    pub async fn classify(&self, raw: &str, ctx: &ClassifyContext) -> Classification {
        let normalized = normalize(raw);
        let query = normalized.as_str();

        if let Some(answer) = self.faq.lookup(query).await {
            return Classification::Faq(answer);
        }

        if let Some(answer) = match_knowledge(query) {
            tracing::debug!(kind = ?answer.kind, "offline knowledge hit");
            return Classification::Offline(answer);
        }

        if let Some(command) = match_command(query) {
            return Classification::Command(command);
        }

        let likelihood = command_likelihood(query);
        if likelihood >= COMMAND_LIKELIHOOD_THRESHOLD {
            if let Some(extractor) = &self.extractor
                && let Some(key) = &ctx.credentials
            {
                if let Some(command) = extractor.extract(query, key).await {
                    tracing::debug!(engine = extractor.name(), "remote extraction hit");
                    return Classification::Command(command);
                }
                tracing::debug!(engine = extractor.name(), "remote extraction missed");
            } else {
                tracing::debug!(likelihood, "command-like but no extractor available");
            }
            // Command-like residue the grammar and the model both missed:
            // surface it as a question rather than guessing.
            return Classification::Question(self.question_for(query, raw, ctx));
        }

        if let Some(fun) = self.fun.lookup(query).await {
            return Classification::Fun(fun);
        }

        Classification::Question(self.question_for(query, raw, ctx))
    }

    fn question_for(&self, query: &str, raw: &str, ctx: &ClassifyContext) -> Question {
        let mut entities = extract_entities(query, raw);
        if entities.location.is_none()
            && let Some(hint) = &ctx.location_hint
        {
            entities.location = extract_location(hint);
        }
        Question::with_entities(query, entities)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jl_protocol::{Command, FaqCategory};

    /// Mock extractor that always returns a fixed command (or None), and
    /// records whether it was called.
    struct MockExtractor {
        result: Option<Command>,
        called: std::sync::atomic::AtomicBool,
    }

    impl MockExtractor {
        fn hit(command: Command) -> Arc<Self> {
            Arc::new(Self {
                result: Some(command),
                called: std::sync::atomic::AtomicBool::new(false),
            })
        }

        fn miss() -> Arc<Self> {
            Arc::new(Self {
                result: None,
                called: std::sync::atomic::AtomicBool::new(false),
            })
        }

        fn was_called(&self) -> bool {
            self.called.load(std::sync::atomic::Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CommandExtractor for MockExtractor {
        async fn extract(&self, _query: &str, _api_key: &str) -> Option<Command> {
            self.called.store(true, std::sync::atomic::Ordering::SeqCst);
            self.result.clone()
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    fn ctx_with_key() -> ClassifyContext {
        ClassifyContext {
            credentials: Some("test-key".into()),
            location_hint: None,
        }
    }

    // ── tier precedence ─────────────────────────────────────────

    #[tokio::test]
    async fn faq_beats_everything() {
        let c = Classifier::new();
        let result = c
            .classify("hey joule, how much does joule cost", &ClassifyContext::default())
            .await;
        match result {
            Classification::Faq(a) => assert_eq!(a.category, FaqCategory::Pricing),
            other => panic!("expected faq, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn knowledge_answers_offline() {
        let c = Classifier::new();
        let result = c
            .classify("what is 22c in fahrenheit", &ClassifyContext::default())
            .await;
        assert_eq!(result.tier(), "offline");
    }

    #[tokio::test]
    async fn grammar_resolves_without_network() {
        let c = Classifier::new();
        let result = c.classify("set temp to 72", &ClassifyContext::default()).await;
        assert_eq!(
            result,
            Classification::Command(Command::SetTemperature { degrees: 72.0 })
        );
    }

    #[tokio::test]
    async fn small_talk_hits_personality() {
        let c = Classifier::new();
        let result = c.classify("tell me a joke", &ClassifyContext::default()).await;
        assert_eq!(result.tier(), "fun");
    }

    #[tokio::test]
    async fn substantive_question_with_entities() {
        let c = Classifier::new();
        let result = c
            .classify(
                "how much would it cost me to heat 2,500 sq ft in Denver, CO",
                &ClassifyContext::default(),
            )
            .await;
        match result {
            Classification::Question(q) => {
                assert_eq!(q.entities.square_feet, Some(2500));
                let loc = q.entities.location.expect("location");
                assert_eq!(loc.city, "denver");
                assert_eq!(loc.state.as_deref(), Some("CO"));
            }
            other => panic!("expected question, got {other:?}"),
        }
    }

    // ── escalation and extraction ───────────────────────────────

    #[tokio::test]
    async fn command_like_residue_escalates() {
        let extractor = MockExtractor::hit(Command::SetMode {
            mode: jl_protocol::HvacMode::Cool,
        });
        let c = Classifier::with_extractor(extractor.clone());
        // Leading action verb, no grammar rule for this phrasing.
        let result = c.classify("turn the place into a freezer", &ctx_with_key()).await;
        assert!(extractor.was_called());
        assert!(result.is_command());
    }

    #[tokio::test]
    async fn extraction_skipped_without_credentials() {
        let extractor = MockExtractor::hit(Command::ShowStatus);
        let c = Classifier::with_extractor(extractor.clone());
        let result = c
            .classify("turn the place into a freezer", &ClassifyContext::default())
            .await;
        assert!(!extractor.was_called());
        assert_eq!(result.tier(), "question");
    }

    #[tokio::test]
    async fn failed_extraction_degrades_to_question() {
        let extractor = MockExtractor::miss();
        let c = Classifier::with_extractor(extractor.clone());
        let result = c.classify("turn the place into a freezer", &ctx_with_key()).await;
        assert!(extractor.was_called());
        assert_eq!(result.tier(), "question");
    }

    #[tokio::test]
    async fn permission_request_never_becomes_a_command() {
        // Even with credentials and a willing extractor, the polite
        // "can you … the temperature" shape stays a question.
        let extractor = MockExtractor::hit(Command::SetTemperature { degrees: 70.0 });
        let c = Classifier::with_extractor(extractor.clone());
        let result = c
            .classify("can you set the temperature to 70", &ctx_with_key())
            .await;
        assert!(!extractor.was_called());
        assert_eq!(result.tier(), "question");
    }

    #[tokio::test]
    async fn non_command_query_never_reaches_extractor() {
        let extractor = MockExtractor::hit(Command::ShowStatus);
        let c = Classifier::with_extractor(extractor.clone());
        let result = c
            .classify("why is my energy bill so high this month", &ctx_with_key())
            .await;
        assert!(!extractor.was_called());
        assert_eq!(result.tier(), "question");
    }

    // ── context ─────────────────────────────────────────────────

    #[tokio::test]
    async fn location_hint_fills_missing_entity() {
        let c = Classifier::new();
        let ctx = ClassifyContext {
            credentials: None,
            location_hint: Some("Boise, ID".into()),
        };
        let result = c.classify("why is my energy bill so high this month", &ctx).await;
        match result {
            Classification::Question(q) => {
                let loc = q.entities.location.expect("hint location");
                assert_eq!(loc.city, "boise");
                assert_eq!(loc.state.as_deref(), Some("ID"));
            }
            other => panic!("expected question, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn query_location_beats_hint() {
        let c = Classifier::new();
        let ctx = ClassifyContext {
            credentials: None,
            location_hint: Some("Boise, ID".into()),
        };
        let result = c
            .classify("what does heating cost in Denver, CO", &ctx)
            .await;
        match result {
            Classification::Question(q) => {
                assert_eq!(q.entities.location.expect("location").city, "denver");
            }
            other => panic!("expected question, got {other:?}"),
        }
    }
}
