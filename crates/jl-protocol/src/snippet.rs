use serde::{Deserialize, Serialize};

/// Relevance assigned to exact model/fault-code catalog hits.
pub const MAX_RELEVANCE: u32 = 100;

/// A ranked knowledge-corpus excerpt supplied as context for the caller's
/// downstream answer step. Scores are sums of independent signals; ordering
/// is score-descending with corpus order preserved on ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeSnippet {
    pub section: String,
    pub topic: String,
    pub title: String,
    pub source: String,
    pub summary: String,
    pub key_concepts: Vec<String>,
    pub relevance: u32,
}
