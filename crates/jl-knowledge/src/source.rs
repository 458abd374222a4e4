//! Pluggable knowledge sources beyond the builtin corpus.
//!
//! A user-knowledge store (notes, installer annotations) can be merged into
//! search results. Source failures are isolated: a broken store never takes
//! the builtin corpus down with it.

use async_trait::async_trait;

use jl_protocol::KnowledgeSnippet;

use crate::SourceError;

/// An additional searchable knowledge store.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    /// Search this source; scores use the same relevance scale as the
    /// builtin ranker.
    async fn search(&self, query: &str) -> Result<Vec<KnowledgeSnippet>, SourceError>;

    /// Name of this source (for logging).
    fn name(&self) -> &str;
}

/// Builtin search plus extra sources, merged and re-ranked.
///
/// Each failing source is logged and skipped; the builtin results always
/// survive.
pub async fn search_with_sources(
    query: &str,
    sources: &[Box<dyn KnowledgeSource>],
) -> Vec<KnowledgeSnippet> {
    let mut results = crate::search(query);

    for source in sources {
        match source.search(query).await {
            Ok(snippets) => results.extend(snippets),
            Err(e) => {
                tracing::warn!(source = source.name(), error = %e, "knowledge source failed");
            }
        }
    }

    results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    results.truncate(crate::MAX_RESULTS);
    results
}
