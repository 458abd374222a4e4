//! HVAC knowledge retrieval for the Joule assistant.
//!
//! A static, versioned corpus with an additive relevance ranker, plus
//! catalogs for equipment models and display fault codes. Catalog hits carry
//! maximum relevance: a query naming a concrete model or code is asking
//! about exactly that thing.

pub mod corpus;
pub mod faults;
pub mod models;
pub mod ranker;
pub mod source;

use jl_protocol::KnowledgeSnippet;
use thiserror::Error;

pub use ranker::split_camel_case;
pub use source::{KnowledgeSource, search_with_sources};

/// Result-set cap for every search path.
pub const MAX_RESULTS: usize = 5;

/// A pluggable knowledge source failed.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("knowledge source unavailable: {0}")]
    Unavailable(String),
    #[error("knowledge source returned malformed data: {0}")]
    Malformed(String),
}

/// Search the builtin knowledge: fault and model catalogs first (maximum
/// relevance), then the ranked corpus. At most [`MAX_RESULTS`] snippets.
pub fn search(query: &str) -> Vec<KnowledgeSnippet> {
    let mut results = Vec::new();

    if let Some(fault) = faults::find_in_query(query) {
        results.push(fault);
    }
    if let Some(model) = models::find_in_query(query) {
        results.push(model);
    }

    results.extend(ranker::rank(query));
    results.truncate(MAX_RESULTS);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use jl_protocol::MAX_RELEVANCE;

    #[test]
    fn fault_code_outranks_corpus() {
        let results = search("e11 and the system keeps short cycling");
        assert_eq!(results[0].topic, "E11");
        assert_eq!(results[0].relevance, MAX_RELEVANCE);
        assert!(results.iter().any(|s| s.topic == "shortCycling"));
    }

    #[test]
    fn result_set_is_capped() {
        // A broad query touching many entries still returns at most five.
        let results = search("heat pump aux heat filter humidity schedule efficiency");
        assert!(results.len() <= MAX_RESULTS);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        assert!(search("chocolate cake recipe").is_empty());
    }
}
