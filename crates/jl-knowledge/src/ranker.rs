//! Additive relevance ranking over the static corpus.
//!
//! Signals are independent and positive; there are no penalties. The sort is
//! stable, so equal scores keep corpus order and repeated queries return
//! identical orderings.

use jl_protocol::{KnowledgeSnippet, MAX_RELEVANCE};

use crate::corpus::{CORPUS_SOURCE, CorpusEntry, ENTRIES};

/// Signal weights.
const SECTION_MATCH: u32 = 2;
const EXACT_TOPIC: u32 = 5;
const TOPIC_PHRASE: u32 = 3;
const TITLE_PHRASE: u32 = 3;
const KEYWORD_EACH: u32 = 1;
const KEYWORD_CAP: u32 = 3;

/// Split a camelCase key into lowercase words: "shortCycling" → "short cycling".
pub fn split_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_uppercase() {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn score(query: &str, entry: &CorpusEntry) -> u32 {
    let mut score = 0;

    if query.contains(&split_camel_case(entry.section)) {
        score += SECTION_MATCH;
    }

    // Exact topic key, as the user may type it ("shortCycling" or
    // "shortcycling").
    if query.contains(entry.topic) || query.contains(&entry.topic.to_lowercase()) {
        score += EXACT_TOPIC;
    }

    // The split phrase is what natural queries actually contain.
    if query.contains(&split_camel_case(entry.topic)) {
        score += TOPIC_PHRASE;
    }

    // Human-readable title, for queries that echo the doc heading.
    if query.contains(&entry.title.to_lowercase()) {
        score += TITLE_PHRASE;
    }

    let keyword_hits = entry
        .key_concepts
        .iter()
        .filter(|k| query.contains(*k))
        .count() as u32;
    score += keyword_hits.min(KEYWORD_CAP) * KEYWORD_EACH;

    score
}

fn to_snippet(entry: &CorpusEntry, relevance: u32) -> KnowledgeSnippet {
    KnowledgeSnippet {
        section: entry.section.to_string(),
        topic: entry.topic.to_string(),
        title: entry.title.to_string(),
        source: CORPUS_SOURCE.to_string(),
        summary: entry.summary.to_string(),
        key_concepts: entry.key_concepts.iter().map(|k| k.to_string()).collect(),
        relevance: relevance.min(MAX_RELEVANCE),
    }
}

/// Rank the corpus against a (lowercase) query. Zero-score entries are
/// dropped; the result keeps corpus order within equal scores.
pub fn rank(query: &str) -> Vec<KnowledgeSnippet> {
    let query = query.to_lowercase();
    let mut scored: Vec<(u32, &CorpusEntry)> = ENTRIES
        .iter()
        .map(|e| (score(&query, e), e))
        .filter(|(s, _)| *s > 0)
        .collect();

    // Stable: ties keep corpus order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .map(|(s, e)| to_snippet(e, s))
        .collect()
}
