//! Static equipment-model catalog — match-based lookup for the JL line.
//!
//! A model-shaped token in the query ("jl-500", "jl 500", "JL500") is
//! normalized to its canonical form and, when known, surfaces as a
//! max-relevance snippet ahead of ranked corpus entries.

use std::sync::LazyLock;

use regex::Regex;

use jl_protocol::{KnowledgeSnippet, MAX_RELEVANCE};

/// Model entry from the static catalog.
#[derive(Debug, Clone)]
pub struct ModelEntry {
    pub model: &'static str,
    pub description: &'static str,
    pub key_concepts: &'static [&'static str],
}

static MODEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bjl[-\s]?(\d{3})\b").expect("model regex"));

/// Look up a model number in the static catalog.
/// Input is the numeric suffix; the prefix is always JL.
pub fn lookup(number: &str) -> Option<ModelEntry> {
    match number {
        "300" => Some(ModelEntry {
            model: "JL-300",
            description: "Entry thermostat: single-stage conventional systems, \
                          wired sensors only, no humidity control.",
            key_concepts: &["single stage", "conventional", "wired"],
        }),
        "500" => Some(ModelEntry {
            model: "JL-500",
            description: "Mid-range thermostat: 2 heat / 2 cool stages, heat pump \
                          support with configurable aux lockout and balance point.",
            key_concepts: &["heat pump", "two stage", "aux lockout", "balance point"],
        }),
        "700" => Some(ModelEntry {
            model: "JL-700",
            description: "Flagship thermostat: heat pump + dual fuel, humidity \
                          target control, wireless room sensors, energy history.",
            key_concepts: &["dual fuel", "humidity", "room sensors", "energy history"],
        }),
        _ => None,
    }
}

/// Find a known model mentioned anywhere in the query.
pub fn find_in_query(query: &str) -> Option<KnowledgeSnippet> {
    let lowered = query.to_lowercase();
    let caps = MODEL_RE.captures(&lowered)?;
    let entry = lookup(caps.get(1)?.as_str())?;
    Some(KnowledgeSnippet {
        section: "equipmentModels".to_string(),
        topic: entry.model.to_string(),
        title: format!("{} thermostat", entry.model),
        source: crate::corpus::CORPUS_SOURCE.to_string(),
        summary: entry.description.to_string(),
        key_concepts: entry.key_concepts.iter().map(|k| k.to_string()).collect(),
        relevance: MAX_RELEVANCE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_variants_normalize() {
        for q in ["does the jl-500 support heat pumps", "JL 500 specs", "jl500 manual"] {
            let hit = find_in_query(q).expect(q);
            assert_eq!(hit.topic, "JL-500");
            assert_eq!(hit.relevance, MAX_RELEVANCE);
        }
    }

    #[test]
    fn unknown_model_number_misses() {
        assert!(find_in_query("what about the jl-999").is_none());
    }

    #[test]
    fn bare_numbers_do_not_match() {
        assert!(find_in_query("set temp to 500").is_none());
    }
}
