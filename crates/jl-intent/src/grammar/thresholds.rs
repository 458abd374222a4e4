//! Heat-pump threshold and humidity-target sub-grammar. Thresholds accept
//! negative degrees (lockout temperatures sit below freezing); humidity is a
//! percent band.

use jl_protocol::{Command, ThresholdKind, bounds};

use super::{NOT_QUESTION_SHAPED, PatternRule, contains_any, extract_threshold_degrees};

/// Verbs that distinguish "set the balance point to 30" from the factual
/// question "balance point" (which the knowledge tier answers).
fn has_set_cue(query: &str) -> bool {
    contains_any(query, &["set ", "change ", "adjust ", "make ", "move ", " to "])
}

fn threshold_rule(query: &str, kind: ThresholdKind) -> Option<Command> {
    extract_threshold_degrees(query).map(|degrees| Command::SetThreshold {
        kind,
        degrees,
        reason: None,
    })
}

/// First number in the query that fits the humidity percent band.
fn extract_humidity_percent(query: &str) -> Option<f64> {
    for token in query.split_whitespace() {
        let token = token.trim_end_matches('%');
        if let Ok(v) = token.parse::<f64>()
            && bounds::humidity_accepted(v)
        {
            return Some(v);
        }
    }
    None
}

pub(super) static RULES: &[PatternRule] = &[
    PatternRule {
        name: "balance-point",
        matches: |q| q.contains("balance point") && has_set_cue(q),
        guards: &[NOT_QUESTION_SHAPED],
        produce: |q| threshold_rule(q, ThresholdKind::BalancePoint),
    },
    PatternRule {
        name: "aux-lockout",
        matches: |q| {
            (q.contains("aux") || q.contains("auxiliary")) && q.contains("lockout") && has_set_cue(q)
        },
        guards: &[NOT_QUESTION_SHAPED],
        produce: |q| threshold_rule(q, ThresholdKind::AuxLockout),
    },
    PatternRule {
        name: "compressor-lockout",
        matches: |q| q.contains("compressor") && q.contains("lockout") && has_set_cue(q),
        guards: &[NOT_QUESTION_SHAPED],
        produce: |q| threshold_rule(q, ThresholdKind::CompressorLockout),
    },
    PatternRule {
        name: "differential",
        matches: |q| q.contains("differential") && has_set_cue(q),
        guards: &[NOT_QUESTION_SHAPED],
        produce: |q| threshold_rule(q, ThresholdKind::Differential),
    },
    PatternRule {
        name: "humidity-target",
        matches: |q| q.contains("humid") && has_set_cue(q),
        guards: &[NOT_QUESTION_SHAPED],
        produce: |q| {
            extract_humidity_percent(q).map(|percent| Command::SetHumidityTarget {
                percent,
                reason: None,
            })
        },
    },
];
