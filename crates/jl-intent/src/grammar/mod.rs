//! Deterministic command grammar — an ordered table of pattern rules
//! evaluated by one generic first-match-wins loop.
//!
//! Ordering and guard logic are data, not control flow. Priority is table
//! position: interceptors, then setpoints, then modes/schedule, then
//! thresholds, then the complaint sub-grammar. Once a rule's matcher and all
//! of its guards succeed and its producer emits a command, evaluation stops.
//! A producer may still return `None` (out-of-domain number); the rule then
//! does not fire and evaluation continues — rejection, never silent clamping.

mod complaints;
mod interceptors;
mod modes;
mod setpoints;
mod thresholds;

use std::sync::LazyLock;

use jl_protocol::Command;

/// A guard predicate that can veto an otherwise-matching rule.
pub struct Guard {
    pub name: &'static str,
    pub passes: fn(&str) -> bool,
}

/// One pattern rule. Stateless; loaded once at process start.
pub struct PatternRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub guards: &'static [Guard],
    pub produce: fn(&str) -> Option<Command>,
}

/// The full grammar in evaluation order.
static TABLE: LazyLock<Vec<&'static PatternRule>> = LazyLock::new(|| {
    interceptors::RULES
        .iter()
        .chain(setpoints::RULES)
        .chain(modes::RULES)
        .chain(thresholds::RULES)
        .chain(complaints::RULES)
        .collect()
});

/// Match a normalized query against the grammar. First match wins.
pub fn match_command(query: &str) -> Option<Command> {
    for rule in TABLE.iter() {
        if !(rule.matches)(query) {
            continue;
        }
        if let Some(guard) = rule.guards.iter().find(|g| !(g.passes)(query)) {
            tracing::debug!(rule = rule.name, guard = guard.name, "rule vetoed");
            continue;
        }
        if let Some(command) = (rule.produce)(query) {
            tracing::debug!(rule = rule.name, action = command.action(), "grammar hit");
            return Some(command);
        }
    }
    None
}

/// Number of rules in the table; sanity anchor for table-construction tests.
pub fn rule_count() -> usize {
    TABLE.len()
}

// ── shared matcher/producer helpers ─────────────────────────────

pub(crate) fn contains_any(query: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| query.contains(p))
}

pub(crate) fn starts_with_any(query: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| query.starts_with(p))
}

/// First number in the query that fits the extended setpoint band. Used
/// where phrasing (not keyword proximity) already marks the number as a
/// temperature ("make it 72", "hold at 70").
pub(crate) fn any_setpoint_number(query: &str) -> Option<f64> {
    for token in query.split_whitespace() {
        let token = token.trim_start_matches('=');
        if let Some(v) = crate::extract::parse_degrees(token)
            && jl_protocol::bounds::setpoint_accepted(v)
        {
            return Some(v);
        }
    }
    None
}

/// First signed number in the query that fits the threshold band. Strips
/// degree-unit suffixes; accepts negatives (lockout temperatures).
pub(crate) fn extract_threshold_degrees(query: &str) -> Option<f64> {
    for token in query.split_whitespace() {
        if let Some(v) = crate::extract::parse_degrees(token)
            && jl_protocol::bounds::threshold_accepted(v)
        {
            return Some(v);
        }
    }
    None
}

/// Relative adjustment amount: "by 5" preferred, else any bare number in the
/// delta band.
pub(crate) fn extract_delta(query: &str) -> Option<f64> {
    if let Some(pos) = query.find("by ") {
        let rest = &query[pos + 3..];
        if let Some(token) = rest.split_whitespace().next()
            && let Some(v) = crate::extract::parse_degrees(token)
            && jl_protocol::bounds::DELTA_RANGE.contains(&v)
        {
            return Some(v);
        }
    }
    for token in query.split_whitespace() {
        if let Some(v) = crate::extract::parse_degrees(token)
            && jl_protocol::bounds::DELTA_RANGE.contains(&v)
        {
            return Some(v);
        }
    }
    None
}

// ── shared guards ───────────────────────────────────────────────

/// The documented policy asymmetry: a full "can/could/would you … the
/// temperature …" phrasing is conventionally a request for confirmation, so
/// it always routes to the question path — while the terser "can you set
/// temp to X" stays a command. Preserved from the source behavior, not
/// unified.
pub(crate) const NOT_PERMISSION_REQUEST: Guard = Guard {
    name: "not-permission-request",
    passes: |q| !is_permission_request(q),
};

/// The polite "can/could/would you … the temperature …" shape. Shared with
/// the escalation heuristic so the routing policy holds past the grammar:
/// this phrasing never becomes a command, not even via remote extraction.
pub fn is_permission_request(query: &str) -> bool {
    starts_with_any(query, &["can you ", "could you ", "would you "])
        && query.contains("the temperature")
}

/// Veto question-shaped phrasings for rules whose keywords also appear in
/// factual questions ("what is my balance point set to").
pub(crate) const NOT_QUESTION_SHAPED: Guard = Guard {
    name: "not-question-shaped",
    passes: |q| {
        !starts_with_any(
            q,
            &[
                "what ", "what's", "why ", "when ", "where ", "who ", "how ", "should ",
                "does ", "is the ", "is it ", "is my ", "explain ",
            ],
        )
    },
};
