//! Escalation heuristic — decides whether unmatched input is worth the cost
//! of a remote structured-extraction call.
//!
//! Distinct from the command grammar: this never extracts anything, it only
//! produces a likelihood score. The score trades recall for cost control —
//! a false negative falls back to the cheap question path, a false positive
//! pays for one wasted remote call.

/// Single tunable cutoff. At or above this, unmatched input escalates.
pub const COMMAND_LIKELIHOOD_THRESHOLD: f64 = 0.5;

/// Verbs that open an imperative.
pub const ACTION_VERBS: &[&str] = &[
    "set", "change", "turn", "make", "switch", "adjust", "increase", "decrease", "raise",
    "lower", "bump", "put", "hold", "resume", "run", "start", "stop", "enable", "disable",
    "show", "open", "go",
];

/// Classic question-word openers.
pub const QUESTION_WORDS: &[&str] = &[
    "what", "why", "how", "when", "where", "who", "which", "is", "are", "does", "do", "can",
    "could", "should", "would", "will",
];

/// Vocabulary that marks input as technical HVAC content. Used here and by
/// the personality tier's fallback suppression.
pub const HVAC_VOCAB: &[&str] = &[
    "heat", "pump", "furnace", "thermostat", "hvac", "compressor", "defrost", "humidity",
    "filter", "setpoint", "temperature", "temp", "aux", "auxiliary", "balance", "btu", "kwh",
    "seer", "hspf", "cop", "refrigerant", "coil", "cycling", "lockout", "differential",
    "schedule", "mode", "fan",
];

/// Bare mode names that make a very short utterance look like a command.
const MODE_TOKENS: &[&str] = &["heat", "cool", "auto", "off", "fan", "eco", "away"];

/// Score how command-like an unmatched query sounds, in [0, 1].
///
/// Signals add independently; the binary decision lives entirely in
/// [`COMMAND_LIKELIHOOD_THRESHOLD`].
pub fn command_likelihood(query: &str) -> f64 {
    // Permission-request phrasing is policy-routed to the question path;
    // it must not escalate however command-like the rest of it reads.
    if crate::grammar::is_permission_request(query) {
        return 0.0;
    }

    let tokens: Vec<&str> = query.split_whitespace().collect();
    if tokens.is_empty() {
        return 0.0;
    }

    let mut score: f64 = 0.0;

    let opens_with_verb = ACTION_VERBS.contains(&tokens[0]);
    if opens_with_verb {
        score += 0.6;
    }

    // Short input carrying a number plus a unit-ish token reads as a setting.
    if tokens.len() <= 6 && has_number(&tokens) && has_unit(&tokens) {
        score += 0.3;
    }

    // A bare mode name in a very short utterance ("auto", "fan on").
    if tokens.len() <= 3 && tokens.iter().any(|t| MODE_TOKENS.contains(t)) {
        score += 0.5;
    }

    // Question-word opener pushes toward the question path, unless the
    // query also carries command structure (a later action verb with "to"),
    // in which case it reads as an indirect imperative.
    if !opens_with_verb && QUESTION_WORDS.contains(&tokens[0]) {
        let command_structure = query.contains(" to ")
            && tokens.iter().skip(1).any(|t| ACTION_VERBS.contains(t));
        if command_structure {
            score += 0.6;
        } else {
            score -= 0.6;
        }
    }

    score.clamp(0.0, 1.0)
}

/// Binary form preserved for call sites that only need the decision.
pub fn looks_like_command(query: &str) -> bool {
    command_likelihood(query) >= COMMAND_LIKELIHOOD_THRESHOLD
}

/// True when the query contains recognizable HVAC vocabulary.
pub fn has_technical_vocabulary(query: &str) -> bool {
    query
        .split_whitespace()
        .any(|t| HVAC_VOCAB.contains(&t.trim_matches(|c: char| !c.is_alphanumeric())))
}

/// True when the query opens with an imperative verb.
pub fn opens_with_action_verb(query: &str) -> bool {
    query
        .split_whitespace()
        .next()
        .is_some_and(|t| ACTION_VERBS.contains(&t))
}

fn has_number(tokens: &[&str]) -> bool {
    tokens.iter().any(|t| {
        t.trim_matches(|c: char| !c.is_ascii_digit() && c != '-' && c != '.')
            .parse::<f64>()
            .is_ok()
    })
}

fn has_unit(tokens: &[&str]) -> bool {
    tokens.iter().any(|t| {
        matches!(*t, "degrees" | "degree" | "f" | "percent" | "%")
            || t.ends_with('f')
            || t.ends_with('%')
            || t.contains('°')
    })
}
