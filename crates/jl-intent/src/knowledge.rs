//! Deterministic knowledge engine — canned answers for frequently-asked
//! factual and diagnostic questions, with calculator-style matchers that do
//! the arithmetic inline. No network, no escalation.
//!
//! Every matcher excludes instructional "how do I…" phrasings so those fall
//! through to the remote model instead of receiving a canned definition.

use std::sync::LazyLock;

use regex::Regex;

use jl_protocol::{AnswerKind, OfflineAnswer};

use crate::escalate::opens_with_action_verb;

/// BTU/hr per ton of cooling capacity.
const BTU_PER_TON: f64 = 12_000.0;

/// Default electricity rate used when the query doesn't name one ($/kWh).
const DEFAULT_KWH_RATE: f64 = 0.15;

type Matcher = fn(&str) -> Option<OfflineAnswer>;

/// Ordered matcher battery — first hit wins.
const MATCHERS: &[Matcher] = &[
    match_live_temperature,
    match_live_humidity,
    match_celsius_to_fahrenheit,
    match_fahrenheit_to_celsius,
    match_tons_to_btu,
    match_kwh_cost,
    match_balance_point,
    match_short_cycling,
    match_defrost_cycle,
    match_aux_heat,
    match_filter_guidance,
];

/// Try every deterministic knowledge matcher in order.
pub fn match_knowledge(query: &str) -> Option<OfflineAnswer> {
    // Instructional questions want steps, not definitions; the remote
    // question path handles them.
    if is_instructional(query) || opens_with_action_verb(query) {
        return None;
    }
    MATCHERS.iter().find_map(|m| m(query))
}

fn is_instructional(query: &str) -> bool {
    ["how do i", "how can i", "how would i", "walk me through", "steps to"]
        .iter()
        .any(|p| query.starts_with(p) || query.contains(p))
}

fn is_question_shaped(query: &str) -> bool {
    ["what", "why", "when", "tell me", "explain", "is ", "does ", "do "]
        .iter()
        .any(|p| query.starts_with(p))
        || query.contains("what is")
        || query.contains("mean")
}

// ── live snapshots ──────────────────────────────────────────────

fn match_live_temperature(query: &str) -> Option<OfflineAnswer> {
    let cues = [
        "what is the temperature",
        "what's the temperature",
        "current temperature",
        "how warm is it in here",
        "how cold is it in here",
        "temperature in here",
        "temperature inside",
    ];
    if cues.iter().any(|c| query.contains(c)) && !query.contains("outside") {
        return Some(OfflineAnswer::snapshot(AnswerKind::TemperatureSnapshot));
    }
    None
}

fn match_live_humidity(query: &str) -> Option<OfflineAnswer> {
    let cues = [
        "what is the humidity",
        "what's the humidity",
        "current humidity",
        "humidity in here",
        "humidity inside",
        "how humid is it",
    ];
    if cues.iter().any(|c| query.contains(c)) {
        return Some(OfflineAnswer::snapshot(AnswerKind::HumiditySnapshot));
    }
    None
}

// ── calculators ─────────────────────────────────────────────────

static C_TO_F_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-?\d+(?:\.\d+)?)\s*(?:°\s*)?c(?:elsius)?\b.{0,12}\b(?:in|to|as)\s+(?:°\s*)?f")
        .expect("c-to-f regex")
});
static F_TO_C_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-?\d+(?:\.\d+)?)\s*(?:°\s*)?f(?:ahrenheit)?\b.{0,12}\b(?:in|to|as)\s+(?:°\s*)?c")
        .expect("f-to-c regex")
});
static TONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*tons?\b").expect("tons regex"));
static KWH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*kwh\b").expect("kwh regex"));

fn match_celsius_to_fahrenheit(query: &str) -> Option<OfflineAnswer> {
    let caps = C_TO_F_RE.captures(query)?;
    let c: f64 = caps[1].parse().ok()?;
    let f = c * 9.0 / 5.0 + 32.0;
    Some(OfflineAnswer::calculation(format!("{c}°C is {f:.1}°F.")))
}

fn match_fahrenheit_to_celsius(query: &str) -> Option<OfflineAnswer> {
    let caps = F_TO_C_RE.captures(query)?;
    let f: f64 = caps[1].parse().ok()?;
    let c = (f - 32.0) * 5.0 / 9.0;
    Some(OfflineAnswer::calculation(format!("{f}°F is {c:.1}°C.")))
}

fn match_tons_to_btu(query: &str) -> Option<OfflineAnswer> {
    if !query.contains("btu") {
        return None;
    }
    let caps = TONS_RE.captures(query)?;
    let tons: f64 = caps[1].parse().ok()?;
    let btu = tons * BTU_PER_TON;
    Some(OfflineAnswer::calculation(format!(
        "{tons} tons is {btu:.0} BTU/hr (12,000 BTU/hr per ton)."
    )))
}

fn match_kwh_cost(query: &str) -> Option<OfflineAnswer> {
    if !query.contains("cost") {
        return None;
    }
    let caps = KWH_RE.captures(query)?;
    let kwh: f64 = caps[1].parse().ok()?;
    let cost = kwh * DEFAULT_KWH_RATE;
    Some(OfflineAnswer::calculation(format!(
        "{kwh} kWh at ${DEFAULT_KWH_RATE:.2}/kWh is about ${cost:.2}. Your actual \
         rate may differ."
    )))
}

// ── canonical facts ─────────────────────────────────────────────

fn match_balance_point(query: &str) -> Option<OfflineAnswer> {
    if query.contains("balance point") && is_question_shaped(query) {
        return Some(OfflineAnswer::fact(
            "The balance point is the outdoor temperature where your heat pump's \
             output exactly matches the house's heat loss — typically 25-35°F. \
             Below it, aux heat makes up the deficit. A lower balance point means \
             more cheap heat-pump runtime.",
        ));
    }
    None
}

fn match_short_cycling(query: &str) -> Option<OfflineAnswer> {
    if (query.contains("short cycling") || query.contains("short cycle"))
        && is_question_shaped(query)
    {
        return Some(OfflineAnswer::fact(
            "Short cycling is when the system starts and stops in bursts shorter \
             than about 5 minutes. Common causes: an oversized unit, a too-tight \
             differential, a clogged filter, or low refrigerant. It wears the \
             compressor and hurts efficiency.",
        ));
    }
    None
}

fn match_defrost_cycle(query: &str) -> Option<OfflineAnswer> {
    if query.contains("defrost") && is_question_shaped(query) {
        return Some(OfflineAnswer::fact(
            "In cold, humid weather frost builds on the outdoor coil. The defrost \
             cycle briefly runs the system in reverse to melt it — steam off the \
             unit and a whooshing sound are normal. Cycles longer than 10 minutes \
             or ice that never clears are worth a service call.",
        ));
    }
    None
}

fn match_aux_heat(query: &str) -> Option<OfflineAnswer> {
    if (query.contains("aux heat") || query.contains("auxiliary heat")) && is_question_shaped(query)
    {
        return Some(OfflineAnswer::fact(
            "Aux heat is the electric-resistance backup that supplements your heat \
             pump below the balance point. It costs 2-3x more per BTU, so Joule \
             keeps it locked out unless the heat pump genuinely can't keep up.",
        ));
    }
    None
}

fn match_filter_guidance(query: &str) -> Option<OfflineAnswer> {
    let cues = ["change my filter", "replace the filter", "filter last", "often should"];
    if query.contains("filter") && cues.iter().any(|c| query.contains(c)) {
        return Some(OfflineAnswer::fact(
            "Check the filter monthly; replace 1-inch filters every 1-3 months and \
             4-inch media filters every 6-12 months. Sooner with pets, allergies, \
             or heavy runtime.",
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_temperature_needs_context() {
        let a = match_knowledge("what is the temperature in here").unwrap();
        assert_eq!(a.kind, AnswerKind::TemperatureSnapshot);
        assert!(a.needs_context);
    }

    #[test]
    fn outside_temperature_falls_through() {
        assert!(match_knowledge("what is the temperature outside").is_none());
    }

    #[test]
    fn humidity_snapshot() {
        let a = match_knowledge("how humid is it right now").unwrap();
        assert_eq!(a.kind, AnswerKind::HumiditySnapshot);
    }

    #[test]
    fn celsius_conversion_inline() {
        let a = match_knowledge("what is 22c in f").unwrap();
        assert_eq!(a.kind, AnswerKind::Calculation);
        assert!(a.text.unwrap().contains("71.6"));
    }

    #[test]
    fn fahrenheit_conversion_inline() {
        let a = match_knowledge("what is 68f in celsius").unwrap();
        assert!(a.text.unwrap().contains("20.0"));
    }

    #[test]
    fn tons_to_btu() {
        let a = match_knowledge("what is 3 tons in btu").unwrap();
        assert!(a.text.unwrap().contains("36000"));
    }

    #[test]
    fn kwh_cost_estimate() {
        let a = match_knowledge("what does 40 kwh cost").unwrap();
        assert!(a.text.unwrap().contains("$6.00"));
    }

    #[test]
    fn balance_point_definition() {
        let a = match_knowledge("what is a balance point").unwrap();
        assert_eq!(a.kind, AnswerKind::Fact);
        assert!(a.text.unwrap().contains("outdoor temperature"));
    }

    #[test]
    fn short_cycling_definition() {
        let a = match_knowledge("what does short cycling mean").unwrap();
        assert!(a.text.unwrap().contains("5 minutes"));
    }

    #[test]
    fn instructional_phrasings_fall_through() {
        assert!(match_knowledge("how do i fix short cycling").is_none());
        assert!(match_knowledge("how can i lower my balance point").is_none());
    }

    #[test]
    fn commands_fall_through() {
        assert!(match_knowledge("set balance point to 30").is_none());
    }

    #[test]
    fn filter_guidance() {
        let a = match_knowledge("how often should i change my filter").unwrap();
        assert!(a.text.unwrap().contains("1-3 months"));
    }
}
