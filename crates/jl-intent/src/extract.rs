//! Lexical extractors — small pure functions pulling typed values out of
//! query text. Reused by the grammar, the escalation heuristic, and the
//! question path's entity extraction.

use std::sync::LazyLock;

use regex::Regex;

use jl_protocol::{EnergyMode, Entities, Location, SystemType, bounds};

/// Keywords that mark a nearby number as a temperature.
const TEMP_KEYWORDS: &[&str] = &[
    "temp",
    "temperature",
    "degrees",
    "degree",
    "thermostat",
    "setpoint",
    "heat",
    "cool",
    "warm",
    "set",
    "hold",
    "to",
    "at",
];

/// Insulation descriptor → heat-loss multiplier, matching the forecast
/// engine's insulation_level scale (1.0 = average construction).
const INSULATION_TABLE: &[(&str, f64)] = &[
    ("super insulated", 0.7),
    ("excellent", 0.7),
    ("very good", 0.8),
    ("good", 0.85),
    ("tight", 0.85),
    ("average", 1.0),
    ("typical", 1.0),
    ("normal", 1.0),
    ("below average", 1.15),
    ("poor", 1.3),
    ("bad", 1.3),
    ("drafty", 1.3),
    ("leaky", 1.3),
];

/// Two-letter USPS state codes, for validating "City ST" shapes.
const STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC",
];

/// Parse a degrees token: "72", "72f", "72°", "72°f", "-5".
/// Returns None for anything that doesn't start with a signed number.
pub fn parse_degrees(token: &str) -> Option<f64> {
    let t = token
        .trim_end_matches("°f")
        .trim_end_matches('°')
        .trim_end_matches('f');
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok()
}

/// Extract a target temperature mentioned in context.
///
/// A number qualifies when it carries a unit suffix or sits within two
/// tokens of a temperature keyword, and falls inside the extended setpoint
/// band — the band is the guard that rejects incidental numbers (years,
/// square footages).
pub fn extract_temperature(text: &str) -> Option<f64> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    for (i, token) in tokens.iter().enumerate() {
        let token = token.trim_start_matches('=');
        let Some(value) = parse_degrees(token) else {
            continue;
        };
        if !bounds::setpoint_accepted(value) {
            continue;
        }
        let has_unit = token.ends_with('f') || token.contains('°');
        let near_keyword = tokens
            .iter()
            .enumerate()
            .any(|(j, t)| i.abs_diff(j) <= 2 && i != j && TEMP_KEYWORDS.contains(t));
        // "72° f" splits the unit into its own token.
        let unit_follows = tokens.get(i + 1).is_some_and(|t| *t == "f" || *t == "degrees");
        if has_unit || near_keyword || unit_follows {
            return Some(value);
        }
    }
    None
}

static SQFT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3}(?:,\d{3})+|\d+(?:\.\d+)?k|\d+)\s*(?:sq\.?\s?ft\.?|sqft|square\s+(?:feet|foot|ft))")
        .expect("square footage regex")
});

// Unit-before-number phrasing: "square feet to 2,500", "square footage is 1800".
static SQFT_LEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"square\s+(?:feet|footage|ft)(?:\s+(?:is|to|of))?\s+(\d{1,3}(?:,\d{3})+|\d+(?:\.\d+)?k|\d+)")
        .expect("square footage regex")
});

/// Extract a square footage: "2,500 sq ft", "2500sqft", "2.5k square feet",
/// "square feet to 2,500".
pub fn extract_square_feet(text: &str) -> Option<u32> {
    let caps = SQFT_RE
        .captures(text)
        .or_else(|| SQFT_LEADING_RE.captures(text))?;
    let raw = caps.get(1)?.as_str();
    let value = if let Some(thousands) = raw.strip_suffix('k') {
        (thousands.parse::<f64>().ok()? * 1000.0).round() as u32
    } else {
        raw.replace(',', "").parse::<u32>().ok()?
    };
    // Sanity band: a home, not a closet or a stadium.
    (100..=50_000).contains(&value).then_some(value)
}

/// Map an insulation descriptor to its heat-loss multiplier.
/// Requires the word "insulation"/"insulated" so "good" alone never fires.
pub fn extract_insulation(text: &str) -> Option<f64> {
    if !text.contains("insulat") {
        return None;
    }
    INSULATION_TABLE
        .iter()
        .find(|(word, _)| text.contains(word))
        .map(|(_, factor)| *factor)
}

/// Primary system type from keyword match.
pub fn extract_system_type(text: &str) -> Option<SystemType> {
    if text.contains("heat pump") || text.contains("heatpump") {
        Some(SystemType::HeatPump)
    } else if text.contains("gas furnace") || text.contains("furnace") {
        Some(SystemType::GasFurnace)
    } else {
        None
    }
}

/// Heating vs cooling lexical cues.
pub fn extract_energy_mode(text: &str) -> Option<EnergyMode> {
    let cooling = ["cooling", "summer", "air conditioning", "a/c", " ac "];
    let heating = ["heating", "winter", "heat "];
    if cooling.iter().any(|c| text.contains(c)) || text.ends_with(" ac") {
        Some(EnergyMode::Cooling)
    } else if heating.iter().any(|h| text.contains(h)) || text.ends_with(" heat") {
        Some(EnergyMode::Heating)
    } else {
        None
    }
}

static IN_CITY_ST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bin ([A-Z][a-zA-Z]+(?: [A-Z][a-zA-Z]+)*),?\s+([A-Z]{2})\b").expect("location regex")
});
static CITY_ST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-zA-Z]+(?: [A-Z][a-zA-Z]+)*),\s*([A-Z]{2})\b").expect("location regex")
});
static CITY_SP_ST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-zA-Z]+) ([A-Z]{2})\b").expect("location regex")
});
static TRAILING_IN_CITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bin ([A-Z][a-zA-Z]+(?: [A-Z][a-zA-Z]+)?)\s*[.?!]?\s*$").expect("location regex")
});
static LEADING_CITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][a-z]+(?: [A-Z][a-z]+)?) (?:weather|winters?|summers?|climate|area)\b")
        .expect("location regex")
});

/// Extract a city/state from the raw (pre-lowercase) text.
///
/// Sub-patterns are tried in order of shape specificity; the first hit wins.
pub fn extract_location(raw: &str) -> Option<Location> {
    if let Some(caps) = IN_CITY_ST_RE.captures(raw) {
        let state = caps[2].to_string();
        if STATE_CODES.contains(&state.as_str()) {
            return Some(location(&caps[1], Some(state)));
        }
    }
    if let Some(caps) = CITY_ST_RE.captures(raw) {
        let state = caps[2].to_string();
        if STATE_CODES.contains(&state.as_str()) {
            return Some(location(&caps[1], Some(state)));
        }
    }
    if let Some(caps) = CITY_SP_ST_RE.captures(raw) {
        let state = caps[2].to_string();
        if STATE_CODES.contains(&state.as_str()) {
            return Some(location(&caps[1], Some(state)));
        }
    }
    if let Some(caps) = TRAILING_IN_CITY_RE.captures(raw) {
        return Some(location(&caps[1], None));
    }
    if let Some(caps) = LEADING_CITY_RE.captures(raw) {
        return Some(location(&caps[1], None));
    }
    None
}

fn location(city: &str, state: Option<String>) -> Location {
    Location {
        city: city.to_lowercase(),
        state,
    }
}

/// Assemble all entities found in a query. `normalized` is the lowercase
/// pipeline text; `raw` keeps original casing for the location shapes.
pub fn extract_entities(normalized: &str, raw: &str) -> Entities {
    Entities {
        location: extract_location(raw),
        square_feet: extract_square_feet(normalized),
        insulation_level: extract_insulation(normalized),
        target_degrees: extract_temperature(normalized),
        system_type: extract_system_type(normalized),
        energy_mode: extract_energy_mode(normalized),
    }
}
