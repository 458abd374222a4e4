//! Setpoint sub-grammar — every canonical "set the temperature" phrasing
//! converges on one producer per command variant: many narrow rules, one
//! payload path, never a mega-regex.

use std::sync::LazyLock;

use regex::Regex;

use jl_protocol::Command;

use super::{
    Guard, NOT_PERMISSION_REQUEST, NOT_QUESTION_SHAPED, PatternRule, any_setpoint_number,
    contains_any, extract_delta,
};
use crate::extract::extract_temperature;

/// "72", "72f", "72 degrees", "= 72f", "72° f" as the entire utterance.
static BARE_SETPOINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^=?\s*-?\d{1,3}(?:\.\d+)?\s*(?:°\s*f?|f\b|degrees?)?$").expect("bare setpoint regex")
});

/// A relative rule must not steal "… to N" absolute phrasings.
const NO_ABSOLUTE_TARGET: Guard = Guard {
    name: "no-absolute-target",
    passes: |q| !q.contains(" to "),
};

/// "raise the humidity" belongs to the humidity rules, not temperature.
const NOT_HUMIDITY: Guard = Guard {
    name: "not-humidity",
    passes: |q| !q.contains("humid"),
};

fn produce_set(query: &str) -> Option<Command> {
    extract_temperature(query).map(|degrees| Command::SetTemperature { degrees })
}

fn produce_winter(query: &str) -> Option<Command> {
    extract_temperature(query).map(|degrees| Command::SetWinterTemperature { degrees })
}

fn produce_summer(query: &str) -> Option<Command> {
    extract_temperature(query).map(|degrees| Command::SetSummerTemperature { degrees })
}

pub(super) static RULES: &[PatternRule] = &[
    PatternRule {
        name: "set-heat-setpoint",
        matches: |q| {
            contains_any(
                q,
                &["heat to ", "heating to ", "winter temp", "winter setpoint", "heat setpoint"],
            )
        },
        guards: &[NOT_QUESTION_SHAPED, NOT_PERMISSION_REQUEST],
        produce: produce_winter,
    },
    PatternRule {
        name: "set-cool-setpoint",
        matches: |q| {
            contains_any(
                q,
                &["cool to ", "cooling to ", "ac to ", "summer temp", "summer setpoint", "cool setpoint"],
            )
        },
        guards: &[NOT_QUESTION_SHAPED, NOT_PERMISSION_REQUEST],
        produce: produce_summer,
    },
    PatternRule {
        name: "set-temperature",
        matches: |q| {
            contains_any(
                q,
                &[
                    "set temp",
                    "set the temp",
                    "set temperature",
                    "set the temperature",
                    "set thermostat",
                    "set it to ",
                    "temp to ",
                    "temperature to ",
                    "thermostat to ",
                    "temperature at ",
                    "change the temp",
                    "change temp",
                ],
            )
        },
        guards: &[NOT_QUESTION_SHAPED, NOT_PERMISSION_REQUEST],
        produce: produce_set,
    },
    PatternRule {
        name: "make-it-n",
        matches: |q| contains_any(q, &["make it ", "make the house ", "make my house "]),
        guards: &[NOT_QUESTION_SHAPED],
        produce: |q| any_setpoint_number(q).map(|degrees| Command::SetTemperature { degrees }),
    },
    PatternRule {
        name: "bare-setpoint",
        matches: |q| BARE_SETPOINT_RE.is_match(q),
        guards: &[],
        produce: |q| any_setpoint_number(q).map(|degrees| Command::SetTemperature { degrees }),
    },
    PatternRule {
        name: "warmer-relative",
        matches: |q| {
            contains_any(
                q,
                &[
                    "warmer",
                    "warm it up",
                    "heat it up",
                    "increase",
                    "raise",
                    "turn up",
                    "turn it up",
                    "bump up",
                    "bump it up",
                    "hotter",
                ],
            )
        },
        guards: &[NOT_QUESTION_SHAPED, NO_ABSOLUTE_TARGET, NOT_HUMIDITY],
        produce: |q| {
            Some(Command::IncreaseTemperature {
                delta: extract_delta(q).unwrap_or(2.0),
            })
        },
    },
    PatternRule {
        name: "cooler-relative",
        matches: |q| {
            contains_any(
                q,
                &[
                    "cooler",
                    "cool it down",
                    "decrease",
                    "lower",
                    "turn down",
                    "turn it down",
                    "bump down",
                    "colder",
                ],
            )
        },
        guards: &[NOT_QUESTION_SHAPED, NO_ABSOLUTE_TARGET, NOT_HUMIDITY],
        produce: |q| {
            Some(Command::DecreaseTemperature {
                delta: extract_delta(q).unwrap_or(2.0),
            })
        },
    },
];

#[cfg(test)]
mod tests {
    use super::super::match_command;
    use jl_protocol::Command;

    fn set(degrees: f64) -> Option<Command> {
        Some(Command::SetTemperature { degrees })
    }

    // ── canonicalization: all phrasings, one command ────────────

    #[test]
    fn canonical_phrasings_converge() {
        for q in [
            "set temp to 72",
            "set the temperature to 72",
            "set thermostat to 72",
            "temperature to 72",
            "make it 72",
            "make it 72 degrees",
            "72",
            "72 degrees",
            "72f",
            "= 72f",
        ] {
            assert_eq!(match_command(q), set(72.0), "phrasing: {q}");
        }
    }

    #[test]
    fn convergence_holds_across_strict_range() {
        for n in [45.0_f64, 52.0, 68.0, 77.0, 85.0] {
            let text = format!("set temp to {n:.0}");
            assert_eq!(match_command(&text), set(n), "n = {n}");
            let bare = format!("{n:.0}");
            assert_eq!(match_command(&bare), set(n), "bare n = {n}");
        }
    }

    // ── numeric domain policy ───────────────────────────────────

    #[test]
    fn extended_band_passes_through_unclamped() {
        assert_eq!(match_command("set temp to 42"), set(42.0));
        assert_eq!(match_command("set temp to 95"), set(95.0));
    }

    #[test]
    fn beyond_extended_band_no_rule_fires() {
        assert_eq!(match_command("set temp to 150"), None);
        assert_eq!(match_command("set temp to 30"), None);
        assert_eq!(match_command("250"), None);
    }

    // ── seasonal setpoints ──────────────────────────────────────

    #[test]
    fn winter_and_summer_variants() {
        assert_eq!(
            match_command("set heat to 68"),
            Some(Command::SetWinterTemperature { degrees: 68.0 })
        );
        assert_eq!(
            match_command("set cooling to 74"),
            Some(Command::SetSummerTemperature { degrees: 74.0 })
        );
        assert_eq!(
            match_command("set the winter temp to 66"),
            Some(Command::SetWinterTemperature { degrees: 66.0 })
        );
    }

    // ── relative adjustments ────────────────────────────────────

    #[test]
    fn warmer_by_n() {
        assert_eq!(
            match_command("make it warmer by 5"),
            Some(Command::IncreaseTemperature { delta: 5.0 })
        );
    }

    #[test]
    fn warmer_without_amount_defaults() {
        assert_eq!(
            match_command("make it warmer"),
            Some(Command::IncreaseTemperature { delta: 2.0 })
        );
    }

    #[test]
    fn cooler_variants() {
        assert_eq!(
            match_command("turn it down by 3"),
            Some(Command::DecreaseTemperature { delta: 3.0 })
        );
        assert_eq!(
            match_command("make it cooler"),
            Some(Command::DecreaseTemperature { delta: 2.0 })
        );
    }

    // ── question shapes stay questions ──────────────────────────

    #[test]
    fn question_shaped_setpoint_text_does_not_fire() {
        assert_eq!(match_command("what should i set the temperature to"), None);
        assert_eq!(match_command("what is my temp set to"), None);
    }

    #[test]
    fn bare_number_with_extra_words_does_not_fire() {
        assert_eq!(match_command("i counted 72 sheep"), None);
    }
}
