//! Mode, fan, hold, and schedule sub-grammar.

use jl_protocol::{Command, FanMode, HvacMode, Weekday};

use super::{
    NOT_QUESTION_SHAPED, PatternRule, any_setpoint_number, contains_any, starts_with_any,
};

/// Scan for a weekday mention; prefix match covers "mon" through "monday".
fn parse_weekday(query: &str) -> Option<Weekday> {
    for token in query.split_whitespace() {
        let day = match token {
            t if t.starts_with("mon") => Weekday::Monday,
            t if t.starts_with("tue") => Weekday::Tuesday,
            t if t.starts_with("wed") => Weekday::Wednesday,
            t if t.starts_with("thu") => Weekday::Thursday,
            t if t.starts_with("fri") => Weekday::Friday,
            t if t.starts_with("sat") => Weekday::Saturday,
            t if t.starts_with("sun") => Weekday::Sunday,
            _ => continue,
        };
        return Some(day);
    }
    None
}

fn mode_from_text(query: &str) -> Option<HvacMode> {
    // "emergency heat" must win over plain "heat".
    if query.contains("emergency") || query.contains("em heat") {
        Some(HvacMode::EmergencyHeat)
    } else if query.contains("heat") {
        Some(HvacMode::Heat)
    } else if query.contains("cool")
        || query.contains("air condition")
        || query.split_whitespace().any(|t| t == "ac")
    {
        Some(HvacMode::Cool)
    } else if query.contains("auto") {
        Some(HvacMode::Auto)
    } else if query.contains("off") {
        Some(HvacMode::Off)
    } else {
        None
    }
}

pub(super) static RULES: &[PatternRule] = &[
    PatternRule {
        name: "emergency-heat",
        matches: |q| contains_any(q, &["emergency heat", "em heat"]),
        guards: &[NOT_QUESTION_SHAPED],
        produce: |q| {
            // "turn off emergency heat" falls through to system-off below.
            if q.contains("off") {
                return None;
            }
            Some(Command::SetMode {
                mode: HvacMode::EmergencyHeat,
            })
        },
    },
    PatternRule {
        name: "system-off",
        matches: |q| {
            contains_any(
                q,
                &["turn off", "shut off", "switch off", "power off", "system off", "turn it off"],
            )
        },
        guards: &[NOT_QUESTION_SHAPED],
        produce: |_| Some(Command::SetMode { mode: HvacMode::Off }),
    },
    PatternRule {
        name: "mode-switch",
        matches: |q| {
            contains_any(
                q,
                &[
                    "switch to ",
                    "switch the system to ",
                    "change mode to ",
                    "change the mode to ",
                    "set mode to ",
                    "set the mode to ",
                    "mode to ",
                    "put it in ",
                    "put the system in ",
                    "set the system to ",
                ],
            )
        },
        guards: &[NOT_QUESTION_SHAPED],
        produce: |q| mode_from_text(q).map(|mode| Command::SetMode { mode }),
    },
    PatternRule {
        name: "heating-on",
        matches: |q| {
            contains_any(
                q,
                &["turn on the heat", "turn the heat on", "heat on", "start heating", "heating on"],
            )
        },
        guards: &[NOT_QUESTION_SHAPED],
        produce: |_| Some(Command::SetMode { mode: HvacMode::Heat }),
    },
    PatternRule {
        name: "cooling-on",
        matches: |q| {
            contains_any(
                q,
                &[
                    "turn on the ac",
                    "turn the ac on",
                    "ac on",
                    "turn on the air",
                    "start cooling",
                    "cooling on",
                ],
            )
        },
        guards: &[NOT_QUESTION_SHAPED],
        produce: |_| Some(Command::SetMode { mode: HvacMode::Cool }),
    },
    PatternRule {
        name: "fan",
        matches: |q| q.contains("fan"),
        guards: &[NOT_QUESTION_SHAPED],
        produce: |q| {
            let fan = if q.contains("circulat") {
                FanMode::Circulate
            } else if q.contains("auto") || q.contains("off") {
                // Thermostat fans have no true off; auto runs only with a call.
                FanMode::Auto
            } else if q.contains("on") || q.contains("continuous") || q.contains("always") {
                FanMode::On
            } else {
                return None;
            };
            Some(Command::SetFan { fan })
        },
    },
    PatternRule {
        name: "resume-schedule",
        matches: |q| {
            contains_any(
                q,
                &[
                    "resume schedule",
                    "resume the schedule",
                    "back to schedule",
                    "back to the schedule",
                    "follow the schedule",
                    "cancel hold",
                    "cancel the hold",
                    "remove the hold",
                    "clear the hold",
                    "end the hold",
                ],
            )
        },
        guards: &[],
        produce: |_| Some(Command::ResumeSchedule),
    },
    PatternRule {
        name: "hold",
        matches: |q| q.contains("hold"),
        guards: &[NOT_QUESTION_SHAPED],
        produce: |q| {
            Some(Command::SetHold {
                degrees: any_setpoint_number(q),
            })
        },
    },
    PatternRule {
        name: "query-schedule",
        matches: |q| {
            q == "schedule"
                || starts_with_any(q, &["what is the schedule", "what's the schedule"])
                || contains_any(
                    q,
                    &["show the schedule", "show my schedule", "show schedule", "check the schedule", "schedule for "],
                )
        },
        guards: &[],
        produce: |q| Some(Command::QuerySchedule { day: parse_weekday(q) }),
    },
];
