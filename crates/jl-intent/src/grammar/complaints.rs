//! Complaint sub-grammar — symptom phrasings that imply an action. These sit
//! last in the table so explicit commands always win over inference.

use jl_protocol::Command;

use super::{NOT_QUESTION_SHAPED, PatternRule, contains_any};

/// Comfort target when the house feels muggy.
const DEHUMIDIFY_PERCENT: f64 = 48.0;
/// Comfort target when the house feels dry.
const HUMIDIFY_PERCENT: f64 = 40.0;

pub(super) static RULES: &[PatternRule] = &[
    PatternRule {
        name: "feels-muggy",
        matches: |q| {
            contains_any(q, &["sticky", "muggy", "clammy", "humid in here", "feels humid", "so humid"])
        },
        guards: &[NOT_QUESTION_SHAPED],
        produce: |_| {
            Some(Command::SetHumidityTarget {
                percent: DEHUMIDIFY_PERCENT,
                reason: Some("feels muggy".into()),
            })
        },
    },
    PatternRule {
        name: "feels-dry",
        matches: |q| {
            contains_any(
                q,
                &["too dry", "so dry", "feels dry", "dry in here", "static shock", "getting static"],
            )
        },
        guards: &[NOT_QUESTION_SHAPED],
        produce: |_| {
            Some(Command::SetHumidityTarget {
                percent: HUMIDIFY_PERCENT,
                reason: Some("feels dry".into()),
            })
        },
    },
    PatternRule {
        name: "short-cycling-symptom",
        matches: |q| {
            contains_any(
                q,
                &[
                    "on and off",
                    "starts and stops",
                    "keeps stopping",
                    "barely runs",
                    "short cycl",
                    "runs for a minute",
                ],
            )
        },
        guards: &[NOT_QUESTION_SHAPED],
        produce: |_| Some(Command::CheckShortCycling),
    },
    PatternRule {
        name: "aux-heat-symptom",
        matches: |q| {
            (q.contains("aux") || q.contains("auxiliary") || q.contains("backup heat"))
                && contains_any(q, &["problem", "always", "constantly", "won't stop", "stuck", "all the time"])
        },
        guards: &[NOT_QUESTION_SHAPED],
        produce: |_| Some(Command::CheckAuxHeat),
    },
    PatternRule {
        name: "filter-symptom",
        matches: |q| {
            contains_any(q, &["burning smell", "smells like burning", "burning dust", "dusty smell"])
                || (q.contains("filter") && contains_any(q, &["check", "change", "replace", "dirty"]))
        },
        guards: &[NOT_QUESTION_SHAPED],
        produce: |_| Some(Command::CheckFilter),
    },
    PatternRule {
        name: "defrost-symptom",
        matches: |q| {
            contains_any(q, &["ice on", "iced up", "iced over", "frost on", "frosted over", "covered in ice"])
                || q.contains("defrost")
        },
        guards: &[NOT_QUESTION_SHAPED],
        produce: |_| Some(Command::RunDefrost),
    },
    PatternRule {
        name: "too-cold",
        matches: |q| contains_any(q, &["too cold", "freezing in here", "freezing", "it's cold in here"]),
        guards: &[NOT_QUESTION_SHAPED],
        produce: |_| Some(Command::IncreaseTemperature { delta: 2.0 }),
    },
    PatternRule {
        name: "too-hot",
        matches: |q| contains_any(q, &["too hot", "boiling in here", "sweltering", "it's hot in here"]),
        guards: &[NOT_QUESTION_SHAPED],
        produce: |_| Some(Command::DecreaseTemperature { delta: 2.0 }),
    },
];

#[cfg(test)]
mod tests {
    use super::super::match_command;
    use jl_protocol::Command;

    #[test]
    fn muggy_complaint_sets_dehumidify_target() {
        assert_eq!(
            match_command("it feels really muggy in here"),
            Some(Command::SetHumidityTarget {
                percent: 48.0,
                reason: Some("feels muggy".into()),
            })
        );
    }

    #[test]
    fn dry_complaint_sets_humidify_target() {
        assert_eq!(
            match_command("i keep getting static shocks"),
            Some(Command::SetHumidityTarget {
                percent: 40.0,
                reason: Some("feels dry".into()),
            })
        );
    }

    #[test]
    fn short_cycling_symptoms() {
        for q in [
            "the system keeps turning on and off",
            "my heat pump starts and stops constantly",
            "it barely runs before shutting down",
        ] {
            assert_eq!(match_command(q), Some(Command::CheckShortCycling), "q: {q}");
        }
    }

    #[test]
    fn aux_heat_symptom() {
        assert_eq!(
            match_command("my aux heat seems to have a problem"),
            Some(Command::CheckAuxHeat)
        );
        assert_eq!(
            match_command("the auxiliary heat runs constantly"),
            Some(Command::CheckAuxHeat)
        );
    }

    #[test]
    fn burning_smell_checks_the_filter() {
        assert_eq!(
            match_command("there's a burning smell from the vents"),
            Some(Command::CheckFilter)
        );
        assert_eq!(match_command("change the filter"), Some(Command::CheckFilter));
    }

    #[test]
    fn ice_runs_defrost() {
        assert_eq!(
            match_command("there is ice on the outdoor unit"),
            Some(Command::RunDefrost)
        );
    }

    #[test]
    fn comfort_complaints_nudge_the_setpoint() {
        assert_eq!(
            match_command("it's too cold in here"),
            Some(Command::IncreaseTemperature { delta: 2.0 })
        );
        assert_eq!(
            match_command("it's way too hot"),
            Some(Command::DecreaseTemperature { delta: 2.0 })
        );
    }

    #[test]
    fn explanatory_questions_fall_through() {
        assert_eq!(match_command("why is my house so humid"), None);
        assert_eq!(match_command("what causes short cycling"), None);
    }
}
