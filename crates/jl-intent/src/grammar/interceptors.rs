//! Interceptors — fixed command-like utterances answered ahead of the
//! general grammar, so the most common requests are constant-time and
//! always correct regardless of any competing rule below them.

use jl_protocol::{Command, Screen};

use super::{PatternRule, contains_any, starts_with_any};

pub(super) static RULES: &[PatternRule] = &[
    PatternRule {
        name: "help",
        matches: |q| {
            matches!(q, "help" | "show help" | "what can you do" | "what can i say")
                || q.starts_with("help me")
        },
        guards: &[],
        produce: |_| Some(Command::ShowHelp),
    },
    PatternRule {
        name: "score",
        matches: |q| {
            contains_any(q, &["my score", "efficiency score", "comfort score"]) || q == "score"
        },
        guards: &[],
        produce: |_| Some(Command::ShowScore),
    },
    PatternRule {
        name: "status",
        matches: |q| {
            matches!(q, "status" | "system status" | "how is the system doing")
                || q.contains("system status")
        },
        guards: &[],
        produce: |_| Some(Command::ShowStatus),
    },
    PatternRule {
        name: "diagnostics",
        matches: |q| {
            matches!(q, "diagnostics" | "run diagnostics" | "show diagnostics")
                || q.contains("run a diagnostic")
        },
        guards: &[],
        produce: |_| Some(Command::ShowDiagnostics),
    },
    PatternRule {
        name: "navigate",
        matches: |q| starts_with_any(q, &["go to ", "open ", "take me to ", "go home"]),
        guards: &[],
        produce: |q| {
            let screen = if q == "go home" || q.contains("home screen") {
                Screen::Home
            } else if q.contains("schedule") {
                Screen::Schedule
            } else if q.contains("setting") {
                Screen::Settings
            } else if q.contains("energy") || q.contains("usage") {
                Screen::Energy
            } else if q.contains("history") {
                Screen::History
            } else {
                return None;
            };
            Some(Command::Navigate { screen })
        },
    },
];

#[cfg(test)]
mod tests {
    use super::super::match_command;
    use jl_protocol::{Command, Screen};

    #[test]
    fn help_variants() {
        assert_eq!(match_command("help"), Some(Command::ShowHelp));
        assert_eq!(match_command("what can you do"), Some(Command::ShowHelp));
    }

    #[test]
    fn score_is_intercepted_before_question_rules() {
        assert_eq!(match_command("what is my score"), Some(Command::ShowScore));
        assert_eq!(match_command("show my score"), Some(Command::ShowScore));
    }

    #[test]
    fn status_and_diagnostics() {
        assert_eq!(match_command("system status"), Some(Command::ShowStatus));
        assert_eq!(match_command("diagnostics"), Some(Command::ShowDiagnostics));
        assert_eq!(match_command("run diagnostics"), Some(Command::ShowDiagnostics));
    }

    #[test]
    fn navigation_targets() {
        assert_eq!(
            match_command("go to settings"),
            Some(Command::Navigate { screen: Screen::Settings })
        );
        assert_eq!(
            match_command("open energy usage"),
            Some(Command::Navigate { screen: Screen::Energy })
        );
        assert_eq!(
            match_command("go home"),
            Some(Command::Navigate { screen: Screen::Home })
        );
    }

    #[test]
    fn navigate_to_unknown_screen_falls_through() {
        assert_eq!(match_command("open the pod bay doors"), None);
    }
}
