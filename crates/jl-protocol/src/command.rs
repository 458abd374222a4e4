use serde::{Deserialize, Serialize};

/// HVAC operating mode, matching the bridge's target-state vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HvacMode {
    Off,
    Heat,
    Cool,
    Auto,
    EmergencyHeat,
}

/// Fan behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanMode {
    Auto,
    On,
    Circulate,
}

/// Day-of-week index for schedule queries (0 = Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// 0-based index, Monday first.
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Which engineering threshold a `set_threshold` command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdKind {
    /// Outdoor temperature below which aux heat supplements the heat pump.
    BalancePoint,
    /// Outdoor temperature above which aux heat is locked out.
    AuxLockout,
    /// Outdoor temperature below which the compressor is locked out.
    CompressorLockout,
    /// Setpoint swing before a cycle starts.
    Differential,
}

/// UI screens the assistant can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Home,
    Schedule,
    Settings,
    Energy,
    History,
}

/// A structured, actionable command resolved from natural language.
///
/// Action identifiers are stable snake_case strings; a separate executor maps
/// them to bridge API calls (set-temperature, set-mode, set-relay). Numeric
/// payloads are range-checked by the grammar before a command is emitted;
/// extended-band setpoints pass through for executor-side clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    /// Set the heating (winter) setpoint.
    SetWinterTemperature { degrees: f64 },
    /// Set the cooling (summer) setpoint.
    SetSummerTemperature { degrees: f64 },
    /// Set the active setpoint without naming a season.
    SetTemperature { degrees: f64 },
    /// Raise the active setpoint by a delta.
    IncreaseTemperature { delta: f64 },
    /// Lower the active setpoint by a delta.
    DecreaseTemperature { delta: f64 },
    SetMode {
        mode: HvacMode,
    },
    SetFan {
        fan: FanMode,
    },
    /// Hold at the current (or given) setpoint, pausing the schedule.
    SetHold {
        #[serde(skip_serializing_if = "Option::is_none")]
        degrees: Option<f64>,
    },
    ResumeSchedule,
    QuerySchedule {
        #[serde(skip_serializing_if = "Option::is_none")]
        day: Option<Weekday>,
    },
    /// Set an engineering threshold, optionally carrying the human-readable
    /// inference that produced it (complaint sub-grammar).
    SetThreshold {
        kind: ThresholdKind,
        degrees: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    SetHumidityTarget {
        percent: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    Navigate {
        screen: Screen,
    },
    ShowScore,
    ShowStatus,
    ShowDiagnostics,
    ShowHelp,
    CheckShortCycling,
    CheckAuxHeat,
    CheckFilter,
    RunDefrost,
}

impl Command {
    /// The stable action tag, as serialized.
    pub fn action(&self) -> &'static str {
        match self {
            Command::SetWinterTemperature { .. } => "set_winter_temperature",
            Command::SetSummerTemperature { .. } => "set_summer_temperature",
            Command::SetTemperature { .. } => "set_temperature",
            Command::IncreaseTemperature { .. } => "increase_temperature",
            Command::DecreaseTemperature { .. } => "decrease_temperature",
            Command::SetMode { .. } => "set_mode",
            Command::SetFan { .. } => "set_fan",
            Command::SetHold { .. } => "set_hold",
            Command::ResumeSchedule => "resume_schedule",
            Command::QuerySchedule { .. } => "query_schedule",
            Command::SetThreshold { .. } => "set_threshold",
            Command::SetHumidityTarget { .. } => "set_humidity_target",
            Command::Navigate { .. } => "navigate",
            Command::ShowScore => "show_score",
            Command::ShowStatus => "show_status",
            Command::ShowDiagnostics => "show_diagnostics",
            Command::ShowHelp => "show_help",
            Command::CheckShortCycling => "check_short_cycling",
            Command::CheckAuxHeat => "check_aux_heat",
            Command::CheckFilter => "check_filter",
            Command::RunDefrost => "run_defrost",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_roundtrip() {
        let cmd = Command::SetWinterTemperature { degrees: 68.0 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains(r#""action":"set_winter_temperature""#));
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn action_tag_matches_serialization() {
        let cmd = Command::CheckShortCycling;
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["action"], cmd.action());
    }

    #[test]
    fn threshold_with_reason() {
        let cmd = Command::SetThreshold {
            kind: ThresholdKind::BalancePoint,
            degrees: 30.0,
            reason: Some("aux heat running too often".into()),
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["kind"], "balance_point");
        assert_eq!(json["degrees"], 30.0);
        assert!(json["reason"].as_str().unwrap().contains("aux heat"));
    }

    #[test]
    fn hold_without_degrees_omits_field() {
        let json = serde_json::to_string(&Command::SetHold { degrees: None }).unwrap();
        assert!(!json.contains("degrees"));
    }

    #[test]
    fn mode_serialization() {
        assert_eq!(
            serde_json::to_string(&HvacMode::EmergencyHeat).unwrap(),
            r#""emergency_heat""#
        );
    }

    #[test]
    fn weekday_index() {
        assert_eq!(Weekday::Monday.index(), 0);
        assert_eq!(Weekday::Sunday.index(), 6);
    }
}
