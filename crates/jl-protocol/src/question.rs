use serde::{Deserialize, Serialize};

/// Primary heating system type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemType {
    HeatPump,
    GasFurnace,
}

/// Heating vs cooling context for an energy question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyMode {
    Heating,
    Cooling,
}

/// "City, ST" location extracted from the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    /// Two-letter state code, uppercase, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Entities optionally extracted from a query that did not resolve to a
/// command. Bare facts (a location, a square footage) are context for the
/// caller's answer step, never actionable on their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square_feet: Option<u32>,
    /// Heat-loss multiplier from the insulation descriptor table
    /// (poor 1.3 … excellent 0.7).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insulation_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_degrees: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_type: Option<SystemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_mode: Option<EnergyMode>,
}

impl Entities {
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.square_feet.is_none()
            && self.insulation_level.is_none()
            && self.target_degrees.is_none()
            && self.system_type.is_none()
            && self.energy_mode.is_none()
    }
}

/// Input that is not a command: carries the normalized text and whatever
/// entities were extracted, for the caller's retrieval + LLM answer step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(default, skip_serializing_if = "Entities::is_empty")]
    pub entities: Entities,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entities: Entities::default(),
        }
    }

    pub fn with_entities(text: impl Into<String>, entities: Entities) -> Self {
        Self {
            text: text.into(),
            entities,
        }
    }
}
