use serde::{Deserialize, Serialize};

/// What kind of canned answer an [`OfflineAnswer`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    /// Current indoor temperature — caller merges live device state.
    TemperatureSnapshot,
    /// Current indoor humidity — caller merges live device state.
    HumiditySnapshot,
    /// Pre-authored factual text, complete as-is.
    Fact,
    /// Inline arithmetic result (unit conversion, cost estimate).
    Calculation,
}

/// A canonical answer produced without any network call.
///
/// Either `text` is the complete answer, or `needs_context` is set and the
/// caller must merge live device state before presenting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfflineAnswer {
    pub kind: AnswerKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub needs_context: bool,
}

impl OfflineAnswer {
    pub fn fact(text: impl Into<String>) -> Self {
        Self {
            kind: AnswerKind::Fact,
            text: Some(text.into()),
            needs_context: false,
        }
    }

    pub fn calculation(text: impl Into<String>) -> Self {
        Self {
            kind: AnswerKind::Calculation,
            text: Some(text.into()),
            needs_context: false,
        }
    }

    pub fn snapshot(kind: AnswerKind) -> Self {
        Self {
            kind,
            text: None,
            needs_context: true,
        }
    }
}

/// FAQ category, for analytics on which sales questions come up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaqCategory {
    Pricing,
    Shipping,
    Compatibility,
    Warranty,
}

/// A matched FAQ entry with its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqAnswer {
    pub category: FaqCategory,
    pub text: String,
}
