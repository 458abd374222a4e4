use serde::{Deserialize, Serialize};

/// A personality-tier reply.
///
/// `fallback` marks the generic catch-all response; a fallback is defeated by
/// any command-likelihood or technical-vocabulary signal in the query, so a
/// technical question never receives a joke instead of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunResponse {
    pub key: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

impl FunResponse {
    pub fn keyed(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            fallback: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_response_is_not_fallback() {
        let r = FunResponse::keyed("joke", "Why did the heat pump cross the road?");
        assert!(!r.fallback);
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("fallback"));
    }
}
