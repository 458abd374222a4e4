use serde::{Deserialize, Serialize};

use crate::answer::{FaqAnswer, OfflineAnswer};
use crate::command::Command;
use crate::fun::FunResponse;
use crate::question::Question;

/// The single result of one pipeline invocation — exactly one variant.
///
/// Command and Question are mutually exclusive by construction; there is no
/// `is_command` boolean to keep in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Classification {
    Command(Command),
    Question(Question),
    Faq(FaqAnswer),
    Offline(OfflineAnswer),
    Fun(FunResponse),
}

impl Classification {
    pub fn is_command(&self) -> bool {
        matches!(self, Classification::Command(_))
    }

    /// Which tier produced this result, for logging/analytics.
    pub fn tier(&self) -> &'static str {
        match self {
            Classification::Command(_) => "command",
            Classification::Question(_) => "question",
            Classification::Faq(_) => "faq",
            Classification::Offline(_) => "offline",
            Classification::Fun(_) => "fun",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_serialization() {
        let c = Classification::Command(Command::ShowScore);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["result"], "command");
        assert_eq!(json["action"], "show_score");
    }

    #[test]
    fn question_is_not_command() {
        let c = Classification::Question(Question::new("why is my bill high"));
        assert!(!c.is_command());
        assert_eq!(c.tier(), "question");
    }
}
