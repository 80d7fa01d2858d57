use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A prompt that fills the answer variable named by its `identifier`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Question {
    /// `options` maps each answer value to the label shown for it.
    MultipleChoice {
        identifier: String,
        options: IndexMap<String, String>,
    },
    Date {
        identifier: String,
    },
    Salary {
        identifier: String,
    },
    Text {
        identifier: String,
    },
}

impl Question {
    pub fn identifier(&self) -> &str {
        match self {
            Question::MultipleChoice { identifier, .. }
            | Question::Date { identifier }
            | Question::Salary { identifier }
            | Question::Text { identifier } => identifier,
        }
    }
}
