use alloc::string::String;
use serde::{Deserialize, Serialize};

/// A trivia question as stored and as echoed back to clients.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i32,
    /// Text of the question itself. Never empty.
    pub question: String,
    /// Expected answer. Never empty.
    pub answer: String,
    /// Identifier of the [`Category`]. Not enforced as a foreign key.
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: i32,
    /// Display name of the category.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Acceptable schema for new questions.
#[derive(Debug, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "crate::request::id::deserialize")]
    pub category: i32,
    #[serde(deserialize_with = "crate::request::id::deserialize")]
    pub difficulty: i32,
}

impl NewQuestion {
    /// Whether both text fields carry something to store.
    pub fn is_complete(&self) -> bool {
        !self.question.is_empty() && !self.answer.is_empty()
    }
}
