use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One question record of a quiz payload.
///
/// The converter only checks that a payload is an array; this type is a
/// lenient typed view for consumers, so every field falls back to its default
/// when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    /// Question kind as produced upstream (e.g. `"multiple-choice"`).
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub options: Vec<String>,
    /// Indices or option texts, depending on the producer.
    pub correct_answers: Vec<Value>,
    pub explanation: String,
}

/// Parses stored `quizzesData` text into typed question records.
pub fn parse_questions(quizzes_data: &str) -> Result<Vec<QuizQuestion>, serde_json::Error> {
    serde_json::from_str(quizzes_data)
}
