/// Knobs for the markup -> document direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Retry a quiz payload once after doubling stray backslashes.
    pub repair_quiz_payloads: bool,
    /// Label of the placeholder paragraph that replaces an unusable quiz,
    /// rendered as `[<label>: <topic>]`.
    pub invalid_quiz_label: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            repair_quiz_payloads: true,
            invalid_quiz_label: "Invalid quiz".to_string(),
        }
    }
}

impl ConvertOptions {
    pub fn invalid_quiz_text(&self, topic: &str) -> String {
        format!("[{}: {}]", self.invalid_quiz_label, topic)
    }
}
