use serde::{Deserialize, Serialize};

// === Question ===
// Questions arrive as JSON from the question source (bundled or remote) and
// are immutable for the duration of an attempt.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Stable within a level.
    pub id: u32,
    pub prompt: String,
    /// 2-5 display strings, in presentation order.
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct_option: usize,
    /// Revealed once the question has been graded.
    pub explanation: String,
}
