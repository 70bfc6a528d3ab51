use serde::{Deserialize, Serialize};

// === Answer Record ===
// One record per question per attempt, stored in submission order. Correctness
// is computed once, at submission time, and never recomputed.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: u32,
    pub selected_option: usize,
    pub is_correct: bool,
}

/// How far a user has advanced through one level, and what they answered.
///
/// Invariant: `answers.len() == index` after every successful submission; the
/// index only returns to 0 through an explicit reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub index: usize,
    pub answers: Vec<AnswerRecord>,
}

impl ProgressState {
    /// The state a level starts in when nothing has been persisted for it.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_consistent(&self) -> bool {
        self.answers.len() == self.index
    }
}
