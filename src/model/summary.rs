use serde::{Deserialize, Serialize};

use crate::model::progress::AnswerRecord;

/// Three-way classification of a finished attempt. It picks which completion
/// illustration and which primary call-to-action the UI shows; no other logic
/// depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    AllWrong,
    Partial,
    AllCorrect,
}

impl Outcome {
    /// Asset name for the completion screen. Perfect runs get their own
    /// illustration; everything else shares one.
    pub fn illustration(&self) -> &'static str {
        match self {
            Outcome::AllCorrect => "quiz-complete-perfect",
            Outcome::AllWrong | Outcome::Partial => "quiz-complete-partial",
        }
    }

    /// Label for the primary call-to-action on the completion screen.
    pub fn cta_label(&self) -> &'static str {
        match self {
            Outcome::AllCorrect => "retry",
            Outcome::AllWrong | Outcome::Partial => "review mistakes",
        }
    }
}

/// Display-ready report for a completed attempt. Derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSummary {
    pub total: usize,
    pub correct_count: usize,
    /// Submission order preserved, for the O/X marker row.
    pub per_question_outcomes: Vec<bool>,
    pub outcome: Outcome,
}

impl CompletionSummary {
    /// Correct answers as a whole percentage. Zero for an empty attempt.
    pub fn percent_correct(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct_count * 100 / self.total) as u32
    }
}

/// Project recorded answers into a completion summary.
///
/// An empty attempt (a level with no questions) falls through to `Partial`,
/// the neutral presentation.
pub fn project(answers: &[AnswerRecord]) -> CompletionSummary {
    let total = answers.len();
    let per_question_outcomes: Vec<bool> = answers.iter().map(|a| a.is_correct).collect();
    let correct_count = per_question_outcomes.iter().filter(|c| **c).count();

    let outcome = if total > 0 && correct_count == 0 {
        Outcome::AllWrong
    } else if total > 0 && correct_count == total {
        Outcome::AllCorrect
    } else {
        Outcome::Partial
    };

    CompletionSummary {
        total,
        correct_count,
        per_question_outcomes,
        outcome,
    }
}
