use std::fmt;

use crate::model::progress::{AnswerRecord, ProgressState};
use crate::model::question::Question;

/// Rejection reasons for a submission. Both are programmer-error class: a
/// correctly wired UI never produces them, so they are guarded rather than
/// panicked on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The selected index does not point into the question's options.
    OptionOutOfRange { selected: usize, option_count: usize },
    /// The question at this position was already graded this attempt.
    AlreadyAnswered { question_id: u32 },
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::OptionOutOfRange {
                selected,
                option_count,
            } => write!(
                f,
                "option {selected} is out of range for a question with {option_count} options"
            ),
            SubmitError::AlreadyAnswered { question_id } => {
                write!(f, "question {question_id} was already answered this attempt")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// Result of grading one submission.
#[derive(Debug, Clone)]
pub struct Graded {
    pub state: ProgressState,
    pub is_correct: bool,
    /// Equal to `state.index`; callers compare it to the total question count
    /// to detect that the last question was just answered.
    pub next_index: usize,
}

/// Grade a selection against `question` and produce the next progress state.
///
/// Pure and synchronous: appends one answer record and advances the index in
/// lockstep. `ordinal` is the question's zero-based position within the level;
/// a submission for an ordinal the state has already moved past is rejected.
pub fn submit(
    question: &Question,
    state: &ProgressState,
    ordinal: usize,
    selected: usize,
) -> Result<Graded, SubmitError> {
    if selected >= question.options.len() {
        return Err(SubmitError::OptionOutOfRange {
            selected,
            option_count: question.options.len(),
        });
    }
    if state.index > ordinal {
        return Err(SubmitError::AlreadyAnswered {
            question_id: question.id,
        });
    }

    let is_correct = selected == question.correct_option;
    let mut next = state.clone();
    next.answers.push(AnswerRecord {
        question_id: question.id,
        selected_option: selected,
        is_correct,
    });
    next.index += 1;
    let next_index = next.index;

    Ok(Graded {
        state: next,
        is_correct,
        next_index,
    })
}
