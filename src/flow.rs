use std::fmt;

use log::{info, warn};

use crate::model::progress::{AnswerRecord, ProgressState};
use crate::model::question::Question;
use crate::model::summary::{CompletionSummary, project};
use crate::progress_store::ProgressStore;
use crate::report::ScoreReporter;
use crate::scoring::{self, SubmitError};

/// Where the flow sits for the question currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Current question shown, no option chosen yet.
    AwaitingSelection,
    /// Option locked in; correctness and explanation revealed.
    Graded { selected: usize, is_correct: bool },
    /// Terminal for the attempt. Left only through `retry` or `exit`.
    Completed,
}

/// Synchronous change notification, emitted after each state mutation.
/// Views subscribe and recompute instead of being coupled to a re-render.
#[derive(Debug, Clone)]
pub enum QuizEvent {
    Graded { ordinal: usize, is_correct: bool },
    Advanced { ordinal: usize },
    Completed { summary: CompletionSummary },
    Reset,
}

/// Where the UI should navigate when the user presses back. Navigation is
/// read-only: it never mutates answers or the current index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackTarget {
    /// On the first question: leave the level for the parent screen.
    ParentScreen,
    /// Re-view an earlier question.
    Question(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    Submit(SubmitError),
    /// Advance requested while no option has been selected.
    SelectionRequired,
    /// Any action after the attempt reached its terminal state.
    AttemptCompleted,
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::Submit(e) => write!(f, "{e}"),
            FlowError::SelectionRequired => {
                write!(f, "an option must be selected before advancing")
            }
            FlowError::AttemptCompleted => write!(f, "the attempt has already been completed"),
        }
    }
}

impl std::error::Error for FlowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlowError::Submit(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SubmitError> for FlowError {
    fn from(e: SubmitError) -> Self {
        FlowError::Submit(e)
    }
}

type Subscriber = Box<dyn Fn(&QuizEvent)>;

/// Sequences one level's questions, gating advancement on submission, and
/// transitions to `Completed` when the list is exhausted.
///
/// Owned by the UI composition root; everything here runs synchronously on the
/// caller's event loop. Persistence happens on every graded submission, so
/// dropping the flow at any point loses nothing.
pub struct QuizFlow {
    level_id: String,
    questions: Vec<Question>,
    store: ProgressStore,
    state: ProgressState,
    phase: Phase,
    reporter: Option<ScoreReporter>,
    subscribers: Vec<Subscriber>,
}

impl QuizFlow {
    /// Open a level, resuming any persisted progress for it.
    ///
    /// An empty question list, or persisted progress covering every question,
    /// lands directly in `Completed`. Persisted progress that no longer fits
    /// the question list (the level's content changed) starts over from zero.
    pub fn new(level_id: impl Into<String>, questions: Vec<Question>, store: ProgressStore) -> Self {
        let level_id = level_id.into();
        let mut state = store.load(&level_id);
        if state.index > questions.len() || !state.is_consistent() {
            warn!(
                "Persisted progress for level {level_id} does not fit its {} questions, starting over",
                questions.len()
            );
            state = ProgressState::zero();
        }

        let phase = if state.index == questions.len() {
            Phase::Completed
        } else {
            Phase::AwaitingSelection
        };
        info!(
            "Opened level {level_id}: {} of {} questions answered",
            state.index,
            questions.len()
        );

        Self {
            level_id,
            questions,
            store,
            state,
            phase,
            reporter: None,
            subscribers: Vec::new(),
        }
    }

    /// Attach a fire-and-forget score reporter, notified once on completion.
    pub fn with_reporter(mut self, reporter: ScoreReporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Register an observer for change events. Notification is synchronous,
    /// in registration order.
    pub fn subscribe(&mut self, subscriber: impl Fn(&QuizEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&self, event: QuizEvent) {
        for subscriber in &self.subscribers {
            subscriber(&event);
        }
    }

    pub fn level_id(&self) -> &str {
        &self.level_id
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.state.answers
    }

    pub fn progress(&self) -> &ProgressState {
        &self.state
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, Phase::Completed)
    }

    /// Zero-based position of the question currently on screen, if any.
    pub fn current_ordinal(&self) -> Option<usize> {
        match self.phase {
            Phase::AwaitingSelection => Some(self.state.index),
            Phase::Graded { .. } => Some(self.state.index - 1),
            Phase::Completed => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_ordinal().map(|i| &self.questions[i])
    }

    /// Lock in the user's selection for the current question and grade it.
    ///
    /// First selection wins: once the question is graded, further selections
    /// are rejected without touching state. Returns whether the selection was
    /// correct.
    pub fn select(&mut self, option: usize) -> Result<bool, FlowError> {
        match self.phase {
            Phase::AwaitingSelection => {}
            Phase::Graded { .. } => {
                let question_id = self.questions[self.state.index - 1].id;
                return Err(SubmitError::AlreadyAnswered { question_id }.into());
            }
            Phase::Completed => return Err(FlowError::AttemptCompleted),
        }

        let ordinal = self.state.index;
        let question = &self.questions[ordinal];
        let graded = scoring::submit(question, &self.state, ordinal, option)?;

        self.state = graded.state;
        self.store.save(&self.level_id, &self.state);
        self.phase = Phase::Graded {
            selected: option,
            is_correct: graded.is_correct,
        };
        self.notify(QuizEvent::Graded {
            ordinal,
            is_correct: graded.is_correct,
        });
        Ok(graded.is_correct)
    }

    /// Move on from a graded question: to the next question, or to `Completed`
    /// when the graded question was the last one. Rejected while a selection
    /// is still pending.
    pub fn advance(&mut self) -> Result<&Phase, FlowError> {
        match self.phase {
            Phase::Graded { .. } => {}
            Phase::AwaitingSelection => return Err(FlowError::SelectionRequired),
            Phase::Completed => return Err(FlowError::AttemptCompleted),
        }

        if self.state.index == self.questions.len() {
            self.phase = Phase::Completed;
            let summary = project(&self.state.answers);
            info!(
                "Level {} completed: {}/{} correct",
                self.level_id, summary.correct_count, summary.total
            );
            if let Some(reporter) = &self.reporter {
                reporter.report(&self.level_id, &summary);
            }
            self.notify(QuizEvent::Completed { summary });
        } else {
            self.phase = Phase::AwaitingSelection;
            self.notify(QuizEvent::Advanced {
                ordinal: self.state.index,
            });
        }
        Ok(&self.phase)
    }

    /// Navigation target for the back control: the parent screen from the
    /// first question, the previous question otherwise. From the completion
    /// screen it re-views the last question.
    pub fn back(&self) -> BackTarget {
        match self.current_ordinal().unwrap_or(self.questions.len()) {
            0 => BackTarget::ParentScreen,
            n => BackTarget::Question(n - 1),
        }
    }

    /// Start the attempt over: drop persisted progress and re-enter at the
    /// first question with empty answers.
    pub fn retry(&mut self) {
        self.store.clear(&self.level_id);
        self.state = ProgressState::zero();
        self.phase = if self.questions.is_empty() {
            Phase::Completed
        } else {
            Phase::AwaitingSelection
        };
        self.notify(QuizEvent::Reset);
    }

    /// Leave the level without resetting. Progress was persisted on every
    /// submission, so a later re-entry resumes where the user left off.
    pub fn exit(self) {}

    /// Project the completion summary over the answers recorded so far.
    pub fn summary(&self) -> CompletionSummary {
        project(&self.state.answers)
    }
}
