//! Quiz-progress engine for the Finsight learning app.
//!
//! Tracks per-level quiz progress (current question, recorded answers),
//! persists it through a pluggable key-value backend, and projects a
//! completion summary once a level's question list is exhausted. The state
//! machine itself is synchronous; the remote collaborators (question fetch,
//! score reporting) are the only async surfaces.

pub mod config;
pub mod flow;
pub mod model;
pub mod progress_store;
pub mod report;
pub mod sample_data;
pub mod scoring;
pub mod source;
pub mod storage;

pub use config::AppConfig;
pub use flow::{BackTarget, FlowError, Phase, QuizEvent, QuizFlow};
pub use model::progress::{AnswerRecord, ProgressState};
pub use model::question::Question;
pub use model::summary::{CompletionSummary, Outcome, project};
pub use progress_store::ProgressStore;
pub use report::ScoreReporter;
pub use scoring::{Graded, SubmitError, submit};
pub use source::{FetchedLevel, QuestionSource, RemoteSource, StaticSource};
pub use storage::{FileBackend, MemoryBackend, StorageBackend};
