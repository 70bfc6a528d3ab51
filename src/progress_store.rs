use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::model::progress::{AnswerRecord, ProgressState};
use crate::storage::StorageBackend;

/// Persisted envelope. Records which level wrote it so a blob left behind by a
/// different level never resumes the wrong attempt.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredProgress {
    level: String,
    index: usize,
    answers: Vec<AnswerRecord>,
}

/// Per-level persistence for [`ProgressState`].
///
/// Keys are namespaced per level and opaque to the rest of the crate. Loads
/// never fail and saves are best-effort: when the backend rejects a write, the
/// in-memory state stays authoritative for the rest of the session.
pub struct ProgressStore {
    backend: Box<dyn StorageBackend>,
    namespace: String,
}

impl ProgressStore {
    pub fn new(backend: Box<dyn StorageBackend>, namespace: impl Into<String>) -> Self {
        Self {
            backend,
            namespace: namespace.into(),
        }
    }

    /// Storage key for a level: `{namespace}:{level_id}:progress`.
    fn key(&self, level_id: &str) -> String {
        format!("{}:{}:progress", self.namespace, level_id)
    }

    /// Read the persisted state for a level. Absent, unreadable, malformed, or
    /// level-mismatched data all degrade to the zero state.
    pub fn load(&self, level_id: &str) -> ProgressState {
        let key = self.key(level_id);
        let raw = match self.backend.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ProgressState::zero(),
            Err(e) => {
                warn!("Failed to read progress for level {level_id}: {e:#}");
                return ProgressState::zero();
            }
        };

        match serde_json::from_str::<StoredProgress>(&raw) {
            Ok(stored) if stored.level == level_id => ProgressState {
                index: stored.index,
                answers: stored.answers,
            },
            Ok(stored) => {
                warn!(
                    "Progress stored under {key} belongs to level {}, ignoring",
                    stored.level
                );
                ProgressState::zero()
            }
            Err(e) => {
                warn!("Malformed progress for level {level_id}, starting fresh: {e}");
                ProgressState::zero()
            }
        }
    }

    /// Persist the state for a level. Full overwrite, no merge semantics.
    pub fn save(&mut self, level_id: &str, state: &ProgressState) {
        let stored = StoredProgress {
            level: level_id.to_string(),
            index: state.index,
            answers: state.answers.clone(),
        };
        let raw = match serde_json::to_string(&stored) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize progress for level {level_id}: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.set(&self.key(level_id), &raw) {
            warn!("Failed to persist progress for level {level_id}: {e:#}");
        }
    }

    /// Remove the persisted entry entirely, so the next `load` takes the
    /// absent path.
    pub fn clear(&mut self, level_id: &str) {
        match self.backend.delete(&self.key(level_id)) {
            Ok(()) => info!("Cleared progress for level {level_id}"),
            Err(e) => warn!("Failed to clear progress for level {level_id}: {e:#}"),
        }
    }
}
