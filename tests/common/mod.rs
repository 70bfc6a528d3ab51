#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use finsight_quiz::model::question::Question;
use finsight_quiz::progress_store::ProgressStore;
use finsight_quiz::storage::{FileBackend, MemoryBackend};

static NEXT_DIR: AtomicU32 = AtomicU32::new(0);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fresh directory for a file-backed store, unique per test invocation.
pub fn temp_storage_dir(label: &str) -> PathBuf {
    let n = NEXT_DIR.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "finsight-quiz-test-{}-{label}-{n}",
        std::process::id()
    ))
}

pub fn question(id: u32, options: &[&str], correct: usize) -> Question {
    Question {
        id,
        prompt: format!("Question {id}"),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_option: correct,
        explanation: format!("Explanation for question {id}"),
    }
}

/// Four-question level. Correct options: 1, 0, 2, 1.
pub fn four_question_level() -> Vec<Question> {
    vec![
        question(1, &["a", "b", "c"], 1),
        question(2, &["a", "b"], 0),
        question(3, &["a", "b", "c", "d"], 2),
        question(4, &["a", "b", "c"], 1),
    ]
}

/// Two-question level with correct options 0 and 2.
pub fn two_question_level() -> Vec<Question> {
    vec![
        question(1, &["a", "b", "c"], 0),
        question(2, &["a", "b", "c"], 2),
    ]
}

pub fn memory_store() -> ProgressStore {
    ProgressStore::new(Box::new(MemoryBackend::new()), "finsight")
}

pub fn file_store(dir: &PathBuf) -> ProgressStore {
    ProgressStore::new(Box::new(FileBackend::new(dir.clone())), "finsight")
}
