use log::{info, warn};
use serde::Serialize;
use url::Url;

use crate::model::summary::CompletionSummary;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreReport {
    level_id: String,
    total: usize,
    correct_count: usize,
    per_question_outcomes: Vec<bool>,
}

/// Fire-and-forget completion reporting to the Finsight backend.
///
/// Failures are logged and dropped; the local completed state never depends on
/// the report landing.
#[derive(Debug, Clone)]
pub struct ScoreReporter {
    client: reqwest::Client,
    endpoint: Url,
}

impl ScoreReporter {
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: base_url.join("quiz/complete")?,
        })
    }

    /// Post the final score in a detached task. Needs a running tokio runtime;
    /// without one the report is skipped with a warning.
    pub fn report(&self, level_id: &str, summary: &CompletionSummary) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime available, skipping score report for level {level_id}");
            return;
        };

        let payload = ScoreReport {
            level_id: level_id.to_string(),
            total: summary.total,
            correct_count: summary.correct_count,
            per_question_outcomes: summary.per_question_outcomes.clone(),
        };
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let level = level_id.to_string();

        handle.spawn(async move {
            match client.post(endpoint).json(&payload).send().await {
                Ok(resp) if resp.status().is_success() => {
                    info!("Reported score for level {level}");
                }
                Ok(resp) => {
                    warn!("Score report for level {level} rejected: {}", resp.status());
                }
                Err(e) => {
                    warn!("Score report for level {level} failed: {e}");
                }
            }
        });
    }
}
