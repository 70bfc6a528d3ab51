use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use log::info;
use url::Url;

use crate::model::question::Question;

/// Supplies the ordered, finite question list for a level. The list must stay
/// stable for the duration of one attempt.
pub trait QuestionSource {
    fn level(&self, level_id: &str) -> Option<Vec<Question>>;
}

/// Bundled, in-process question sets.
#[derive(Debug, Default)]
pub struct StaticSource {
    levels: HashMap<String, Vec<Question>>,
}

impl StaticSource {
    pub fn new(levels: HashMap<String, Vec<Question>>) -> Self {
        Self { levels }
    }

    /// Source preloaded with the bundled sample levels.
    pub fn with_sample_levels() -> Self {
        Self::new(crate::sample_data::sample_levels())
    }
}

impl QuestionSource for StaticSource {
    fn level(&self, level_id: &str) -> Option<Vec<Question>> {
        self.levels.get(level_id).cloned()
    }
}

/// A fetch result tagged with the level it was requested for. The tag is what
/// lets a caller throw away a response that resolved after the user already
/// moved to a different level.
#[derive(Debug, Clone)]
pub struct FetchedLevel {
    pub level_id: String,
    pub questions: Vec<Question>,
}

impl FetchedLevel {
    /// True when this response still belongs to the active level.
    pub fn is_for(&self, active_level_id: &str) -> bool {
        self.level_id == active_level_id
    }
}

/// Question source backed by the Finsight backend.
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: Url,
}

impl RemoteSource {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the question list for a level. The result carries the requested
    /// level id so stale responses can be discarded via [`FetchedLevel::is_for`].
    pub async fn fetch(&self, level_id: &str) -> Result<FetchedLevel> {
        let url = self
            .base_url
            .join(&format!("levels/{level_id}/questions"))
            .context("building question list URL")?;

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("requesting question list")?;
        if !resp.status().is_success() {
            bail!(
                "question list request for level {level_id} returned {}",
                resp.status()
            );
        }

        let questions: Vec<Question> = resp.json().await.context("decoding question list")?;
        info!("Fetched {} questions for level {level_id}", questions.len());

        Ok(FetchedLevel {
            level_id: level_id.to_string(),
            questions,
        })
    }
}
