use std::env;
use std::path::PathBuf;

use log::warn;
use url::Url;

/// Runtime configuration, read from the environment. A `.env` file is honored
/// when present.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the Finsight backend. When unset or unparsable, the remote
    /// question source and score reporting are disabled.
    pub api_base_url: Option<Url>,
    /// Directory for the file-backed progress store.
    pub storage_dir: PathBuf,
    /// Namespace prefixed onto every storage key.
    pub storage_namespace: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("FINSIGHT_API_URL").ok().and_then(|raw| {
            Url::parse(&raw)
                .map_err(|e| {
                    warn!("FINSIGHT_API_URL is not a valid URL, remote calls disabled: {e}")
                })
                .ok()
        });

        let storage_dir = env::var("FINSIGHT_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".finsight"));

        let storage_namespace =
            env::var("FINSIGHT_STORAGE_NAMESPACE").unwrap_or_else(|_| "finsight".to_string());

        Self {
            api_base_url,
            storage_dir,
            storage_namespace,
        }
    }
}
