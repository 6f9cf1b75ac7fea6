use serde::{Deserialize, Serialize};

use crate::metadata::providers::tmdb::TMDB_BASE_URL;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,

    #[serde(default)]
    pub resolution: ResolutionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TmdbConfig {
    /// TMDB v3 API key (overridden by the `TMDB_API_KEY` environment variable)
    #[serde(default)]
    pub api_key: String,

    /// Language tag sent with every request
    #[serde(default = "default_language")]
    pub language: String,

    /// API root, for mirrors or local test servers
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: default_language(),
            base_url: default_base_url(),
        }
    }
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_base_url() -> String {
    TMDB_BASE_URL.to_string()
}

/// Options that shape how an ambiguous search is resolved.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResolutionConfig {
    /// Always ask the selector when more than one candidate is returned,
    /// even if the first one matches the parsed title exactly.
    #[serde(default)]
    pub manual_mode: bool,
}
