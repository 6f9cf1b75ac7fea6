//! Trait definition and types for metadata providers.
//!
//! This module defines the [`MetadataProvider`] trait that metadata backends
//! implement, along with the [`SearchResult`] rows returned by a search.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Search results
// ---------------------------------------------------------------------------

/// A single candidate returned from a metadata search query.
///
/// Search rows carry everything needed to build a
/// [`ResolvedMetadata`](autotag_core::ResolvedMetadata), so no follow-up
/// detail request is made once a candidate is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Provider-specific identifier for this item (e.g. TMDB numeric ID).
    pub id: String,
    /// Display title of the item.
    pub title: String,
    /// Release date, if the provider knows it.
    pub release_date: Option<NaiveDate>,
    /// Short synopsis / overview text.
    pub overview: Option<String>,
    /// Path fragment for the poster image (e.g. `"/abc123.jpg"`), if any.
    pub poster_path: Option<String>,
    /// Name of the provider that returned this result (e.g. "tmdb").
    pub provider_name: String,
}

impl SearchResult {
    /// Release year derived from [`SearchResult::release_date`].
    pub fn year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }
}

// ---------------------------------------------------------------------------
// Provider trait
// ---------------------------------------------------------------------------

/// Async trait that metadata providers implement.
///
/// Providers are read-only after construction and are shared across
/// concurrent resolutions behind an `Arc`.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Short, lowercase identifier for this provider (e.g. `"tmdb"`).
    fn name(&self) -> &'static str;

    /// Returns `true` when the provider has been configured with valid
    /// credentials and is ready to serve requests.
    fn is_available(&self) -> bool;

    /// Search for movies matching `title`, optionally constrained by `year`.
    ///
    /// Results come back in the provider's relevance order, which callers
    /// treat as authoritative.
    async fn search_movie(
        &self,
        title: &str,
        year: Option<u16>,
    ) -> anyhow::Result<Vec<SearchResult>>;

    /// Turn a poster path fragment into a fully-qualified image URL.
    fn artwork_url(&self, path: &str) -> String;
}
