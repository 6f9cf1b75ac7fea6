//! Search-result disambiguation.
//!
//! [`MetadataResolver`] turns a [`ParsedKey`] into exactly one
//! [`ResolvedMetadata`]: it searches the provider, auto-accepts the
//! provider's first-ranked candidate when that is unambiguous, and otherwise
//! defers to an [`InteractiveSelector`].
//!
//! The resolver holds no mutable state, so one instance can serve many
//! concurrent resolutions.

use std::sync::Arc;

use autotag_core::{CoverArt, Error, MediaKind, ResolvedMetadata, Result, StatusSink};
use autotag_parser::ParsedKey;
use chrono::Datelike;
use tracing::debug;

use crate::config::ResolutionConfig;
use crate::metadata::{MetadataProvider, SearchResult};
use crate::selector::{CandidateOption, InteractiveSelector};

/// Resolves parsed keys against a metadata provider.
#[derive(Clone)]
pub struct MetadataResolver {
    provider: Arc<dyn MetadataProvider>,
    kind: MediaKind,
    config: ResolutionConfig,
}

impl MetadataResolver {
    /// Create a resolver for `kind` backed by `provider`.
    pub fn new(provider: Arc<dyn MetadataProvider>, kind: MediaKind, config: ResolutionConfig) -> Self {
        Self {
            provider,
            kind,
            config,
        }
    }

    /// Resolve `key` to a single metadata record.
    ///
    /// A search failure, an empty result list, an out-of-range selection and
    /// a selected candidate without a release date are errors. A candidate
    /// without artwork is returned with `artwork_available == false` after an
    /// error-severity message is sent to `status`.
    pub async fn resolve(
        &self,
        key: ParsedKey,
        selector: &dyn InteractiveSelector,
        status: &dyn StatusSink,
    ) -> Result<ResolvedMetadata> {
        let provider = self.provider.name();
        let candidates = self.search(&key).await?;
        if candidates.is_empty() {
            return Err(Error::not_found(key.title, provider));
        }

        let selected = self.select(&key, candidates, selector)?;

        let release_date = selected.release_date.ok_or_else(|| Error::MissingReleaseDate {
            title: selected.title.clone(),
            provider: provider.to_string(),
        })?;

        status.info(&format!(
            "Found {} ({}) on {}",
            selected.title,
            release_date.year(),
            provider
        ));

        let cover = selected
            .poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| CoverArt::from_fragment(self.provider.artwork_url(path), path));
        let artwork_available = cover.is_some();

        if !artwork_available {
            let err = Error::ArtworkMissing {
                kind: self.kind.to_string(),
            };
            status.report(&format!("Error: {err}"), err.severity());
        }

        Ok(ResolvedMetadata {
            kind: self.kind,
            title: selected.title,
            overview: selected.overview.unwrap_or_default(),
            cover,
            release_date,
            found: true,
            artwork_available,
        })
    }

    async fn search(&self, key: &ParsedKey) -> Result<Vec<SearchResult>> {
        debug!(title = %key.title, year = ?key.year, kind = %self.kind, "searching provider");
        let result = match self.kind {
            MediaKind::Movie => self.provider.search_movie(&key.title, key.year).await,
        };
        let candidates =
            result.map_err(|e| Error::search_failed(key.title.as_str(), self.provider.name(), e))?;
        debug!(count = candidates.len(), "search returned candidates");
        Ok(candidates)
    }

    /// Pick one candidate out of a non-empty list, asking `selector` only
    /// when necessary.
    fn select(
        &self,
        key: &ParsedKey,
        mut candidates: Vec<SearchResult>,
        selector: &dyn InteractiveSelector,
    ) -> Result<SearchResult> {
        let index = if needs_selection(key, &candidates, self.config) {
            self.ask(&candidates, selector)
        } else {
            debug!("auto-selecting first-ranked candidate");
            0
        };

        if index >= candidates.len() {
            return Err(Error::InvalidSelection {
                index,
                count: candidates.len(),
            });
        }
        Ok(candidates.swap_remove(index))
    }

    fn ask(&self, candidates: &[SearchResult], selector: &dyn InteractiveSelector) -> usize {
        let options: Vec<CandidateOption> = candidates.iter().map(CandidateOption::from).collect();
        let index = selector.choose(&options);
        debug!(index, count = options.len(), "selector returned");
        index
    }
}

/// Whether the candidate list is ambiguous enough to need a selector.
///
/// A single candidate is always auto-selected, whatever `manual_mode` says.
/// With several candidates the first is auto-selected only when its title
/// equals the parsed title exactly and manual mode is off.
pub fn needs_selection(key: &ParsedKey, candidates: &[SearchResult], config: ResolutionConfig) -> bool {
    match candidates {
        [] | [_] => false,
        [first, ..] => config.manual_mode || first.title != key.title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn candidate(title: &str) -> SearchResult {
        SearchResult {
            id: title.to_lowercase(),
            title: title.into(),
            release_date: NaiveDate::from_ymd_opt(2000, 1, 1),
            overview: None,
            poster_path: None,
            provider_name: "mock".into(),
        }
    }

    const AUTO: ResolutionConfig = ResolutionConfig { manual_mode: false };
    const MANUAL: ResolutionConfig = ResolutionConfig { manual_mode: true };

    #[test]
    fn single_candidate_never_needs_selection() {
        let key = ParsedKey::new("Heat");
        assert!(!needs_selection(&key, &[candidate("Heat")], AUTO));
        assert!(!needs_selection(&key, &[candidate("Heat")], MANUAL));
        assert!(!needs_selection(&key, &[candidate("Other")], AUTO));
    }

    #[test]
    fn exact_first_title_auto_selects() {
        let key = ParsedKey::new("Heat");
        let list = [candidate("Heat"), candidate("Heat Wave")];
        assert!(!needs_selection(&key, &list, AUTO));
    }

    #[test]
    fn manual_mode_forces_selection_with_several_candidates() {
        let key = ParsedKey::new("Heat");
        let list = [candidate("Heat"), candidate("Heat Wave")];
        assert!(needs_selection(&key, &list, MANUAL));
    }

    #[test]
    fn inexact_first_title_needs_selection() {
        let key = ParsedKey::new("heat");
        let list = [candidate("Heat"), candidate("Heat Wave")];
        assert!(needs_selection(&key, &list, AUTO));
    }

    #[test]
    fn empty_list_needs_no_selection() {
        assert!(!needs_selection(&ParsedKey::new("Heat"), &[], AUTO));
    }
}
