//! Shared test doubles for integration tests.
//!
//! Provides a deterministic [`MockProvider`], a [`RecordingStatus`] sink, a
//! [`ScriptedSelector`] that counts how often it is consulted, and a
//! [`RecordingWriter`].

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use autotag::metadata::{MetadataProvider, SearchResult};
use autotag::{CandidateOption, InteractiveSelector, MessageType, ResolvedMetadata, StatusSink, TagWriter};
use chrono::NaiveDate;
use parking_lot::Mutex;

pub const MOCK_IMAGE_BASE: &str = "https://images.test/original";

/// Build a search row dated January 1st of `year`.
pub fn candidate(title: &str, year: Option<i32>, poster: Option<&str>) -> SearchResult {
    SearchResult {
        id: format!("{}-{}", title.to_lowercase().replace(' ', "-"), year.unwrap_or(0)),
        title: title.to_string(),
        release_date: year.and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)),
        overview: Some(format!("Overview of {title}")),
        poster_path: poster.map(str::to_string),
        provider_name: "mock".to_string(),
    }
}

/// Provider returning a fixed candidate list and recording every query.
pub struct MockProvider {
    results: Vec<SearchResult>,
    fail: bool,
    calls: Mutex<Vec<(String, Option<u16>)>>,
}

impl MockProvider {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A provider whose every search fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn calls(&self) -> Vec<(String, Option<u16>)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl MetadataProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn search_movie(
        &self,
        title: &str,
        year: Option<u16>,
    ) -> anyhow::Result<Vec<SearchResult>> {
        self.calls.lock().push((title.to_string(), year));
        if self.fail {
            anyhow::bail!("connection refused");
        }
        Ok(self.results.clone())
    }

    fn artwork_url(&self, path: &str) -> String {
        format!("{MOCK_IMAGE_BASE}{path}")
    }
}

/// Status sink that keeps every message in order.
#[derive(Default)]
pub struct RecordingStatus {
    messages: Mutex<Vec<(String, MessageType)>>,
}

impl RecordingStatus {
    pub fn messages(&self) -> Vec<(String, MessageType)> {
        self.messages.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.with_kind(MessageType::Error)
    }

    pub fn infos(&self) -> Vec<String> {
        self.with_kind(MessageType::Information)
    }

    fn with_kind(&self, kind: MessageType) -> Vec<String> {
        self.messages
            .lock()
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(m, _)| m.clone())
            .collect()
    }
}

impl StatusSink for RecordingStatus {
    fn report(&self, message: &str, kind: MessageType) {
        self.messages.lock().push((message.to_string(), kind));
    }
}

/// Selector that always returns `choice` and records what it was shown.
pub struct ScriptedSelector {
    choice: usize,
    calls: AtomicUsize,
    shown: Mutex<Vec<CandidateOption>>,
}

impl ScriptedSelector {
    pub fn new(choice: usize) -> Self {
        Self {
            choice,
            calls: AtomicUsize::new(0),
            shown: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Options passed on the most recent call.
    pub fn shown(&self) -> Vec<CandidateOption> {
        self.shown.lock().clone()
    }
}

impl InteractiveSelector for ScriptedSelector {
    fn choose(&self, options: &[CandidateOption]) -> usize {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.shown.lock() = options.to_vec();
        self.choice
    }
}

/// Writer that stores records instead of tagging files.
pub struct RecordingWriter {
    succeed: bool,
    written: Mutex<Vec<(PathBuf, ResolvedMetadata)>>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self {
            succeed: true,
            written: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            succeed: false,
            ..Self::new()
        }
    }

    pub fn written(&self) -> Vec<(PathBuf, ResolvedMetadata)> {
        self.written.lock().clone()
    }
}

impl TagWriter for RecordingWriter {
    fn write(&self, path: &Path, metadata: &ResolvedMetadata, _status: &dyn StatusSink) -> bool {
        self.written.lock().push((path.to_path_buf(), metadata.clone()));
        self.succeed
    }
}
