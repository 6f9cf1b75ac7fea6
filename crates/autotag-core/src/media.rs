//! Media-domain types produced by a resolution.
//!
//! [`ResolvedMetadata`] is the record handed to a tag writer once a filename
//! has been matched to exactly one provider entry.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// MediaKind
// ---------------------------------------------------------------------------

/// The kind of media a file was resolved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
        }
    }
}

// ---------------------------------------------------------------------------
// CoverArt
// ---------------------------------------------------------------------------

/// Where the cover image lives and what to call it once downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverArt {
    /// Fully-qualified image URL.
    pub url: String,
    /// File name derived from the provider's path fragment.
    pub file_name: String,
}

impl CoverArt {
    /// Build a cover reference from a provider path fragment such as
    /// `"/abc123.jpg"` and the full URL it resolves to.
    pub fn from_fragment(url: impl Into<String>, fragment: &str) -> Self {
        Self {
            url: url.into(),
            file_name: fragment.replace('/', ""),
        }
    }
}

// ---------------------------------------------------------------------------
// ResolvedMetadata
// ---------------------------------------------------------------------------

/// The authoritative metadata record for one media file.
///
/// `found` and `artwork_available` are independent: a record with
/// `found == true` and `artwork_available == false` is a partial success
/// that a writer may still apply as text-only metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMetadata {
    pub kind: MediaKind,
    pub title: String,
    /// Synopsis text; empty when the provider has none.
    pub overview: String,
    pub cover: Option<CoverArt>,
    pub release_date: NaiveDate,
    pub found: bool,
    pub artwork_available: bool,
}

impl ResolvedMetadata {
    /// Release year taken from [`ResolvedMetadata::release_date`].
    pub fn year(&self) -> i32 {
        self.release_date.year()
    }

    /// Whether both a match and its artwork were obtained.
    pub fn is_complete(&self) -> bool {
        self.found && self.artwork_available
    }
}

impl fmt::Display for ResolvedMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year())
    }
}
