//! Unified error type for autotag.
//!
//! Every stage of a file's resolution funnels its failures into [`Error`],
//! which carries enough context for the orchestrator to report the failure
//! through the status sink with the right [`MessageType`] via
//! [`Error::severity`].

use crate::status::MessageType;

/// Unified error type covering all failure modes of a resolution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The filename did not yield a usable title.
    #[error("failed to parse required information from filename: {filename}")]
    UnparsableFilename {
        /// The filename that was handed to the parser.
        filename: String,
    },

    /// The metadata provider could not be queried.
    #[error("search for {title} on {provider} failed: {source}")]
    SearchFailed {
        /// The title that was searched for.
        title: String,
        /// Name of the provider that failed.
        provider: String,
        /// The underlying transport or service error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The provider returned zero candidates.
    #[error("failed to find title {title} on {provider}")]
    NotFound {
        /// The title that was searched for.
        title: String,
        /// Name of the provider that was searched.
        provider: String,
    },

    /// A record was matched but no cover image reference is available.
    #[error("failed to fetch {kind} cover")]
    ArtworkMissing {
        /// Lowercase media kind label (e.g. "movie").
        kind: String,
    },

    /// The interactive selector returned an index outside the candidate list.
    #[error("selection {index} is out of range for {count} candidates")]
    InvalidSelection {
        /// The index returned by the selector.
        index: usize,
        /// Number of candidates that were offered.
        count: usize,
    },

    /// The selected candidate carries no release date.
    #[error("{provider} returned no release date for {title}")]
    MissingReleaseDate {
        /// Display title of the selected candidate.
        title: String,
        /// Name of the provider that returned the candidate.
        provider: String,
    },
}

impl Error {
    /// Severity with which this error is reported to the status sink.
    pub fn severity(&self) -> MessageType {
        MessageType::Error
    }

    /// Convenience constructor for [`Error::UnparsableFilename`].
    pub fn unparsable(filename: impl Into<String>) -> Self {
        Error::UnparsableFilename {
            filename: filename.into(),
        }
    }

    /// Convenience constructor for [`Error::SearchFailed`].
    pub fn search_failed(
        title: impl Into<String>,
        provider: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::SearchFailed {
            title: title.into(),
            provider: provider.into(),
            source: source.into(),
        }
    }

    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(title: impl Into<String>, provider: impl Into<String>) -> Self {
        Error::NotFound {
            title: title.into(),
            provider: provider.into(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
