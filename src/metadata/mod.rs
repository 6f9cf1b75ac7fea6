//! Metadata provider system for resolving parsed filenames.
//!
//! # Module layout
//!
//! - [`provider`] -- Trait definition and the search result type.
//! - [`providers`] -- Concrete provider implementations (TMDB).

pub mod provider;
pub mod providers;

pub use provider::{MetadataProvider, SearchResult};
