//! Output type for the filename parser.

use serde::{Deserialize, Serialize};

/// Search key extracted from a media filename.
///
/// `title` is never empty. `year` is advisory: it narrows the provider
/// search when present but is never required.
///
/// # Examples
///
/// ```
/// use autotag_parser::parse;
///
/// let key = parse("Movie.Title.2020.1080p.BluRay.x264-GROUP.mkv").unwrap();
/// assert_eq!(key.title, "Movie Title");
/// assert_eq!(key.year, Some(2020));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedKey {
    /// The cleaned title (dots replaced with spaces, trimmed).
    pub title: String,

    /// Release year, when a year marker terminated the title.
    pub year: Option<u16>,
}

impl ParsedKey {
    /// Create a key with only the title populated.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: None,
        }
    }

    /// Attach a year to the key.
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }
}
