//! Title extraction for media filenames.
//!
//! The title is the shortest non-empty prefix of the filename that is
//! followed (optionally after one separator) by a noise marker. Whatever
//! comes after the first marker is ignored; markers may appear in any
//! number and any order.

use autotag_core::{Error, Result};
use chrono::Datelike;
use tracing::debug;

use crate::markers::{match_marker, MarkerMatch};
use crate::types::ParsedKey;

/// Earliest year accepted as a release year.
pub const MIN_YEAR: u16 = 1900;

/// Characters that may sit between the title and its terminating marker.
const SEPARATORS: [char; 4] = ['.', ' ', '_', '-'];

/// Filename parser with a configurable upper bound for release years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    max_year: u16,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Parser accepting years up to next calendar year.
    pub fn new() -> Self {
        let next_year = chrono::Local::now().year() + 1;
        Self::with_max_year(u16::try_from(next_year).unwrap_or(u16::MAX))
    }

    /// Parser accepting years in `[MIN_YEAR, max_year]`.
    pub fn with_max_year(max_year: u16) -> Self {
        Self { max_year }
    }

    /// Parse a bare filename (no directory components) into a [`ParsedKey`].
    ///
    /// Fails with [`Error::UnparsableFilename`] when no marker terminates the
    /// title or when the title is empty after cleaning.
    pub fn parse(&self, filename: &str) -> Result<ParsedKey> {
        let Some(boundary) = find_title_boundary(filename) else {
            debug!(filename, "no noise marker found");
            return Err(Error::unparsable(filename));
        };

        let title = clean_title(&filename[..boundary.title_end]);
        if title.is_empty() {
            debug!(filename, "title is empty after cleaning");
            return Err(Error::unparsable(filename));
        }

        debug!(
            filename,
            title = %title,
            marker = %boundary.marker.marker,
            text = boundary.marker.text,
            "title boundary found"
        );

        let year = boundary.marker.year.and_then(|text| self.accept_year(text));
        Ok(ParsedKey { title, year })
    }

    fn accept_year(&self, text: &str) -> Option<u16> {
        let year = text.parse::<u16>().ok()?;
        if (MIN_YEAR..=self.max_year).contains(&year) {
            Some(year)
        } else {
            debug!(year, max_year = self.max_year, "discarding out-of-range year");
            None
        }
    }
}

// -------------------------------------------------------------------------
// Boundary search
// -------------------------------------------------------------------------

/// Where the title ends and which marker ended it.
#[derive(Debug, Clone, Copy)]
struct TitleBoundary<'src> {
    /// Byte offset one past the last title byte.
    title_end: usize,
    marker: MarkerMatch<'src>,
}

/// Find the earliest position that ends the title.
///
/// At every candidate end (the title keeps at least one character) a single
/// separator followed by a marker is tried first, then a marker starting
/// right at the candidate end.
fn find_title_boundary(input: &str) -> Option<TitleBoundary<'_>> {
    input.char_indices().skip(1).find_map(|(end, _)| {
        let rest = &input[end..];
        rest.strip_prefix(|c: char| SEPARATORS.contains(&c))
            .and_then(match_marker)
            .or_else(|| match_marker(rest))
            .map(|marker| TitleBoundary {
                title_end: end,
                marker,
            })
    })
}

/// Turn every dot into a space and trim whitespace and dangling separators.
fn clean_title(raw: &str) -> String {
    raw.replace('.', " ")
        .trim_matches(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::NoiseMarker;

    fn parser() -> Parser {
        Parser::with_max_year(2026)
    }

    fn boundary(input: &str) -> (usize, NoiseMarker) {
        let b = find_title_boundary(input).expect("boundary");
        (b.title_end, b.marker.marker)
    }

    #[test]
    fn boundary_prefers_separator_then_marker() {
        assert_eq!(boundary("Heat.1995.mkv"), (4, NoiseMarker::Year));
    }

    #[test]
    fn boundary_falls_back_to_marker_at_position() {
        // ".mkv" is only an extension when the dot is not consumed as a separator.
        assert_eq!(boundary("Heat.mkv"), (4, NoiseMarker::Extension));
    }

    #[test]
    fn boundary_requires_one_title_character() {
        // An extension at offset zero cannot end an empty title.
        assert!(find_title_boundary(".mkv").is_none());
        assert!(find_title_boundary("2020").is_none());
    }

    #[test]
    fn boundary_handles_multibyte_titles() {
        let (end, marker) = boundary("Amélie.2001.mkv");
        assert_eq!(&"Amélie.2001.mkv"[..end], "Amélie");
        assert_eq!(marker, NoiseMarker::Year);
    }

    #[test]
    fn year_discarded_when_above_ceiling() {
        let key = parser().parse("Blade.Runner.2049.mkv").unwrap();
        assert_eq!(key.title, "Blade Runner");
        assert_eq!(key.year, None);
    }

    #[test]
    fn year_kept_at_ceiling() {
        let key = parser().parse("Future.Film.2026.mkv").unwrap();
        assert_eq!(key.year, Some(2026));
    }

    #[test]
    fn year_not_recorded_for_other_markers() {
        let key = parser().parse("Arrival.1080p.WEB-DL.mkv").unwrap();
        assert_eq!(key.title, "Arrival");
        assert_eq!(key.year, None);
    }

    #[test]
    fn ddp_marker_with_odd_separator_ends_title() {
        let key = parser().parse("Avatar.The.Way.of.Water.DDP5x1.mkv").unwrap();
        assert_eq!(key.title, "Avatar The Way of Water");
        assert_eq!(key.year, None);
    }

    #[test]
    fn clean_title_replaces_each_dot() {
        assert_eq!(clean_title("Movie.Title"), "Movie Title");
        assert_eq!(clean_title("Movie..Title"), "Movie  Title");
        assert_eq!(clean_title(" Movie -"), "Movie");
    }

    #[test]
    fn clean_title_keeps_underscores_inside() {
        assert_eq!(clean_title("Movie_Title"), "Movie_Title");
    }

    #[test]
    fn dots_only_title_is_unparsable() {
        let err = parser().parse("..2020.mkv").unwrap_err();
        assert!(matches!(err, Error::UnparsableFilename { .. }));
    }
}
