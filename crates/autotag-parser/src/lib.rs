//! autotag-parser: search-key extraction for media filenames.
//!
//! Pulls a title and an optional release year out of scene/P2P style
//! filenames such as `"Movie.Title.2020.1080p.BluRay.x264-GROUP.mkv"`.
//! Unrecognized layouts fail closed instead of guessing.
//!
//! # Quick start
//!
//! ```
//! use autotag_parser::parse;
//!
//! let key = parse("The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv").unwrap();
//! assert_eq!(key.title, "The Matrix");
//! assert_eq!(key.year, Some(1999));
//!
//! assert!(parse("randomfile").is_err());
//! ```

pub mod markers;
pub mod types;
mod parser;

pub use markers::NoiseMarker;
pub use parser::{Parser, MIN_YEAR};
pub use types::ParsedKey;

/// Parse a filename into a [`ParsedKey`].
///
/// The title runs from the start of the name to the first noise marker
/// (year, resolution, rip type, codec, scene tag, or a trailing `.mkv`,
/// `.mp4`, `.m4v` extension). Dots in the title become spaces.
///
/// # Errors
///
/// Returns [`autotag_core::Error::UnparsableFilename`] when no marker is
/// found or the title is blank.
///
/// # Examples
///
/// ```
/// let key = autotag_parser::parse("Blade Runner (1982) 2160p REMUX.mkv").unwrap();
/// assert_eq!(key.title, "Blade Runner");
/// assert_eq!(key.year, Some(1982));
/// ```
pub fn parse(input: &str) -> autotag_core::Result<ParsedKey> {
    Parser::new().parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use autotag_core::Error;

    #[test]
    fn test_parse_movie_basic() {
        let key = parse("Movie.Title.2020.1080p.BluRay.x264-GROUP.mkv").unwrap();
        assert_eq!(key.title, "Movie Title");
        assert_eq!(key.year, Some(2020));
    }

    #[test]
    fn test_parse_random_name_fails() {
        let err = parse("randomfile").unwrap_err();
        assert!(matches!(err, Error::UnparsableFilename { ref filename } if filename == "randomfile"));
    }

    #[test]
    fn test_parse_unknown_extension_fails() {
        assert!(parse("Heat.avi").is_err());
    }

    #[test]
    fn test_parse_extension_only() {
        let key = parse("Heat.mkv").unwrap();
        assert_eq!(key, ParsedKey::new("Heat"));
    }

    #[test]
    fn test_parse_parenthesized_year() {
        let key = parse("Blade Runner (1982).mp4").unwrap();
        assert_eq!(key.title, "Blade Runner");
        assert_eq!(key.year, Some(1982));
    }

    #[test]
    fn test_parse_literal_parentheses_preserved() {
        let key = parse("Movie (Director's Cut).mkv").unwrap();
        assert_eq!(key.title, "Movie (Director's Cut)");
        assert_eq!(key.year, None);
    }

    #[test]
    fn test_parse_space_separated() {
        let key = parse("The Matrix 1999 1080p").unwrap();
        assert_eq!(key, ParsedKey::new("The Matrix").with_year(1999));
    }

    #[test]
    fn test_parse_leading_number_in_title() {
        let key = parse("2001.A.Space.Odyssey.1968.mkv").unwrap();
        assert_eq!(key.title, "2001 A Space Odyssey");
        assert_eq!(key.year, Some(1968));
    }

    #[test]
    fn test_parse_no_year() {
        let key = parse("Arrival.720p.WEB-DL.DD5.1.H264-GROUP.mkv").unwrap();
        assert_eq!(key.title, "Arrival");
        assert!(key.year.is_none());
    }

    #[test]
    fn test_parse_scene_tag_before_year() {
        let key = parse("Heat.REPACK.1995.1080p.mkv").unwrap();
        assert_eq!(key.title, "Heat");
        assert!(key.year.is_none());
    }

    #[test]
    fn test_parse_dangling_hyphen_trimmed() {
        let key = parse("Some Movie - 2021.mkv").unwrap();
        assert_eq!(key.title, "Some Movie");
        assert_eq!(key.year, Some(2021));
    }

    #[test]
    fn test_parse_underscores_are_not_separators_in_title() {
        let key = parse("Movie_Title_2020.mkv").unwrap();
        assert_eq!(key.title, "Movie_Title");
        assert_eq!(key.year, Some(2020));
    }

    #[test]
    fn test_titles_never_leak_markers_or_separators() {
        let names = [
            "The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv",
            "Inception.2010.2160p.WEB-DL.DDP5.1.h.265-GROUP.mkv",
            "Heat.1995.REMUX.mkv",
            "Sicario.720p.HDTV.x264.mp4",
            "Casablanca.1942.DVDRip.xvid.mkv",
            "Oldboy.PROPER.BluRay.m4v",
        ];
        for name in names {
            let key = parse(name).unwrap();
            let title = &key.title;
            assert!(!title.is_empty(), "{name}");
            assert_eq!(title.trim(), title, "{name}");
            assert!(!title.starts_with(['.', '-', '_']), "{name}");
            assert!(!title.ends_with(['.', '-', '_']), "{name}");
            for marker in ["1080p", "720p", "BluRay", "WEB-DL", "HDTV", "x264", "REMUX", ".mkv"] {
                assert!(!title.contains(marker), "{name}: {title}");
            }
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let key = parse("Heat.1995.mkv").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        let back: ParsedKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, back);
    }
}
