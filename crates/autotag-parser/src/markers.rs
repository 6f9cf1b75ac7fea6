//! Noise-marker matchers for scene-style media filenames.
//!
//! Each [`NoiseMarker`] class recognizes one family of tokens that carry no
//! title content: years, resolutions, rip sources, codecs, scene tags and
//! the container extension. Classes are tried in [`NoiseMarker::PRECEDENCE`]
//! order and the first class that matches at a position wins.
//!
//! Matching is case-sensitive. Lowercase `hdtv` and `xvid` are listed
//! explicitly because that is how they commonly appear in release names.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?(?P<year>(?:19|20)[0-9]{2})\)?").expect("year pattern should compile")
});

static RESOLUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,4}[pi]").expect("resolution pattern should compile"));

static RIP_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:(?:PPV\.)?[HPS]DTV|[. ](?:HD)?CAM[| ]|B[DR]Rip|[.| ](?:HD-?)?TS[.| ]",
        r"|(?:PPV )?WEB-?DL(?: DVDRip)?|HDRip|DVDRip|CamRip|W[EB]Rip|BluRay|DvDScr",
        r"|hdtv|REMUX|3D|Half-(?:OU|SBS)+|4K|NF|AMZN)",
    ))
    .expect("rip type pattern should compile")
});

static VIDEO_CODEC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:xvid|[hx]\.?26[45]|AVC)").expect("video codec pattern should compile")
});

static AUDIO_CODEC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:MP3|DD5\.?1|Dual[- ]Audio|LiNE|DTS[-HD]+|AAC[.-]LC|AAC(?:\.?2\.0)?",
        r"|AC3(?:\.5\.1)?|7\.1|DDP5.1)",
    ))
    .expect("audio codec pattern should compile")
});

static SCENE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:REPACK|INTERNAL|PROPER)").expect("scene tag pattern should compile"));

static EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.(?:mp4|m4v|mkv)$").expect("extension pattern should compile"));

/// A family of filename tokens that terminates the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseMarker {
    /// Four-digit year, optionally parenthesized: `2020`, `(1999)`.
    Year,
    /// `1080p`, `720i`, `2160p`.
    Resolution,
    /// Rip source or type: `BluRay`, `WEB-DL`, `HDTV`, `AMZN`, `4K`.
    RipType,
    /// `x264`, `h.265`, `xvid`, `AVC`.
    VideoCodec,
    /// `DD5.1`, `DTS-HD`, `AAC2.0`, `AC3`, `7.1`.
    AudioCodec,
    /// `REPACK`, `INTERNAL`, `PROPER`.
    SceneTag,
    /// `.mkv`, `.mp4` or `.m4v` at the very end of the name.
    Extension,
}

impl NoiseMarker {
    /// All classes, in the order they are tried at a given position.
    pub const PRECEDENCE: [NoiseMarker; 7] = [
        NoiseMarker::Year,
        NoiseMarker::Resolution,
        NoiseMarker::RipType,
        NoiseMarker::VideoCodec,
        NoiseMarker::AudioCodec,
        NoiseMarker::SceneTag,
        NoiseMarker::Extension,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Year => &YEAR,
            Self::Resolution => &RESOLUTION,
            Self::RipType => &RIP_TYPE,
            Self::VideoCodec => &VIDEO_CODEC,
            Self::AudioCodec => &AUDIO_CODEC,
            Self::SceneTag => &SCENE_TAG,
            Self::Extension => &EXTENSION,
        }
    }

    /// Try to match this class at the start of `input`.
    pub fn match_at(self, input: &str) -> Option<MarkerMatch<'_>> {
        let caps = self.pattern().captures(input)?;
        let text = caps.get(0)?.as_str();
        let year = caps.name("year").map(|m| m.as_str());
        Some(MarkerMatch {
            marker: self,
            text,
            year,
        })
    }
}

impl fmt::Display for NoiseMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => write!(f, "year"),
            Self::Resolution => write!(f, "resolution"),
            Self::RipType => write!(f, "rip type"),
            Self::VideoCodec => write!(f, "video codec"),
            Self::AudioCodec => write!(f, "audio codec"),
            Self::SceneTag => write!(f, "scene tag"),
            Self::Extension => write!(f, "extension"),
        }
    }
}

/// A marker recognized at some position of a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch<'src> {
    pub marker: NoiseMarker,
    /// The matched text, including any parentheses or leading separator
    /// that belong to the marker pattern.
    pub text: &'src str,
    /// Digits of the year, only set for [`NoiseMarker::Year`].
    pub year: Option<&'src str>,
}

/// Match the highest-precedence marker class at the start of `input`.
pub fn match_marker(input: &str) -> Option<MarkerMatch<'_>> {
    NoiseMarker::PRECEDENCE
        .iter()
        .find_map(|marker| marker.match_at(input))
}
