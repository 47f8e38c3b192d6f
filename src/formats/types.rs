//! Container and codec identifiers
//!
//! Defines the fixed vocabulary of containers and codecs probed against
//! a recording backend.

use serde::{Deserialize, Serialize};

/// Media container formats probed for recording support
///
/// Declaration order is the order candidates are probed in, so it is
/// also the order they appear in the enumerator's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    Webm,
    Mp4,
    Ogg,
    #[serde(rename = "x-matroska")]
    Matroska,
    #[serde(rename = "3gpp")]
    ThreeGpp,
    #[serde(rename = "3gpp2")]
    ThreeGpp2,
    #[serde(rename = "3gp2")]
    ThreeGp2,
    Quicktime,
    Mpeg,
    Aac,
    Flac,
    Wav,
}

impl Container {
    /// All containers, in probe order
    pub const ALL: [Container; 12] = [
        Container::Webm,
        Container::Mp4,
        Container::Ogg,
        Container::Matroska,
        Container::ThreeGpp,
        Container::ThreeGpp2,
        Container::ThreeGp2,
        Container::Quicktime,
        Container::Mpeg,
        Container::Aac,
        Container::Flac,
        Container::Wav,
    ];

    /// Get the MIME subtype for this container
    pub fn as_str(&self) -> &'static str {
        match self {
            Container::Webm => "webm",
            Container::Mp4 => "mp4",
            Container::Ogg => "ogg",
            Container::Matroska => "x-matroska",
            Container::ThreeGpp => "3gpp",
            Container::ThreeGpp2 => "3gpp2",
            Container::ThreeGp2 => "3gp2",
            Container::Quicktime => "quicktime",
            Container::Mpeg => "mpeg",
            Container::Aac => "aac",
            Container::Flac => "flac",
            Container::Wav => "wav",
        }
    }

    /// Look up a container by its MIME subtype
    pub fn from_subtype(subtype: &str) -> Option<Container> {
        Container::ALL
            .iter()
            .copied()
            .find(|container| container.as_str() == subtype)
    }

    /// Get the `video/<subtype>` MIME type used when probing this container
    pub fn mime_type(&self) -> String {
        format!("video/{}", self.as_str())
    }

    /// Get the output file extension for this container
    ///
    /// Only containers with a conventional recording extension have an
    /// entry; the rest fall back to the default at resolution time.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Container::Matroska => Some("mkv"),
            Container::Webm => Some("webm"),
            Container::Ogg => Some("ogv"),
            Container::Mp4 => Some("mp4"),
            Container::Mpeg => Some("mpg"),
            Container::Quicktime => Some("mov"),
            _ => None,
        }
    }
}

/// Codec identifiers probed in combination with each supported container
///
/// Both dotted and undotted H.26x spellings are probed because backends
/// differ on which spelling they accept.
pub const CODECS: [&str; 13] = [
    "vp9", "vp8", "avc1", "av1", "h265", "h.265", "h264", "h.264", "opus", "pcm", "aac", "mpeg",
    "mp4a",
];
