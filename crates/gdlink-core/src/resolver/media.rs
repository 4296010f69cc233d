//! Target media types and the preview surface each one renders on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the caller wants the link turned into. Chosen by the caller, never
/// inferred from the link itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Ppt,
    #[default]
    Pdf,
    Image,
    Video,
    Audio,
}

/// DOM primitive a presentation layer should render `previewUrl` with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewSurface {
    /// Framed document viewer (iframe).
    Frame,
    Image,
    Video,
    Audio,
}

impl MediaType {
    pub const ALL: [MediaType; 5] = [
        MediaType::Ppt,
        MediaType::Pdf,
        MediaType::Image,
        MediaType::Video,
        MediaType::Audio,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Ppt => "ppt",
            MediaType::Pdf => "pdf",
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
        }
    }

    pub fn preview_surface(self) -> PreviewSurface {
        match self {
            MediaType::Ppt | MediaType::Pdf => PreviewSurface::Frame,
            MediaType::Image => PreviewSurface::Image,
            MediaType::Video => PreviewSurface::Video,
            MediaType::Audio => PreviewSurface::Audio,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown media type {0:?} (expected one of: ppt, pdf, image, video, audio)")]
pub struct ParseMediaTypeError(String);

impl FromStr for MediaType {
    type Err = ParseMediaTypeError;

    /// Case-insensitive; also accepts `pptx`/`slides` and `img`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ppt" | "pptx" | "slides" => Ok(MediaType::Ppt),
            "pdf" => Ok(MediaType::Pdf),
            "image" | "img" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            "audio" => Ok(MediaType::Audio),
            _ => Err(ParseMediaTypeError(s.to_string())),
        }
    }
}
