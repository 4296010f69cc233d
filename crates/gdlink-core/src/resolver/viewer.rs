//! Caller-level viewer override for presentations.

use serde::{Deserialize, Serialize};

use super::notes;
use super::{resolve, ConversionResult, MediaType};
use crate::endpoints;

/// Which viewer the caller wants for the `ppt` preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerChoice {
    /// Whatever [`resolve`] picked (Slides embed for Google links).
    #[default]
    Default,
    /// Force the Office Online viewer around the export URL.
    Office,
}

impl From<bool> for ViewerChoice {
    fn from(force_office: bool) -> Self {
        if force_office {
            ViewerChoice::Office
        } else {
            ViewerChoice::Default
        }
    }
}

/// Replaces the preview of a successful `ppt` result with the Office viewer
/// wrapped around its export URL. Export and embed URLs are left alone.
/// Any other media type, or an error result, is returned unchanged.
pub fn apply_viewer_override(mut result: ConversionResult, media: MediaType) -> ConversionResult {
    if media != MediaType::Ppt || !result.is_ok() {
        return result;
    }
    if let Some(export) = result.export_url.as_deref() {
        result.preview_url = Some(endpoints::office_viewer(export));
        result.notes.push(notes::OFFICE_OVERRIDE.to_string());
    }
    result
}

/// [`resolve`] followed by the caller's viewer choice.
pub fn convert(raw: &str, media: MediaType, viewer: ViewerChoice) -> ConversionResult {
    let result = resolve(raw, media);
    match viewer {
        ViewerChoice::Default => result,
        ViewerChoice::Office => apply_viewer_override(result, media),
    }
}
