//! Non-Google links: the trimmed input is the export URL, verbatim.

use super::notes;
use super::{ConversionResult, MediaType};
use crate::endpoints;

pub(super) fn resolve_direct(url: &str, media: MediaType) -> ConversionResult {
    let result = match media {
        MediaType::Ppt => ConversionResult::converted(url.to_string(), endpoints::office_viewer(url))
            .with_notes([notes::NOT_DRIVE, notes::OFFICE_VIEWER_PUBLIC]),
        MediaType::Pdf => {
            ConversionResult::converted(url.to_string(), endpoints::generic_document_viewer(url))
                .with_notes([notes::NOT_DRIVE, notes::DOCUMENT_VIEWER_PUBLIC])
        }
        MediaType::Image | MediaType::Video | MediaType::Audio => {
            ConversionResult::converted(url.to_string(), url.to_string())
                .with_notes([notes::DIRECT_AS_IS])
        }
    };
    result.with_notes(notes::advisories(false, media))
}
