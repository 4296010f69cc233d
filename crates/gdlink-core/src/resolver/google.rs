//! Google-hosted links: pick export/embed/preview endpoints by media type.

use super::notes;
use super::{ConversionResult, MediaType};
use crate::endpoints;

/// Google product a Docs link points at, sniffed from the path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocsProduct {
    Slides,
    Document,
    Spreadsheets,
}

impl DocsProduct {
    /// Lowercase substring sniff on the raw link; the three products share a
    /// host and differ only by path prefix. First match wins.
    fn sniff(raw: &str) -> Option<Self> {
        let lowered = raw.to_lowercase();
        if lowered.contains("docs.google.com/presentation") {
            Some(DocsProduct::Slides)
        } else if lowered.contains("docs.google.com/document") {
            Some(DocsProduct::Document)
        } else if lowered.contains("docs.google.com/spreadsheets") {
            Some(DocsProduct::Spreadsheets)
        } else {
            None
        }
    }
}

pub(super) fn resolve_google(raw: &str, id: String, media: MediaType) -> ConversionResult {
    let result = match media {
        MediaType::Ppt => {
            let embed = endpoints::slides_embed(&id);
            ConversionResult::converted(endpoints::slides_export_pptx(&id), embed.clone())
                .with_embed_url(embed)
                .with_notes([notes::PPTX_EXPORT, notes::SLIDES_EMBED])
        }
        MediaType::Pdf => {
            let (export, note) = pdf_export(raw, &id);
            // Preview is built from the final export URL, after any override.
            let preview = endpoints::generic_document_viewer(&export);
            ConversionResult::converted(export, preview).with_notes([note, notes::PDF_PREVIEW])
        }
        MediaType::Image => {
            let view = endpoints::direct_view(&id);
            ConversionResult::converted(view.clone(), view).with_notes([notes::IMAGE_VIEW])
        }
        MediaType::Video | MediaType::Audio => {
            let download = endpoints::direct_download(&id);
            ConversionResult::converted(download.clone(), download)
                .with_notes([notes::MEDIA_DOWNLOAD])
        }
    };
    result
        .with_notes(notes::advisories(true, media))
        .with_file_id(id)
}

/// Direct download by default; Slides and Docs links switch to their native
/// PDF export. Sheets keeps the direct download.
fn pdf_export(raw: &str, id: &str) -> (String, &'static str) {
    match DocsProduct::sniff(raw) {
        Some(DocsProduct::Slides) => (endpoints::slides_export_pdf(id), notes::SLIDES_PDF),
        Some(DocsProduct::Document) => (endpoints::document_export_pdf(id), notes::DOCUMENT_PDF),
        Some(DocsProduct::Spreadsheets) => (endpoints::direct_download(id), notes::SHEETS_PDF),
        None => (endpoints::direct_download(id), notes::DRIVE_PDF),
    }
}
