//! Advisory note texts. Informational only; nothing branches on them.

use super::MediaType;

pub(super) const NOT_DRIVE: &str = "Not a Google Drive link; the URL is used as-is for export.";
pub(super) const OFFICE_VIEWER_PUBLIC: &str =
    "The Office viewer can only render files that are publicly reachable on the internet.";
pub(super) const DOCUMENT_VIEWER_PUBLIC: &str =
    "The document viewer can only render files that are publicly reachable on the internet.";
pub(super) const DIRECT_AS_IS: &str =
    "Not a Google Drive link; the URL is used as-is for both export and preview.";

pub(super) const PPTX_EXPORT: &str = "Export URL downloads the presentation as a .pptx file.";
pub(super) const SLIDES_EMBED: &str =
    "Embed URL plays the deck in Google's Slides viewer; the Office viewer is available as an alternative.";

pub(super) const SLIDES_PDF: &str = "Export URL renders the Slides deck as PDF.";
pub(super) const DOCUMENT_PDF: &str = "Export URL renders the Google Doc as PDF.";
pub(super) const SHEETS_PDF: &str =
    "Sheets PDF export needs extra parameters that are not generated; falling back to a direct download of the file.";
pub(super) const DRIVE_PDF: &str =
    "Export URL downloads the Drive file directly; this works when the file already is a PDF.";
pub(super) const PDF_PREVIEW: &str = "Preview wraps the export URL in Google's document viewer.";

pub(super) const IMAGE_VIEW: &str = "Drive serves the image through its view endpoint.";
pub(super) const MEDIA_DOWNLOAD: &str = "Drive serves the file through its download endpoint.";

pub(super) const SHARE_PUBLICLY: &str =
    "The file must be shared as \"Anyone with the link\" for these URLs to work.";
pub(super) const LARGE_FILE_SCAN: &str =
    "Large files may hit Drive's virus-scan interstitial instead of the raw bytes.";
pub(super) const CORS_PLAYBACK: &str =
    "Inline playback may be blocked by CORS or range-request limits; download the file if the preview stays blank.";

pub(super) const OFFICE_OVERRIDE: &str =
    "Preview switched to the Office viewer; export and embed URLs are unchanged.";

/// Media-specific caveats appended after the branch notes.
pub(super) fn advisories(google: bool, media: MediaType) -> Vec<&'static str> {
    let mut out = Vec::new();
    if google {
        out.push(SHARE_PUBLICLY);
    }
    match media {
        MediaType::Ppt | MediaType::Pdf | MediaType::Image => {}
        MediaType::Video | MediaType::Audio => {
            if google {
                out.push(LARGE_FILE_SCAN);
            }
            out.push(CORS_PLAYBACK);
        }
    }
    out
}
