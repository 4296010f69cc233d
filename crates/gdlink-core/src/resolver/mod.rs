//! Conversion resolver: raw link + media type → export/embed/preview URLs.
//!
//! Pure and stateless. Every input yields a [`ConversionResult`]; failures
//! are reported in its `error` field rather than as `Err`.

mod direct;
mod google;
mod media;
mod notes;
mod result;
mod viewer;

pub use media::{MediaType, ParseMediaTypeError, PreviewSurface};
pub use result::{ConversionError, ConversionResult};
pub use viewer::{apply_viewer_override, convert, ViewerChoice};

use crate::link::classify;

/// Resolves `raw` for `media`.
///
/// Steps: trim; reject empty input; classify; reject Google links without a
/// file id; then branch on provenance and media type. A malformed Google
/// link never falls through to the direct-URL branch.
pub fn resolve(raw: &str, media: MediaType) -> ConversionResult {
    let input = raw.trim();
    if input.is_empty() {
        tracing::debug!(%media, "resolve: empty input");
        return ConversionResult::failed(ConversionError::EmptyInput);
    }

    let class = classify(input);
    let result = match (class.is_google_hosted, class.file_id) {
        (true, Some(id)) => google::resolve_google(input, id, media),
        (true, None) => ConversionResult::failed(ConversionError::UnresolvableGoogleLink),
        (false, _) => direct::resolve_direct(input, media),
    };

    match result.error() {
        Some(err) => tracing::debug!(%media, google = class.is_google_hosted, error = ?err, "resolve: rejected"),
        None => tracing::debug!(
            %media,
            google = class.is_google_hosted,
            file_id = result.file_id().unwrap_or("-"),
            "resolve: ok"
        ),
    }
    result
}
