//! Resolver output record and its error kinds.

use serde::{Serialize, Serializer};

/// Why a link could not be converted. Carried as data in
/// [`ConversionResult`]; the display text is shown to users verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Paste a link first.")]
    EmptyInput,
    #[error("This looks like a Google link, but I couldn't extract the file ID. Please paste a full Drive/Docs link.")]
    UnresolvableGoogleLink,
}

impl Serialize for ConversionError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of resolving one link for one media type.
///
/// Either `error` is set and every URL is absent, or `export_url` and
/// `preview_url` are both present. The constructors keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) export_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) embed_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) preview_url: Option<String>,
    pub(super) notes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) error: Option<ConversionError>,
}

impl ConversionResult {
    pub fn failed(error: ConversionError) -> Self {
        Self {
            file_id: None,
            export_url: None,
            embed_url: None,
            preview_url: None,
            notes: Vec::new(),
            error: Some(error),
        }
    }

    pub(super) fn converted(export_url: String, preview_url: String) -> Self {
        Self {
            file_id: None,
            export_url: Some(export_url),
            embed_url: None,
            preview_url: Some(preview_url),
            notes: Vec::new(),
            error: None,
        }
    }

    pub(super) fn with_file_id(mut self, id: String) -> Self {
        self.file_id = Some(id);
        self
    }

    pub(super) fn with_embed_url(mut self, url: String) -> Self {
        self.embed_url = Some(url);
        self
    }

    pub(super) fn with_notes<'a>(mut self, notes: impl IntoIterator<Item = &'a str>) -> Self {
        self.notes.extend(notes.into_iter().map(str::to_string));
        self
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn file_id(&self) -> Option<&str> {
        self.file_id.as_deref()
    }

    pub fn export_url(&self) -> Option<&str> {
        self.export_url.as_deref()
    }

    pub fn embed_url(&self) -> Option<&str> {
        self.embed_url.as_deref()
    }

    /// Directly renderable: iframe `src`, `img src` or media `src`.
    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    /// Advisory notes, in the order they were attached.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn error(&self) -> Option<ConversionError> {
        self.error
    }
}
