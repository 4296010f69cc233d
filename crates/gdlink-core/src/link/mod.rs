//! Link classification: Google-hosted or not, and which file id it carries.
//!
//! Provenance is a lowercase substring test so pasted links with tracking
//! parameters or surrounding whitespace still classify. Id extraction runs
//! an ordered list of path/query patterns against the original text.

mod host;
mod patterns;

pub use host::is_google_hosted;
pub use patterns::extract_file_id;

/// Outcome of [`classify`].
///
/// `file_id` is `None` both for non-Google links and for Google links that
/// carry no recognizable id; `is_google_hosted` tells the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkClass {
    pub is_google_hosted: bool,
    pub file_id: Option<String>,
}

impl LinkClass {
    /// Google-hosted, but none of the id patterns matched.
    pub fn is_malformed_google(&self) -> bool {
        self.is_google_hosted && self.file_id.is_none()
    }
}

/// Classifies raw link text.
///
/// # Examples
///
/// - `classify("https://drive.google.com/file/d/abc123/view")` →
///   Google-hosted, id `"abc123"`
/// - `classify("https://example.com/deck.pptx")` → not Google-hosted, no id
pub fn classify(raw: &str) -> LinkClass {
    let is_google_hosted = is_google_hosted(raw);
    let file_id = if is_google_hosted {
        extract_file_id(raw).map(str::to_string)
    } else {
        None
    };
    LinkClass {
        is_google_hosted,
        file_id,
    }
}
