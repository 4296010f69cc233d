//! Ordered file-id patterns. First match wins.

use regex::Regex;
use std::sync::OnceLock;

/// Pattern sources in priority order. Each has exactly one capture group.
///
/// `/uc?id=` can never win over the generic `[?&]id=` entry above it; it is
/// kept so the list stays a faithful map of the link shapes we accept.
const ID_PATTERNS: [(&str, &str); 6] = [
    ("file", r"/file/d/([a-zA-Z0-9_-]+)"),
    ("presentation", r"/presentation/d/([a-zA-Z0-9_-]+)"),
    ("document", r"/document/d/([a-zA-Z0-9_-]+)"),
    ("spreadsheets", r"/spreadsheets/d/([a-zA-Z0-9_-]+)"),
    ("query-id", r"[?&]id=([a-zA-Z0-9_-]+)"),
    ("uc-id", r"/uc\?id=([a-zA-Z0-9_-]+)"),
];

static COMPILED: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();

fn compiled() -> &'static [(&'static str, Regex)] {
    COMPILED.get_or_init(|| {
        ID_PATTERNS
            .iter()
            .map(|(name, src)| (*name, Regex::new(src).expect("compile id pattern")))
            .collect()
    })
}

/// Extracts the Drive/Docs file id from `raw`, trying each pattern in order.
///
/// Matching is case-sensitive against the text as given; ids stop at the
/// first character outside `[a-zA-Z0-9_-]`.
pub fn extract_file_id(raw: &str) -> Option<&str> {
    compiled().iter().find_map(|(name, re)| {
        let id = re.captures(raw)?.get(1)?.as_str();
        tracing::trace!(pattern = *name, id, "file id pattern matched");
        Some(id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_d() {
        assert_eq!(
            extract_file_id("https://drive.google.com/file/d/1AbC-_x/view?usp=sharing"),
            Some("1AbC-_x")
        );
    }

    #[test]
    fn presentation_document_spreadsheets() {
        assert_eq!(
            extract_file_id("https://docs.google.com/presentation/d/PRES_1/edit#slide=id.p"),
            Some("PRES_1")
        );
        assert_eq!(
            extract_file_id("https://docs.google.com/document/d/DOC-2/edit"),
            Some("DOC-2")
        );
        assert_eq!(
            extract_file_id("https://docs.google.com/spreadsheets/d/SHEET3/edit#gid=0"),
            Some("SHEET3")
        );
    }

    #[test]
    fn query_id() {
        assert_eq!(
            extract_file_id("https://drive.google.com/open?id=Q1d&authuser=0"),
            Some("Q1d")
        );
        assert_eq!(
            extract_file_id("https://drive.google.com/uc?export=download&id=Q2d"),
            Some("Q2d")
        );
        assert_eq!(extract_file_id("https://drive.google.com/uc?id=UC9"), Some("UC9"));
    }

    #[test]
    fn path_pattern_beats_query_pattern() {
        assert_eq!(
            extract_file_id("https://drive.google.com/file/d/PATH/view?id=QUERY"),
            Some("PATH")
        );
    }

    #[test]
    fn file_pattern_beats_presentation_pattern() {
        assert_eq!(
            extract_file_id("https://docs.google.com/presentation/d/PRES/file/d/FILE"),
            Some("FILE")
        );
    }

    #[test]
    fn id_param_requires_delimiter() {
        assert_eq!(extract_file_id("https://drive.google.com/open?fid=nope"), None);
    }

    #[test]
    fn no_match() {
        assert_eq!(extract_file_id("https://drive.google.com/drive/folders"), None);
        assert_eq!(extract_file_id("https://drive.google.com/file/d/"), None);
    }
}
