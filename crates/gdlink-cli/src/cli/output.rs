//! Plain-text rendering of conversion results.

use gdlink_core::{ConversionResult, LinkClass, MediaType, PreviewSurface};
use std::fmt::Write;

fn surface_label(surface: PreviewSurface) -> &'static str {
    match surface {
        PreviewSurface::Frame => "frame",
        PreviewSurface::Image => "img",
        PreviewSurface::Video => "video",
        PreviewSurface::Audio => "audio",
    }
}

/// Labelled lines for a result; errors render as a single `error:` line.
pub fn render_text(result: &ConversionResult, media: MediaType) -> String {
    let mut out = String::new();
    if let Some(err) = result.error() {
        let _ = writeln!(out, "error:    {err}");
        return out;
    }
    let _ = writeln!(
        out,
        "media:    {media} (render preview in {})",
        surface_label(media.preview_surface())
    );
    let fields = [
        ("file id", result.file_id()),
        ("export", result.export_url()),
        ("embed", result.embed_url()),
        ("preview", result.preview_url()),
    ];
    for (label, value) in fields {
        if let Some(v) = value {
            let _ = writeln!(out, "{:<9} {v}", format!("{label}:"));
        }
    }
    if !result.notes().is_empty() {
        out.push_str("notes:\n");
        for note in result.notes() {
            let _ = writeln!(out, "  - {note}");
        }
    }
    out
}

/// Provenance and file id lines for `classify`.
pub fn render_classification(class: &LinkClass) -> String {
    let provenance = if class.is_google_hosted {
        "google"
    } else {
        "direct"
    };
    let id = match (class.is_google_hosted, class.file_id.as_deref()) {
        (_, Some(id)) => id,
        (true, None) => "(not found; paste a full Drive/Docs link)",
        (false, None) => "-",
    };
    format!("provenance: {provenance}\nfile id:    {id}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdlink_core::{classify, resolve};

    #[test]
    fn renders_all_present_fields() {
        let r = resolve(
            "https://docs.google.com/presentation/d/P1/edit",
            MediaType::Ppt,
        );
        let text = render_text(&r, MediaType::Ppt);
        assert!(text.starts_with("media:    ppt (render preview in frame)\n"));
        assert!(text.contains("file id:  P1\n"));
        assert!(text.contains("export:   https://docs.google.com/presentation/d/P1/export/pptx\n"));
        assert!(text.contains("embed:    https://docs.google.com/presentation/d/P1/embed?"));
        assert!(text.contains("notes:\n  - "));
    }

    #[test]
    fn skips_absent_fields() {
        let r = resolve("https://example.com/a.png", MediaType::Image);
        let text = render_text(&r, MediaType::Image);
        assert!(!text.contains("file id:"));
        assert!(!text.contains("embed:"));
        assert!(text.contains("preview:  https://example.com/a.png\n"));
    }

    #[test]
    fn renders_error_only() {
        let r = resolve("", MediaType::Pdf);
        assert_eq!(render_text(&r, MediaType::Pdf), "error:    Paste a link first.\n");
    }

    #[test]
    fn classification_google_with_id() {
        let class = classify("https://drive.google.com/file/d/F1/view");
        assert_eq!(
            render_classification(&class),
            "provenance: google\nfile id:    F1\n"
        );
    }

    #[test]
    fn classification_malformed_google() {
        let class = classify("https://drive.google.com/drive/my-drive");
        assert_eq!(
            render_classification(&class),
            "provenance: google\nfile id:    (not found; paste a full Drive/Docs link)\n"
        );
    }

    #[test]
    fn classification_direct() {
        let class = classify("https://example.com/a.pdf?id=abc");
        assert_eq!(
            render_classification(&class),
            "provenance: direct\nfile id:    -\n"
        );
    }
}
