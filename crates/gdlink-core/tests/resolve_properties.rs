//! Integration tests: extraction across every accepted link shape, viewer
//! wrapper round-trips, and resolver purity across threads.

use gdlink_core::endpoints::{generic_document_viewer, office_viewer};
use gdlink_core::{classify, convert, resolve, ConversionError, MediaType, ViewerChoice};

const ID: &str = "1KocQY1Q3rQfZGl8BTNSG8fEqGh-XpUq0";

fn query_param(url: &str, name: &str) -> Option<String> {
    let parsed = url::Url::parse(url).expect("synthesized URL parses");
    parsed
        .query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

#[test]
fn every_google_shape_extracts_exact_id() {
    let shapes = [
        format!("https://drive.google.com/file/d/{ID}/view?usp=sharing"),
        format!("https://docs.google.com/presentation/d/{ID}/edit#slide=id.p1"),
        format!("https://docs.google.com/document/d/{ID}/edit?tab=t.0"),
        format!("https://docs.google.com/spreadsheets/d/{ID}/edit#gid=0"),
        format!("https://drive.google.com/open?id={ID}&authuser=1"),
        format!("https://drive.google.com/uc?id={ID}&export=download"),
    ];
    for link in &shapes {
        let class = classify(link);
        assert!(class.is_google_hosted, "{link}");
        assert_eq!(class.file_id.as_deref(), Some(ID), "{link}");
    }
}

#[test]
fn malformed_google_link_never_falls_through() {
    for media in MediaType::ALL {
        let r = resolve("https://docs.google.com/presentation/u/0/", media);
        assert_eq!(r.error(), Some(ConversionError::UnresolvableGoogleLink));
        assert!(r.export_url().is_none());
        assert!(r.preview_url().is_none());
    }
}

#[test]
fn viewer_wrappers_round_trip() {
    let inputs = [
        "https://example.com/report.pdf",
        "https://example.com/a b/c.pdf?x=1&y=2#frag",
        "https://example.com/caf\u{e9}/deck.pptx?token=a+b%2Fc",
        "https://docs.google.com/document/d/X/export?format=pdf",
    ];
    for input in inputs {
        assert_eq!(
            query_param(&generic_document_viewer(input), "url").as_deref(),
            Some(input)
        );
        assert_eq!(query_param(&office_viewer(input), "src").as_deref(), Some(input));
    }
}

#[test]
fn pdf_preview_wraps_final_export_url() {
    let links = [
        format!("https://docs.google.com/presentation/d/{ID}/edit"),
        format!("https://docs.google.com/document/d/{ID}/edit"),
        format!("https://docs.google.com/spreadsheets/d/{ID}/edit"),
        format!("https://drive.google.com/file/d/{ID}/view"),
        "https://example.com/plain.pdf".to_string(),
    ];
    for link in &links {
        let r = resolve(link, MediaType::Pdf);
        let preview = r.preview_url().expect("preview");
        assert_eq!(query_param(preview, "url").as_deref(), r.export_url());
    }
}

#[test]
fn direct_urls_are_identity_for_native_media() {
    let url = "https://media.example.org/song.mp3?dl=1";
    for media in [MediaType::Image, MediaType::Video, MediaType::Audio] {
        let r = resolve(url, media);
        assert_eq!(r.error(), None);
        assert_eq!(r.export_url(), Some(url));
        assert_eq!(r.preview_url(), Some(url));
    }
}

#[test]
fn office_override_on_direct_ppt_wraps_direct_url() {
    let url = "https://files.example.com/q3.pptx";
    let r = convert(url, MediaType::Ppt, ViewerChoice::Office);
    assert_eq!(r.export_url(), Some(url));
    assert_eq!(query_param(r.preview_url().unwrap(), "src").as_deref(), Some(url));
}

#[test]
fn concurrent_calls_agree() {
    let link = format!("https://docs.google.com/presentation/d/{ID}/edit");
    let expected: Vec<_> = MediaType::ALL.iter().map(|m| resolve(&link, *m)).collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    MediaType::ALL
                        .iter()
                        .map(|m| resolve(&link, *m))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
