//! Well-known Google and Office endpoint templates.
//!
//! Each function is plain string substitution. The templates target third
//! party services and must stay byte-for-byte as written here.

mod encode;

pub use encode::encode_uri_component;

const DRIVE_UC: &str = "https://drive.google.com/uc";
const DOCS: &str = "https://docs.google.com";
const OFFICE_EMBED: &str = "https://view.officeapps.live.com/op/embed.aspx";

/// Direct file download from Drive.
pub fn direct_download(id: &str) -> String {
    format!("{DRIVE_UC}?export=download&id={id}")
}

/// Direct inline view from Drive (images).
pub fn direct_view(id: &str) -> String {
    format!("{DRIVE_UC}?export=view&id={id}")
}

pub fn slides_export_pptx(id: &str) -> String {
    format!("{DOCS}/presentation/d/{id}/export/pptx")
}

pub fn slides_export_pdf(id: &str) -> String {
    format!("{DOCS}/presentation/d/{id}/export/pdf")
}

pub fn document_export_pdf(id: &str) -> String {
    format!("{DOCS}/document/d/{id}/export?format=pdf")
}

/// Slides player embed with autoplay and looping off.
pub fn slides_embed(id: &str) -> String {
    format!("{DOCS}/presentation/d/{id}/embed?start=false&loop=false&delayms=3000")
}

/// Google's generic document viewer wrapped around a public file URL.
pub fn generic_document_viewer(url: &str) -> String {
    format!("{DOCS}/gview?embedded=true&url={}", encode_uri_component(url))
}

/// Microsoft Office Online viewer wrapped around a public file URL.
pub fn office_viewer(url: &str) -> String {
    format!("{OFFICE_EMBED}?src={}", encode_uri_component(url))
}
