//! Google provenance check.

const GOOGLE_HOSTS: [&str; 2] = ["drive.google.com", "docs.google.com"];

/// True iff the trimmed, lowercased text contains a Drive or Docs host.
///
/// Substring match, not a URL parse: `"see drive.google.com/file/d/x"` counts.
pub fn is_google_hosted(raw: &str) -> bool {
    let lowered = raw.trim().to_lowercase();
    GOOGLE_HOSTS.iter().any(|host| lowered.contains(host))
}
