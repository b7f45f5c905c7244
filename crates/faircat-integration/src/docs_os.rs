//! Documentation-link filtering and OS-name canonicalization

use faircat_domain::Documentation;
use regex::Regex;
use std::sync::LazyLock;

/// http/https URL
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://\S+").unwrap());

/// Filter documentation entries down to real URLs
///
/// Entries whose location is not an http(s) URL are dropped. The generic
/// "documentation" kind is relabeled "general"; every other kind passes
/// through unchanged.
pub fn filter_documentation<'a, I>(entries: I) -> Vec<Documentation>
where
    I: IntoIterator<Item = &'a Documentation>,
{
    entries
        .into_iter()
        .filter(|entry| URL_RE.is_match(&entry.url))
        .map(|entry| {
            let doc_type = if entry.doc_type == "documentation" {
                "general".to_string()
            } else {
                entry.doc_type.clone()
            };
            Documentation::new(doc_type, entry.url.clone())
        })
        .collect()
}

/// Canonicalize operating-system names
///
/// The literal token "Mac" becomes "macOS"; everything else passes through
/// unchanged. No deduplication at this stage.
pub fn canonicalize_os<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(|name| {
            if name == "Mac" {
                "macOS".to_string()
            } else {
                name.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_url_documentation_dropped() {
        let entries = vec![
            Documentation::new("manual", "https://example.org/manual.html"),
            Documentation::new("manual", "see the README"),
        ];
        let filtered = filter_documentation(&entries);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].url, "https://example.org/manual.html");
    }

    #[test]
    fn test_generic_documentation_relabeled_general() {
        let entries = vec![Documentation::new("documentation", "http://example.org/docs")];
        let filtered = filter_documentation(&entries);
        assert_eq!(filtered[0].doc_type, "general");
    }

    #[test]
    fn test_mac_becomes_macos() {
        let canonical = canonicalize_os(["Linux", "Mac", "Windows"]);
        assert_eq!(canonical, vec!["Linux", "macOS", "Windows"]);
    }

    #[test]
    fn test_no_deduplication() {
        let canonical = canonicalize_os(["Linux", "Linux"]);
        assert_eq!(canonical.len(), 2);
    }
}
