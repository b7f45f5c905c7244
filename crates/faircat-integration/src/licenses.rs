//! License string parsing
//!
//! Package registries ship license declarations like "GPL-2 + file
//! LICENSE" or "see file COPYING". The former keeps its license name; any
//! entry still referring to a file afterwards carries no usable license
//! information and is dropped.

use faircat_domain::License;
use regex::Regex;
use std::sync::LazyLock;

/// "`<license> + file LICENSE`" pattern
static FILE_LICENSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\+\s*file\s+LICENSE").unwrap());

/// Parse one raw license string; `None` when the entry is dropped
pub fn parse_license(raw: &str) -> Option<License> {
    let name = match FILE_LICENSE_RE.captures(raw) {
        Some(captures) => captures[1].trim().to_string(),
        None => raw.trim().to_string(),
    };

    if name.is_empty() || name.contains("file") {
        return None;
    }
    Some(License::named(name))
}

/// Deduplicate and parse a group's raw license strings
pub fn parse_licenses<'a, I>(raw_licenses: I) -> Vec<License>
where
    I: IntoIterator<Item = &'a str>,
{
    let deduped = crate::policies::union_trimmed(raw_licenses);
    deduped
        .iter()
        .filter_map(|raw| parse_license(raw))
        .collect()
}
