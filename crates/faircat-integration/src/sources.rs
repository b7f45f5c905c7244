//! Source label resolution
//!
//! Maps each registry that contributed to a merged record to a canonical
//! URL for the tool there. Resolution is priority-ordered: a direct source
//! tag wins outright; link-pattern recognition over the union of links
//! only fills labels no tag resolved; sources that contributed but could
//! not be resolved keep an empty label so provenance stays visible.

use faircat_domain::Provenance;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static GITHUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(http(s)?://)?(www\.)?github\.com/[A-Za-z0-9_-]+/[A-Za-z0-9_-]+").unwrap()
});

static BITBUCKET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(http(s)?://)?(www\.)?bitbucket\.org/[A-Za-z0-9_-]+/[A-Za-z0-9_-]+").unwrap()
});

static BIOCONDUCTOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(http(s)?://)?(www\.)?bioconductor\.org/packages/[A-Za-z0-9_-]+/bioc/html/[A-Za-z0-9_-]+")
        .unwrap()
});

static GALAXY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(http(s)?://)?(www\.)?usegalaxy\.eu").unwrap());

static TOOLSHED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(http(s)?://)?(www\.)?toolshed\.g2\.bx\.psu\.edu").unwrap());

/// Aggregator tags that are not registries and never get a label
const NON_REGISTRY_TAGS: &[&str] = &["opeb_metrics"];

/// Resolve the source-label map for one merged instance
///
/// `name` is the tool name the canonical URLs are built from; `links` is
/// the union of untyped links across the group.
pub fn resolve_source_labels(
    name: &str,
    provenance: &Provenance,
    links: &[String],
) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();

    // Direct source tags: registry-specific canonical URLs, checked in
    // fixed precedence (catalog registry, package managers, domain
    // registries, hosting)
    if provenance.contains("biotools") {
        labels.insert(
            "biotools".to_string(),
            format!("https://bio.tools/{}", name),
        );
    }
    if provenance.contains("bioconda") || provenance.contains("bioconda_recipes") {
        labels.insert(
            "bioconda".to_string(),
            format!("https://anaconda.org/bioconda/{}", name),
        );
    }
    if provenance.contains("bioconductor") {
        labels.insert(
            "bioconductor".to_string(),
            format!(
                "https://bioconductor.org/packages/release/bioc/html/{}.html",
                name
            ),
        );
    }
    if provenance.contains("sourceforge") {
        labels.insert(
            "sourceforge".to_string(),
            format!("https://sourceforge.net/projects/{}", name),
        );
    }
    if provenance.contains("toolshed") || provenance.contains("galaxy_metadata") {
        labels.insert(
            "toolshed".to_string(),
            "https://toolshed.g2.bx.psu.edu/repository".to_string(),
        );
    }
    if provenance.contains("galaxy") {
        labels.insert("galaxy".to_string(), "https://usegalaxy.eu/".to_string());
    }

    // Link-pattern fallback: only fills labels no tag resolved
    for link in links {
        // Some package managers prefix Bioconductor package names
        if link.contains(&format!("bioconductor-{}", name)) {
            labels.entry("bioconda".to_string()).or_insert_with(|| {
                format!("https://anaconda.org/bioconda/bioconductor-{}", name)
            });
        }
        if let Some(found) = GITHUB_RE.find(link) {
            labels
                .entry("github".to_string())
                .or_insert_with(|| found.as_str().to_string());
        }
        if let Some(found) = BITBUCKET_RE.find(link) {
            labels
                .entry("bitbucket".to_string())
                .or_insert_with(|| found.as_str().to_string());
        }
        if let Some(found) = BIOCONDUCTOR_RE.find(link) {
            labels
                .entry("bioconductor".to_string())
                .or_insert_with(|| format!("{}.html", found.as_str()));
        }
        if let Some(found) = GALAXY_RE.find(link) {
            labels
                .entry("galaxy".to_string())
                .or_insert_with(|| found.as_str().to_string());
        }
        if let Some(found) = TOOLSHED_RE.find(link) {
            labels
                .entry("toolshed".to_string())
                .or_insert_with(|| found.as_str().to_string());
        }
    }

    // Contributing sources that resolved to nothing keep an empty label
    for source in provenance.iter() {
        if NON_REGISTRY_TAGS.contains(&source) {
            continue;
        }
        let canonical = match source {
            "bioconda_recipes" => "bioconda",
            "galaxy_metadata" => "toolshed",
            other => other,
        };
        labels.entry(canonical.to_string()).or_default();
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provenance(tags: &[&str]) -> Provenance {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_direct_tags_build_canonical_urls() {
        let labels = resolve_source_labels("blast", &provenance(&["biotools", "bioconda"]), &[]);
        assert_eq!(labels["biotools"], "https://bio.tools/blast");
        assert_eq!(labels["bioconda"], "https://anaconda.org/bioconda/blast");
    }

    #[test]
    fn test_github_recognized_from_links() {
        let links = vec!["https://github.com/lh3/minimap2/releases".to_string()];
        let labels = resolve_source_labels("minimap2", &provenance(&[]), &links);
        assert_eq!(labels["github"], "https://github.com/lh3/minimap2");
    }

    #[test]
    fn test_direct_tag_beats_link_recognition() {
        let links =
            vec!["https://bioconductor.org/packages/release/bioc/html/limma".to_string()];
        let labels = resolve_source_labels("limma", &provenance(&["bioconductor"]), &links);
        assert_eq!(
            labels["bioconductor"],
            "https://bioconductor.org/packages/release/bioc/html/limma.html"
        );
    }

    #[test]
    fn test_prefixed_bioconductor_package_on_bioconda() {
        let links = vec!["https://anaconda.org/bioconda/bioconductor-limma".to_string()];
        let labels = resolve_source_labels("limma", &provenance(&[]), &links);
        assert_eq!(
            labels["bioconda"],
            "https://anaconda.org/bioconda/bioconductor-limma"
        );
    }

    #[test]
    fn test_galaxy_metadata_resolves_to_toolshed_only() {
        let labels = resolve_source_labels("tool", &provenance(&["galaxy_metadata"]), &[]);
        assert_eq!(
            labels["toolshed"],
            "https://toolshed.g2.bx.psu.edu/repository"
        );
        assert!(!labels.contains_key("galaxy"));
    }

    #[test]
    fn test_unresolved_source_keeps_empty_label() {
        let labels = resolve_source_labels("tool", &provenance(&["github"]), &[]);
        assert_eq!(labels["github"], "");
    }

    #[test]
    fn test_metrics_aggregator_gets_no_label() {
        let labels = resolve_source_labels("tool", &provenance(&["opeb_metrics"]), &[]);
        assert!(labels.is_empty());
    }
}
