//! The record integrator
//!
//! Merges each identity group into one canonical instance, applying the
//! registered field merge policy field by field and recording provenance.
//! Field merges are isolated from one another: a conflict inside the
//! publication merge is reported and resolved last-wins without touching
//! any sibling field.

use crate::authors::canonicalize_authors;
use crate::config::IntegrationConfig;
use crate::docs_os::{canonicalize_os, filter_documentation};
use crate::error::MergeConflict;
use crate::grouper::GroupingOutcome;
use crate::licenses::parse_licenses;
use crate::policies::{first_non_empty, select_description, union_by_eq, union_trimmed};
use crate::publications::merge_publications;
use crate::sources::resolve_source_labels;
use faircat_domain::{IdentityKey, IntegratedInstance, Provenance, RawRecord};
use tracing::debug;

/// Result of integrating a whole grouping
#[derive(Debug, Clone, Default)]
pub struct IntegrationOutcome {
    /// One canonical instance per identity key, in key order
    pub instances: Vec<IntegratedInstance>,

    /// Publication merge conflicts across all groups, resolved last-wins
    pub conflicts: Vec<MergeConflict>,
}

/// Merges identity groups into canonical instances
#[derive(Debug, Clone, Default)]
pub struct Integrator {
    config: IntegrationConfig,
}

impl Integrator {
    /// Create an integrator with the given configuration
    pub fn new(config: IntegrationConfig) -> Self {
        Self { config }
    }

    /// Integrate every group of a pre-integration grouping
    ///
    /// Group isolation: no failure inside one group's merge affects any
    /// other group.
    pub fn integrate(&self, grouping: &GroupingOutcome) -> IntegrationOutcome {
        let mut outcome = IntegrationOutcome::default();
        for (key, records) in grouping.iter_groups() {
            let (instance, conflicts) = self.integrate_group(key, records);
            outcome.instances.push(instance);
            outcome.conflicts.extend(conflicts);
        }
        outcome
    }

    /// Merge one identity group into its canonical instance
    pub fn integrate_group(
        &self,
        key: IdentityKey,
        records: &[RawRecord],
    ) -> (IntegratedInstance, Vec<MergeConflict>) {
        debug!("integrating '{}' from {} record(s)", key, records.len());

        let mut instance = IntegratedInstance::new(key);

        instance.provenance = records
            .iter()
            .map(|r| r.source.clone())
            .collect::<Provenance>();

        instance.versions =
            union_trimmed(records.iter().filter_map(|r| r.version.as_deref()));
        instance.version = first_non_empty(instance.versions.iter().map(String::as_str));

        instance.descriptions = union_trimmed(
            records
                .iter()
                .flat_map(|r| r.description.iter().map(String::as_str)),
        );
        instance.description = select_description(&instance.descriptions);

        instance.authors = canonicalize_authors(
            records
                .iter()
                .flat_map(|r| r.authors.iter().map(String::as_str)),
        );

        instance.licenses = parse_licenses(
            records
                .iter()
                .flat_map(|r| r.license.iter().map(String::as_str)),
        );

        instance.documentation = filter_documentation(union_by_eq(
            records.iter().flat_map(|r| r.documentation.iter().cloned()),
        )
        .iter());

        instance.links = union_trimmed(
            records
                .iter()
                .flat_map(|r| r.links.iter().map(String::as_str)),
        );

        instance.input = union_by_eq(records.iter().flat_map(|r| r.input.iter().cloned()));
        instance.output = union_by_eq(records.iter().flat_map(|r| r.output.iter().cloned()));

        instance.edam_topics = union_trimmed(
            records
                .iter()
                .flat_map(|r| r.edam_topics.iter().map(String::as_str)),
        );
        instance.edam_operations = union_trimmed(
            records
                .iter()
                .flat_map(|r| r.edam_operations.iter().map(String::as_str)),
        );

        instance.os =
            canonicalize_os(records.iter().flat_map(|r| r.os.iter().map(String::as_str)));

        instance.repository = union_trimmed(
            records
                .iter()
                .flat_map(|r| r.repository.iter().map(String::as_str)),
        );

        let all_publications: Vec<_> = records
            .iter()
            .flat_map(|r| r.publications.iter().cloned())
            .collect();
        let (publications, conflicts) = merge_publications(
            &all_publications,
            &self.config.identifier_priority,
            &instance.key,
        );
        instance.publications = publications;

        instance.source_labels = resolve_source_labels(
            &instance.key.name,
            &instance.provenance,
            &instance.links,
        );

        (instance, conflicts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouper::group_records;
    use faircat_domain::Publication;

    fn record(source: &str) -> RawRecord {
        RawRecord::new("trimal", Some("cmd".to_string()), source)
    }

    fn two_source_group() -> Vec<Vec<RawRecord>> {
        let mut a = record("biotools");
        a.description = vec!["A tool for trimming alignments".to_string()];
        a.license = vec!["GPL-2 + file LICENSE".to_string()];
        a.os = vec!["Linux".to_string(), "Mac".to_string()];
        a.links = vec!["https://github.com/inab/trimal".to_string()];
        a.publications = vec![Publication {
            doi: Some("10.1093/bioinformatics/btp348".to_string()),
            ..Publication::default()
        }];

        let mut b = record("bioconda");
        b.version = Some("1.4".to_string());
        b.description = vec!["Trims alignments".to_string()];
        b.license = vec!["GPL-2 + file LICENSE".to_string()];
        b.authors = vec!["Dr. Salvador Capella".to_string()];
        b.publications = vec![Publication {
            doi: Some("10.1093/BIOINFORMATICS/BTP348".to_string()),
            year: Some(2009),
            ..Publication::default()
        }];

        vec![vec![a], vec![b]]
    }

    #[test]
    fn test_integrate_group_merges_all_fields() {
        let grouping = group_records(&two_source_group());
        let outcome = Integrator::default().integrate(&grouping);

        assert_eq!(outcome.instances.len(), 1);
        let instance = &outcome.instances[0];

        assert_eq!(instance.provenance.len(), 2);
        assert_eq!(instance.description, "A tool for trimming alignments.");
        assert_eq!(instance.descriptions.len(), 2);
        assert_eq!(instance.licenses.len(), 1);
        assert_eq!(instance.licenses[0].name, "GPL-2");
        assert_eq!(instance.authors.len(), 1);
        assert_eq!(instance.authors[0].name, "Salvador Capella");
        assert_eq!(instance.os, vec!["Linux", "macOS"]);
        assert_eq!(instance.version.as_deref(), Some("1.4"));
        // DOI case difference collapses the two publications
        assert_eq!(instance.publications.len(), 1);
        assert_eq!(instance.publications[0].year, Some(2009));
        assert_eq!(
            instance.source_labels["github"],
            "https://github.com/inab/trimal"
        );
    }

    #[test]
    fn test_set_union_never_loses_a_distinct_value() {
        let mut a = record("biotools");
        a.repository = vec!["https://repo.a/x".to_string()];
        let mut b = record("bioconda");
        b.repository = vec![
            "https://repo.a/x".to_string(),
            "https://repo.b/y".to_string(),
        ];

        let grouping = group_records(&[vec![a], vec![b]]);
        let outcome = Integrator::default().integrate(&grouping);
        assert_eq!(
            outcome.instances[0].repository,
            vec!["https://repo.a/x", "https://repo.b/y"]
        );
    }

    #[test]
    fn test_integration_is_idempotent() {
        let sources = two_source_group();
        let grouping = group_records(&sources);
        let integrator = Integrator::default();
        let first = integrator.integrate(&grouping);
        let second = integrator.integrate(&grouping);
        assert_eq!(first.instances, second.instances);
    }

    #[test]
    fn test_source_order_does_not_change_content() {
        let sources = two_source_group();
        let mut reversed = sources.clone();
        reversed.reverse();

        let integrator = Integrator::default();
        let forward = integrator.integrate(&group_records(&sources));
        let backward = integrator.integrate(&group_records(&reversed));

        let a = &forward.instances[0];
        let b = &backward.instances[0];
        assert_eq!(a.provenance, b.provenance);
        assert_eq!(a.description, b.description);
        assert_eq!(a.licenses, b.licenses);
        assert_eq!(a.publications.len(), b.publications.len());

        let mut descriptions_a = a.descriptions.clone();
        let mut descriptions_b = b.descriptions.clone();
        descriptions_a.sort();
        descriptions_b.sort();
        assert_eq!(descriptions_a, descriptions_b);
    }

    #[test]
    fn test_group_isolation() {
        // A conflicting group must not disturb a clean sibling group
        let mut conflicted = record("biotools");
        conflicted.publications = vec![
            Publication {
                doi: Some("10.1/x".to_string()),
                year: Some(2001),
                ..Publication::default()
            },
            Publication {
                doi: Some("10.1/x".to_string()),
                year: Some(2002),
                ..Publication::default()
            },
        ];
        let mut clean = record("biotools");
        clean.name = "other".to_string();

        let grouping = group_records(&[vec![conflicted, clean]]);
        let outcome = Integrator::default().integrate(&grouping);

        assert_eq!(outcome.instances.len(), 2);
        assert_eq!(outcome.conflicts.len(), 1);
        assert_eq!(outcome.conflicts[0].instance, "trimal/cmd");
    }
}
