//! Identifier-keyed structural merge of publications
//!
//! Different registries describe the same paper with different identifier
//! subsets, so the merge passes over an ordered list of identifier fields
//! (title, PMCID, PMID, DOI by default), merging any sub-records that share
//! a non-null normalized value for the current field. Later passes win
//! ties already resolved by earlier ones. A sub-record merge is a shallow
//! key union where later sources overwrite earlier ones; disagreements on
//! overlapping keys are reported as recoverable conflicts, never silently
//! corrected.

use crate::config::PublicationIdField;
use crate::error::MergeConflict;
use faircat_domain::{IdentityKey, Publication};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Markup tags in titles (e.g. "<i>...</i>")
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());

/// Normalized identifier value for one sub-record, or `None` when unset
///
/// Trailing periods are stripped from every identifier (titles in
/// particular collect them); DOIs are compared uppercased; titles are
/// compared tag-stripped. A value that is empty after normalization is
/// treated as unset: an empty string must never key a merge.
pub fn identifier_value(publication: &Publication, field: PublicationIdField) -> Option<String> {
    let raw = match field {
        PublicationIdField::Title => publication.title.as_deref(),
        PublicationIdField::Pmcid => publication.pmcid.as_deref(),
        PublicationIdField::Pmid => publication.pmid.as_deref(),
        PublicationIdField::Doi => publication.doi.as_deref(),
    }?;

    let value = raw.trim_end_matches('.').to_string();
    let value = match field {
        PublicationIdField::Doi => value.to_uppercase(),
        PublicationIdField::Title => TAG_RE.replace_all(&value, "").into_owned(),
        _ => value,
    };
    if value.trim().is_empty() {
        return None;
    }
    Some(value)
}

/// Strip markup tags and trailing periods from a surviving title
fn clean_title(title: &str) -> String {
    TAG_RE
        .replace_all(title.trim_end_matches('.'), "")
        .into_owned()
}

/// Merge a group's publications over the configured identifier passes
///
/// Returns the merged sub-records and every overwrite conflict observed.
pub fn merge_publications(
    publications: &[Publication],
    identifier_priority: &[PublicationIdField],
    key: &IdentityKey,
) -> (Vec<Publication>, Vec<MergeConflict>) {
    let mut merged: Vec<Publication> = publications.to_vec();
    let mut conflicts = Vec::new();

    for &field in identifier_priority {
        merged = merge_by_identifier(merged, field, key, &mut conflicts);
    }

    // Final cleanup: canonical titles, no all-empty sub-records
    for publication in &mut merged {
        if let Some(title) = &publication.title {
            publication.title = Some(clean_title(title));
        }
    }
    merged.retain(|p| !p.is_empty());

    (merged, conflicts)
}

/// One merge pass: group sub-records sharing a non-null value for `field`
///
/// Sub-records whose identifier is null at this stage pass through
/// unmerged, preserving their position in encounter order.
fn merge_by_identifier(
    publications: Vec<Publication>,
    field: PublicationIdField,
    key: &IdentityKey,
    conflicts: &mut Vec<MergeConflict>,
) -> Vec<Publication> {
    let ids: Vec<Option<String>> = publications
        .iter()
        .map(|p| identifier_value(p, field))
        .collect();

    let mut seen: Vec<&str> = Vec::new();
    let mut result = Vec::new();

    for (position, id) in ids.iter().enumerate() {
        let Some(id) = id.as_deref() else {
            result.push(publications[position].clone());
            continue;
        };
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);

        let indexes: Vec<usize> = ids
            .iter()
            .enumerate()
            .filter(|(_, other)| other.as_deref() == Some(id))
            .map(|(i, _)| i)
            .collect();

        if indexes.len() == 1 {
            result.push(publications[indexes[0]].clone());
        } else {
            let mut union = Publication::default();
            for i in indexes {
                merge_into(&mut union, &publications[i], id, key, conflicts);
            }
            result.push(union);
        }
    }

    result
}

/// Shallow key-by-key union; the incoming sub-record wins on conflict
fn merge_into(
    target: &mut Publication,
    incoming: &Publication,
    identifier: &str,
    key: &IdentityKey,
    conflicts: &mut Vec<MergeConflict>,
) {
    merge_field(
        &mut target.title,
        &incoming.title,
        "title",
        identifier,
        key,
        conflicts,
    );
    merge_field(
        &mut target.doi,
        &incoming.doi,
        "doi",
        identifier,
        key,
        conflicts,
    );
    merge_field(
        &mut target.pmid,
        &incoming.pmid,
        "pmid",
        identifier,
        key,
        conflicts,
    );
    merge_field(
        &mut target.pmcid,
        &incoming.pmcid,
        "pmcid",
        identifier,
        key,
        conflicts,
    );
    merge_field(
        &mut target.journal,
        &incoming.journal,
        "journal",
        identifier,
        key,
        conflicts,
    );
    merge_field(
        &mut target.url,
        &incoming.url,
        "url",
        identifier,
        key,
        conflicts,
    );

    if let Some(year) = incoming.year {
        if let Some(existing) = target.year {
            if existing != year {
                record_conflict(
                    conflicts,
                    key,
                    identifier,
                    "year",
                    existing.to_string(),
                    year.to_string(),
                );
            }
        }
        target.year = Some(year);
    }

    for (extra_key, value) in &incoming.extra {
        if let Some(existing) = target.extra.get(extra_key) {
            if existing != value {
                record_conflict(
                    conflicts,
                    key,
                    identifier,
                    extra_key,
                    existing.to_string(),
                    value.to_string(),
                );
            }
        }
        target.extra.insert(extra_key.clone(), value.clone());
    }
}

fn merge_field(
    target: &mut Option<String>,
    incoming: &Option<String>,
    field: &str,
    identifier: &str,
    key: &IdentityKey,
    conflicts: &mut Vec<MergeConflict>,
) {
    let Some(incoming) = incoming else {
        return;
    };
    if let Some(existing) = target.as_deref() {
        if existing != incoming {
            record_conflict(
                conflicts,
                key,
                identifier,
                field,
                existing.to_string(),
                incoming.clone(),
            );
        }
    }
    *target = Some(incoming.clone());
}

fn record_conflict(
    conflicts: &mut Vec<MergeConflict>,
    key: &IdentityKey,
    identifier: &str,
    field: &str,
    existing: String,
    incoming: String,
) {
    let conflict = MergeConflict {
        instance: key.to_string(),
        identifier: identifier.to_string(),
        field: field.to_string(),
        existing,
        incoming,
    };
    warn!("{}", conflict);
    conflicts.push(conflict);
}
