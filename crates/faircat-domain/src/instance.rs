//! The canonical integrated instance produced by the record integrator

use crate::identity::IdentityKey;
use crate::provenance::Provenance;
use crate::record::{Documentation, FormatTerm, Publication};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether an author entry names a person or an institution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorKind {
    /// An individual
    Person,
    /// A university, institute, group, company, ...
    Organization,
}

/// A cleaned, classified author entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Person or organization
    #[serde(rename = "type")]
    pub kind: AuthorKind,

    /// Cleaned name
    pub name: String,

    /// Contact email; harvesters rarely provide one, so usually empty
    pub email: String,

    /// Whether this entry is a declared maintainer
    pub maintainer: bool,
}

impl Author {
    /// Build a person entry with empty email and no maintainer flag
    pub fn person(name: impl Into<String>) -> Self {
        Self {
            kind: AuthorKind::Person,
            name: name.into(),
            email: String::new(),
            maintainer: false,
        }
    }

    /// Build an organization entry with empty email and no maintainer flag
    pub fn organization(name: impl Into<String>) -> Self {
        Self {
            kind: AuthorKind::Organization,
            name: name.into(),
            email: String::new(),
            maintainer: false,
        }
    }
}

/// A parsed license entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// License name (e.g. "GPL-2", "MIT")
    pub name: String,

    /// License URL; empty when the source only gave a name
    pub url: String,
}

impl License {
    /// Build a license entry with no URL
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
        }
    }
}

/// The canonical merged record for one identity key
///
/// Created once per key by the integrator and never mutated afterwards:
/// the rule engine only reads it. Every descriptive field holds the value
/// (or value set) chosen by that field's merge policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegratedInstance {
    /// Identity this instance was merged under
    pub key: IdentityKey,

    /// Sources that contributed to the merge
    pub provenance: Provenance,

    /// All observed versions, deduplicated in encounter order
    pub versions: Vec<String>,

    /// Representative version: the first non-empty one observed
    pub version: Option<String>,

    /// All distinct descriptions contributed by any source
    pub descriptions: Vec<String>,

    /// The selected description: longest variant, first letter uppercased,
    /// terminal period ensured
    pub description: String,

    /// Cleaned, classified authors
    pub authors: Vec<Author>,

    /// Parsed licenses
    pub licenses: Vec<License>,

    /// Documentation entries that survived URL filtering
    pub documentation: Vec<Documentation>,

    /// Union of untyped links
    pub links: Vec<String>,

    /// Union of declared input formats
    pub input: Vec<FormatTerm>,

    /// Union of declared output formats
    pub output: Vec<FormatTerm>,

    /// Union of EDAM topic URIs
    pub edam_topics: Vec<String>,

    /// Union of EDAM operation URIs
    pub edam_operations: Vec<String>,

    /// Canonicalized operating-system names
    pub os: Vec<String>,

    /// Union of source-code repository links
    pub repository: Vec<String>,

    /// Publications after identifier-keyed merging
    pub publications: Vec<Publication>,

    /// Canonical URL per recognized registry/hosting source; empty string
    /// when the source contributed but no label could be resolved
    pub source_labels: BTreeMap<String, String>,
}

impl IntegratedInstance {
    /// Create an empty instance for the given identity
    pub fn new(key: IdentityKey) -> Self {
        Self {
            key,
            provenance: Provenance::new(),
            versions: Vec::new(),
            version: None,
            descriptions: Vec::new(),
            description: String::new(),
            authors: Vec::new(),
            licenses: Vec::new(),
            documentation: Vec::new(),
            links: Vec::new(),
            input: Vec::new(),
            output: Vec::new(),
            edam_topics: Vec::new(),
            edam_operations: Vec::new(),
            os: Vec::new(),
            repository: Vec::new(),
            publications: Vec::new(),
            source_labels: BTreeMap::new(),
        }
    }

    /// True when the declared type marks this as a web tool
    ///
    /// An absent type counts as non-web: unset metadata must never make a
    /// tool score as if it were hosted.
    pub fn is_web(&self) -> bool {
        matches!(self.key.tool_type.as_deref(), Some("web"))
    }
}
