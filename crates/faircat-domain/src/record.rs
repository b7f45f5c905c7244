//! Raw metadata records as produced by the per-source harvesters
//!
//! A [`RawRecord`] is one source's observation of one tool version. Records
//! are immutable once harvested: the integration layer reads them and never
//! writes them back. Unknown top-level keys are rejected at deserialization
//! time; only publications carry a documented extension map for
//! source-specific extras.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One source's observation of one tool version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawRecord {
    /// Tool name (case-preserving; canonicalized upstream by the harvester)
    pub name: String,

    /// Tool type (e.g. "cmd", "web", "lib"); absent type is its own
    /// identity partition
    #[serde(rename = "type", default)]
    pub tool_type: Option<String>,

    /// Observed version, if the source reports one
    #[serde(default)]
    pub version: Option<String>,

    /// Free-text descriptions (one source may carry several)
    #[serde(default)]
    pub description: Vec<String>,

    /// Raw author strings, uncleaned
    #[serde(default)]
    pub authors: Vec<String>,

    /// Raw license strings, uncleaned
    #[serde(default)]
    pub license: Vec<String>,

    /// Documentation entries (typed URLs)
    #[serde(default)]
    pub documentation: Vec<Documentation>,

    /// Untyped links associated with the tool
    #[serde(default)]
    pub links: Vec<String>,

    /// Declared input data formats
    #[serde(default)]
    pub input: Vec<FormatTerm>,

    /// Declared output data formats
    #[serde(default)]
    pub output: Vec<FormatTerm>,

    /// EDAM topic URIs
    #[serde(default)]
    pub edam_topics: Vec<String>,

    /// EDAM operation URIs
    #[serde(default)]
    pub edam_operations: Vec<String>,

    /// Operating systems the tool runs on
    #[serde(default)]
    pub os: Vec<String>,

    /// Source-code repository links
    #[serde(default)]
    pub repository: Vec<String>,

    /// Publications associated with the tool
    #[serde(default)]
    pub publications: Vec<Publication>,

    /// Tag of the registry this record was harvested from
    pub source: String,
}

impl RawRecord {
    /// Create a minimal record with identity fields only
    pub fn new(name: impl Into<String>, tool_type: Option<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tool_type,
            version: None,
            description: Vec::new(),
            authors: Vec::new(),
            license: Vec::new(),
            documentation: Vec::new(),
            links: Vec::new(),
            input: Vec::new(),
            output: Vec::new(),
            edam_topics: Vec::new(),
            edam_operations: Vec::new(),
            os: Vec::new(),
            repository: Vec::new(),
            publications: Vec::new(),
            source: source.into(),
        }
    }
}

/// A documentation entry: a typed URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    /// Kind of documentation ("general", "manual", "api", ...)
    #[serde(rename = "type")]
    pub doc_type: String,

    /// Location of the documentation
    pub url: String,
}

impl Documentation {
    /// Create a documentation entry
    pub fn new(doc_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            doc_type: doc_type.into(),
            url: url.into(),
        }
    }
}

/// A declared data format, typically an EDAM format term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatTerm {
    /// Human-readable format name (e.g. "FASTA", "BAM")
    pub term: String,

    /// Ontology URI for the term, when the source provides one
    #[serde(default)]
    pub uri: Option<String>,

    /// Ontology URI of the data type this format serializes, if declared
    #[serde(default)]
    pub datatype: Option<String>,
}

impl FormatTerm {
    /// Create a format term without ontology annotations
    pub fn named(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            uri: None,
            datatype: None,
        }
    }
}

/// A publication associated with a tool
///
/// Identifier fields are all optional: different registries know different
/// subsets. Keys the model does not name are routed to [`extra`], the
/// documented extension map, never silently absorbed into the record.
///
/// [`extra`]: Publication::extra
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Publication {
    /// Publication title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Digital Object Identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// PubMed identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmid: Option<String>,

    /// PubMed Central identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmcid: Option<String>,

    /// Publication year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Journal or venue name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,

    /// Link to the publication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Source-specific keys outside the typed model
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Publication {
    /// True when every typed field is unset and the extension map is empty
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.doi.is_none()
            && self.pmid.is_none()
            && self.pmcid.is_none()
            && self.year.is_none()
            && self.journal.is_none()
            && self.url.is_none()
            && self.extra.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults_empty_collections() {
        let json = r#"{"name": "blast", "type": "cmd", "source": "biotools"}"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "blast");
        assert_eq!(record.tool_type.as_deref(), Some("cmd"));
        assert!(record.description.is_empty());
        assert!(record.publications.is_empty());
    }

    #[test]
    fn test_record_rejects_unknown_keys() {
        let json = r#"{"name": "blast", "source": "biotools", "surprise": 1}"#;
        let result: Result<RawRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_publication_extra_keys_routed_to_extension_map() {
        let json = r#"{"title": "A tool paper", "cit_count": 42}"#;
        let publication: Publication = serde_json::from_str(json).unwrap();
        assert_eq!(publication.title.as_deref(), Some("A tool paper"));
        assert_eq!(publication.extra["cit_count"], serde_json::json!(42));
    }

    #[test]
    fn test_publication_is_empty() {
        assert!(Publication::default().is_empty());

        let publication = Publication {
            doi: Some("10.1000/xyz".to_string()),
            ..Publication::default()
        };
        assert!(!publication.is_empty());
    }
}
