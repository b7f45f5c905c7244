//! Identity keys for grouping raw records

use serde::{Deserialize, Serialize};
use std::fmt;

/// The (name, type) pair under which raw records are grouped
///
/// Two records with equal keys are considered the same logical tool for
/// integration. Version is deliberately not part of the key: versions of
/// one tool collapse into one integrated instance. An absent type is its
/// own partition, distinct from every named type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IdentityKey {
    /// Case-preserving tool name, extracted verbatim from the record
    pub name: String,

    /// Tool type, or `None` for untyped records
    #[serde(rename = "type")]
    pub tool_type: Option<String>,
}

impl IdentityKey {
    /// Create an identity key
    pub fn new(name: impl Into<String>, tool_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            tool_type,
        }
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tool_type {
            Some(t) => write!(f, "{}/{}", self.name, t),
            None => write!(f, "{}", self.name),
        }
    }
}
