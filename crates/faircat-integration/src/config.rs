//! Configuration for the integration layer

use serde::{Deserialize, Serialize};

/// Publication identifier fields, in the order the identifier-keyed merge
/// tries them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationIdField {
    /// Publication title (tag-stripped, trailing-period-stripped)
    Title,
    /// PubMed Central identifier
    Pmcid,
    /// PubMed identifier
    Pmid,
    /// DOI (compared uppercased)
    Doi,
}

impl PublicationIdField {
    /// Field name as it appears in conflict reports
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationIdField::Title => "title",
            PublicationIdField::Pmcid => "pmcid",
            PublicationIdField::Pmid => "pmid",
            PublicationIdField::Doi => "doi",
        }
    }
}

/// Configuration for the record integrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Identifier fields the publication merge passes over, in order.
    /// Later fields win ties already resolved by earlier ones.
    pub identifier_priority: Vec<PublicationIdField>,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            identifier_priority: vec![
                PublicationIdField::Title,
                PublicationIdField::Pmcid,
                PublicationIdField::Pmid,
                PublicationIdField::Doi,
            ],
        }
    }
}

impl IntegrationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.identifier_priority.is_empty() {
            return Err("identifier_priority must name at least one field".to_string());
        }
        for (i, field) in self.identifier_priority.iter().enumerate() {
            if self.identifier_priority[..i].contains(field) {
                return Err(format!(
                    "identifier_priority lists '{}' more than once",
                    field.as_str()
                ));
            }
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}
