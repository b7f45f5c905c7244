//! Pipeline configuration

use faircat_integration::IntegrationConfig;
use faircat_scoring::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Combined configuration for a batch run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Integration settings (publication identifier priority)
    #[serde(default)]
    pub integration: IntegrationConfig,

    /// Scoring settings (free-OS allow-list, principle weights)
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl PipelineConfig {
    /// Validate both halves of the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.integration.validate()?;
        self.scoring.validate()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}
