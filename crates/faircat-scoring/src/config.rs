//! Configuration for the scoring layer

use faircat_domain::Principle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Per-principle weights for the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipleWeights {
    /// Weight of the Findable principle
    pub findable: f64,
    /// Weight of the Accessible principle
    pub accessible: f64,
    /// Weight of the Interoperable principle
    pub interoperable: f64,
    /// Weight of the Reusable principle
    pub reusable: f64,
}

impl Default for PrincipleWeights {
    /// Uniform weights
    fn default() -> Self {
        Self {
            findable: 1.0,
            accessible: 1.0,
            interoperable: 1.0,
            reusable: 1.0,
        }
    }
}

impl PrincipleWeights {
    /// Weight assigned to one principle
    pub fn get(&self, principle: Principle) -> f64 {
        match principle {
            Principle::Findable => self.findable,
            Principle::Accessible => self.accessible,
            Principle::Interoperable => self.interoperable,
            Principle::Reusable => self.reusable,
        }
    }

    /// Sum of all four weights
    pub fn total(&self) -> f64 {
        self.findable + self.accessible + self.interoperable + self.reusable
    }
}

/// Configuration for the indicator rule engine and aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Operating systems counted as free/open, compared case-insensitively
    pub free_os_allowlist: BTreeSet<String>,

    /// Principle weights for the overall score
    #[serde(default)]
    pub principle_weights: PrincipleWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            free_os_allowlist: ["Linux", "FreeBSD", "OpenBSD", "NetBSD"]
                .into_iter()
                .map(String::from)
                .collect(),
            principle_weights: PrincipleWeights::default(),
        }
    }
}

impl ScoringConfig {
    /// True when the given OS name is on the free-OS allow-list
    pub fn is_free_os(&self, os: &str) -> bool {
        self.free_os_allowlist
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(os))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.free_os_allowlist.is_empty() {
            return Err("free_os_allowlist must not be empty".to_string());
        }
        let weights = &self.principle_weights;
        for principle in Principle::ALL {
            if weights.get(principle) < 0.0 {
                return Err(format!("weight for '{}' must be non-negative", principle));
            }
        }
        if weights.total() == 0.0 {
            return Err("principle weights must not all be zero".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}
