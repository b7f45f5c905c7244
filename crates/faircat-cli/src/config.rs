//! Configuration loading for the CLI.

use crate::error::{CliError, Result};
use faircat_pipeline::PipelineConfig;
use std::path::Path;

/// Load pipeline configuration from an optional TOML file.
///
/// Falls back to the built-in defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path).map_err(|source| CliError::Input {
                path: path.display().to_string(),
                source,
            })?;
            PipelineConfig::from_toml(&toml_str).map_err(CliError::Config)
        }
        None => Ok(PipelineConfig::default()),
    }
}
