use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::graphml::DuplicateEdgePolicy;
use crate::link::DelayModel;

/// Optional settings read from a YAML file. Command-line arguments take
/// precedence over every field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Attach one host to every switch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<bool>,
    /// Directory the generated script is written to (default: current directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Handling of parallel links between the same pair of switches
    pub duplicate_edges: DuplicateEdgePolicy,
    /// Constants of the propagation delay estimation
    pub delay: DelayModel,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let delay = &self.delay;
        for (name, value) in [
            ("earth_radius_m", delay.earth_radius_m),
            ("speed_of_light_m_per_s", delay.speed_of_light_m_per_s),
            ("refractive_index", delay.refractive_index),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidDelay(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if let Some(dir) = &self.output_dir {
            if dir.as_os_str().is_empty() {
                return Err(ValidationError::InvalidOutput(
                    "output_dir cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid delay configuration: {0}")]
    InvalidDelay(String),
    #[error("Invalid output configuration: {0}")]
    InvalidOutput(String),
}
