//! Top-level domarch configuration.

use serde::{Deserialize, Serialize};

use super::{ClusterConfig, FilterConfig, FragmentConfig, GraphConfig, StageConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DomarchConfig {
    pub filter: FilterConfig,
    pub stages: StageConfig,
    pub fragments: FragmentConfig,
    pub graph: GraphConfig,
    pub clustering: ClusterConfig,
}

impl DomarchConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &DomarchConfig) -> Result<(), ConfigError> {
        if config.stages.stages.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "stages.stages".to_string(),
                message: "at least one stage is required".to_string(),
            });
        }
        if let Some(similarity) = config.clustering.min_similarity {
            if !(0.0..=1.0).contains(&similarity) {
                return Err(ConfigError::ValidationFailed {
                    field: "clustering.min_similarity".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(identity) = config.graph.min_identity {
            if !(0.0..=100.0).contains(&identity) {
                return Err(ConfigError::ValidationFailed {
                    field: "graph.min_identity".to_string(),
                    message: "must be between 0.0 and 100.0".to_string(),
                });
            }
        }
        if let Some(length) = config.graph.min_alignment_length {
            if length < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "graph.min_alignment_length".to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }
        if let Some(threshold) = config.filter.default_significance {
            if threshold.is_nan() {
                return Err(ConfigError::ValidationFailed {
                    field: "filter.default_significance".to_string(),
                    message: "must be a number".to_string(),
                });
            }
        }
        if config.fragments.min_fragment_length == Some(0) {
            tracing::warn!("fragments.min_fragment_length is 0, treating as 1");
        }
        if config.clustering.novel_id_base == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.novel_id_base".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }
}
