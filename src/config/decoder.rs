//! Format dispatch for raw config payloads.
//!
//! # Design Decisions
//! - Closed two-format enumeration (JSON, YAML); no plugin registration
//! - Decode is pure: a fresh schema instance per call, no merging with
//!   previously decoded state
//! - Parse failures surface the underlying serde diagnostic unchanged

use serde::de::DeserializeOwned;

use crate::config::error::ConfigError;

/// Serialization format of a raw config payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Map a config-store content-type tag to a format.
    ///
    /// Tags match case-sensitively; anything outside the closed set fails
    /// with [`ConfigError::UnsupportedFormat`] carrying the offending tag.
    pub fn from_tag(tag: &str) -> Result<Self, ConfigError> {
        match tag {
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Decode a raw payload into a fresh schema instance.
pub fn decode<T: DeserializeOwned>(format: ConfigFormat, data: &[u8]) -> Result<T, ConfigError> {
    match format {
        ConfigFormat::Json => Ok(serde_json::from_slice(data)?),
        ConfigFormat::Yaml => Ok(serde_yaml::from_slice(data)?),
    }
}

/// Decode for the etcd variant, which ships JSON documents only.
pub fn decode_json_only<T: DeserializeOwned>(
    format: ConfigFormat,
    data: &[u8],
) -> Result<T, ConfigError> {
    match format {
        ConfigFormat::Json => Ok(serde_json::from_slice(data)?),
        ConfigFormat::Yaml => Err(ConfigError::UnsupportedFormat("yaml".to_string())),
    }
}
