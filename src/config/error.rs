//! Error taxonomy for the decode → translate pipeline.
//!
//! # Design Decisions
//! - Every error returns to the immediate caller unchanged; the core
//!   never retries, logs, or produces partial results
//! - Parser diagnostics are wrapped, not re-worded
//! - Translation stops at the first failing field

use thiserror::Error;

/// Errors produced while decoding or translating a config document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Format tag outside the set this config variant accepts.
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Malformed JSON payload.
    #[error("json decode error: {0}")]
    JsonDecode(#[from] serde_json::Error),

    /// Malformed YAML payload.
    #[error("yaml decode error: {0}")]
    YamlDecode(#[from] serde_yaml::Error),

    /// Address family tag outside the recognized set.
    #[error("unknown network family: {0}")]
    UnknownNetworkFamily(String),

    /// Recognized family, but the address string did not resolve.
    #[error("cannot resolve {family} address {address:?}: {reason}")]
    AddressResolution {
        family: String,
        address: String,
        reason: String,
    },

    /// `MaxIdleTimeout` is not a parseable duration string.
    #[error("invalid idle timeout {value:?}: {source}")]
    InvalidIdleTimeout {
        value: String,
        source: humantime::DurationError,
    },
}
