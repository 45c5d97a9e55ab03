//! Shared schema building blocks for client and server config documents.
//!
//! External key names are fixed and case-sensitive; JSON and YAML payloads
//! use the same keys. Maps are `BTreeMap` so stringification and
//! translation stay deterministic.

use std::any::Any;
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Identifies an endpoint for the framework's introspection and metrics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointBasicInfo {
    #[serde(rename = "ServiceName")]
    pub service_name: String,

    #[serde(rename = "Method")]
    pub method: String,

    /// Free-form labels attached to the endpoint.
    #[serde(rename = "Tags")]
    pub tags: BTreeMap<String, String>,
}

/// Idle-connection bounds for long-lived connection pooling.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct IdleConfig {
    #[serde(rename = "MinIdlePerAddress")]
    pub min_idle_per_address: usize,

    #[serde(rename = "MaxIdlePerAddress")]
    pub max_idle_per_address: usize,

    #[serde(rename = "MaxIdleGlobal")]
    pub max_idle_global: usize,

    /// Duration string such as "30s". Empty means no idle timeout.
    #[serde(rename = "MaxIdleTimeout")]
    pub max_idle_timeout: String,
}

/// Connection count for the multiplexed transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MuxConnection {
    #[serde(rename = "ConnNum")]
    pub conn_num: usize,
}

/// Connection pooling settings.
///
/// Both sub-structures are always present in the schema; `method` names
/// the one the operator intends, but arbitration between them belongs to
/// the framework, not to translation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Connection {
    #[serde(rename = "Method")]
    pub method: String,

    #[serde(rename = "LongConnection")]
    pub long_connection: IdleConfig,

    #[serde(rename = "MuxConnection")]
    pub mux_connection: MuxConnection,
}

/// When to stop retrying a call.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StopPolicy {
    #[serde(rename = "MaxRetryTimes")]
    pub max_retry_times: u32,

    /// Total budget across all attempts, in milliseconds.
    #[serde(rename = "MaxDurationMS")]
    pub max_duration_ms: u32,

    #[serde(rename = "DisableChainStop")]
    pub disable_chain_stop: bool,

    /// Stop retrying once the request deadline would be exceeded.
    #[serde(rename = "DDLStop")]
    pub ddl_stop: bool,

    #[serde(rename = "CBPolicy")]
    pub cb_policy: CBPolicy,
}

/// Circuit-breaker threshold attached to the stop policy.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CBPolicy {
    #[serde(rename = "ErrorRate")]
    pub error_rate: f64,
}

/// Discriminator for the retry backoff strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackOffType {
    #[default]
    None,
    Fixed,
    Random,
}

/// Config key for the fixed backoff interval in milliseconds.
pub const BACKOFF_FIX_MS: &str = "fix_ms";
/// Config key for the lower bound of the random backoff range.
pub const BACKOFF_MIN_MS: &str = "min_ms";
/// Config key for the upper bound of the random backoff range.
pub const BACKOFF_MAX_MS: &str = "max_ms";

/// Backoff strategy plus its named numeric parameters.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BackOffPolicy {
    #[serde(rename = "BackOffType")]
    pub backoff_type: BackOffType,

    #[serde(rename = "CfgItems")]
    pub cfg_items: BTreeMap<String, f64>,
}

/// Declarative failure retry policy.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FailurePolicy {
    #[serde(rename = "StopPolicy")]
    pub stop_policy: StopPolicy,

    #[serde(rename = "BackOffPolicy")]
    pub back_off_policy: Option<BackOffPolicy>,

    #[serde(rename = "RetrySameNode")]
    pub retry_same_node: bool,

    /// Opaque extension payload forwarded to the framework verbatim.
    #[serde(rename = "Extra")]
    pub extra: String,

    /// Set programmatically, never decoded from the document.
    #[serde(skip)]
    pub should_result_retry: Option<ResultRetryHook>,
}

/// One listen address: a network family tag plus an address string
/// interpreted by that family's resolver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Addr {
    pub network: String,
    pub address: String,
}

/// Decides whether a finished call should be retried.
///
/// Supplied by the application and passed through to the framework
/// unmodified; translation never invokes it.
pub trait ResultRetry: Send + Sync {
    /// Retry after a failed call.
    fn error_retry(&self, err: &(dyn StdError + 'static)) -> bool {
        let _ = err;
        false
    }

    /// Retry after a call that succeeded with a response that still
    /// warrants one.
    fn resp_retry(&self, resp: &dyn Any) -> bool {
        let _ = resp;
        false
    }
}

/// Shared handle to a [`ResultRetry`] predicate.
#[derive(Clone)]
pub struct ResultRetryHook(pub Arc<dyn ResultRetry>);

impl fmt::Debug for ResultRetryHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResultRetryHook(..)")
    }
}

// Hooks compare by identity: two handles are equal only when they share
// the same predicate instance.
impl PartialEq for ResultRetryHook {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Application-defined extension slot.
///
/// Any value that can render itself qualifies; the rendering is appended
/// verbatim after the owning config's own lines.
pub trait Extension: fmt::Display + Send + Sync {}

impl<T: fmt::Display + Send + Sync> Extension for T {}
