//! Framework option values produced by translation.
//!
//! The collaborating RPC builder consumes these as opaque settings; each
//! variant corresponds to exactly one logical builder knob.

use std::time::Duration;

use crate::config::schema::{EndpointBasicInfo, FailurePolicy};
use crate::translate::address::ResolvedAddr;

/// Idle connection pool sizing for long-lived connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdlePool {
    pub min_idle_per_address: usize,
    pub max_idle_per_address: usize,
    pub max_idle_global: usize,
    pub max_idle_timeout: Duration,
}

/// Composite failure retry policy handed to the framework builder.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Translation only builds enabled policies; the flag mirrors the
    /// framework's own declarative policy container.
    pub enable: bool,

    /// The decoded policy, predicate slot already resolved.
    pub failure_policy: FailurePolicy,
}

/// One client builder setting.
///
/// Options apply in emission order; when two touch the same knob the last
/// applicable one wins, which is the framework's concern, not ours.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientOption {
    /// Endpoint identity for introspection and metrics.
    BasicInfo(EndpointBasicInfo),

    /// Resolved dial targets, in document order.
    HostPorts(Vec<ResolvedAddr>),

    /// Logical name of the destination service.
    DestService(String),

    /// Transport protocol name, passed through verbatim.
    Protocol(String),

    /// Long-connection idle pool sizing.
    IdlePool(IdlePool),

    /// Connection count for the multiplexed transport.
    MuxConnections(usize),

    /// Composite failure retry policy.
    FailureRetry(RetryPolicy),
}

/// One server builder setting.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerOption {
    /// Endpoint identity for introspection and metrics.
    BasicInfo(EndpointBasicInfo),

    /// One resolved listen address; repeated per configured address.
    ServiceAddr(ResolvedAddr),

    /// Enable the multiplexed transport. Enable-only: absence or `false`
    /// in the document emits nothing.
    MuxTransport,
}
