//! Consul-backed config variants: one client-side, one server-side.
//!
//! Field presence drives translation: an absent field emits no option and
//! contributes no line to the `Display` rendering. Declaration order here
//! is the option emission order and the rendering order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::schema::{
    Addr, Connection, EndpointBasicInfo, Extension, FailurePolicy, ResultRetryHook,
};

/// Client-side configuration delivered through consul.
#[derive(Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsulClientConfig {
    #[serde(rename = "ClientBasicInfo")]
    pub client_basic_info: Option<EndpointBasicInfo>,

    /// Dial targets as "host:port" strings.
    #[serde(rename = "HostPorts")]
    pub host_ports: Option<Vec<String>>,

    #[serde(rename = "DestService")]
    pub dest_service: Option<String>,

    #[serde(rename = "Protocol")]
    pub protocol: Option<String>,

    #[serde(rename = "Connection")]
    pub connection: Option<Connection>,

    #[serde(rename = "FailureRetry")]
    pub failure_retry: Option<FailurePolicy>,

    /// Fallback predicate used when `FailureRetry` carries none.
    #[serde(skip)]
    pub should_result_retry: Option<ResultRetryHook>,

    /// Application extension slot; rendered last by `Display`, never
    /// translated into an option.
    #[serde(skip)]
    pub my_config: Option<Box<dyn Extension>>,
}

impl fmt::Display for ConsulClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(v) = &self.client_basic_info {
            writeln!(f, "ClientBasicInfo: {v:?}")?;
        }
        if let Some(v) = &self.host_ports {
            writeln!(f, "HostPorts: {v:?}")?;
        }
        if let Some(v) = &self.dest_service {
            writeln!(f, "DestService: {v}")?;
        }
        if let Some(v) = &self.protocol {
            writeln!(f, "Protocol: {v}")?;
        }
        if let Some(v) = &self.connection {
            writeln!(f, "Connection: {v:?}")?;
        }
        if let Some(v) = &self.failure_retry {
            writeln!(f, "FailureRetry: {v:?}")?;
        }
        if let Some(v) = &self.my_config {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Server-side configuration delivered through consul.
#[derive(Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsulServerConfig {
    #[serde(rename = "ServerBasicInfo")]
    pub server_basic_info: Option<EndpointBasicInfo>,

    /// Listen addresses, resolved per network family at translation time.
    #[serde(rename = "ServiceAddr")]
    pub service_addr: Option<Vec<Addr>>,

    /// Enable-only flag for the multiplexed transport.
    #[serde(rename = "MuxTransport")]
    pub mux_transport: Option<bool>,

    /// Application extension slot; rendered last by `Display`.
    #[serde(skip)]
    pub my_config: Option<Box<dyn Extension>>,
}

impl fmt::Display for ConsulServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(v) = &self.server_basic_info {
            writeln!(f, "ServerBasicInfo: {v:?}")?;
        }
        if let Some(v) = &self.service_addr {
            writeln!(f, "ServiceAddr: {v:?}")?;
        }
        if let Some(v) = &self.mux_transport {
            writeln!(f, "MuxTransport: {v}")?;
        }
        if let Some(v) = &self.my_config {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
