//! Simplified client config for the etcd discovery backend.
//!
//! Same field contract as the consul client variant minus the failure
//! policy, and the payload is JSON-only (see `decoder::decode_json_only`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::schema::{Connection, EndpointBasicInfo, Extension};

/// Client-side configuration delivered through etcd.
#[derive(Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EtcdClientConfig {
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

    /// Application extension slot; rendered last by `Display`.
    #[serde(skip)]
    pub my_config: Option<Box<dyn Extension>>,
}

impl fmt::Display for EtcdClientConfig {
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
        if let Some(v) = &self.my_config {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
