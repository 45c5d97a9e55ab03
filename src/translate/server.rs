//! Server-side field translation.
//!
//! Order: basic info, listen addresses, transport flag. One `ServiceAddr`
//! option per configured address, in document order; the first address
//! that fails to resolve aborts the whole translation.

use crate::config::consul::ConsulServerConfig;
use crate::config::error::ConfigError;
use crate::translate::address::resolve;
use crate::translate::options::ServerOption;

/// Translate a consul server config into an ordered option list.
pub fn translate_server(config: &ConsulServerConfig) -> Result<Vec<ServerOption>, ConfigError> {
    let mut options = Vec::new();
    if let Some(info) = &config.server_basic_info {
        options.push(ServerOption::BasicInfo(info.clone()));
    }
    if let Some(addrs) = &config.service_addr {
        for addr in addrs {
            options.push(ServerOption::ServiceAddr(resolve(
                &addr.network,
                &addr.address,
            )?));
        }
    }
    // Enable-only: false is indistinguishable from absent on purpose.
    if config.mux_transport == Some(true) {
        options.push(ServerOption::MuxTransport);
    }
    Ok(options)
}
