//! Client-side field translation.
//!
//! Fields are visited in schema declaration order: basic info, host:ports,
//! destination service, protocol, connection pooling, failure retry. The
//! first failure aborts and the partial list must not be applied.

use std::time::Duration;

use crate::config::consul::ConsulClientConfig;
use crate::config::error::ConfigError;
use crate::config::etcd::EtcdClientConfig;
use crate::config::schema::{Connection, FailurePolicy, ResultRetryHook};
use crate::translate::address::resolve;
use crate::translate::options::{ClientOption, IdlePool, RetryPolicy};

/// Translate a consul client config into an ordered option list.
pub fn translate_consul_client(
    config: &ConsulClientConfig,
) -> Result<Vec<ClientOption>, ConfigError> {
    let mut options = Vec::new();
    if let Some(info) = &config.client_basic_info {
        options.push(ClientOption::BasicInfo(info.clone()));
    }
    if let Some(hosts) = &config.host_ports {
        options.push(host_ports_option(hosts)?);
    }
    if let Some(dest) = &config.dest_service {
        options.push(ClientOption::DestService(dest.clone()));
    }
    if let Some(protocol) = &config.protocol {
        options.push(ClientOption::Protocol(protocol.clone()));
    }
    if let Some(conn) = &config.connection {
        connection_options(conn, &mut options)?;
    }
    if let Some(policy) = &config.failure_retry {
        options.push(failure_retry_option(
            policy,
            config.should_result_retry.as_ref(),
        ));
    }
    Ok(options)
}

/// Translate an etcd client config.
///
/// Same field order as the consul variant, minus the failure policy the
/// simplified schema does not carry.
pub fn translate_etcd_client(config: &EtcdClientConfig) -> Result<Vec<ClientOption>, ConfigError> {
    let mut options = Vec::new();
    if let Some(info) = &config.client_basic_info {
        options.push(ClientOption::BasicInfo(info.clone()));
    }
    if let Some(hosts) = &config.host_ports {
        options.push(host_ports_option(hosts)?);
    }
    if let Some(dest) = &config.dest_service {
        options.push(ClientOption::DestService(dest.clone()));
    }
    if let Some(protocol) = &config.protocol {
        options.push(ClientOption::Protocol(protocol.clone()));
    }
    if let Some(conn) = &config.connection {
        connection_options(conn, &mut options)?;
    }
    Ok(options)
}

/// Host:port entries carry no family tag; they dial TCP. The whole list
/// rides in one option, resolved in document order.
fn host_ports_option(hosts: &[String]) -> Result<ClientOption, ConfigError> {
    let mut resolved = Vec::with_capacity(hosts.len());
    for host in hosts {
        resolved.push(resolve("tcp", host)?);
    }
    Ok(ClientOption::HostPorts(resolved))
}

/// Both pooling options are emitted whenever `Connection` is present; the
/// `Method` discriminator is left for the framework to arbitrate.
fn connection_options(
    conn: &Connection,
    options: &mut Vec<ClientOption>,
) -> Result<(), ConfigError> {
    let idle = &conn.long_connection;
    options.push(ClientOption::IdlePool(IdlePool {
        min_idle_per_address: idle.min_idle_per_address,
        max_idle_per_address: idle.max_idle_per_address,
        max_idle_global: idle.max_idle_global,
        max_idle_timeout: parse_idle_timeout(&idle.max_idle_timeout)?,
    }));
    options.push(ClientOption::MuxConnections(conn.mux_connection.conn_num));
    Ok(())
}

fn parse_idle_timeout(value: &str) -> Result<Duration, ConfigError> {
    if value.is_empty() {
        return Ok(Duration::ZERO);
    }
    humantime::parse_duration(value).map_err(|source| ConfigError::InvalidIdleTimeout {
        value: value.to_string(),
        source,
    })
}

fn failure_retry_option(
    policy: &FailurePolicy,
    fallback: Option<&ResultRetryHook>,
) -> ClientOption {
    let mut failure_policy = policy.clone();
    if failure_policy.should_result_retry.is_none() {
        failure_policy.should_result_retry = fallback.cloned();
    }
    ClientOption::FailureRetry(RetryPolicy {
        enable: true,
        failure_policy,
    })
}
