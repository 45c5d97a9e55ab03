//! Translate config-store documents into RPC builder options.
//!
//! Raw bytes arrive from a consul/etcd watch layer, get decoded into a
//! typed schema, and every populated field maps to framework options in a
//! fixed order. The watch machinery and the RPC framework builder itself
//! live outside this crate; it only builds the declarative policy values
//! they consume.

pub mod config;
pub mod reload;
pub mod translate;

pub use config::consul::{ConsulClientConfig, ConsulServerConfig};
pub use config::decoder::{decode, decode_json_only, ConfigFormat};
pub use config::error::ConfigError;
pub use config::etcd::EtcdClientConfig;
pub use config::schema::{Extension, ResultRetry, ResultRetryHook};
pub use reload::ActiveOptions;
pub use translate::client::{translate_consul_client, translate_etcd_client};
pub use translate::options::{ClientOption, ServerOption};
pub use translate::server::translate_server;
