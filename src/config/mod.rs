//! Config schema and decoding.
//!
//! # Data Flow
//! ```text
//! raw bytes + format tag (delivered by the config-store watch)
//!     → decoder.rs (serde_json / serde_yaml)
//!     → ConsulClientConfig / ConsulServerConfig / EtcdClientConfig
//!     → translate:: (per-field option emission)
//! ```
//!
//! # Design Decisions
//! - Every top-level field is Option-wrapped: absence means "leave the
//!   framework setting alone", and zero is a legitimate configured value
//! - Schema instances are built fresh per decode and never mutated after
//! - The extension slot and the retry predicate are set programmatically,
//!   never decoded from the document

pub mod consul;
pub mod decoder;
pub mod error;
pub mod etcd;
pub mod schema;

pub use consul::{ConsulClientConfig, ConsulServerConfig};
pub use decoder::ConfigFormat;
pub use error::ConfigError;
pub use etcd::EtcdClientConfig;
