//! Field translation: schema instance → ordered framework options.
//!
//! # Data Flow
//! ```text
//! decoded schema
//!     → client.rs / server.rs (fields visited in declaration order)
//!     → address.rs (family dispatch for listen/dial addresses)
//!     → Vec<ClientOption> / Vec<ServerOption>
//! ```
//!
//! # Design Decisions
//! - Absent field ⇒ no option; translation never substitutes defaults
//! - First failure aborts the whole translation; callers must discard the
//!   partial list rather than apply it
//! - Emission order is fixed so conflicting options resolve by
//!   last-applicable-wins inside the framework

pub mod address;
pub mod client;
pub mod options;
pub mod server;

pub use address::{resolve, ResolvedAddr};
pub use client::{translate_consul_client, translate_etcd_client};
pub use options::{ClientOption, IdlePool, RetryPolicy, ServerOption};
pub use server::translate_server;
