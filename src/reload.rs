//! Atomic swap of the active option set.
//!
//! The external watch layer (consul/etcd client) calls
//! [`ActiveOptions::reload_with`] on every change notification. A failed
//! decode or translation keeps the previously active set in effect, so a
//! bad config push never degrades a running service.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{info, warn};

use crate::config::error::ConfigError;

/// Currently applied option list, swapped atomically on reload.
///
/// Readers take lock-free snapshots; `decode` and `translate` themselves
/// need no synchronization and run outside this type.
pub struct ActiveOptions<T> {
    current: ArcSwap<Vec<T>>,
}

impl<T> ActiveOptions<T> {
    /// Start with an empty option set.
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Snapshot of the currently active options.
    pub fn load(&self) -> Arc<Vec<T>> {
        self.current.load_full()
    }

    /// Replace the active set unconditionally.
    pub fn install(&self, options: Vec<T>) {
        self.current.store(Arc::new(options));
    }

    /// Rebuild the option set and swap it in.
    ///
    /// `rebuild` runs the decode+translate pipeline over the freshly
    /// delivered payload. On failure the previous set stays active and the
    /// error is passed back to the watch layer.
    pub fn reload_with<F>(&self, rebuild: F) -> Result<(), ConfigError>
    where
        F: FnOnce() -> Result<Vec<T>, ConfigError>,
    {
        match rebuild() {
            Ok(options) => {
                info!(count = options.len(), "config reloaded");
                self.install(options);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "config reload failed, keeping current option set");
                Err(e)
            }
        }
    }
}

impl<T> Default for ActiveOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}
