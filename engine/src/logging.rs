//! Logging setup for the binaries.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! whoever owns `main`.

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install a formatting subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<(), SetGlobalDefaultError> {
    init_with_default("info")
}

/// Like [`init`], falling back to `default_directive` (e.g. `"debug"`) when
/// `RUST_LOG` is unset or invalid.
pub fn init_with_default(default_directive: &str) -> Result<(), SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
}
