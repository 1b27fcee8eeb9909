//! Tracing bootstrap for binaries and demos.
//!
//! The library only emits events; installing a subscriber is left to the
//! program embedding it. This helper is what the bundled demo uses.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter directive used when `RUST_LOG` is not set.
fn default_directive(level: Option<&str>) -> String {
    format!("lunchtray={}", level.unwrap_or("info"))
}

/// Install a compact stdout subscriber.
///
/// `RUST_LOG` wins over `level` when present. Calling this more than once
/// is harmless; later calls are ignored.
pub fn init_tracing(level: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}
