//! Tracing configuration for the astspec binary.
//!
//! The subscriber is only initialised when `ASTSPEC_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead in normal runs.
//!
//! ```bash
//! ASTSPEC_LOG=debug astspec ast-spec.d.ts
//! ASTSPEC_LOG="astspec_emitter=trace" astspec ast-spec.d.ts
//! ```

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `ASTSPEC_LOG`, falling back to `RUST_LOG`.
/// `ASTSPEC_LOG` takes precedence when both are set.
fn env_filter() -> Option<EnvFilter> {
    let spec = std::env::var("ASTSPEC_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()?;
    if spec.is_empty() {
        return None;
    }
    Some(EnvFilter::new(spec))
}

pub fn init_tracing() {
    let Some(filter) = env_filter() else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
