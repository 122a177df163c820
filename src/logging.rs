//! Stderr logging for the puzzle binaries. Stdout carries only the answers.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// With `RUST_LOG` unset only warnings and errors are shown. Each binary logs under its own
/// name and the shared input helpers under `advent`, so `RUST_LOG=day01=debug,advent=debug`
/// traces a whole day 1 run.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
