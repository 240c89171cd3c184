//! Logging setup for the staffdex binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`
/// (the `--log-level` flag).
///
/// Logs are written to stderr. stdout holds one JSON line per answered
/// query (`lookup`, `repl`), so `staffdex repl < queries.txt | jq` sees
/// nothing but answers.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
