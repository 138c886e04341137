//! Logging initialisation via tracing-subscriber.

use tracing_subscriber::EnvFilter;

/// Pick the filter for this run and install the global subscriber.
///
/// `-v` and `-vv` win over everything; otherwise `RUST_LOG` is used when set
/// and valid, and `configured` (the `log-level` config key) is the fallback.
/// Output goes to stderr so it never mixes with command output.
pub fn init(verbose: u8, configured: &str) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(configured))
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    // A second init (tests driving `run` twice) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
