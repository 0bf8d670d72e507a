use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. `RUST_LOG` takes precedence over
/// `default_level`. Logs go to stderr so stdout stays free for replies.
pub fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
