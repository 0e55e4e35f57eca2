use tracing_subscriber::{fmt as tfmt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` wins; otherwise only warnings are
/// shown, or everything down to debug with `verbose`. Logs go to stderr so the
/// chat transcript on stdout stays clean.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignored when a subscriber is already installed.
    let _ = tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init();
}
