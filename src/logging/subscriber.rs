//! Console tracing subscriber setup.
use tracing_subscriber::EnvFilter;

/// Install the global console subscriber.
///
/// The default level is `info`, lifted to `debug` with `--verbose`. The
/// `LINTSETUP_LOG` environment variable overrides both (standard
/// `EnvFilter` syntax).
pub fn init_subscriber(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("LINTSETUP_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
