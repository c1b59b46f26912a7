use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `FZ_LOG` takes precedence over `--log-level` and accepts full filter
/// directives (e.g. `fz_runtime=trace`).
pub fn init(level: LogLevel, ansi: bool) {
    let filter = EnvFilter::try_from_env("FZ_LOG").unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // A subscriber may already be set when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}
