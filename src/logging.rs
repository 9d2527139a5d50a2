//! Logging subscriber initialisation.
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Install a compact stderr subscriber. `RUST_LOG` takes precedence;
/// otherwise `verbosity` (the count of `-v` flags) picks the level.
pub fn init(verbosity: u8) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
        .with(build_env_filter(verbosity))
        .try_init()
}

fn build_env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level(verbosity)))
}

fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
