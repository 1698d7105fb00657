//! Logging setup using `tracing-subscriber` and `tracing-appender`.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log file name inside the log directory.
pub const LOG_FILE: &str = "app.log";

/// Holds the non-blocking writer guard for file logging.
///
/// Dropping it flushes pending entries, so keep it alive for the process.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Default filter when `RUST_LOG` is unset.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug,hyper=info,hyper_util=info,reqwest=info"
    } else {
        "info"
    }
}

/// Initialise logging to stderr and `{log_dir}/app.log`.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn init(log_dir: &Path, debug: bool) -> std::io::Result<LoggingGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking);

    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(LoggingGuard { _guard: guard })
}
