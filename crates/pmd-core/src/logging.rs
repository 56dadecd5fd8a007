//! Logging initialization using the `tracing` ecosystem.
//!
//! Provides:
//! - Console output (colored, human-readable)
//! - Optional file output (daily rotation via `tracing-appender`), plain text
//!   or JSON lines
//! - Configurable log level via env var `RUST_LOG` or explicit parameter

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where and how log records are written.
#[derive(Debug, Clone, Default)]
pub struct LogOptions<'a> {
    /// Default level if `RUST_LOG` is not set (e.g. `"info"`).
    pub level: &'a str,
    /// Directory for daily-rotating log files. Console only when `None`.
    pub dir: Option<&'a str>,
    /// Log file prefix.
    pub module_name: &'a str,
    /// Emit file records as JSON lines instead of plain text.
    pub json: bool,
}

/// Initialize the global tracing subscriber.
///
/// Call once at program start. Console output goes to stderr so that
/// stdout stays free for command results.
pub fn init_logging(opts: &LogOptions<'_>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(opts.level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(true);

    let registry = tracing_subscriber::registry().with(env_filter).with(console_layer);

    match opts.dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, opts.module_name);
            if opts.json {
                let file_layer = fmt::layer().json().with_writer(file_appender).with_target(true);
                registry.with(file_layer).init();
            } else {
                let file_layer = fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true);
                registry.with(file_layer).init();
            }
        }
        None => registry.init(),
    }
}
