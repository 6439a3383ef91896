use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{AppConfig, LogFormat};

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// command output.
pub fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::app::DEFAULT_LOG_FILTER));

    let base = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(base.json()).init(),
        LogFormat::Text => registry.with(base.without_time()).init(),
    }
}
