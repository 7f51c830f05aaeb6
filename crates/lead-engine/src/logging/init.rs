use super::Logger;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "lead_engine=trace,wgpu=warn"). When unset, `RUST_LOG` is consulted, then
/// the level falls back to `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }
}

/// Builds an `env_logger` backed [`Logger`].
///
/// Nothing is installed as the global `log` logger; the returned handle is
/// what the app and window write through. The global max level is raised to
/// the configured filter so the `log` macros do not drop records early.
pub fn init_logging(config: LoggingConfig) -> Logger {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter {
        builder.parse_filters(&filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }

    builder.write_style(config.write_style);

    let backend = builder.build();
    if backend.filter() > log::max_level() {
        log::set_max_level(backend.filter());
    }

    let logger = Logger::new(backend);
    log::debug!(logger: logger, "logging initialized");
    logger
}
