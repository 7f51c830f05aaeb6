//! Process entry point.

use std::process::ExitCode;

use anyhow::Result;

use crate::core::App;
use crate::logging::{init_logging, Logger, LoggingConfig};

/// Builds the app with `factory`, runs it to completion and drops it.
///
/// A factory error (typically the window or GPU surface failing to come up)
/// is logged and turned into a failing exit code.
///
/// ```no_run
/// use lead_engine::{entry, App, LoggingConfig, WindowConfig};
///
/// fn main() -> std::process::ExitCode {
///     entry::run(LoggingConfig::default(), |logger| {
///         App::new(WindowConfig::default(), logger)
///     })
/// }
/// ```
pub fn run<F>(logging: LoggingConfig, factory: F) -> ExitCode
where
    F: FnOnce(Logger) -> Result<App>,
{
    let logger = init_logging(logging);
    run_with_logger(logger, factory)
}

/// Like [`run`], with a logger the host already built.
pub fn run_with_logger<F>(logger: Logger, factory: F) -> ExitCode
where
    F: FnOnce(Logger) -> Result<App>,
{
    match start(logger.clone(), factory) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!(logger: logger, "failed to start: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn start<F>(logger: Logger, factory: F) -> Result<()>
where
    F: FnOnce(Logger) -> Result<App>,
{
    let mut app = factory(logger)?;
    app.run();
    drop(app);
    Ok(())
}
