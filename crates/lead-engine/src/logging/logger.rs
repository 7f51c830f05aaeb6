use std::fmt;
use std::sync::Arc;

use log::{Log, Metadata, Record};

/// Logging capability handed to the app and window backends.
///
/// Engine code logs through an explicit `Logger` with the `log` macros'
/// `logger:` argument instead of the process-wide logger, so hosts decide
/// where engine diagnostics go.
///
/// The `log` macros still consult [`log::max_level`] before formatting a
/// record. [`init_logging`](super::init_logging) raises it to the configured
/// filter; hosts building a `Logger` from their own backend must do the same.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<dyn Log>,
}

impl Logger {
    pub fn new<L>(log: L) -> Self
    where
        L: Log + 'static,
    {
        Self {
            inner: Arc::new(log),
        }
    }

    /// Discards every record.
    pub fn silent() -> Self {
        Self::new(Silent)
    }

    /// Forwards to whatever global logger the host installed through `log`.
    pub fn facade() -> Self {
        Self::new(Facade)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        self.inner.log(record);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

struct Silent;

impl Log for Silent {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        false
    }

    fn log(&self, _: &Record<'_>) {}

    fn flush(&self) {}
}

struct Facade;

impl Log for Facade {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        log::logger().log(record);
    }

    fn flush(&self) {
        log::logger().flush();
    }
}
