//! Logging utilities.
//!
//! Engine code never writes to the global logger directly. It logs through a
//! [`Logger`] handle passed in at construction; [`init_logging`] builds the
//! default `env_logger` backed one.

mod init;
mod logger;

pub use init::{init_logging, LoggingConfig};
pub use logger::Logger;
