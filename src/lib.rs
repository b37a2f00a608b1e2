//! Synchronized line logging.
//!
//! [`SyncLog`] serializes log calls from any number of threads onto one
//! output and makes every message end with exactly one newline.
//! [`FilterEmpty`] wraps it and drops calls that carry nothing to log.
//!
//! ```
//! use synclog::{BufferSink, SyncLog, Value, sync_log};
//!
//! let sink = BufferSink::new();
//! let log = SyncLog::new(sink.clone());
//! sync_log!(log, "some", " nice", " message").ok();
//!
//! let filter = log.filter_empty();
//! sync_log!(filter, "").ok(); // not logged
//!
//! // log errors only if there are any
//! let res: Result<(), std::io::Error> = Ok(());
//! sync_log!(filter, Value::err(&res)).ok(); // nothing, it's Ok
//!
//! assert_eq!(sink.contents(), "some nice message\n");
//! ```

/// Loads the INI-style configuration used to pick a log output.
pub mod config;
/// Synchronized logger, empty-message filter and supporting types.
pub mod log;

pub use config::{Config, ConfigError};
pub use log::*;
