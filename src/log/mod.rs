pub mod buffer_sink;
pub mod filter_empty;
pub mod log_error;
pub mod log_macros;
pub mod logger;
pub mod noop_logger;
pub mod output;
pub mod sync_log;
pub mod value;

pub use buffer_sink::BufferSink;
pub use filter_empty::FilterEmpty;
pub use log_error::LogError;
pub use logger::Logger;
pub use noop_logger::NoopLogger;
pub use sync_log::{Output, SyncLog};
pub use value::{NIL_TEXT, Value, render};
