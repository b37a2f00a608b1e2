//! Macros for building log calls out of heterogeneous values.
//!
//! Every argument goes through `Value::from`, so references to anything
//! `Display`, owned `String`s, `Option<&T>` and ready-made [`Value`]s
//! can be mixed freely.
//!
//! [`Value`]: crate::log::value::Value

/// Builds a `[Value; N]` array from its arguments.
///
/// ```
/// use synclog::{Value, values};
///
/// let vals = values!["id=", &7, Value::Nil];
/// assert_eq!(synclog::render(&vals), "id=7<nil>");
/// ```
#[macro_export]
macro_rules! values {
    () => {
        <[$crate::Value; 0] as ::core::default::Default>::default()
    };
    ($($v:expr),+ $(,)?) => {
        [$($crate::Value::from($v)),+]
    };
}

/// Calls [`Logger::log`](crate::Logger::log) on `$logger` with the given
/// values and yields its `Result`.
///
/// ```
/// use synclog::{BufferSink, SyncLog, sync_log};
///
/// let sink = BufferSink::new();
/// let log = SyncLog::new(sink.clone());
/// let filter = log.filter_empty();
/// assert!(sync_log!(filter).is_ok());
/// assert!(sync_log!(filter, "retry ", &3).is_ok());
/// assert_eq!(sink.contents(), "retry 3\n");
/// ```
#[macro_export]
macro_rules! sync_log {
    ($logger:expr $(, $v:expr)* $(,)?) => {
        $crate::Logger::log(&$logger, &$crate::values![$($v),*])
    };
}
