use crate::log::{
    log_error::LogError,
    logger::Logger,
    sync_log::SyncLog,
    value::{Value, render},
};

/// Wrapper around a [`SyncLog`] that skips calls with nothing to say.
///
/// A call is dropped when it has no values, when its only value is
/// [`Value::Nil`], or when its values render to an empty string. Anything
/// else is rendered once and handed to the wrapped logger. Handy for
/// logging an error only if there is one:
///
/// ```
/// use synclog::{BufferSink, SyncLog, Value};
///
/// let sink = BufferSink::new();
/// let log = SyncLog::new(sink.clone());
/// let filter = log.filter_empty();
///
/// let ok: Result<(), std::io::Error> = Ok(());
/// filter.log(&[Value::err(&ok)]).unwrap();
/// assert!(sink.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FilterEmpty<'a> {
    sync: &'a SyncLog,
}

impl<'a> FilterEmpty<'a> {
    pub fn new(sync: &'a SyncLog) -> Self {
        Self { sync }
    }

    /// The wrapped logger.
    #[must_use]
    pub fn inner(&self) -> &'a SyncLog {
        self.sync
    }

    /// Forwards `values` unless the call is empty.
    ///
    /// Suppressed calls return `Ok(())`.
    ///
    /// # Errors
    /// Returns whatever the wrapped [`SyncLog`] returns for forwarded calls.
    pub fn log(&self, values: &[Value]) -> Result<(), LogError> {
        match values {
            [] | [Value::Nil] => return Ok(()),
            _ => {}
        }
        let out = render(values);
        if out.is_empty() {
            return Ok(());
        }
        self.sync.write_line(out)
    }
}

impl Logger for FilterEmpty<'_> {
    #[inline]
    fn log(&self, values: &[Value]) -> Result<(), LogError> {
        FilterEmpty::log(self, values)
    }
}
