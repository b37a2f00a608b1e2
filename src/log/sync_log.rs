use crate::{
    config::{Config, ConfigError},
    log::{
        filter_empty::FilterEmpty,
        log_error::LogError,
        logger::Logger,
        output,
        value::{Value, render},
    },
};
use parking_lot::Mutex;
use std::{
    fmt,
    io::{self, Write},
};

const NEWLINE: u8 = b'\n';

/// Boxed byte sink a [`SyncLog`] writes to.
pub type Output = Box<dyn Write + Send>;

/// Logger that serializes writes to a shared output.
///
/// Each call to [`log`](Self::log) renders its values, makes sure the text
/// ends with exactly one `\n`, and writes it with a single `write_all`
/// while holding the lock. Concurrent callers therefore never interleave
/// within a line; the order of lines is the order in which callers
/// acquired the lock.
///
/// # Example
///
/// ```
/// use synclog::{BufferSink, SyncLog, sync_log};
///
/// let sink = BufferSink::new();
/// let log = SyncLog::new(sink.clone());
/// assert!(sync_log!(log, "some", " nice", " message").is_ok());
/// assert_eq!(sink.contents(), "some nice message\n");
/// ```
pub struct SyncLog {
    out: Mutex<Option<Output>>,
}

impl SyncLog {
    /// Creates a logger bound to `sink`.
    pub fn new<W: Write + Send + 'static>(sink: W) -> Self {
        Self {
            out: Mutex::new(Some(Box::new(sink))),
        }
    }

    /// Creates a logger with no output. Every call fails with
    /// [`LogError::NoOutput`] until [`set_output`](Self::set_output) is used.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            out: Mutex::new(None),
        }
    }

    /// Logger writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Opens the output described by the `[Logging]` section of `config`.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if a file output cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let out = output::open(config)?;
        Ok(Self {
            out: Mutex::new(Some(out)),
        })
    }

    /// Writes the rendered `values` followed by a newline unless the text
    /// already ends with one.
    ///
    /// # Errors
    /// - [`LogError::NoOutput`] if the logger has no output.
    /// - [`LogError::Write`] if the output fails to write or flush.
    pub fn log(&self, values: &[Value]) -> Result<(), LogError> {
        self.write_line(render(values))
    }

    pub(crate) fn write_line(&self, mut line: String) -> Result<(), LogError> {
        if line.as_bytes().last() != Some(&NEWLINE) {
            line.push(char::from(NEWLINE));
        }

        let mut guard = self.out.lock();
        let out = guard.as_mut().ok_or(LogError::NoOutput)?;
        out.write_all(line.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Replaces the output and returns the previous one.
    ///
    /// The swap waits for any in-flight write to finish, so no line is
    /// split between the old and the new output.
    pub fn set_output<W: Write + Send + 'static>(&self, sink: W) -> Option<Output> {
        let previous = self.out.lock().replace(Box::new(sink));
        tracing::debug!(had_output = previous.is_some(), "log output replaced");
        previous
    }

    /// Removes the output, leaving the logger detached.
    pub fn take_output(&self) -> Option<Output> {
        self.out.lock().take()
    }

    /// Returns a logger that skips empty messages and lone nil values.
    #[must_use]
    pub fn filter_empty(&self) -> FilterEmpty<'_> {
        FilterEmpty::new(self)
    }
}

impl Default for SyncLog {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for SyncLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncLog")
            .field("has_output", &self.out.lock().is_some())
            .finish()
    }
}

impl Logger for SyncLog {
    #[inline]
    fn log(&self, values: &[Value]) -> Result<(), LogError> {
        SyncLog::log(self, values)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::{log::buffer_sink::BufferSink, values};
    use pretty_assertions::assert_eq;

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logger() -> (SyncLog, BufferSink) {
        let sink = BufferSink::new();
        (SyncLog::new(sink.clone()), sink)
    }

    #[test]
    fn appends_newline_when_missing() {
        let (log, sink) = logger();
        log.log(&values!["some", "nice", "message"]).unwrap();
        assert_eq!(sink.contents(), "somenicemessage\n");
    }

    #[test]
    fn keeps_single_existing_newline() {
        let (log, sink) = logger();
        log.log(&values!["done\n"]).unwrap();
        assert_eq!(sink.contents(), "done\n");
    }

    #[test]
    fn empty_call_writes_bare_newline() {
        let (log, sink) = logger();
        log.log(&[]).unwrap();
        log.log(&values![""]).unwrap();
        assert_eq!(sink.contents(), "\n\n");
    }

    #[test]
    fn nil_is_rendered() {
        let (log, sink) = logger();
        log.log(&[Value::Nil]).unwrap();
        assert_eq!(sink.contents(), "<nil>\n");
    }

    #[test]
    fn detached_fails_lazily() {
        let log = SyncLog::detached();
        match log.log(&values!["x"]) {
            Err(LogError::NoOutput) => {}
            other => panic!("expected NoOutput, got: {:?}", other),
        }
    }

    #[test]
    fn sink_errors_are_returned() {
        let log = SyncLog::new(FailingSink);
        match log.log(&values!["x"]) {
            Err(LogError::Write(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Write error, got: {:?}", other),
        }
    }

    #[test]
    fn set_output_redirects_future_writes() {
        let (log, first) = logger();
        log.log(&values!["one"]).unwrap();

        let second = BufferSink::new();
        let previous = log.set_output(second.clone());
        assert!(previous.is_some());
        log.log(&values!["two"]).unwrap();

        assert_eq!(first.contents(), "one\n");
        assert_eq!(second.contents(), "two\n");
    }

    #[test]
    fn set_output_attaches_detached_logger() {
        let log = SyncLog::default();
        let sink = BufferSink::new();
        assert!(log.set_output(sink.clone()).is_none());
        log.log(&values![&42]).unwrap();
        assert_eq!(sink.contents(), "42\n");
    }

    #[test]
    fn take_output_detaches() {
        let (log, _sink) = logger();
        assert!(log.take_output().is_some());
        assert!(matches!(log.log(&values!["x"]), Err(LogError::NoOutput)));
    }
}
