use crate::log::{log_error::LogError, logger::Logger, value::Value};

/// Logger that discards every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    #[inline]
    fn log(&self, _values: &[Value]) -> Result<(), LogError> {
        Ok(())
    }
}
