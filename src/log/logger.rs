use crate::log::{log_error::LogError, value::Value};
use std::sync::Arc;

/// Anything that accepts a log call.
///
/// Implemented by [`SyncLog`](crate::log::sync_log::SyncLog) and
/// [`FilterEmpty`](crate::log::filter_empty::FilterEmpty), so callers can
/// hold either one behind the same contract.
pub trait Logger: Send + Sync {
    /// Logs the rendered concatenation of `values`.
    ///
    /// # Errors
    /// Returns a [`LogError`] when the output cannot be written.
    fn log(&self, values: &[Value]) -> Result<(), LogError>;
}

impl<L: Logger + ?Sized> Logger for &L {
    #[inline]
    fn log(&self, values: &[Value]) -> Result<(), LogError> {
        (**self).log(values)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    #[inline]
    fn log(&self, values: &[Value]) -> Result<(), LogError> {
        (**self).log(values)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    #[inline]
    fn log(&self, values: &[Value]) -> Result<(), LogError> {
        (**self).log(values)
    }
}
