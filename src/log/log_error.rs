use std::io;

/// Failure of a single `log` call.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The writer was built without an output, or the output was removed.
    #[error("no log output configured")]
    NoOutput,
    /// The underlying sink rejected the write or the flush.
    #[error("failed to write log output: {0}")]
    Write(#[from] io::Error),
}
