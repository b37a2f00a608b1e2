use parking_lot::Mutex;
use std::{
    io::{self, Write},
    sync::Arc,
};

/// Cloneable in-memory sink.
///
/// Every clone appends to the same buffer, so one clone can be handed to a
/// [`SyncLog`](crate::log::sync_log::SyncLog) while another reads back what
/// was written.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Drains the buffer and returns its bytes.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.buf.lock())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }
}

impl Write for BufferSink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn clones_share_one_buffer() {
        let sink = BufferSink::new();
        let mut writer = sink.clone();
        writer.write_all(b"hello").unwrap();
        assert_eq!(sink.contents(), "hello");
    }

    #[test]
    fn take_drains() {
        let mut sink = BufferSink::new();
        sink.write_all(b"abc").unwrap();
        assert_eq!(sink.take(), b"abc".to_vec());
        assert!(sink.is_empty());
    }
}
