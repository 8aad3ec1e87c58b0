use std::sync::Mutex;

use crate::error::Result;
use crate::sink::LogSink;

/// Serializes writes from many threads onto one sink.
///
/// The lock is held across the whole check → rotate → append sequence, so
/// concurrent writers see the same guarantees as a single writer.
#[derive(Debug, Default)]
pub struct SharedLog<S> {
    inner: Mutex<S>,
}

impl<S: LogSink> SharedLog<S> {
    pub fn new(sink: S) -> Self {
        SharedLog {
            inner: Mutex::new(sink),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<S: LogSink> LogSink for SharedLog<S> {
    fn write(&self, message: &str) -> Result<()> {
        // A panic in another writer leaves the sink itself untouched; the file
        // is re-checked from disk on every write.
        let guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        guard.write(message)
    }
}
