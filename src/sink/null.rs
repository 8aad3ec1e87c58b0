use crate::error::Result;
use crate::sink::LogSink;

/// A sink that accepts and discards every message.
///
/// Handed out by `open_sink` when logging is disabled, so callers keep the
/// same code path whether or not a file is being written.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl LogSink for NullLog {
    fn write(&self, _message: &str) -> Result<()> {
        Ok(())
    }
}
