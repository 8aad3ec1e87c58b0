pub mod bounded;
pub mod null;
pub mod rotate;
pub mod shared;

use std::path::Path;

use crate::error::Result;
use crate::options::LogOptions;

pub use bounded::BoundedLog;
pub use null::NullLog;
pub use rotate::Rotation;
pub use shared::SharedLog;

/// Anything that accepts diagnostic messages.
pub trait LogSink {
    fn write(&self, message: &str) -> Result<()>;
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn write(&self, message: &str) -> Result<()> {
        (**self).write(message)
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn write(&self, message: &str) -> Result<()> {
        (**self).write(message)
    }
}

/// Open the sink selected by `options`: a `BoundedLog` at `path`, or a
/// `NullLog` when logging is disabled (no file is touched in that case).
pub fn open_sink(
    path: impl AsRef<Path>,
    options: LogOptions,
) -> Result<Box<dyn LogSink + Send + Sync>> {
    if !options.enabled {
        return Ok(Box::new(NullLog));
    }
    Ok(Box::new(BoundedLog::open_with(path, options)?))
}

/// Write `message`, reporting a failure through `log::warn!` instead of
/// returning it. For call sites where a lost diagnostic must not abort the
/// operation being diagnosed.
pub fn write_quietly<S: LogSink + ?Sized>(sink: &S, message: &str) -> bool {
    match sink.write(message) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("dropped log record: {e}");
            false
        }
    }
}
