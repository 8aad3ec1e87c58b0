use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::sink::rotate;
use crate::sink::LogSink;
use crate::options::{LogOptions, SyncPolicy};
use crate::record;

/// An append-only text log that keeps itself near a fixed size.
///
/// Every `write` is a self-contained sequence: check the file size, rotate
/// away the oldest quarter if it is over the limit, then append one
/// timestamped record. No file handle is held between calls.
///
/// Single writer: two threads calling `write` on the same path at once can
/// interleave a rotation with an append and lose or split records. Wrap the
/// log in a `SharedLog` (or hold your own lock around every call) when more
/// than one thread writes.
#[derive(Debug, Clone)]
pub struct BoundedLog {
    path: PathBuf,
    options: LogOptions,
}

impl BoundedLog {
    /// Open a log at `path` with default options and write a session marker.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, LogOptions::default())
    }

    /// Open a log at `path` and write `options.sentinel` as the first record
    /// of this session. The file is created if it does not exist; existing
    /// content is kept.
    pub fn open_with(path: impl AsRef<Path>, options: LogOptions) -> Result<Self> {
        let path = resolve(path.as_ref())?;
        let log = BoundedLog { path, options };
        log.write(&log.options.sentinel)?;
        Ok(log)
    }

    /// Append one record, rotating first if the file is over the limit.
    ///
    /// On return the new record is the last line and everything before it
    /// is at most `max_size_bytes` long. The record itself is never split,
    /// even when it alone exceeds the limit.
    pub fn write(&self, message: &str) -> Result<()> {
        rotate::rotate_if_oversized(
            &self.path,
            self.options.max_size_bytes,
            self.options.boundary_scan_limit,
            self.options.sync_policy,
        )?;
        self.append(&record::record_now(message))
    }

    fn append(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        if self.options.sync_policy == SyncPolicy::EveryWrite {
            file.sync_all()?;
        }
        log::trace!("appended {} bytes to {}", line.len(), self.path.display());
        Ok(())
    }

    /// Absolute path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &LogOptions {
        &self.options
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.options.max_size_bytes
    }
}

impl LogSink for BoundedLog {
    fn write(&self, message: &str) -> Result<()> {
        BoundedLog::write(self, message)
    }
}

/// Make `path` absolute and check that its directory exists.
fn resolve(path: &Path) -> Result<PathBuf> {
    let path_error = |source: io::Error| Error::Path {
        path: path.to_path_buf(),
        source,
    };

    let absolute = std::path::absolute(path).map_err(path_error)?;
    let parent = absolute.parent().ok_or_else(|| {
        path_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "log path has no parent directory",
        ))
    })?;

    let meta = fs::metadata(parent).map_err(path_error)?;
    if !meta.is_dir() {
        return Err(path_error(io::Error::new(
            io::ErrorKind::NotADirectory,
            "parent of log path is not a directory",
        )));
    }
    Ok(absolute)
}
