//! # Bounded Log
//!
//! A plain-text diagnostic log that never grows far past a fixed size.
//!
//! ## Core idea
//! Each write checks the file size first. If the file is over the limit,
//! the oldest quarter is discarded in place, with the cut moved forward to
//! the next line break so no record is split. Discarding a quarter rather
//! than trimming to the limit means the file has to grow by about three
//! quarters of the limit again before the next rewrite, so rotations stay
//! rare compared to appends.
//!
//! ```no_run
//! use bounded_log::BoundedLog;
//!
//! let log = BoundedLog::open("trace.log")?;
//! log.write("document saved")?;
//! # Ok::<(), bounded_log::Error>(())
//! ```

pub mod error;
pub mod options;
pub mod record;
pub mod sink;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use sink::{open_sink, write_quietly, BoundedLog, LogSink, NullLog, Rotation, SharedLog};
pub use options::{LogOptions, SyncPolicy};
