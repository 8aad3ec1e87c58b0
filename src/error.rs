use std::fmt;
use std::io;
use std::path::PathBuf;

/// Unified error type for the bounded log.
#[derive(Debug)]
pub enum Error {
    /// The log path could not be resolved, or its directory is not usable.
    Path { path: PathBuf, source: io::Error },
    /// IO error while sizing, rotating, or appending to the log file.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Path { path, source } => {
                write!(f, "Path error for {}: {source}", path.display())
            }
            Error::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Path { source, .. } => Some(source),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
