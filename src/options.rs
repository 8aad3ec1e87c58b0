/// Default rotation threshold: 64 KiB.
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 0x10000;

/// Default number of tail bytes searched for a line boundary during rotation.
pub const DEFAULT_BOUNDARY_SCAN_LIMIT: usize = 1024;

/// Default session marker written by `BoundedLog::open`.
pub const DEFAULT_SENTINEL: &str = "----";

/// Controls whether the log file is fsync'd before each handle is closed.
///
/// Trade-off: durability vs throughput.
///   - EveryWrite: the record (or rotated file) is on disk when the call returns
///   - OsBuffered: data reaches the OS page cache only; a power loss may drop it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPolicy {
    /// fsync after every append and every rotation. Safest, slowest.
    #[default]
    EveryWrite,
    /// Leave flushing to the OS.
    OsBuffered,
}

/// Configuration for a bounded log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Rotation triggers when the file is strictly larger than this.
    pub max_size_bytes: u64,
    /// How far into the retained tail to look for the first `'\n'`.
    ///
    /// If none is found the cut stays where the quarter split put it and the
    /// first retained line may start mid-record.
    pub boundary_scan_limit: usize,
    /// Message of the record written when a session opens.
    pub sentinel: String,
    pub sync_policy: SyncPolicy,
    /// When false, `open_sink` hands out a `NullLog`.
    pub enabled: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        LogOptions {
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            boundary_scan_limit: DEFAULT_BOUNDARY_SCAN_LIMIT,
            sentinel: DEFAULT_SENTINEL.to_string(),
            sync_policy: SyncPolicy::EveryWrite,
            enabled: true,
        }
    }
}

impl LogOptions {
    pub fn with_max_size_bytes(mut self, max_size_bytes: u64) -> Self {
        self.max_size_bytes = max_size_bytes;
        self
    }

    pub fn with_boundary_scan_limit(mut self, limit: usize) -> Self {
        self.boundary_scan_limit = limit;
        self
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn with_sync_policy(mut self, sync_policy: SyncPolicy) -> Self {
        self.sync_policy = sync_policy;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
