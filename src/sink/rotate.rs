use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::Result;
use crate::options::SyncPolicy;

/// What a rotation did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    /// File length before the first pass.
    pub original_len: u64,
    /// File length after the last pass.
    pub retained_len: u64,
    /// Number of quarter-discards performed.
    pub passes: u32,
    /// False if any pass found no `'\n'` within the scan limit and kept a
    /// partial leading line.
    pub line_aligned: bool,
}

/// Offset just past the first `'\n'` within the first `scan_limit` bytes of
/// `tail`, or `None` if there is none.
pub fn line_boundary(tail: &[u8], scan_limit: usize) -> Option<usize> {
    tail.iter()
        .take(scan_limit)
        .position(|&b| b == b'\n')
        .map(|p| p + 1)
}

/// Rotate `path` if it is strictly larger than `max_size_bytes`.
///
/// Returns `None` when the file does not exist or is within the bound.
/// Otherwise discards the oldest quarter, repeating until the file fits or a
/// pass can no longer shrink it. In normal use one pass is enough; more are
/// needed only after a single record larger than about a third of the limit.
pub fn rotate_if_oversized(
    path: &Path,
    max_size_bytes: u64,
    scan_limit: usize,
    sync_policy: SyncPolicy,
) -> Result<Option<Rotation>> {
    let len = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    if len <= max_size_bytes {
        return Ok(None);
    }

    let mut file = OpenOptions::new().read(true).write(true).open(path)?;
    let mut rotation = Rotation {
        original_len: len,
        retained_len: len,
        passes: 0,
        line_aligned: true,
    };

    while rotation.retained_len > max_size_bytes {
        let before = rotation.retained_len;
        let (retained, aligned) = discard_oldest_quarter(&mut file, before, scan_limit)?;
        rotation.retained_len = retained;
        rotation.passes += 1;
        rotation.line_aligned &= aligned;
        if retained >= before {
            log::warn!(
                "rotation of {} made no progress at {} bytes",
                path.display(),
                retained
            );
            break;
        }
    }

    finish(&file, sync_policy)?;
    log_rotation(path, &rotation);
    Ok(Some(rotation))
}

/// Perform exactly one rotation pass on `path`, regardless of its size.
pub fn rotate_in_place(path: &Path, scan_limit: usize, sync_policy: SyncPolicy) -> Result<Rotation> {
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;
    let len = file.metadata()?.len();
    let (retained_len, line_aligned) = discard_oldest_quarter(&mut file, len, scan_limit)?;
    finish(&file, sync_policy)?;

    let rotation = Rotation {
        original_len: len,
        retained_len,
        passes: 1,
        line_aligned,
    };
    log_rotation(path, &rotation);
    Ok(rotation)
}

/// One pass: keep the newest three quarters, starting after the first line
/// break found near the cut, rewritten at offset 0 and truncated.
///
/// Returns the new length and whether the cut landed on a line boundary.
fn discard_oldest_quarter(file: &mut File, len: u64, scan_limit: usize) -> Result<(u64, bool)> {
    let cut_offset = len / 4;

    file.seek(SeekFrom::Start(cut_offset))?;
    let mut tail = Vec::with_capacity((len - cut_offset) as usize);
    file.read_to_end(&mut tail)?;

    let boundary = line_boundary(&tail, scan_limit);
    if boundary.is_none() {
        log::warn!(
            "no line break in the first {scan_limit} bytes after offset {cut_offset}; \
             keeping a partial leading line"
        );
    }
    let retained = &tail[boundary.unwrap_or(0)..];

    file.seek(SeekFrom::Start(0))?;
    file.write_all(retained)?;
    file.set_len(retained.len() as u64)?;

    Ok((retained.len() as u64, boundary.is_some()))
}

fn finish(file: &File, sync_policy: SyncPolicy) -> Result<()> {
    if sync_policy == SyncPolicy::EveryWrite {
        file.sync_all()?;
    }
    Ok(())
}

fn log_rotation(path: &Path, rotation: &Rotation) {
    log::debug!(
        "rotated {}: {} -> {} bytes in {} pass(es)",
        path.display(),
        rotation.original_len,
        rotation.retained_len,
        rotation.passes
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_one_past_newline() {
        assert_eq!(line_boundary(b"abc\ndef\n", 1024), Some(4));
        assert_eq!(line_boundary(b"\nabc", 1024), Some(1));
    }

    #[test]
    fn boundary_respects_scan_limit() {
        // newline at index 3 is visible with limit 4 but not with limit 3
        assert_eq!(line_boundary(b"abc\n", 4), Some(4));
        assert_eq!(line_boundary(b"abc\n", 3), None);
    }

    #[test]
    fn no_boundary_in_empty_or_unbroken_tail() {
        assert_eq!(line_boundary(b"", 1024), None);
        assert_eq!(line_boundary(b"no line break here", 1024), None);
        assert_eq!(line_boundary(b"abc\n", 0), None);
    }
}
