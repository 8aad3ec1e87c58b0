// Shared helpers for the integration tests.

#![allow(dead_code)]

use std::path::Path;

/// Length of `yyyy/MM/dd HH:mm:ss ` including the trailing space.
pub const PREFIX_LEN: usize = 20;

/// True if `line` (without its `'\n'`) looks like `yyyy/MM/dd HH:mm:ss <msg>`.
pub fn is_record(line: &str) -> bool {
    let b = line.as_bytes();
    if b.len() < PREFIX_LEN {
        return false;
    }
    const SHAPE: &[u8; PREFIX_LEN] = b"dddd/dd/dd dd:dd:dd ";
    SHAPE.iter().zip(b).all(|(&s, &c)| match s {
        b'd' => c.is_ascii_digit(),
        other => c == other,
    })
}

/// Message part of a record line.
pub fn message(line: &str) -> &str {
    &line[PREFIX_LEN..]
}

pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn file_len(path: &Path) -> u64 {
    std::fs::metadata(path).unwrap().len()
}
