use chrono::{DateTime, Local, TimeZone};

/// `yyyy/MM/dd HH:mm:ss`, 24-hour clock, zero-padded.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Byte length of a formatted timestamp.
pub const TIMESTAMP_LEN: usize = 19;

/// Format a point in time as a record timestamp.
pub fn timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Build one record: timestamp, a single space, the message, `'\n'`.
///
/// The message is written as given. A message containing `'\n'` produces
/// more than one physical line, and rotation treats each as its own record.
pub fn format_record(timestamp: &str, message: &str) -> String {
    let mut line = String::with_capacity(timestamp.len() + message.len() + 2);
    line.push_str(timestamp);
    line.push(' ');
    line.push_str(message);
    line.push('\n');
    line
}

/// Record for `message` stamped with the current local time.
pub fn record_now(message: &str) -> String {
    format_record(&timestamp(&Local::now()), message)
}
