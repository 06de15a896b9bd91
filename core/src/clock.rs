//! Time formatting for the booth's two displays: the wall clock shown in
//! the header and the elapsed-seconds counter shown while recording.

use chrono::{DateTime, Local, Timelike, Utc};
use std::time::SystemTime;

/// Formats a wall-clock reading as `H:MM`. Minutes are zero-padded, hours
/// are not.
pub fn format_wall_clock(hours: u32, minutes: u32) -> String {
    format!("{hours}:{minutes:02}")
}

/// Formats an elapsed-seconds counter as `MM:SS`.
///
/// Holds for arbitrary non-negative input even though recordings cap well
/// below a minute.
pub fn format_elapsed(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Renders `now` as local wall-clock text.
pub fn wall_clock_text(now: SystemTime) -> String {
    let local: DateTime<Local> = now.into();
    format_wall_clock(local.hour(), local.minute())
}

/// Milliseconds since the Unix epoch, used for clip timestamps and download
/// filename suffixes.
pub fn timestamp_ms(now: SystemTime) -> i64 {
    let utc: DateTime<Utc> = now.into();
    utc.timestamp_millis()
}
