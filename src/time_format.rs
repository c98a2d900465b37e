use chrono::{DateTime, Local};

/// Worst-case-width sample of the formatter's output. Digits share one
/// advance width in a monospaced font, so any rendered time fits wherever
/// this string fits.
pub const REFERENCE_TIME: &str = "24:58:58.888";

const TIME_PATTERN: &str = "%H:%M:%S%.3f";

/// Format an instant as `HH:mm:ss.SSS` in local time. Always exactly
/// 12 characters.
pub fn format_time(time: &DateTime<Local>) -> String {
    time.format(TIME_PATTERN).to_string()
}

/// The current wall-clock time, formatted for display.
pub fn now_string() -> String {
    format_time(&Local::now())
}
