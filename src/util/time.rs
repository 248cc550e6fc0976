//! Duration and count formatting
//!
//! Human-readable forms for elapsed search time and large configuration
//! counts in reports.

use std::time::Duration;

/// Format a duration in human-readable form
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use gwsearch::util::time::format_duration;
///
/// assert_eq!(format_duration(Duration::from_nanos(500)), "500ns");
/// assert_eq!(format_duration(Duration::from_nanos(1500)), "1.50us");
/// assert_eq!(format_duration(Duration::from_micros(2500)), "2.50ms");
/// assert_eq!(format_duration(Duration::from_secs(5)), "5.00s");
/// assert_eq!(format_duration(Duration::from_secs(150)), "2m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();

    if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2}us", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2}ms", nanos as f64 / 1_000_000.0)
    } else if duration.as_secs() < 60 {
        format!("{:.2}s", nanos as f64 / 1_000_000_000.0)
    } else if duration.as_secs() < 3600 {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        let secs = duration.as_secs();
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Format a count with thousands separators
///
/// # Examples
///
/// ```
/// use gwsearch::util::time::format_count;
///
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(15_625), "15,625");
/// ```
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

/// Configurations evaluated per second
pub fn configurations_per_sec(configurations: u64, duration: Duration) -> f64 {
    let seconds = duration.as_secs_f64();
    if seconds > 0.0 {
        configurations as f64 / seconds
    } else {
        0.0
    }
}
