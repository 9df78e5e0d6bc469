//! Human-readable formatting helpers

/// Bytes per mebibyte, the unit file sizes are reported in
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Convert a byte count to mebibytes
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Format a byte count as mebibytes with two decimals, e.g. `12.50 MB`
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes_to_mb(bytes))
}

/// Format a duration in seconds with millisecond precision, e.g. `1.234s`
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.3}s", seconds)
}

/// Format an axis tick value without trailing zeros
///
/// ```
/// use chipbench::utils::format_utils::format_tick;
/// assert_eq!(format_tick(0.5), "0.5");
/// assert_eq!(format_tick(2.0), "2");
/// assert_eq!(format_tick(0.125), "0.125");
/// ```
pub fn format_tick(value: f64) -> String {
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
