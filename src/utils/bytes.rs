//! Human-readable byte sizes for the progress line and the final report.
//!
//! The conversion is a display approximation: a value is divided by 1024 only
//! once it exceeds 1000, so tiers change at `1000 * 1024^k` bytes rather than
//! at exact binary or decimal boundaries. Existing output depends on this.

const UNITS: [&str; 3] = ["KB", "MB", "GB"];
const TIER_THRESHOLD: f64 = 1000.0;
const TIER_DIVISOR: f64 = 1024.0;

/// Format a byte count for display.
///
/// Values up to and including 1000 are printed as a plain integer followed by
/// `bytes`. Larger values are divided by 1024 while they stay above 1000, up to
/// gigabytes, and printed with two decimals.
///
/// ```rust
/// use dlwatch::utils::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 bytes");
/// assert_eq!(format_bytes(1_500), "1.46 KB");
/// assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes <= TIER_THRESHOLD as u64 {
        return format!("{} bytes", bytes);
    }

    let mut value = bytes as f64 / TIER_DIVISOR;
    let mut unit = 0;
    while value > TIER_THRESHOLD && unit < UNITS.len() - 1 {
        value /= TIER_DIVISOR;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}
