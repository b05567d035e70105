//! Human-readable numbers.
//!
//! Sizes use decimal units (1 GB = 10^9 bytes), matching how the case study
//! reports database sizes.

const KB: f64 = 1e3;
const MB: f64 = 1e6;
const GB: f64 = 1e9;
const TB: f64 = 1e12;

/// Formats bytes in human-readable form (e.g., "1.50 GB", "250 B").
#[must_use]
pub fn format_bytes(bytes: f64) -> String {
    if bytes >= TB {
        format!("{:.2} TB", bytes / TB)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes / GB)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

/// Converts bytes to gigabytes.
#[must_use]
pub fn to_gb(bytes: f64) -> f64 {
    bytes / GB
}

/// Formats a number with thousands separators and a fixed number of decimals.
///
/// ```
/// use docsize_format::group_thousands;
///
/// assert_eq!(group_thousands(4_000_000_000.0, 0), "4,000,000,000");
/// assert_eq!(group_thousands(1234.5, 2), "1,234.50");
/// ```
#[must_use]
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = formatted
        .split_once('.')
        .map_or((formatted.as_str(), None), |(i, f)| (i, Some(f)));

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() && value != 0.0 {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
