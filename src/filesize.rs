//! Human-readable file sizes ("13 KB", "4.1 MB", "102 bytes").

use crate::error::FormatError;
use crate::group::{GroupStyle, group_number};

/// Unit labels, largest first. The matching threshold is `bytes_in_kb^power`
/// with powers 4 down to 1.
const LABELS: [&str; 4] = ["TB", "GB", "MB", "KB"];

/// Render a byte count with its largest matching unit.
///
/// `bytes_in_kb` selects the unit ladder: 1024 for binary sizes, 1000 for
/// decimal. A unit below 2 is rejected. The scaled value is rendered with
/// comma grouping at `decimal_places`; counts under one kilobyte come out as
/// "0 bytes" / "1 byte" / "`n` bytes".
///
/// # Examples
///
/// ```
/// use humanize_number::file_size;
///
/// assert_eq!(file_size(1536, 1, 1024).unwrap(), "1.5 KB");
/// assert_eq!(file_size(1, 0, 1024).unwrap(), "1 byte");
/// assert_eq!(file_size(1_000_000, 0, 1000).unwrap(), "1 MB");
/// ```
pub fn file_size(bytes: u64, decimal_places: u8, bytes_in_kb: u64) -> Result<String, FormatError> {
    if bytes_in_kb < 2 {
        return Err(FormatError::InvalidUnit(bytes_in_kb));
    }

    // thresholds in u128 so unit^4 stays exact for any sane ladder
    let unit = u128::from(bytes_in_kb);
    let style = GroupStyle::default().with_decimal_places(decimal_places);
    for (power, label) in (1..=4).rev().zip(LABELS) {
        // an overflowing rung exceeds every u64 byte count anyway
        let Some(threshold) = unit.checked_pow(power) else {
            continue;
        };
        if u128::from(bytes) >= threshold {
            let scaled = bytes as f64 / threshold as f64;
            return Ok(format!("{} {label}", group_number(scaled, &style)?));
        }
    }

    Ok(match bytes {
        0 => "0 bytes".to_string(),
        1 => "1 byte".to_string(),
        n => format!("{n} bytes"),
    })
}

// ============================================================================
// tests
// ============================================================================
