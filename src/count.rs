//! Occurrence counts and upper-bounded values.

use std::collections::HashMap;

/// Cap a value at a maximum, marking the cap with a trailing "+".
///
/// # Examples
///
/// ```
/// use humanize_number::bounded_number;
///
/// assert_eq!(bounded_number(150, 100), "100+");
/// assert_eq!(bounded_number(50, 100), "50");
/// ```
#[inline]
pub fn bounded_number(value: i64, max: i64) -> String {
    if value > max {
        format!("{max}+")
    } else {
        value.to_string()
    }
}

/// Describe a count of occurrences: "never", "once", "twice", "5 times".
///
/// # Examples
///
/// ```
/// use humanize_number::times;
///
/// assert_eq!(times(0), "never");
/// assert_eq!(times(2), "twice");
/// assert_eq!(times(5), "5 times");
/// ```
pub fn times(count: u64) -> String {
    times_with(count, &HashMap::new())
}

/// [`times`] with caller-supplied override text for specific counts.
///
/// The override is resolved before the count is matched and only consumed by
/// the catch-all branch, so overrides for 0, 1 and 2 are silently ignored and
/// "never"/"once"/"twice" always win for those counts.
///
/// # Examples
///
/// ```
/// use humanize_number::times_with;
/// use std::collections::HashMap;
///
/// let overrides = HashMap::from([(5, "five".to_string())]);
/// assert_eq!(times_with(5, &overrides), "five times");
/// ```
pub fn times_with(count: u64, overrides: &HashMap<u64, String>) -> String {
    let fallback = overrides
        .get(&count)
        .cloned()
        .unwrap_or_else(|| count.to_string());
    match count {
        0 => "never".to_string(),
        1 => "once".to_string(),
        2 => "twice".to_string(),
        _ => format!("{fallback} times"),
    }
}

// ============================================================================
// tests
// ============================================================================
