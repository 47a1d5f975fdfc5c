//! Word lookups: AP-style small numbers and ordinal suffixes.

/// English words for 0..=9, AP style.
const SMALL_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Ordinal suffix by last digit; 11..=13 override to "th" separately.
const ORDINAL_SUFFIXES: [&str; 10] = ["th", "st", "nd", "rd", "th", "th", "th", "th", "th", "th"];

/// Spell out single-digit numbers, AP style.
///
/// Out-of-range input is not an error: it passes through as its decimal form.
///
/// # Examples
///
/// ```
/// use humanize_number::ap_number;
///
/// assert_eq!(ap_number(3), "three");
/// assert_eq!(ap_number(42), "42");
/// ```
#[inline]
pub fn ap_number(value: i64) -> String {
    match usize::try_from(value).ok().and_then(|i| SMALL_WORDS.get(i)) {
        Some(word) => (*word).to_string(),
        None => value.to_string(),
    }
}

/// Append the ordinal suffix to an integer.
///
/// Numbers ending in 11, 12 or 13 take "th" regardless of their last digit.
/// Negative input keeps its sign and takes the suffix of its absolute value:
/// `-2` -> `-2nd`, `-11` -> `-11th`.
///
/// # Examples
///
/// ```
/// use humanize_number::ordinal;
///
/// assert_eq!(ordinal(1), "1st");
/// assert_eq!(ordinal(11), "11th");
/// assert_eq!(ordinal(21), "21st");
/// ```
#[inline]
pub fn ordinal(value: i64) -> String {
    let magnitude = value.unsigned_abs();
    let suffix = if (11..=13).contains(&(magnitude % 100)) {
        "th"
    } else {
        ORDINAL_SUFFIXES[(magnitude % 10) as usize]
    };
    format!("{value}{suffix}")
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ap_number_words() {
        assert_eq!(ap_number(0), "zero");
        assert_eq!(ap_number(3), "three");
        assert_eq!(ap_number(9), "nine");
    }

    #[test]
    fn test_ap_number_pass_through() {
        assert_eq!(ap_number(10), "10");
        assert_eq!(ap_number(42), "42");
        assert_eq!(ap_number(-1), "-1");
    }

    #[test]
    fn test_ordinal_last_digit() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(0), "0th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(102), "102nd");
    }

    #[test]
    fn test_ordinal_teens() {
        // 11-13 rule wins over the last-digit rule
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(112), "112th");
        assert_eq!(ordinal(1013), "1013th");
    }

    #[test]
    fn test_ordinal_negative() {
        assert_eq!(ordinal(-1), "-1st");
        assert_eq!(ordinal(-2), "-2nd");
        assert_eq!(ordinal(-11), "-11th");
        assert_eq!(ordinal(-112), "-112th");
        assert_eq!(ordinal(-21), "-21st");
    }
}
