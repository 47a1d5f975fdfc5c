//! Magnitude-word rendering for large numbers.
//!
//! A descending threshold table turns 1_500_000 into "1.5 million" (or "1.5M"
//! in compact form). The exponent-0 entry carries an empty suffix, so any value
//! of at least 1 matches some bucket; smaller values fall back to their plain
//! `Display` form.

use crate::error::FormatError;
use crate::group::{int_comma, round_places};

/// Long-form scale suffixes, ordered descending. First match wins.
const MAGNITUDES: [(i32, &str); 5] = [
    (12, "trillion"),
    (9, "billion"),
    (6, "million"),
    (3, "thousand"),
    (0, ""),
];

/// Short-form scale suffixes, same keys and order as [`MAGNITUDES`].
const ABBREVIATIONS: [(i32, &str); 5] = [(12, "T"), (9, "B"), (6, "M"), (3, "K"), (0, "")];

/// Render a large number with its magnitude word.
///
/// Negative input is formatted as the magnitude of its absolute value with the
/// sign reattached. Rounding is half away from zero at `decimal_places`.
///
/// # Examples
///
/// ```
/// use humanize_number::int_word;
///
/// assert_eq!(int_word(1_500_000.0, 1, false).unwrap(), "1.5 million");
/// assert_eq!(int_word(1_500_000.0, 0, true).unwrap(), "2M");
/// assert_eq!(int_word(0.0, 0, false).unwrap(), "0");
/// ```
pub fn int_word(value: f64, decimal_places: u8, compact: bool) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NonFinite(value));
    }

    let (table, spacer) = if compact {
        (&ABBREVIATIONS, "")
    } else {
        (&MAGNITUDES, " ")
    };
    let (sign, magnitude) = if value < 0.0 {
        ("-", -value)
    } else {
        ("", value.abs())
    };

    for (exponent, suffix) in table {
        if magnitude >= 10f64.powi(*exponent) {
            let scaled = round_places(magnitude / 10f64.powi(*exponent), decimal_places);
            // the exponent-0 suffix is empty; no trailing spacer for it
            let spacer = if suffix.is_empty() { "" } else { spacer };
            return Ok(format!("{sign}{scaled}{spacer}{suffix}"));
        }
    }

    // |value| < 1, nothing to shorten
    Ok(format!("{sign}{magnitude}"))
}

/// Render with a magnitude word only when the grouped form is long enough.
///
/// The value is first rendered by [`int_comma`]; if that string is at most
/// `shorten_when_longer` characters it is returned at full precision,
/// otherwise the [`int_word`] form at `decimal_places` is used.
///
/// # Examples
///
/// ```
/// use humanize_number::int_word_over;
///
/// assert_eq!(int_word_over(1234.0, 0, 5, false).unwrap(), "1,234");
/// assert_eq!(int_word_over(123456.0, 0, 5, false).unwrap(), "123 thousand");
/// ```
pub fn int_word_over(
    value: f64,
    decimal_places: u8,
    shorten_when_longer: usize,
    compact: bool,
) -> Result<String, FormatError> {
    let grouped = int_comma(value)?;
    if grouped.chars().count() <= shorten_when_longer {
        return Ok(grouped);
    }
    int_word(value, decimal_places, compact)
}

/// [`int_word_over`] in compact form ("12K" rather than "12 thousand").
///
/// # Examples
///
/// ```
/// use humanize_number::compact_integer;
///
/// assert_eq!(compact_integer(1234.0, 0, 5).unwrap(), "1,234");
/// assert_eq!(compact_integer(123456.0, 0, 5).unwrap(), "123K");
/// ```
pub fn compact_integer(
    value: f64,
    decimal_places: u8,
    shorten_when_longer: usize,
) -> Result<String, FormatError> {
    int_word_over(value, decimal_places, shorten_when_longer, true)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_word_buckets() {
        assert_eq!(int_word(1_000.0, 0, false).unwrap(), "1 thousand");
        assert_eq!(int_word(1_500_000.0, 1, false).unwrap(), "1.5 million");
        assert_eq!(int_word(2_500_000_000.0, 1, false).unwrap(), "2.5 billion");
        assert_eq!(
            int_word(1_000_000_000_000.0, 0, false).unwrap(),
            "1 trillion"
        );
    }

    #[test]
    fn test_int_word_compact() {
        assert_eq!(int_word(1_500_000.0, 1, true).unwrap(), "1.5M");
        assert_eq!(int_word(42_000.0, 0, true).unwrap(), "42K");
        assert_eq!(int_word(3_000_000_000_000.0, 0, true).unwrap(), "3T");
    }

    #[test]
    fn test_int_word_rounds_half_away_from_zero() {
        // 1.5 rounds up at zero places, not to even
        assert_eq!(int_word(1_500_000.0, 0, true).unwrap(), "2M");
        assert_eq!(int_word(2_500_000.0, 0, true).unwrap(), "3M");
    }

    #[test]
    fn test_int_word_unit_bucket() {
        // Exponent-0 bucket: empty suffix, no trailing space
        assert_eq!(int_word(999.0, 0, false).unwrap(), "999");
        assert_eq!(int_word(1.0, 0, false).unwrap(), "1");
        assert_eq!(int_word(999.0, 0, true).unwrap(), "999");
    }

    #[test]
    fn test_int_word_below_one() {
        assert_eq!(int_word(0.0, 0, false).unwrap(), "0");
        assert_eq!(int_word(0.5, 0, false).unwrap(), "0.5");
    }

    #[test]
    fn test_int_word_negative() {
        // Sign is split off, the absolute value goes through the scan
        assert_eq!(int_word(-1_500_000.0, 1, false).unwrap(), "-1.5 million");
        assert_eq!(int_word(-1_500_000.0, 1, true).unwrap(), "-1.5M");
        assert_eq!(int_word(-42.0, 0, false).unwrap(), "-42");
    }

    #[test]
    fn test_int_word_rounds_across_bucket() {
        // 999,999 stays in the thousand bucket and rounds to 1000
        assert_eq!(int_word(999_999.0, 0, false).unwrap(), "1000 thousand");
    }

    #[test]
    fn test_int_word_non_finite() {
        assert!(matches!(
            int_word(f64::NAN, 0, false),
            Err(FormatError::NonFinite(_))
        ));
    }

    #[test]
    fn test_int_word_over() {
        // "1,234" is 5 chars, at the threshold: kept at full precision
        assert_eq!(int_word_over(1234.0, 0, 5, false).unwrap(), "1,234");
        // "123,456" is 7 chars: shortened
        assert_eq!(int_word_over(123456.0, 0, 5, false).unwrap(), "123 thousand");
        assert_eq!(int_word_over(123456.0, 1, 5, true).unwrap(), "123.5K");
        // Bigger threshold keeps the grouped form
        assert_eq!(int_word_over(123456.0, 0, 10, false).unwrap(), "123,456");
    }

    #[test]
    fn test_compact_integer() {
        assert_eq!(compact_integer(1234.0, 0, 5).unwrap(), "1,234");
        assert_eq!(compact_integer(12345.0, 0, 5).unwrap(), "12K");
        assert_eq!(compact_integer(123456.0, 0, 5).unwrap(), "123K");
        assert_eq!(compact_integer(1_234_567.0, 1, 5).unwrap(), "1.2M");
    }
}
